pub mod core;
mod core_test;
pub mod main;
pub mod render;
pub mod run_effect;
