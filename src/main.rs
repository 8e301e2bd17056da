use camera_stream::impl_fake::ImageStreamFake;
use config::Config;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use sim_client::impl_fake::RelocationServiceFake;
use spawn_capture::main::SpawnCapture;
use std::sync::Arc;

mod camera_stream;
mod capture;
mod config;
mod frame;
mod library;
mod sim_client;
mod spawn_capture;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let sim_client = Arc::new(RelocationServiceFake::new(logger.clone(), config.clone()));

    let camera_stream = Arc::new(ImageStreamFake::new(logger.clone(), config.clone()));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([520.0, 620.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Robot spawn & frame capture",
        options,
        Box::new(move |cc| {
            Box::new(SpawnCapture::new(
                config,
                logger,
                sim_client,
                camera_stream,
                cc.egui_ctx.clone(),
            ))
        }),
    )?;

    Ok(())
}
