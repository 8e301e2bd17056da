use crate::frame::Frame;
use chrono::{DateTime, Local};
use image::{ImageBuffer, Rgb};
use std::fs;
use std::path::{Path, PathBuf};

/// Wall-clock format used in screenshot filenames. Second resolution; the
/// separators are filesystem-safe on all platforms, so two captures within
/// the same second target the same path and the later write wins.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screenshot {
    pub path: PathBuf,
    pub timestamp: String,
}

/// Write `frame` as a PNG under `dir`, creating the directory if needed.
/// The filename embeds `taken_at` at second resolution.
pub fn save_screenshot(
    dir: &Path,
    frame: &Frame,
    taken_at: DateTime<Local>,
) -> Result<Screenshot, Box<dyn std::error::Error + Send + Sync>> {
    fs::create_dir_all(dir)?;

    let timestamp = taken_at.format(TIMESTAMP_FORMAT).to_string();
    let path = dir.join(format!("camera_feed_screenshot_{}.png", timestamp));

    let buffer =
        ImageBuffer::<Rgb<u8>, _>::from_raw(frame.width, frame.height, frame.data.clone())
            .ok_or("frame buffer does not match its dimensions")?;
    buffer.save(&path)?;

    Ok(Screenshot { path, timestamp })
}
