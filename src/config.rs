use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the model the relocation service moves.
    pub model_name: String,
    /// Name the relocation service is registered under.
    pub relocation_service_name: String,
    /// Topic the camera feed is published on.
    pub camera_topic: String,
    /// Directory screenshots are written to, relative to the working directory.
    pub screenshots_dir: PathBuf,
    pub logger_timezone: chrono::FixedOffset,
    /// Geometry and rate of the fake camera stream.
    pub fake_stream_width: u32,
    pub fake_stream_height: u32,
    pub fake_stream_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_name: "R1".to_string(),
            relocation_service_name: "/gazebo/set_model_state".to_string(),
            camera_topic: "/R1/pi_camera/image_raw".to_string(),
            screenshots_dir: PathBuf::from("screenshots"),
            logger_timezone: mountain_standard_time(),
            fake_stream_width: 320,
            fake_stream_height: 240,
            fake_stream_interval: Duration::from_millis(100),
        }
    }
}

fn mountain_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::west_opt(7 * 3600).unwrap()
}
