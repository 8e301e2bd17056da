use std::fmt;
use std::sync::mpsc::Receiver;

/// One camera frame as published on the image topic: a dense BGR8 buffer
/// with a row stride of `3 * width` (no padding).
#[derive(Clone, PartialEq, Eq)]
pub struct ImageMessage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl fmt::Debug for ImageMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageMessage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("data_len", &self.data.len())
            .finish()
    }
}

pub trait ImageStream: Send + Sync {
    /// Subscribe to the camera topic. Messages arrive on the returned channel
    /// from the stream's own delivery thread.
    fn subscribe(&self) -> Result<Receiver<ImageMessage>, Box<dyn std::error::Error + Send + Sync>>;
}
