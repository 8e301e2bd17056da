use crate::camera_stream::interface::ImageMessage;
use std::fmt;

/// The most recently decoded camera image, held for display and capture.
/// Pixel data is dense RGB8, row stride `3 * width`.
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("data_len", &self.data.len())
            .finish()
    }
}

/// Decode a BGR8 image message into a displayable RGB frame by swapping the
/// red and blue channels of every pixel. A message whose buffer does not match
/// its stated dimensions is rejected instead of read out of bounds.
pub fn decode_bgr8(message: &ImageMessage) -> Result<Frame, Box<dyn std::error::Error + Send + Sync>> {
    if message.width == 0 || message.height == 0 {
        return Err(format!(
            "image message has empty dimensions ({}x{})",
            message.width, message.height
        )
        .into());
    }

    let expected_len = message.width as usize * message.height as usize * 3;
    if message.data.len() != expected_len {
        return Err(format!(
            "image message buffer is {} bytes, expected {} for {}x{} BGR8",
            message.data.len(),
            expected_len,
            message.width,
            message.height
        )
        .into());
    }

    let mut data = Vec::with_capacity(expected_len);
    for pixel in message.data.chunks_exact(3) {
        data.extend_from_slice(&[pixel[2], pixel[1], pixel[0]]);
    }

    Ok(Frame {
        width: message.width,
        height: message.height,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(width: u32, height: u32, data: Vec<u8>) -> ImageMessage {
        ImageMessage {
            width,
            height,
            data,
        }
    }

    #[test]
    fn test_decode_swaps_red_and_blue_at_every_pixel() {
        let width = 3;
        let height = 2;
        let mut data = Vec::new();
        for i in 0..(width * height) {
            let base = (i * 10) as u8;
            data.extend_from_slice(&[base, base + 1, base + 2]);
        }

        let frame = decode_bgr8(&message(width, height, data.clone())).unwrap();

        assert_eq!(frame.width, width);
        assert_eq!(frame.height, height);
        for row in 0..height as usize {
            for col in 0..width as usize {
                let offset = (row * width as usize + col) * 3;
                assert_eq!(frame.data[offset], data[offset + 2]);
                assert_eq!(frame.data[offset + 1], data[offset + 1]);
                assert_eq!(frame.data[offset + 2], data[offset]);
            }
        }
    }

    #[test]
    fn test_decode_rejects_short_buffer() {
        let result = decode_bgr8(&message(4, 4, vec![0; 4 * 4 * 3 - 1]));
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_rejects_oversized_buffer() {
        let result = decode_bgr8(&message(4, 4, vec![0; 4 * 4 * 3 + 3]));
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_rejects_zero_dimensions() {
        assert!(decode_bgr8(&message(0, 4, vec![])).is_err());
        assert!(decode_bgr8(&message(4, 0, vec![])).is_err());
    }
}
