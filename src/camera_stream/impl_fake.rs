use crate::camera_stream::interface::{ImageMessage, ImageStream};
use crate::config::Config;
use crate::library::logger::interface::Logger;
use rand::Rng;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::thread;

/// Stands in for the live camera topic so the app runs without a simulator
/// attached. Publishes a drifting gradient with a little noise so consecutive
/// frames are visibly different in the preview.
pub struct ImageStreamFake {
    logger: Arc<dyn Logger + Send + Sync>,
    config: Config,
}

impl ImageStreamFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, config: Config) -> Self {
        Self {
            logger: logger.with_namespace("camera_stream").with_namespace("fake"),
            config,
        }
    }
}

impl ImageStream for ImageStreamFake {
    fn subscribe(
        &self,
    ) -> Result<Receiver<ImageMessage>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger
            .info(&format!("Subscribing to {}", self.config.camera_topic))?;

        let (sender, receiver) = channel();
        let width = self.config.fake_stream_width;
        let height = self.config.fake_stream_height;
        let interval = self.config.fake_stream_interval;

        thread::spawn(move || {
            let mut rng = rand::rng();
            let mut phase: u8 = 0;
            loop {
                let mut data = Vec::with_capacity((width * height * 3) as usize);
                for row in 0..height {
                    for col in 0..width {
                        let blue = (col as u8).wrapping_add(phase);
                        let green = row as u8;
                        let red: u8 = rng.random();
                        data.extend_from_slice(&[blue, green, red]);
                    }
                }
                phase = phase.wrapping_add(3);

                if sender.send(ImageMessage {
                    width,
                    height,
                    data,
                }).is_err() {
                    // Subscriber dropped the channel, stop publishing.
                    break;
                }
                thread::sleep(interval);
            }
        });

        Ok(receiver)
    }
}
