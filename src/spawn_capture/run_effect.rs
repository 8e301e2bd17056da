use crate::capture;
use crate::spawn_capture::core::{Effect, Msg};
use crate::spawn_capture::main::EffectRunner;
use chrono::Local;

impl EffectRunner {
    pub fn send(&self, msg: Msg) {
        let _ = self.msg_sender.send(msg);
        self.egui_ctx.request_repaint();
    }

    pub fn run_effect(&self, effect: Effect) {
        match effect {
            Effect::SubscribeCamera => match self.camera_stream.subscribe() {
                Ok(messages) => {
                    while let Ok(message) = messages.recv() {
                        self.send(Msg::FrameReceived(message));
                    }
                    let _ = self.logger.error("Camera stream closed");
                }
                Err(e) => {
                    let _ = self
                        .logger
                        .error(&format!("Camera subscription failed: {}", e));
                }
            },

            // One blocking attempt per accepted press, no retries.
            Effect::SendPose(request) => {
                let result = self.sim_client.set_model_state(&request);
                self.send(Msg::SpawnDone(result));
            }

            Effect::SaveFrame(frame) => {
                let result =
                    capture::save_screenshot(&self.config.screenshots_dir, &frame, Local::now());
                self.send(Msg::CaptureDone(result));
            }
        }
    }
}
