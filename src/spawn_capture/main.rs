use crate::camera_stream::interface::ImageStream;
use crate::config::Config;
use crate::library::logger::interface::Logger;
use crate::sim_client::interface::RelocationService;
use crate::spawn_capture::core::{init, transition, Effect, Model, Msg};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

/// Everything an effect worker needs off the GUI thread. Cloned into each
/// spawned thread; results come back through `msg_sender`.
#[derive(Clone)]
pub struct EffectRunner {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub sim_client: Arc<dyn RelocationService + Send + Sync>,
    pub camera_stream: Arc<dyn ImageStream + Send + Sync>,
    pub msg_sender: Sender<Msg>,
    pub egui_ctx: egui::Context,
}

pub struct SpawnCapture {
    pub effects: EffectRunner,
    pub model: Model,
    msg_receiver: Receiver<Msg>,
    pub preview_texture: Option<egui::TextureHandle>,
    pub preview_seq: u64,
}

impl SpawnCapture {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        sim_client: Arc<dyn RelocationService + Send + Sync>,
        camera_stream: Arc<dyn ImageStream + Send + Sync>,
        egui_ctx: egui::Context,
    ) -> Self {
        let (msg_sender, msg_receiver) = channel();
        let (model, effects) = init();

        let app = Self {
            effects: EffectRunner {
                config,
                logger: logger.with_namespace("spawn_capture"),
                sim_client,
                camera_stream,
                msg_sender,
                egui_ctx,
            },
            model,
            msg_receiver,
            preview_texture: None,
            preview_seq: 0,
        };
        app.spawn_effects(effects);
        app
    }

    pub fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let runner = self.effects.clone();
            std::thread::spawn(move || runner.run_effect(effect));
        }
    }

    fn process_messages(&mut self) {
        while let Ok(msg) = self.msg_receiver.try_recv() {
            match &msg {
                Msg::SpawnDone(Err(e)) => {
                    let _ = self
                        .effects
                        .logger
                        .error(&format!("Relocation call failed: {}", e));
                }
                // The stream delivers several messages a second, keep those
                // out of the log.
                Msg::FrameReceived(_) => {}
                msg => {
                    let _ = self.effects.logger.info(&format!("msg: {:?}", msg));
                }
            }

            let model = std::mem::take(&mut self.model);
            let (new_model, effects) = transition(&self.effects.config, model, msg);
            self.model = new_model;
            self.spawn_effects(effects);
        }
    }
}

impl eframe::App for SpawnCapture {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_messages();
        self.render(ctx);
    }
}
