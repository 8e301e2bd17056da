use crate::spawn_capture::core::Msg;
use crate::spawn_capture::main::SpawnCapture;

impl SpawnCapture {
    pub fn render(&mut self, ctx: &egui::Context) {
        self.refresh_preview(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Robot spawn & frame capture");
            ui.add_space(8.0);

            egui::Grid::new("pose_inputs").num_columns(2).show(ui, |ui| {
                ui.label("Position x");
                ui.add(egui::DragValue::new(&mut self.model.inputs.position_x).speed(0.1));
                ui.end_row();

                ui.label("Position y");
                ui.add(egui::DragValue::new(&mut self.model.inputs.position_y).speed(0.1));
                ui.end_row();

                ui.label("Position z");
                ui.add(egui::DragValue::new(&mut self.model.inputs.position_z).speed(0.1));
                ui.end_row();

                ui.label("Orientation z");
                ui.add(egui::DragValue::new(&mut self.model.inputs.orientation_z).speed(0.01));
                ui.end_row();

                ui.label("Orientation w");
                ui.add(egui::DragValue::new(&mut self.model.inputs.orientation_w).speed(0.01));
                ui.end_row();
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let spawn_button = ui.add_enabled(
                    !self.model.spawn_in_flight,
                    egui::Button::new("Spawn robot"),
                );
                if spawn_button.clicked() {
                    self.effects.send(Msg::SpawnPressed);
                }
                if ui.button("Capture frame").clicked() {
                    self.effects.send(Msg::CapturePressed);
                }
            });

            ui.add_space(8.0);
            match &self.preview_texture {
                Some(texture) => {
                    ui.image((texture.id(), texture.size_vec2()));
                }
                None => {
                    ui.label("Waiting for camera feed...");
                }
            }

            ui.add_space(8.0);
            ui.label(&self.model.status);
        });
    }

    fn refresh_preview(&mut self, ctx: &egui::Context) {
        let Some(frame) = &self.model.current_frame else {
            return;
        };
        if self.preview_seq == self.model.frame_seq && self.preview_texture.is_some() {
            return;
        }

        let size = [frame.width as usize, frame.height as usize];
        let image = egui::ColorImage::from_rgb(size, &frame.data);
        match &mut self.preview_texture {
            Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
            None => {
                self.preview_texture =
                    Some(ctx.load_texture("camera_feed", image, egui::TextureOptions::LINEAR));
            }
        }
        self.preview_seq = self.model.frame_seq;
    }
}
