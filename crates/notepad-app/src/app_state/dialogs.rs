//! Modal dialogs: error messages and About.

use super::core::NotepadApp;

fn modal(title: &str) -> egui::Window<'_> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
}

impl NotepadApp {
    pub(super) fn render_error_dialog(&mut self, ctx: &egui::Context) {
        let Some(message) = self.error_message.clone() else {
            return;
        };
        let mut close = false;
        modal("Error").show(ctx, |ui| {
            ui.label(message);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    close = true;
                }
            });
        });
        if close {
            self.error_message = None;
            self.focus_editor = true;
        }
    }

    pub(super) fn render_about(&mut self, ctx: &egui::Context) {
        if !self.show_about {
            return;
        }
        let mut close = false;
        modal("Notepad").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Notepad");
                ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                ui.add_space(4.0);
                ui.label("Created by: the Notepad contributors");
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    close = true;
                }
            });
        });
        if close {
            self.show_about = false;
            self.focus_editor = true;
        }
    }
}
