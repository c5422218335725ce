//! Bottom status bar: file, pending requests, token usage, latest notice.

use notepad_common::NotificationLevel;

use super::core::NotepadApp;

impl NotepadApp {
    pub(super) fn render_status_bar(&mut self, ui: &mut egui::Ui) {
        let path = self
            .document
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| self.config.editor.untitled_name.clone());
        let modified = if self.document.is_modified() { " *" } else { "" };

        let assistant = self.assistant.as_ref().map(|d| {
            format!(
                "{}  |  {} in flight  |  {} tokens",
                d.model(),
                d.in_flight(),
                d.tracker().total_tokens()
            )
        });

        let notice = self.notifications.latest().map(|n| {
            let color = match n.level {
                NotificationLevel::Info => ui.visuals().text_color(),
                NotificationLevel::Warning => ui.visuals().warn_fg_color,
            };
            egui::RichText::new(n.body.clone()).color(color)
        });

        ui.horizontal(|ui| {
            ui.label(format!("{path}{modified}"));
            if let Some(assistant) = assistant {
                ui.separator();
                ui.label(assistant);
            }
            if let Some(notice) = notice {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(notice);
                });
            }
        });
    }
}
