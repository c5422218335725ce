//! Window title: "{document name} - Notepad".

use super::core::NotepadApp;

impl NotepadApp {
    pub(super) fn window_title(&self) -> String {
        self.document.title(
            &self.config.editor.untitled_name,
            &self.config.window.title_suffix,
        )
    }

    /// Push the title to the window when it changed since the last frame.
    pub(super) fn sync_title(&mut self, ctx: &egui::Context) {
        let title = self.window_title();
        if title != self.applied_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.applied_title = title;
        }
    }
}
