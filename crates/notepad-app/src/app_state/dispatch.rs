//! Action dispatch: routes menu picks and keybinds to their handlers.

use notepad_common::Action;

use super::core::NotepadApp;

impl NotepadApp {
    /// Dispatch a resolved [`Action`].
    pub(super) fn dispatch(&mut self, ctx: &egui::Context, action: Action) {
        tracing::debug!(?action, "dispatch");
        match action {
            Action::NewFile => self.new_file(),
            Action::OpenFile => self.open_file_dialog(),
            Action::SaveFile => self.save_file(),
            Action::SaveFileAs => self.save_file_as_dialog(),
            Action::Quit => {
                tracing::info!("Exit requested");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            Action::Cut => self.cut_selection(ctx),
            Action::Copy => self.copy_selection(ctx),
            Action::Paste => self.paste(ctx),
            Action::SelectAll => self.select_all(ctx),
            Action::AskAssistant => self.ask_assistant(ctx),
            Action::CancelRequests => self.cancel_requests(),
            Action::ShowAbout => self.show_about = true,
            Action::None => {}
        }
    }
}
