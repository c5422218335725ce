//! File / Edit / Help menu bar.

use notepad_common::{Action, MenuGroup};

use super::core::NotepadApp;

impl NotepadApp {
    pub(super) fn render_menu_bar(&mut self, ui: &mut egui::Ui) {
        let mut picked = None;
        egui::MenuBar::new().ui(ui, |ui| {
            for group in MenuGroup::ALL {
                ui.menu_button(group.label(), |ui| {
                    for action in Action::menu_actions(group) {
                        if action.separated() {
                            ui.separator();
                        }
                        let mut button = egui::Button::new(action.label());
                        if let Some(hint) = self.registry.keybind_for_action(action) {
                            button = button.shortcut_text(hint);
                        }
                        if ui.add(button).clicked() {
                            picked = Some(action);
                            ui.close();
                        }
                    }
                });
            }
        });

        if let Some(action) = picked {
            self.dispatch(ui.ctx(), action);
        }
    }
}
