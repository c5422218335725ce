//! The text widget and the clipboard operations on its selection.

use std::ops::Range;

use egui::text::{CCursor, CCursorRange};

use super::core::NotepadApp;

pub(super) fn editor_id() -> egui::Id {
    egui::Id::new("notepad_editor")
}

impl NotepadApp {
    pub(super) fn render_editor(&mut self, ui: &mut egui::Ui) {
        let editor = &self.config.editor;
        let family = if editor.monospace {
            egui::FontFamily::Monospace
        } else {
            egui::FontFamily::Proportional
        };
        let font = egui::FontId::new(editor.font_size as f32, family);

        let scroll = if editor.word_wrap {
            egui::ScrollArea::vertical()
        } else {
            egui::ScrollArea::both()
        };

        scroll.auto_shrink([false, false]).show(ui, |ui| {
            let output = egui::TextEdit::multiline(self.document.text_mut())
                .id(editor_id())
                .font(font)
                .frame(false)
                .lock_focus(true)
                .desired_width(f32::INFINITY)
                .min_size(ui.available_size())
                .show(ui);

            if output.response.changed() {
                self.document.mark_modified();
            }
            if self.focus_editor {
                output.response.request_focus();
                self.focus_editor = false;
            }
        });
    }

    /// Current selection as a character range, start <= end.
    pub(super) fn selection(&self, ctx: &egui::Context) -> Option<Range<usize>> {
        let state = egui::TextEdit::load_state(ctx, editor_id())?;
        let range = state.cursor.char_range()?;
        let start = range.primary.index.min(range.secondary.index);
        let end = range.primary.index.max(range.secondary.index);
        Some(start..end)
    }

    fn set_selection(&mut self, ctx: &egui::Context, range: Range<usize>) {
        let mut state = egui::TextEdit::load_state(ctx, editor_id()).unwrap_or_default();
        let cursor = if range.is_empty() {
            CCursorRange::one(CCursor::new(range.start))
        } else {
            CCursorRange::two(CCursor::new(range.start), CCursor::new(range.end))
        };
        state.cursor.set_char_range(Some(cursor));
        state.store(ctx, editor_id());
        self.focus_editor = true;
    }

    pub(super) fn copy_selection(&mut self, ctx: &egui::Context) {
        let Some(range) = self.selection(ctx).filter(|r| !r.is_empty()) else {
            return;
        };
        let text = self.document.slice_chars(range).to_string();
        if let Err(e) = self.clipboard.set_text(&text) {
            self.show_error(e);
        }
    }

    pub(super) fn cut_selection(&mut self, ctx: &egui::Context) {
        let Some(range) = self.selection(ctx).filter(|r| !r.is_empty()) else {
            return;
        };
        let text = self.document.slice_chars(range.clone()).to_string();
        if let Err(e) = self.clipboard.set_text(&text) {
            self.show_error(e);
            return;
        }
        let cursor = self.document.replace_chars(range, "");
        self.set_selection(ctx, cursor..cursor);
    }

    pub(super) fn paste(&mut self, ctx: &egui::Context) {
        let text = match self.clipboard.get_text() {
            Ok(text) => text,
            Err(e) => {
                self.show_error(e);
                return;
            }
        };
        let end = self.document.char_len();
        let range = self.selection(ctx).unwrap_or(end..end);
        let cursor = self.document.replace_chars(range, &text);
        self.set_selection(ctx, cursor..cursor);
    }

    pub(super) fn select_all(&mut self, ctx: &egui::Context) {
        let len = self.document.char_len();
        self.set_selection(ctx, 0..len);
    }
}
