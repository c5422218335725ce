//! Window and editor validation.

use crate::schema::NotepadConfig;

use super::helpers::{validate_non_empty, validate_range};

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &NotepadConfig) {
    validate_range(errors, "window.width", config.window.width, 200, 7680);
    validate_range(errors, "window.height", config.window.height, 150, 4320);
}

pub(crate) fn validate_editor(errors: &mut Vec<String>, config: &NotepadConfig) {
    validate_range(errors, "editor.font_size", config.editor.font_size, 8, 48);
    validate_non_empty(errors, "editor.untitled_name", &config.editor.untitled_name);
}
