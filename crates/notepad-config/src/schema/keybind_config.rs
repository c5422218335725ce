//! Keyboard shortcuts configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Keyboard shortcuts configuration.
///
/// Format: "Modifier+Key" where Modifier is one of: Cmd, Ctrl, Option, Alt, Shift.
/// `Cmd` is the platform command key (Ctrl outside macOS).
/// Multiple modifiers: "Cmd+Shift+S".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub new_file: String,
    pub open_file: String,
    pub save_file: String,
    pub save_file_as: String,
    pub quit: String,
    pub ask_assistant: String,
    pub cancel_requests: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            new_file: "Cmd+N".into(),
            open_file: "Cmd+O".into(),
            save_file: "Cmd+S".into(),
            save_file_as: "Cmd+Shift+S".into(),
            quit: "Cmd+Q".into(),
            ask_assistant: "Ctrl+Enter".into(),
            cancel_requests: "Escape".into(),
        }
    }
}
