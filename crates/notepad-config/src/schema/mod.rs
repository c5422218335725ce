//! Configuration schema types for Notepad.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults matching classic Notepad behavior.

mod assistant;
mod editor;
mod keybind_config;
mod system;
mod window;

pub use assistant::*;
pub use editor::*;
pub use keybind_config::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Notepad.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct NotepadConfig {
    pub window: WindowConfig,
    pub editor: EditorConfig,
    pub assistant: AssistantConfig,
    pub keybinds: KeybindConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: NotepadConfig = toml::from_str("").unwrap();
        assert_eq!(config.window.title_suffix, "Notepad");
        assert_eq!(config.assistant.trigger_scope, TriggerScope::Buffer);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let toml_str = r#"
[editor]
font_size = 18

[assistant]
model = "gemini-1.5-pro"
"#;
        let config: NotepadConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.editor.font_size, 18);
        assert!(config.editor.word_wrap);
        assert_eq!(config.assistant.model, "gemini-1.5-pro");
        assert_eq!(config.assistant.request_timeout_secs, 120);
    }
}
