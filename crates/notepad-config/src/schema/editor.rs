//! Text editing surface configuration types.

use serde::{Deserialize, Serialize};

/// Editor appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Font size in points (valid range: 8-48).
    pub font_size: u32,
    /// Render the buffer in a monospace font.
    pub monospace: bool,
    /// Soft-wrap long lines at the window edge.
    pub word_wrap: bool,
    /// Name shown in the title bar before the first save.
    pub untitled_name: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            font_size: 14,
            monospace: true,
            word_wrap: true,
            untitled_name: "Untitled".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_config_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.font_size, 14);
        assert!(config.monospace);
        assert!(config.word_wrap);
        assert_eq!(config.untitled_name, "Untitled");
    }

    #[test]
    fn editor_config_partial_toml() {
        let toml_str = r#"
monospace = false
word_wrap = false
"#;
        let config: EditorConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.monospace);
        assert!(!config.word_wrap);
        assert_eq!(config.font_size, 14);
    }
}
