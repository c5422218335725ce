//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Main window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial inner width in logical pixels (valid range: 200-7680).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 150-4320).
    pub height: u32,
    /// Text after the document name in the title bar: "{name} - {suffix}".
    pub title_suffix: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            title_suffix: "Notepad".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.width, 600);
        assert_eq!(config.height, 400);
        assert_eq!(config.title_suffix, "Notepad");
    }

    #[test]
    fn window_config_partial_toml() {
        let config: WindowConfig = toml::from_str("width = 1024").unwrap();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 400);
    }
}
