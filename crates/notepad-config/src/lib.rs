//! Notepad configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! Validation runs once, in [`load_config`] / [`load_config_from`]; the
//! lower-level [`toml_loader`] only reads and parses.

pub mod keybinds;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::NotepadConfig;

use notepad_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<NotepadConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path (the `--config` override).
///
/// Unlike [`load_config`], a missing file is an error rather than a
/// trigger to write a template.
pub fn load_config_from(path: &Path) -> Result<NotepadConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
