//! Full configuration validation.
//!
//! Validates numeric ranges and string fields. Keybind collisions need
//! parsed key combinations and are checked in `notepad-platform`.
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod assistant;
mod editor;
mod helpers;


use crate::schema::NotepadConfig;
use notepad_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &NotepadConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    editor::validate_window(&mut errors, config);
    editor::validate_editor(&mut errors, config);
    assistant::validate_assistant(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
