//! Keybind enumeration.
//!
//! Collisions are only meaningful once bindings are parsed into key
//! combinations, so they are checked by `notepad_platform::validate_keybinds`.

use crate::schema::KeybindConfig;

/// Returns all keybinds as `(name, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &str)> {
    vec![
        ("new_file", &config.new_file),
        ("open_file", &config.open_file),
        ("save_file", &config.save_file),
        ("save_file_as", &config.save_file_as),
        ("quit", &config.quit),
        ("ask_assistant", &config.ask_assistant),
        ("cancel_requests", &config.cancel_requests),
    ]
}
