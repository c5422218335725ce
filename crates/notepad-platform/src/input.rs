//! Keybind registry: maps parsed key combinations to runtime `Action`s.
//!
//! Built from [`KeybindConfig`] at startup.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use notepad_common::{Action, ConfigError};
use notepad_config::keybinds::all_keybinds;
use notepad_config::schema::KeybindConfig;

use crate::keymap::{keybind_to_display, parse_keybind, KeyBind, Modifier};

const MOD_CTRL: u8 = 0b0001;
const MOD_ALT: u8 = 0b0010;
const MOD_SHIFT: u8 = 0b0100;
const MOD_SUPER: u8 = 0b1000;

/// A canonical key representation for fast HashMap lookup.
///
/// Modifiers are stored as a bitmask so lookups never sort.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// Bitmask: Ctrl=1, Alt=2, Shift=4, Super=8.
    pub mods: u8,
    /// Normalized key name (e.g. "S", "Enter", "F1").
    pub key: String,
}

impl KeyCombo {
    pub fn from_keybind(kb: &KeyBind) -> Self {
        let mods = kb.modifiers.iter().fold(0u8, |acc, m| {
            acc | match m {
                Modifier::Ctrl => MOD_CTRL,
                Modifier::Alt => MOD_ALT,
                Modifier::Shift => MOD_SHIFT,
                Modifier::Super => MOD_SUPER,
            }
        });
        Self {
            mods,
            key: kb.key.clone(),
        }
    }

    /// Build from modifier flags as reported by the windowing layer.
    pub fn from_flags(ctrl: bool, alt: bool, shift: bool, super_key: bool, key: String) -> Self {
        let mut mods = 0u8;
        if ctrl {
            mods |= MOD_CTRL;
        }
        if alt {
            mods |= MOD_ALT;
        }
        if shift {
            mods |= MOD_SHIFT;
        }
        if super_key {
            mods |= MOD_SUPER;
        }
        Self { mods, key }
    }

    pub fn ctrl(&self) -> bool {
        self.mods & MOD_CTRL != 0
    }

    pub fn alt(&self) -> bool {
        self.mods & MOD_ALT != 0
    }

    pub fn shift(&self) -> bool {
        self.mods & MOD_SHIFT != 0
    }

    pub fn super_key(&self) -> bool {
        self.mods & MOD_SUPER != 0
    }

    fn to_keybind(&self) -> KeyBind {
        let modifiers = [
            (self.ctrl(), Modifier::Ctrl),
            (self.alt(), Modifier::Alt),
            (self.shift(), Modifier::Shift),
            (self.super_key(), Modifier::Super),
        ]
        .into_iter()
        .filter_map(|(set, m)| set.then_some(m))
        .collect();
        KeyBind {
            modifiers,
            key: self.key.clone(),
        }
    }
}

/// Check that no two bindings resolve to the same key combination.
///
/// Bindings are compared after parsing, so `"Cmd+Shift+S"` and
/// `"Shift+Cmd+S"` collide, as do `"Cmd+Enter"` and `"Ctrl+Enter"` where
/// `Cmd` means `Ctrl`. Unparseable bindings are left to the registry,
/// which skips them.
pub fn validate_keybinds(config: &KeybindConfig) -> Result<(), ConfigError> {
    let mut seen: HashMap<KeyCombo, (&str, &str)> = HashMap::new();
    let mut errors = Vec::new();

    for (name, binding) in all_keybinds(config) {
        let Ok(kb) = parse_keybind(binding) else {
            continue;
        };
        let combo = KeyCombo::from_keybind(&kb);
        match seen.get(&combo) {
            Some((existing_name, existing_binding)) => errors.push(format!(
                "duplicate keybind '{binding}': same key as '{existing_binding}', \
                 assigned to both '{existing_name}' and '{name}'"
            )),
            None => {
                seen.insert(combo, (name, binding));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Maps key combinations to [`Action`]s.
pub struct KeybindRegistry {
    bindings: HashMap<KeyCombo, Action>,
}

impl KeybindRegistry {
    /// Build the registry from the config keybind section.
    ///
    /// Invalid keybind strings are logged as warnings and skipped. When two
    /// bindings resolve to the same combo the first one keeps it.
    pub fn from_config(config: &KeybindConfig) -> Self {
        let mappings: [(&str, Action); 7] = [
            (&config.new_file, Action::NewFile),
            (&config.open_file, Action::OpenFile),
            (&config.save_file, Action::SaveFile),
            (&config.save_file_as, Action::SaveFileAs),
            (&config.quit, Action::Quit),
            (&config.ask_assistant, Action::AskAssistant),
            (&config.cancel_requests, Action::CancelRequests),
        ];

        let mut bindings: HashMap<KeyCombo, Action> = HashMap::new();
        for (binding_str, action) in mappings {
            let kb = match parse_keybind(binding_str) {
                Ok(kb) => kb,
                Err(e) => {
                    tracing::warn!("invalid keybind '{binding_str}': {e}");
                    continue;
                }
            };
            match bindings.entry(KeyCombo::from_keybind(&kb)) {
                Entry::Occupied(taken) => {
                    tracing::warn!(
                        "keybind '{binding_str}' for {action:?} is already bound to {:?}, skipping",
                        taken.get()
                    );
                }
                Entry::Vacant(slot) => {
                    slot.insert(action);
                }
            }
        }

        Self { bindings }
    }

    /// All bindings, for translating into the UI toolkit's shortcut type.
    pub fn bindings(&self) -> impl Iterator<Item = (&KeyCombo, Action)> {
        self.bindings.iter().map(|(combo, action)| (combo, *action))
    }

    /// Display string of the keybind for `action`, for menu hints.
    pub fn keybind_for_action(&self, action: Action) -> Option<String> {
        self.bindings
            .iter()
            .find(|(_, a)| **a == action)
            .map(|(combo, _)| keybind_to_display(&combo.to_keybind()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keycombo_from_keybind() {
        let kb = parse_keybind("Ctrl+Enter").unwrap();
        let combo = KeyCombo::from_keybind(&kb);
        assert!(combo.ctrl());
        assert!(!combo.shift());
        assert_eq!(combo.key, "Enter");
    }

    #[test]
    fn keycombo_from_flags_matches_parsed() {
        let a = KeyCombo::from_flags(true, false, true, false, "S".into());
        let b = KeyCombo::from_keybind(&parse_keybind("Ctrl+Shift+S").unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn registry_from_default_config() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        assert_eq!(registry.len(), 7);
    }

    #[test]
    fn registry_binds_ctrl_enter_to_assistant() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        let combo = KeyCombo::from_flags(true, false, false, false, "Enter".into());
        let bound: Vec<Action> = registry
            .bindings()
            .filter(|(c, _)| **c == combo)
            .map(|(_, action)| action)
            .collect();
        assert_eq!(bound, vec![Action::AskAssistant]);
    }

    #[test]
    fn default_keybinds_validate() {
        assert!(validate_keybinds(&KeybindConfig::default()).is_ok());
    }

    #[test]
    fn reordered_modifiers_are_duplicates() {
        let config = KeybindConfig {
            save_file: "Cmd+Shift+S".into(),
            save_file_as: "Shift+Cmd+S".into(),
            ..Default::default()
        };
        let err = validate_keybinds(&config).unwrap_err().to_string();
        assert!(err.contains("duplicate keybind"));
        assert!(err.contains("'save_file'"));
        assert!(err.contains("'save_file_as'"));
    }

    #[test]
    fn case_and_alias_differences_are_duplicates() {
        let config = KeybindConfig {
            quit: "ctrl+return".into(),
            ..Default::default()
        };
        assert!(validate_keybinds(&config).is_err());
    }

    #[test]
    fn cmd_and_ctrl_collide_off_macos() {
        let config = KeybindConfig {
            new_file: "Cmd+Enter".into(),
            ..Default::default()
        };
        assert_eq!(
            validate_keybinds(&config).is_err(),
            !cfg!(target_os = "macos")
        );
    }

    #[test]
    fn colliding_binding_keeps_first_action() {
        let config = KeybindConfig {
            save_file: "Cmd+Shift+S".into(),
            save_file_as: "Shift+Cmd+S".into(),
            ..Default::default()
        };
        let registry = KeybindRegistry::from_config(&config);
        assert_eq!(registry.len(), 6);
        assert!(registry.keybind_for_action(Action::SaveFile).is_some());
        assert!(registry.keybind_for_action(Action::SaveFileAs).is_none());
    }

    #[test]
    fn invalid_bindings_are_skipped() {
        let config = KeybindConfig {
            quit: "Hyper+Q".into(),
            ..Default::default()
        };
        let registry = KeybindRegistry::from_config(&config);
        assert_eq!(registry.len(), 6);
        assert!(registry.keybind_for_action(Action::Quit).is_none());
    }

    #[test]
    fn registry_reverse_lookup() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        let display = registry.keybind_for_action(Action::CancelRequests).unwrap();
        if cfg!(target_os = "macos") {
            assert_eq!(display, "\u{238B}");
        } else {
            assert_eq!(display, "Escape");
        }
        assert!(registry.keybind_for_action(Action::Paste).is_none());
    }
}
