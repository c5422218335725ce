//! Keybind strings such as `"Ctrl+Enter"` or `"Cmd+Shift+S"`.
//!
//! Platform normalization:
//! - `"Cmd"` / `"Command"` -> `Super` on macOS, `Ctrl` elsewhere
//! - `"Option"` / `"Opt"` / `"Alt"` -> `Alt`
//! - `"Control"` / `"Ctrl"` -> `Ctrl`
//! - `"Win"` / `"Super"` / `"Meta"` -> `Super`

use notepad_common::PlatformError;
use serde::{Deserialize, Serialize};

/// A keyboard modifier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    Ctrl,
    /// Option on macOS.
    Alt,
    Shift,
    /// Cmd on macOS, Win on Windows, Super on Linux.
    Super,
}

/// Zero or more modifiers plus a normalized key name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBind {
    pub modifiers: Vec<Modifier>,
    pub key: String,
}

/// Parse a keybind string into a [`KeyBind`].
///
/// The last `+`-separated token is the key; every token before it must be
/// a recognized modifier.
pub fn parse_keybind(s: &str) -> Result<KeyBind, PlatformError> {
    let tokens: Vec<&str> = s.split('+').map(str::trim).collect();

    let Some((key_token, modifier_tokens)) = tokens.split_last() else {
        return Err(PlatformError::NotSupported("empty keybind string".into()));
    };
    if key_token.is_empty() {
        return Err(PlatformError::NotSupported(format!(
            "keybind '{s}' has no key component"
        )));
    }

    let mut modifiers = Vec::new();
    for token in modifier_tokens {
        let modifier = normalize_modifier(token).ok_or_else(|| {
            PlatformError::NotSupported(format!("unrecognized modifier: {token}"))
        })?;
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }

    Ok(KeyBind {
        modifiers,
        key: normalize_key_name(key_token),
    })
}

fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token.to_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "cmd" | "command" => {
            if cfg!(target_os = "macos") {
                Some(Modifier::Super)
            } else {
                Some(Modifier::Ctrl)
            }
        }
        "super" | "win" | "meta" => Some(Modifier::Super),
        _ => None,
    }
}

fn normalize_key_name(token: &str) -> String {
    let lower = token.to_lowercase();
    match lower.as_str() {
        "period" => ".".into(),
        "comma" => ",".into(),
        "slash" => "/".into(),
        "space" => "Space".into(),
        "enter" | "return" => "Enter".into(),
        "escape" | "esc" => "Escape".into(),
        "tab" => "Tab".into(),
        "backspace" => "Backspace".into(),
        "delete" | "del" => "Delete".into(),
        _ if token.chars().count() == 1 => token.to_uppercase(),
        _ => {
            let mut chars = lower.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().chain(chars).collect(),
                None => lower,
            }
        }
    }
}

/// Render a [`KeyBind`] for menu shortcut hints.
///
/// macOS uses modifier symbols with no separator; other platforms use
/// `Ctrl+Shift+S` style text.
pub fn keybind_to_display(kb: &KeyBind) -> String {
    let mac = cfg!(target_os = "macos");
    let mut parts: Vec<String> = kb
        .modifiers
        .iter()
        .map(|m| display_modifier(*m, mac).to_string())
        .collect();
    parts.push(display_key(&kb.key, mac));
    parts.join(if mac { "" } else { "+" })
}

fn display_modifier(modifier: Modifier, mac: bool) -> &'static str {
    match (modifier, mac) {
        (Modifier::Ctrl, true) => "\u{2303}",
        (Modifier::Alt, true) => "\u{2325}",
        (Modifier::Shift, true) => "\u{21E7}",
        (Modifier::Super, true) => "\u{2318}",
        (Modifier::Ctrl, false) => "Ctrl",
        (Modifier::Alt, false) => "Alt",
        (Modifier::Shift, false) => "Shift",
        (Modifier::Super, false) if cfg!(target_os = "windows") => "Win",
        (Modifier::Super, false) => "Super",
    }
}

fn display_key(key: &str, mac: bool) -> String {
    if !mac {
        return key.to_string();
    }
    match key {
        "Enter" => "\u{21A9}".into(),
        "Escape" => "\u{238B}".into(),
        "Backspace" => "\u{232B}".into(),
        "Delete" => "\u{2326}".into(),
        "Tab" => "\u{21E5}".into(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_keybind() {
        let kb = parse_keybind("Ctrl+S").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
        assert_eq!(kb.key, "S");
    }

    #[test]
    fn parse_lowercase_key_is_uppercased() {
        let kb = parse_keybind("ctrl+o").unwrap();
        assert_eq!(kb.key, "O");
    }

    #[test]
    fn parse_multi_modifier_keybind() {
        let kb = parse_keybind("Ctrl+Shift+S").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl, Modifier::Shift]);
        assert_eq!(kb.key, "S");
    }

    #[test]
    fn parse_cmd_modifier_is_platform_dependent() {
        let kb = parse_keybind("Cmd+N").unwrap();
        if cfg!(target_os = "macos") {
            assert_eq!(kb.modifiers, vec![Modifier::Super]);
        } else {
            assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
        }
    }

    #[test]
    fn parse_enter_aliases() {
        assert_eq!(parse_keybind("Ctrl+Enter").unwrap().key, "Enter");
        assert_eq!(parse_keybind("Ctrl+Return").unwrap().key, "Enter");
        assert_eq!(parse_keybind("Esc").unwrap().key, "Escape");
    }

    #[test]
    fn parse_function_key() {
        let kb = parse_keybind("f5").unwrap();
        assert!(kb.modifiers.is_empty());
        assert_eq!(kb.key, "F5");
    }

    #[test]
    fn parse_empty_string_fails() {
        assert!(parse_keybind("").is_err());
        assert!(parse_keybind("Ctrl+").is_err());
    }

    #[test]
    fn parse_unknown_modifier_fails() {
        let err = parse_keybind("Hyper+K").unwrap_err().to_string();
        assert!(err.contains("Hyper"));
    }

    #[test]
    fn parse_duplicate_modifiers_deduplicated() {
        let kb = parse_keybind("Ctrl+Control+A").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
    }

    #[test]
    fn display_keybind_platform() {
        let kb = parse_keybind("Ctrl+Shift+S").unwrap();
        let display = keybind_to_display(&kb);
        if cfg!(target_os = "macos") {
            assert_eq!(display, "\u{2303}\u{21E7}S");
        } else {
            assert_eq!(display, "Ctrl+Shift+S");
        }
    }

    #[test]
    fn keybind_serialization_roundtrip() {
        let kb = parse_keybind("Alt+Shift+T").unwrap();
        let json = serde_json::to_string(&kb).unwrap();
        let back: KeyBind = serde_json::from_str(&json).unwrap();
        assert_eq!(kb, back);
    }
}
