//! Translation of configured keybinds into egui shortcuts.

use notepad_common::Action;
use notepad_platform::{KeyCombo, KeybindRegistry};

use super::core::NotepadApp;

/// egui shortcut for a combo, if egui can observe it.
///
/// egui has no Super/Windows modifier outside macOS, where Super is the
/// Command key.
pub(super) fn to_shortcut(combo: &KeyCombo) -> Option<egui::KeyboardShortcut> {
    let mac = cfg!(target_os = "macos");
    if combo.super_key() && !mac {
        return None;
    }
    let key = egui::Key::from_name(&combo.key)?;
    let modifiers = egui::Modifiers {
        alt: combo.alt(),
        ctrl: combo.ctrl(),
        shift: combo.shift(),
        mac_cmd: combo.super_key(),
        command: combo.super_key(),
    };
    Some(egui::KeyboardShortcut::new(modifiers, key))
}

fn modifier_count(m: egui::Modifiers) -> usize {
    [m.alt, m.ctrl, m.shift, m.command].iter().filter(|b| **b).count()
}

/// Shortcuts for every binding, most modifiers first so that
/// `Cmd+Shift+S` is tried before `Cmd+S`.
pub(super) fn from_registry(registry: &KeybindRegistry) -> Vec<(egui::KeyboardShortcut, Action)> {
    let mut shortcuts: Vec<_> = registry
        .bindings()
        .filter_map(|(combo, action)| match to_shortcut(combo) {
            Some(shortcut) => Some((shortcut, action)),
            None => {
                tracing::warn!(key = %combo.key, ?action, "keybind cannot be observed, skipping");
                None
            }
        })
        .collect();
    shortcuts.sort_by_key(|(s, _)| std::cmp::Reverse(modifier_count(s.modifiers)));
    shortcuts
}

impl NotepadApp {
    /// Consume this frame's keybind presses.
    pub(super) fn take_shortcut_actions(&self, ctx: &egui::Context) -> Vec<Action> {
        ctx.input_mut(|input| {
            self.shortcuts
                .iter()
                .filter(|(shortcut, _)| input.consume_shortcut(shortcut))
                .map(|(_, action)| *action)
                .collect()
        })
    }
}
