//! Platform services for the editor: the document buffer and its file I/O,
//! the system clipboard, and keybind parsing.

pub mod clipboard;
pub mod document;
pub mod input;
pub mod keymap;

pub use clipboard::Clipboard;
pub use document::Document;
pub use input::{validate_keybinds, KeyCombo, KeybindRegistry};
pub use keymap::{keybind_to_display, parse_keybind, KeyBind, Modifier};
