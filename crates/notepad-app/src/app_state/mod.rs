//! Top-level application state.
//!
//! Implements `eframe::App` to drive the editor. Coordinates the document,
//! menus, keybinds, dialogs, and the assistant dispatcher.

mod assistant;
mod core;
mod dialogs;
mod dispatch;
mod editor;
mod file_ops;
mod menu;
mod shortcuts;
mod status;
mod title;

pub use core::NotepadApp;
