use serde::{Deserialize, Serialize};

/// Top-level menu an action is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuGroup {
    File,
    Edit,
    Help,
}

/// Every user-triggerable action in the application.
///
/// Keybinds, menu items, and the CLI all resolve to an `Action`.
/// The app state dispatcher matches on this enum to route to subsystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- File --
    NewFile,
    OpenFile,
    SaveFile,
    SaveFileAs,
    Quit,

    // -- Edit --
    Cut,
    Copy,
    Paste,
    SelectAll,

    // -- Assistant --
    AskAssistant,
    CancelRequests,

    // -- Help --
    ShowAbout,

    // -- Noop --
    None,
}

impl Action {
    /// Human-readable label for menus.
    pub fn label(&self) -> &'static str {
        match self {
            Action::NewFile => "New",
            Action::OpenFile => "Open…",
            Action::SaveFile => "Save",
            Action::SaveFileAs => "Save As…",
            Action::Quit => "Exit",
            Action::Cut => "Cut",
            Action::Copy => "Copy",
            Action::Paste => "Paste",
            Action::SelectAll => "Select All",
            Action::AskAssistant => "Ask Assistant",
            Action::CancelRequests => "Cancel Requests",
            Action::ShowAbout => "About Notepad",
            Action::None => "None",
        }
    }

    /// Actions listed under a menu, in display order.
    ///
    /// A separator is drawn before `Quit` and before `AskAssistant`.
    pub fn menu_actions(group: MenuGroup) -> Vec<Action> {
        match group {
            MenuGroup::File => vec![
                Action::NewFile,
                Action::OpenFile,
                Action::SaveFile,
                Action::SaveFileAs,
                Action::Quit,
            ],
            MenuGroup::Edit => vec![
                Action::Cut,
                Action::Copy,
                Action::Paste,
                Action::SelectAll,
                Action::AskAssistant,
                Action::CancelRequests,
            ],
            MenuGroup::Help => vec![Action::ShowAbout],
        }
    }

    /// Whether the menu should draw a separator above this action.
    pub fn separated(&self) -> bool {
        matches!(self, Action::Quit | Action::AskAssistant)
    }
}

impl MenuGroup {
    pub const ALL: [MenuGroup; 3] = [MenuGroup::File, MenuGroup::Edit, MenuGroup::Help];

    pub fn label(&self) -> &'static str {
        match self {
            MenuGroup::File => "File",
            MenuGroup::Edit => "Edit",
            MenuGroup::Help => "Help",
        }
    }
}
