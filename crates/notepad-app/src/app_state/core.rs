//! NotepadApp struct definition, constructor, and frame loop.

use notepad_ai::Dispatcher;
use notepad_common::{Action, Notification, NotificationQueue};
use notepad_config::NotepadConfig;
use notepad_platform::{Clipboard, Document, KeybindRegistry};

/// Top-level application state.
pub struct NotepadApp {
    pub(super) config: NotepadConfig,
    pub(super) registry: KeybindRegistry,
    pub(super) shortcuts: Vec<(egui::KeyboardShortcut, Action)>,
    pub(super) notifications: NotificationQueue,

    // Buffer and the file behind it
    pub(super) document: Document,
    pub(super) clipboard: Clipboard,

    // Assistant: created on first use; dropped before the runtime
    pub(super) assistant: Option<Dispatcher>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    // Dialogs
    pub(super) error_message: Option<String>,
    pub(super) show_about: bool,

    // Title last sent to the window
    pub(super) applied_title: String,
    pub(super) focus_editor: bool,
}

impl NotepadApp {
    pub fn new(config: NotepadConfig, registry: KeybindRegistry) -> Self {
        let shortcuts = super::shortcuts::from_registry(&registry);
        Self {
            config,
            registry,
            shortcuts,
            notifications: NotificationQueue::default(),
            document: Document::new(),
            clipboard: Clipboard::new(),
            assistant: None,
            tokio_runtime: None,
            error_message: None,
            show_about: false,
            applied_title: String::new(),
            focus_editor: true,
        }
    }

    /// Surface a failure as a modal dialog.
    pub(super) fn show_error(&mut self, err: impl std::fmt::Display) {
        let message = format!("An error occurred: {err}");
        tracing::warn!("{message}");
        self.error_message = Some(message);
    }

    pub(super) fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

impl eframe::App for NotepadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_assistant();

        // Keybinds are consumed before the text widget sees them
        for action in self.take_shortcut_actions(ctx) {
            self.dispatch(ctx, action);
        }

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| self.render_menu_bar(ui));
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| self.render_status_bar(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.render_editor(ui));

        self.render_error_dialog(ctx);
        self.render_about(ctx);

        self.sync_title(ctx);

        // Keep the status bar ticking while requests run or a notice is up
        let in_flight = self.assistant.as_ref().is_some_and(|d| d.in_flight() > 0);
        if in_flight || !self.notifications.is_empty() {
            ctx.request_repaint_after(std::time::Duration::from_millis(500));
        }
    }
}
