//! New, Open, Save, and Save As.

use std::path::Path;

use notepad_common::Notification;

use super::core::NotepadApp;

fn text_filters(dialog: rfd::FileDialog) -> rfd::FileDialog {
    dialog
        .add_filter("Text Documents", &["txt"])
        .add_filter("All Files", &["*"])
}

impl NotepadApp {
    pub(super) fn new_file(&mut self) {
        self.document.clear();
        self.focus_editor = true;
        tracing::info!("New document");
    }

    pub(super) fn open_file_dialog(&mut self) {
        let Some(path) = text_filters(rfd::FileDialog::new().set_title("Open")).pick_file() else {
            return;
        };
        self.open_path(&path);
    }

    /// Replace the buffer with the contents of `path`.
    pub fn open_path(&mut self, path: &Path) {
        match self.document.load(path) {
            Ok(()) => {
                self.focus_editor = true;
                let name = self.document.display_name(&self.config.editor.untitled_name);
                self.notify(Notification::info(format!("Opened {name}")));
            }
            Err(e) => self.show_error(e),
        }
    }

    /// Save to the current path, or ask for one.
    pub(super) fn save_file(&mut self) {
        if self.document.path().is_none() {
            self.save_file_as_dialog();
            return;
        }
        match self.document.save() {
            Ok(path) => self.notify(Notification::info(format!("Saved {}", path.display()))),
            Err(e) => self.show_error(e),
        }
    }

    pub(super) fn save_file_as_dialog(&mut self) {
        let suggested = format!("{}.txt", self.config.editor.untitled_name);
        let dialog = text_filters(rfd::FileDialog::new().set_title("Save As"))
            .set_file_name(suggested);
        let Some(path) = dialog.save_file() else {
            return;
        };
        self.save_to(&path);
    }

    pub(super) fn save_to(&mut self, path: &Path) {
        match self.document.save_as(path) {
            Ok(()) => self.notify(Notification::info(format!("Saved {}", path.display()))),
            Err(e) => self.show_error(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::core::test_support::app;

    #[test]
    fn open_replaces_buffer_and_title() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("letter.txt");
        std::fs::write(&path, "Dear reader").unwrap();

        let mut app = app();
        app.document.append("- What is X?\n...");
        app.open_path(&path);

        assert_eq!(app.document.text(), "Dear reader");
        assert_eq!(app.window_title(), "letter.txt - Notepad");
        assert!(app.error_message.is_none());
    }

    #[test]
    fn open_failure_shows_error_and_keeps_buffer() {
        let mut app = app();
        app.document.append("keep me");
        app.open_path(std::path::Path::new("/tmp/notepad_missing_for_test.txt"));

        assert_eq!(app.document.text(), "keep me");
        let message = app.error_message.as_deref().unwrap();
        assert!(message.starts_with("An error occurred: "));
        assert!(message.contains("notepad_missing_for_test.txt"));
    }

    #[test]
    fn save_to_writes_and_renames() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.txt");

        let mut app = app();
        app.document.append("hello");
        app.save_to(&path);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
        assert_eq!(app.window_title(), "draft.txt - Notepad");

        app.document.append(" again");
        app.save_file();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello again");
    }

    #[test]
    fn new_file_resets_title() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "abc").unwrap();

        let mut app = app();
        app.open_path(&path);
        app.new_file();
        assert_eq!(app.document.text(), "");
        assert_eq!(app.window_title(), "Untitled - Notepad");
    }
}
