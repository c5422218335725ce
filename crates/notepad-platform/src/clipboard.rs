use notepad_common::PlatformError;

/// System clipboard backed by `arboard`.
///
/// The native handle is opened on first use so that a missing clipboard
/// (headless sessions, some Wayland setups) only fails the operation that
/// needed it.
#[derive(Default)]
pub struct Clipboard {
    inner: Option<arboard::Clipboard>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, PlatformError> {
        if self.inner.is_none() {
            let cb = arboard::Clipboard::new()
                .map_err(|e| PlatformError::ClipboardError(e.to_string()))?;
            self.inner = Some(cb);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| PlatformError::ClipboardError("clipboard unavailable".into()))
    }

    /// Reads text from the system clipboard.
    pub fn get_text(&mut self) -> Result<String, PlatformError> {
        self.handle()?
            .get_text()
            .map_err(|e| PlatformError::ClipboardError(e.to_string()))
    }

    /// Writes text to the system clipboard.
    pub fn set_text(&mut self, text: &str) -> Result<(), PlatformError> {
        self.handle()?
            .set_text(text.to_owned())
            .map_err(|e| PlatformError::ClipboardError(e.to_string()))
    }
}
