//! The editor buffer and the file it is bound to.
//!
//! Positions handed in from the text widget are character indices; all
//! slicing converts them to byte offsets first and clamps to the buffer.

use std::ops::Range;
use std::path::{Path, PathBuf};

use notepad_common::PlatformError;
use tracing::{info, warn};

/// Plain-text buffer plus the path it was last opened from or saved to.
#[derive(Debug, Default, Clone)]
pub struct Document {
    text: String,
    path: Option<PathBuf>,
    modified: bool,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole buffer with the contents of `path`.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    pub fn load(&mut self, path: &Path) -> Result<(), PlatformError> {
        let bytes = std::fs::read(path).map_err(|source| PlatformError::FileError {
            path: path.to_path_buf(),
            source,
        })?;
        self.text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), "file is not valid UTF-8, decoding lossily");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        self.path = Some(path.to_path_buf());
        self.modified = false;
        info!(path = %path.display(), chars = self.char_len(), "opened document");
        Ok(())
    }

    /// Write the buffer to its current path.
    pub fn save(&mut self) -> Result<PathBuf, PlatformError> {
        let path = self
            .path
            .clone()
            .ok_or_else(|| PlatformError::PathError("document has no file path".into()))?;
        self.write_to(&path)?;
        Ok(path)
    }

    /// Write the buffer to `path` and adopt it as the document's path.
    pub fn save_as(&mut self, path: &Path) -> Result<(), PlatformError> {
        self.write_to(path)?;
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    fn write_to(&mut self, path: &Path) -> Result<(), PlatformError> {
        std::fs::write(path, &self.text).map_err(|source| PlatformError::FileError {
            path: path.to_path_buf(),
            source,
        })?;
        self.modified = false;
        info!(path = %path.display(), "saved document");
        Ok(())
    }

    /// Empty the buffer and forget the path.
    pub fn clear(&mut self) {
        self.text.clear();
        self.path = None;
        self.modified = false;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mutable access for the text widget. Call [`Document::mark_modified`]
    /// when the widget reports a change.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn mark_modified(&mut self) {
        self.modified = true;
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Base name of the file, or `untitled` when the document has none.
    pub fn display_name(&self, untitled: &str) -> String {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| untitled.to_string())
    }

    /// Window title in the classic "name - Notepad" form.
    pub fn title(&self, untitled: &str, suffix: &str) -> String {
        format!("{} - {}", self.display_name(untitled), suffix)
    }

    /// Append text at the end of the buffer.
    pub fn append(&mut self, s: &str) {
        self.text.push_str(s);
        self.modified = true;
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// The line containing the character at `char_idx`, without its newline.
    pub fn line_at(&self, char_idx: usize) -> &str {
        let at = byte_offset(&self.text, char_idx);
        let start = self.text[..at].rfind('\n').map_or(0, |i| i + 1);
        let end = self.text[at..]
            .find('\n')
            .map_or(self.text.len(), |i| at + i);
        &self.text[start..end]
    }

    /// Text covered by a character range. Out-of-range ends are clamped.
    pub fn slice_chars(&self, range: Range<usize>) -> &str {
        let (start, end) = self.byte_range(range);
        &self.text[start..end]
    }

    /// Replace a character range with `with`, returning the character index
    /// just past the inserted text.
    pub fn replace_chars(&mut self, range: Range<usize>, with: &str) -> usize {
        let (start, end) = self.byte_range(range);
        self.text.replace_range(start..end, with);
        self.modified = true;
        self.text[..start].chars().count() + with.chars().count()
    }

    fn byte_range(&self, range: Range<usize>) -> (usize, usize) {
        let start = byte_offset(&self.text, range.start.min(range.end));
        let end = byte_offset(&self.text, range.end.max(range.start));
        (start, end)
    }
}

/// Byte offset of the `char_idx`-th character, clamped to the end of `s`.
fn byte_offset(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map_or(s.len(), |(offset, _)| offset)
}
