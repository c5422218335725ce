use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("clipboard error: {0}")]
    ClipboardError(String),

    #[error("path error: {0}")]
    PathError(String),

    #[error("file error: {path}: {source}")]
    FileError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[derive(Debug, thiserror::Error)]
pub enum NotepadError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("ui error: {0}")]
    Ui(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("editor.font_size = 2 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: editor.font_size = 2 is out of range"
        );
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::ClipboardError("access denied".into());
        assert_eq!(err.to_string(), "clipboard error: access denied");

        let err = PlatformError::NotSupported("linux wayland".into());
        assert_eq!(err.to_string(), "not supported: linux wayland");
    }

    #[test]
    fn file_error_names_the_path() {
        let err = PlatformError::FileError {
            path: PathBuf::from("/tmp/notes.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/notes.txt"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn notepad_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: NotepadError = config_err.into();
        assert!(matches!(err, NotepadError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn notepad_error_ui_display() {
        let err = NotepadError::Ui("event loop exited".into());
        assert_eq!(err.to_string(), "ui error: event loop exited");
    }
}
