use std::path::PathBuf;

use clap::Parser;

/// Notepad: a plain text editor with an inline Gemini assistant.
#[derive(Parser, Debug)]
#[command(name = "notepad", version, about)]
pub struct Args {
    /// File to open at startup.
    pub file: Option<PathBuf>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error) or a full filter directive.
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_file_and_flags() {
        let args = Args::parse_from([
            "notepad",
            "notes.txt",
            "--config",
            "/tmp/notepad.toml",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.file, Some(PathBuf::from("notes.txt")));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/notepad.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn everything_is_optional() {
        let args = Args::parse_from(["notepad"]);
        assert!(args.file.is_none());
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
    }
}
