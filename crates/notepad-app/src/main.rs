mod app_state;
mod cli;

use notepad_common::NotepadError;
use notepad_config::schema::{LogLevel, NotepadConfig};
use tracing_subscriber::EnvFilter;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("panic: {info}");
        eprintln!("\n--- Notepad crashed ---");
        eprintln!("Unsaved changes in the open document were lost.");
        eprintln!("-----------------------\n");
        default_hook(info);
    }));
}

/// Load environment variables from `.env` in the working directory
/// (KEY=VALUE lines). Variables already set win.
fn load_dotenv() {
    let Ok(contents) = std::fs::read_to_string(".env") else {
        return;
    };
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            if std::env::var(key).is_err() {
                std::env::set_var(key, value);
            }
        }
    }
}

/// Filter directive from `--log-level`. A bare level is scoped to our crates.
fn flag_directive(flag: &str) -> String {
    let flag = flag.trim();
    if flag.contains('=') {
        return flag.to_string();
    }
    match flag.to_lowercase().as_str() {
        "warning" => "notepad=warn".to_string(),
        level => format!("notepad={level}"),
    }
}

/// `--log-level` wins, then `RUST_LOG`, then the config file.
fn build_filter(flag: Option<&str>, config_level: LogLevel) -> EnvFilter {
    if let Some(flag) = flag {
        match EnvFilter::try_new(flag_directive(flag)) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("ignoring invalid --log-level '{flag}': {e}"),
        }
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_level.as_directive()))
}

fn load_config(args: &cli::Args) -> (NotepadConfig, Option<NotepadError>) {
    let result = match args.config {
        Some(ref path) => notepad_config::load_config_from(path),
        None => notepad_config::load_config(),
    }
    .and_then(|config| {
        notepad_platform::validate_keybinds(&config.keybinds)?;
        Ok(config)
    });
    match result {
        Ok(config) => (config, None),
        Err(e) => (NotepadConfig::default(), Some(e.into())),
    }
}

fn main() {
    // Load .env file before anything reads the API key
    load_dotenv();

    install_panic_hook();

    let args = cli::parse();

    // Config first: it supplies the fallback log level
    let (config, config_error) = load_config(&args);

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(args.log_level.as_deref(), config.logging.level))
        .init();

    tracing::info!("Notepad v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    let registry = notepad_platform::KeybindRegistry::from_config(&config.keybinds);
    tracing::info!("Keybind registry loaded ({} bindings)", registry.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width as f32, config.window.height as f32])
            .with_title(format!(
                "{} - {}",
                config.editor.untitled_name, config.window.title_suffix
            )),
        ..Default::default()
    };

    let mut app = app_state::NotepadApp::new(config, registry);
    if let Some(ref path) = args.file {
        app.open_path(path);
    }

    tracing::info!("Entering event loop");
    let result = eframe::run_native("Notepad", options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| NotepadError::Ui(e.to_string()));

    if let Err(e) = result {
        tracing::error!("Event loop error: {e}");
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title("Notepad")
            .set_description(format!("Notepad could not start: {e}"))
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_level_is_scoped_to_notepad() {
        assert_eq!(flag_directive("debug"), "notepad=debug");
        assert_eq!(flag_directive("WARNING"), "notepad=warn");
    }

    #[test]
    fn full_directive_passes_through() {
        assert_eq!(
            flag_directive("notepad_ai=trace,reqwest=debug"),
            "notepad_ai=trace,reqwest=debug"
        );
    }

    #[test]
    fn missing_override_file_falls_back_to_defaults() {
        let args = cli::Args {
            file: None,
            config: Some("/tmp/notepad_missing_config_for_test.toml".into()),
            log_level: None,
        };
        let (config, error) = load_config(&args);
        assert_eq!(config.window.width, 600);
        assert!(matches!(
            error,
            Some(NotepadError::Config(notepad_common::ConfigError::FileNotFound(_)))
        ));
    }

    #[test]
    fn invalid_override_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[window]\nwidth = 5\n").unwrap();
        let args = cli::Args {
            file: None,
            config: Some(path),
            log_level: None,
        };
        let (config, error) = load_config(&args);
        assert_eq!(config.window.width, 600);
        assert!(error.is_some());
    }

    #[test]
    fn colliding_keybinds_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[window]\nwidth = 800\n[keybinds]\nsave_file = \"Cmd+Shift+S\"\nsave_file_as = \"Shift+Cmd+S\"\n",
        )
        .unwrap();
        let args = cli::Args {
            file: None,
            config: Some(path),
            log_level: None,
        };
        let (config, error) = load_config(&args);
        assert_eq!(config.window.width, 600);
        assert_eq!(config.keybinds.save_file_as, "Cmd+Shift+S");
        let error = error.unwrap().to_string();
        assert!(error.contains("duplicate keybind"));
    }
}
