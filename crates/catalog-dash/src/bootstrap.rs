use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use catalog_core::settings::Settings;

/// Name of the per-user directory under `$HOME`.
pub const APP_DIR: &str = ".catalog-dash";

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure `~/.catalog-dash/` and `~/.catalog-dash/logs/` exist and return
/// the base directory.
pub fn ensure_directories() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    ensure_directories_in(&home)
}

fn ensure_directories_in(home: &Path) -> anyhow::Result<PathBuf> {
    let app_dir = home.join(APP_DIR);
    std::fs::create_dir_all(app_dir.join("logs"))?;
    Ok(app_dir)
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map the CLI level names (`DEBUG`, `WARNING`, ...) onto an `EnvFilter`
/// directive.
pub fn level_directive(log_level: &str) -> String {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" => "warn".to_string(),
        "ERROR" | "CRITICAL" => "error".to_string(),
        _ => log_level.to_lowercase(),
    }
}

/// Where log output goes: the explicit `--log-file`, else a file under
/// `logs/` for the interactive dashboard (stderr would draw over the TUI),
/// else `None` for stderr.
pub fn resolve_log_file(settings: &Settings, app_dir: &Path) -> Option<PathBuf> {
    match (&settings.log_file, settings.view.as_str()) {
        (Some(path), _) => Some(path.clone()),
        (None, "dashboard") => Some(app_dir.join("logs").join("catalog-dash.log")),
        (None, _) => None,
    }
}

/// Initialise the global `tracing` subscriber.
///
/// Unrecognised level strings fall back to `"info"`. When `log_file` is set
/// output is appended to it without ANSI colours; otherwise it goes to
/// stderr.
pub fn setup_logging(log_level: &str, log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_new(level_directive(log_level)).unwrap_or_else(|_| EnvFilter::new("info"));

    let (stderr_layer, file_layer) = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            (None, Some(layer))
        }
        None => {
            let layer = fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_writer(std::io::stderr);
            (Some(layer), None)
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(())
}

// ── Dataset naming ─────────────────────────────────────────────────────────────

/// Short dataset name for the header: the file name, or the whole path
/// when it has none.
pub fn dataset_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn settings(args: &[&str]) -> Settings {
        let mut argv = vec!["catalog-dash"];
        argv.extend_from_slice(args);
        Settings::parse_from(argv)
    }

    // ── ensure_directories ────────────────────────────────────────────────────

    #[test]
    fn test_ensure_directories_in() {
        let tmp = TempDir::new().expect("tempdir");
        let app_dir = ensure_directories_in(tmp.path()).expect("ensure_directories");
        assert_eq!(app_dir, tmp.path().join(".catalog-dash"));
        assert!(app_dir.is_dir());
        assert!(app_dir.join("logs").is_dir(), "logs subdir must exist");

        // Idempotent.
        ensure_directories_in(tmp.path()).expect("second call");
    }

    // ── level_directive ───────────────────────────────────────────────────────

    #[test]
    fn test_level_directive_maps_cli_names() {
        assert_eq!(level_directive("DEBUG"), "debug");
        assert_eq!(level_directive("info"), "info");
        assert_eq!(level_directive("WARNING"), "warn");
        assert_eq!(level_directive("ERROR"), "error");
        assert_eq!(level_directive("CRITICAL"), "error");
        assert_eq!(level_directive("Trace"), "trace");
    }

    // ── resolve_log_file ──────────────────────────────────────────────────────

    #[test]
    fn test_resolve_log_file() {
        let app_dir = Path::new("/home/u/.catalog-dash");

        let s = settings(&["--view", "report"]);
        assert_eq!(resolve_log_file(&s, app_dir), None);

        let s = settings(&["--view", "dashboard"]);
        assert_eq!(
            resolve_log_file(&s, app_dir),
            Some(app_dir.join("logs").join("catalog-dash.log"))
        );

        let s = settings(&["--view", "report", "--log-file", "/tmp/x.log"]);
        assert_eq!(resolve_log_file(&s, app_dir), Some(PathBuf::from("/tmp/x.log")));
    }

    // ── dataset_name ──────────────────────────────────────────────────────────

    #[test]
    fn test_dataset_name() {
        assert_eq!(
            dataset_name(Path::new("/data/netflix_titles.csv")),
            "netflix_titles.csv"
        );
        assert_eq!(dataset_name(Path::new("titles.csv")), "titles.csv");
        assert_eq!(dataset_name(Path::new("/")), "/");
    }
}
