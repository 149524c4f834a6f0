use clap::{CommandFactory, Parser};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::TypeSelection;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Terminal dashboard for exploring a media catalog dataset
#[derive(Parser, Debug, Clone)]
#[command(
    name = "catalog-dash",
    about = "Terminal dashboard for exploring a media catalog dataset",
    version
)]
pub struct Settings {
    /// Path to the catalog CSV file
    #[arg(long, default_value = "netflix_titles.csv")]
    pub data: PathBuf,

    /// View mode
    #[arg(long, default_value = "dashboard", value_parser = ["dashboard", "report"])]
    pub view: String,

    /// Initial content-type filter
    #[arg(long, default_value = "all", value_parser = ["all", "movie", "tv-show"])]
    pub content_type: String,

    /// Display theme
    #[arg(long, default_value = "auto", value_parser = ["light", "dark", "classic", "auto"])]
    pub theme: String,

    /// Print the report as JSON instead of text (report view only)
    #[arg(long)]
    pub json: bool,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Clear saved configuration
    #[arg(long)]
    pub clear: bool,
}

// ── LastUsedParams ─────────────────────────────────────────────────────────────

/// Persisted last-used parameters saved to `~/.catalog-dash/last_used.json`.
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct LastUsedParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl LastUsedParams {
    /// Return the default path to the persisted config file.
    /// Uses `~/.catalog-dash/last_used.json`.
    pub fn config_path() -> PathBuf {
        Self::config_path_in(&dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
    }

    /// Return the config path rooted at `base_dir` (used for testing).
    pub fn config_path_in(base_dir: &std::path::Path) -> PathBuf {
        base_dir.join(".catalog-dash").join("last_used.json")
    }

    /// Load persisted params from an explicit path.
    /// Returns `Default` when the file is absent or cannot be parsed.
    pub fn load_from(path: &std::path::Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Atomically write params to an explicit path, creating parent
    /// directories if needed.
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;

        // Write to a temp file then rename for atomicity.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, &json)?;
        std::fs::rename(&tmp, path)?;

        Ok(())
    }

    /// Delete the config file at an explicit path if it exists.
    pub fn clear_at(path: &std::path::Path) -> Result<(), std::io::Error> {
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse CLI arguments, merge with last-used params where no explicit CLI
    /// value was provided, apply `--debug`, and persist the result.
    pub fn load_with_last_used() -> Self {
        Self::load_with_last_used_impl(
            std::env::args_os().collect(),
            &LastUsedParams::config_path(),
        )
    }

    /// Full implementation – accepts args and an explicit config path so that
    /// tests can redirect to a temporary directory.
    pub fn load_with_last_used_impl(
        args: Vec<std::ffi::OsString>,
        config_path: &std::path::Path,
    ) -> Self {
        // Build raw ArgMatches so we can query ValueSource.
        let matches = Settings::command().get_matches_from(args.clone());

        // Parse into the typed struct using the same args.
        let mut settings = Settings::parse_from(args);

        if settings.clear {
            let _ = LastUsedParams::clear_at(config_path);
            return Self::apply_debug(settings);
        }

        let last = LastUsedParams::load_from(config_path);

        // CLI always wins; the dataset path is never loaded from last-used.
        if !is_arg_explicitly_set(&matches, "view") {
            if let Some(v) = last.view.filter(|v| is_known_view(v)) {
                settings.view = v;
            }
        }
        if !is_arg_explicitly_set(&matches, "theme") {
            if let Some(v) = last.theme {
                settings.theme = v;
            }
        }
        // NOTE: clap stores the arg id using the *field name* (underscores),
        // not the long-flag spelling (hyphens).
        if !is_arg_explicitly_set(&matches, "content_type") {
            if let Some(v) = last
                .content_type
                .filter(|v| TypeSelection::from_cli(v).is_some())
            {
                settings.content_type = v;
            }
        }

        settings = Self::apply_debug(settings);

        // Persist current settings for next run.
        let params = LastUsedParams::from(&settings);
        let _ = params.save_to(config_path);

        settings
    }

    /// Typed view of `--content-type`. Unknown spellings fall back to `All`.
    pub fn type_selection(&self) -> TypeSelection {
        TypeSelection::from_cli(&self.content_type).unwrap_or_default()
    }

    /// `--debug` overrides log level.
    fn apply_debug(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Conversion ─────────────────────────────────────────────────────────────────

impl From<&Settings> for LastUsedParams {
    fn from(s: &Settings) -> Self {
        LastUsedParams {
            theme: Some(s.theme.clone()),
            view: Some(s.view.clone()),
            content_type: Some(s.content_type.clone()),
        }
    }
}

// ── Helpers ────────────────────────────────────────────────────────────────────

/// Returns `true` when `name` was supplied explicitly on the command line
/// (not via default value or environment variable).
fn is_arg_explicitly_set(matches: &clap::ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(clap::parser::ValueSource::CommandLine)
}

fn is_known_view(view: &str) -> bool {
    matches!(view, "dashboard" | "report")
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// Build the config path inside `tmp`.
    fn tmp_config_path(tmp: &TempDir) -> PathBuf {
        LastUsedParams::config_path_in(tmp.path())
    }

    // ── LastUsedParams ────────────────────────────────────────────────────────

    #[test]
    fn test_last_used_params_save_load() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp_config_path(&tmp);
        let params = LastUsedParams {
            theme: Some("dark".to_string()),
            view: Some("report".to_string()),
            content_type: Some("tv-show".to_string()),
        };
        params.save_to(&path).expect("save");

        let loaded = LastUsedParams::load_from(&path);

        assert_eq!(loaded.theme, Some("dark".to_string()));
        assert_eq!(loaded.view, Some("report".to_string()));
        assert_eq!(loaded.content_type, Some("tv-show".to_string()));
    }

    #[test]
    fn test_last_used_params_clear() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp_config_path(&tmp);

        let params = LastUsedParams {
            theme: Some("light".to_string()),
            ..Default::default()
        };
        params.save_to(&path).expect("save");
        assert!(path.exists(), "file must exist after save");

        LastUsedParams::clear_at(&path).expect("clear");
        assert!(!path.exists(), "file must be gone after clear");
    }

    #[test]
    fn test_last_used_params_default_when_missing() {
        let tmp = TempDir::new().expect("tempdir");
        let loaded = LastUsedParams::load_from(&tmp_config_path(&tmp));
        assert!(loaded.theme.is_none());
        assert!(loaded.view.is_none());
        assert!(loaded.content_type.is_none());
    }

    #[test]
    fn test_last_used_params_default_when_corrupt() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp_config_path(&tmp);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{not json").unwrap();
        assert!(LastUsedParams::load_from(&path).theme.is_none());
    }

    // ── Settings parsing ──────────────────────────────────────────────────────

    #[test]
    fn test_settings_default_values() {
        let settings = Settings::parse_from(["catalog-dash"]);

        assert_eq!(settings.data, PathBuf::from("netflix_titles.csv"));
        assert_eq!(settings.view, "dashboard");
        assert_eq!(settings.content_type, "all");
        assert_eq!(settings.theme, "auto");
        assert!(!settings.json);
        assert_eq!(settings.log_level, "INFO");
        assert!(settings.log_file.is_none());
        assert!(!settings.debug);
        assert!(!settings.clear);
        assert_eq!(settings.type_selection(), TypeSelection::All);
    }

    #[test]
    fn test_settings_cli_content_type() {
        let settings = Settings::parse_from(["catalog-dash", "--content-type", "tv-show"]);
        assert_eq!(settings.type_selection(), TypeSelection::TvShow);
    }

    #[test]
    fn test_settings_cli_rejects_unknown_content_type() {
        let result = Settings::try_parse_from(["catalog-dash", "--content-type", "podcast"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_cli_data_path() {
        let settings = Settings::parse_from(["catalog-dash", "--data", "/tmp/titles.csv"]);
        assert_eq!(settings.data, PathBuf::from("/tmp/titles.csv"));
    }

    #[test]
    fn test_settings_cli_report_json() {
        let settings = Settings::parse_from(["catalog-dash", "--view", "report", "--json"]);
        assert_eq!(settings.view, "report");
        assert!(settings.json);
    }

    #[test]
    fn test_from_settings_to_last_used() {
        let settings = Settings::parse_from([
            "catalog-dash",
            "--theme",
            "classic",
            "--content-type",
            "movie",
        ]);
        let last = LastUsedParams::from(&settings);
        assert_eq!(last.theme, Some("classic".to_string()));
        assert_eq!(last.view, Some("dashboard".to_string()));
        assert_eq!(last.content_type, Some("movie".to_string()));
    }

    // ── load_with_last_used (config path injection) ───────────────────────────

    #[test]
    fn test_load_with_last_used_merges_persisted_values() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp_config_path(&tmp);
        let params = LastUsedParams {
            theme: Some("dark".to_string()),
            view: Some("report".to_string()),
            content_type: Some("movie".to_string()),
        };
        params.save_to(&config_path).expect("save");

        let settings =
            Settings::load_with_last_used_impl(vec!["catalog-dash".into()], &config_path);
        assert_eq!(settings.theme, "dark");
        assert_eq!(settings.view, "report");
        assert_eq!(settings.type_selection(), TypeSelection::Movie);
    }

    #[test]
    fn test_load_with_last_used_cli_overrides_persisted() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp_config_path(&tmp);
        let params = LastUsedParams {
            theme: Some("dark".to_string()),
            content_type: Some("movie".to_string()),
            ..Default::default()
        };
        params.save_to(&config_path).expect("save");

        let settings = Settings::load_with_last_used_impl(
            vec![
                "catalog-dash".into(),
                "--theme".into(),
                "light".into(),
                "--content-type".into(),
                "all".into(),
            ],
            &config_path,
        );
        assert_eq!(settings.theme, "light");
        assert_eq!(settings.type_selection(), TypeSelection::All);
    }

    #[test]
    fn test_load_with_last_used_ignores_invalid_persisted_values() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp_config_path(&tmp);
        let params = LastUsedParams {
            view: Some("realtime".to_string()),
            content_type: Some("podcast".to_string()),
            ..Default::default()
        };
        params.save_to(&config_path).expect("save");

        let settings =
            Settings::load_with_last_used_impl(vec!["catalog-dash".into()], &config_path);
        assert_eq!(settings.view, "dashboard");
        assert_eq!(settings.content_type, "all");
    }

    #[test]
    fn test_load_with_last_used_clear_removes_file() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp_config_path(&tmp);
        let params = LastUsedParams {
            theme: Some("classic".to_string()),
            ..Default::default()
        };
        params.save_to(&config_path).expect("save");

        Settings::load_with_last_used_impl(
            vec!["catalog-dash".into(), "--clear".into()],
            &config_path,
        );

        assert!(!config_path.exists(), "file must be gone after --clear");
    }

    #[test]
    fn test_load_with_last_used_debug_overrides_log_level() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp_config_path(&tmp);

        let settings = Settings::load_with_last_used_impl(
            vec!["catalog-dash".into(), "--debug".into()],
            &config_path,
        );
        assert_eq!(settings.log_level, "DEBUG");
    }

    #[test]
    fn test_load_with_last_used_persists_after_run() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp_config_path(&tmp);

        Settings::load_with_last_used_impl(
            vec!["catalog-dash".into(), "--theme".into(), "classic".into()],
            &config_path,
        );

        assert!(config_path.exists(), "config file must be persisted after run");
        let loaded = LastUsedParams::load_from(&config_path);
        assert_eq!(loaded.theme, Some("classic".to_string()));
    }
}
