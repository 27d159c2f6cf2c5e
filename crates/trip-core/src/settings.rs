use clap::{CommandFactory, Parser};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, TripError};
use crate::models::TimestampLayout;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Busiest-zone reports from delimited trip record files
#[derive(Parser, Debug, Clone)]
#[command(
    name = "trip-report",
    about = "Busiest-zone reports from delimited trip record files",
    version
)]
pub struct Settings {
    /// Trip record file, or a directory scanned recursively for .csv files
    pub input: Option<PathBuf>,

    /// Number of zones in the top-zones report
    #[arg(long, default_value = "10")]
    pub top_zones: usize,

    /// Number of (zone, hour) slots in the busy-slots report
    #[arg(long, default_value = "10")]
    pub top_slots: usize,

    /// Timestamp dialect of the pickup-time field
    #[arg(long, default_value = "datetime", value_parser = ["datetime", "time-of-day"])]
    pub layout: String,

    /// Output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Clear saved configuration
    #[arg(long)]
    pub clear: bool,
}

// ── LastUsedParams ─────────────────────────────────────────────────────────────

/// Persisted last-used parameters saved to `~/.trip-report/last_used.json`.
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct LastUsedParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_zones: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_slots: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl LastUsedParams {
    /// Return the default path to the persisted config file.
    /// Uses `~/.trip-report/last_used.json`.
    pub fn config_path() -> PathBuf {
        Self::config_path_in(&dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
    }

    /// Return the config path rooted at `base_dir` (used for testing).
    pub fn config_path_in(base_dir: &std::path::Path) -> PathBuf {
        base_dir.join(".trip-report").join("last_used.json")
    }

    /// Load persisted params from the default path.
    /// Returns `Default` when the file is absent or cannot be parsed.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load persisted params from an explicit path.
    pub fn load_from(path: &std::path::Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Atomically write params to the default path, creating parent
    /// directories if needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Atomically write params to an explicit path.
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;

        // Write to a temp file then rename for atomicity.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, &json)?;
        std::fs::rename(&tmp, path)?;

        Ok(())
    }

    /// Delete the default config file if it exists.
    pub fn clear() -> Result<()> {
        Self::clear_at(&Self::config_path())
    }

    /// Delete the config file at an explicit path if it exists.
    pub fn clear_at(path: &std::path::Path) -> Result<()> {
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse CLI arguments, merge with last-used params where no explicit CLI
    /// value was provided, and persist the result.
    pub fn load_with_last_used() -> Self {
        Self::load_with_last_used_impl(
            std::env::args_os().collect(),
            &LastUsedParams::config_path(),
        )
    }

    /// Same as [`Settings::load_with_last_used`] but accepts an explicit
    /// argument list, enabling unit-testing without spawning subprocesses.
    pub fn load_with_last_used_from_args(args: Vec<std::ffi::OsString>) -> Self {
        Self::load_with_last_used_impl(args, &LastUsedParams::config_path())
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
            return settings;
        }

        let last = LastUsedParams::load_from(config_path);

        // Merge last-used values for fields that were NOT explicitly set on
        // the command line (CLI always wins). The input path is never loaded
        // from last-used.
        if !is_arg_explicitly_set(&matches, "layout") {
            if let Some(v) = last.layout {
                settings.layout = v;
            }
        }
        if !is_arg_explicitly_set(&matches, "top_zones") {
            if let Some(v) = last.top_zones {
                settings.top_zones = v;
            }
        }
        if !is_arg_explicitly_set(&matches, "top_slots") {
            if let Some(v) = last.top_slots {
                settings.top_slots = v;
            }
        }
        if !is_arg_explicitly_set(&matches, "format") {
            if let Some(v) = last.format {
                settings.format = v;
            }
        }
        if !is_arg_explicitly_set(&matches, "log_level") {
            if let Some(v) = last.log_level {
                settings.log_level = v;
            }
        }

        // Persist the merged result for the next run.
        let params = LastUsedParams {
            layout: Some(settings.layout.clone()),
            top_zones: Some(settings.top_zones),
            top_slots: Some(settings.top_slots),
            format: Some(settings.format.clone()),
            log_level: Some(settings.log_level.clone()),
        };
        let _ = params.save_to(config_path);

        settings
    }

    /// Resolve the configured layout string to a [`TimestampLayout`].
    pub fn timestamp_layout(&self) -> Result<TimestampLayout> {
        TimestampLayout::from_name(&self.layout)
            .ok_or_else(|| TripError::Config(format!("unknown timestamp layout: {}", self.layout)))
    }
}

/// `true` when the user supplied `id` on the command line (rather than it
/// coming from a default).
fn is_arg_explicitly_set(matches: &clap::ArgMatches, id: &str) -> bool {
    matches.value_source(id) == Some(clap::parser::ValueSource::CommandLine)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
