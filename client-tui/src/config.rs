//! Runtime configuration for the tic-tac-toe TUI.
//!
//! Values are layered, highest priority first: command-line flags,
//! `TICTACTOE_*` environment variables, an optional JSON config file, and
//! compile-time defaults. A missing config file is not an error; an
//! unreadable or malformed one is reported and skipped.

use crate::state::HistoryOrder;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default directory for the rolling log file.
const DEFAULT_LOG_DIR: &str = "logs";

/// Default tracing filter when `RUST_LOG` is unset.
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default status text for a drawn game.
const DEFAULT_DRAW_LABEL: &str = "Draw";

/// File name looked up under the platform config directory.
const CONFIG_FILE_NAME: &str = "config.json";

/// Colour palette preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl ThemeName {
    /// Parse a preference string. Returns `None` for unrecognized values.
    pub fn from_preference(pref: &str) -> Option<Self> {
        match pref.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_dir: PathBuf,
    pub log_level: String,
    pub theme: ThemeName,
    pub history_order: HistoryOrder,
    pub draw_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            theme: ThemeName::default(),
            history_order: HistoryOrder::default(),
            draw_label: DEFAULT_DRAW_LABEL.to_string(),
        }
    }
}

/// Contents of the JSON config file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub log_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub theme: Option<ThemeName>,
    pub descending: Option<bool>,
    pub draw_label: Option<String>,
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_path: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub theme: Option<ThemeName>,
    /// `Some` only when `--ascending` or `--descending` was given.
    pub descending: Option<bool>,
    pub draw_label: Option<String>,
}

/// A resolved config plus any problems met while loading it.
///
/// Warnings are returned rather than logged because logging is configured
/// from the result.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigError>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Ignoring {var}={value}: expected \"dark\" or \"light\"")]
    InvalidTheme { var: &'static str, value: String },
}

impl Config {
    /// Load configuration from the environment, the config file and `overrides`.
    pub fn load(overrides: &Overrides) -> LoadedConfig {
        let mut warnings = Vec::new();

        let path = overrides.config_path.clone().or_else(default_config_path);
        let file = match path {
            Some(path) => read_file_config(&path, overrides.config_path.is_some())
                .unwrap_or_else(|e| {
                    warnings.push(e);
                    FileConfig::default()
                }),
            None => FileConfig::default(),
        };

        let config = Self::layered(
            file,
            |var| std::env::var(var).ok(),
            overrides,
            &mut warnings,
        );
        LoadedConfig { config, warnings }
    }

    /// Merge the layers. `env` looks up an environment variable by name.
    pub fn layered(
        file: FileConfig,
        env: impl Fn(&str) -> Option<String>,
        overrides: &Overrides,
        warnings: &mut Vec<ConfigError>,
    ) -> Self {
        let defaults = Self::default();

        let env_theme = env("TICTACTOE_THEME").and_then(|value| {
            let theme = ThemeName::from_preference(&value);
            if theme.is_none() {
                warnings.push(ConfigError::InvalidTheme {
                    var: "TICTACTOE_THEME",
                    value,
                });
            }
            theme
        });

        let descending = overrides.descending.or(file.descending).unwrap_or(false);

        Self {
            log_dir: overrides
                .log_dir
                .clone()
                .or_else(|| env("TICTACTOE_LOG_DIR").map(PathBuf::from))
                .or(file.log_dir)
                .unwrap_or(defaults.log_dir),
            log_level: env("TICTACTOE_LOG_LEVEL")
                .or(file.log_level)
                .unwrap_or(defaults.log_level),
            theme: overrides
                .theme
                .or(env_theme)
                .or(file.theme)
                .unwrap_or(defaults.theme),
            history_order: if descending {
                HistoryOrder::Descending
            } else {
                HistoryOrder::Ascending
            },
            draw_label: overrides
                .draw_label
                .clone()
                .or_else(|| env("TICTACTOE_DRAW_LABEL"))
                .or(file.draw_label)
                .unwrap_or(defaults.draw_label),
        }
    }
}

/// `<config dir>/tictactoe/config.json`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tictactoe").join(CONFIG_FILE_NAME))
}

/// Read a config file. A missing file yields defaults unless it was
/// requested explicitly.
pub fn read_file_config(path: &Path, required: bool) -> Result<FileConfig, ConfigError> {
    if !required && !path.exists() {
        return Ok(FileConfig::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
