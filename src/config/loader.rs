//! Config file discovery, parsing and layering.
//!
//! The file is TOML with an optional `[list]` table holding [`ListConfig`]
//! fields and a top-level `log_file_path`:
//!
//! ```toml
//! log_file_path = "/tmp/vlist.log"
//!
//! [list]
//! direction = "backward"   # anchor at the last item
//! gap = 1                  # blank lines between items
//! wrap_navigation = true
//! enable_mouse = true
//! scroll_step = 3
//! ```
//!
//! Keys left out of `[list]` keep their [`ListConfig::default`] value, so a
//! table with a single key only changes that key. Unknown keys at either
//! level are rejected. Layers apply as defaults, then the file, then
//! [`CliOverrides`].

use super::list::ListConfig;
use crate::view_state::types::Direction;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "VLIST_CONFIG";

/// Failure to load a config file that exists.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// File that could not be read.
        path: PathBuf,
        /// I/O error message.
        reason: String,
    },

    /// The file is not valid TOML or does not match [`ConfigFile`].
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Offending file.
        path: PathBuf,
        /// Parser message, including the line and the unexpected key.
        reason: String,
    },
}

/// Contents of a config file. Every key is optional.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// The `[list]` table. Missing keys inside it take their defaults.
    #[serde(default)]
    pub list: Option<ListConfig>,

    /// Where tracing output is written.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Settings the demo binary runs with, every layer applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Options the list is constructed with.
    pub list: ListConfig,
    /// Where tracing output is written.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            list: ListConfig::default(),
            log_file_path: default_log_path(),
        }
    }
}

/// `<state dir>/vlist/vlist.log`, or `vlist.log` in the working directory
/// on platforms without a state directory.
pub fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .map(|dir| dir.join("vlist"))
        .unwrap_or_default()
        .join("vlist.log")
}

/// `<config dir>/vlist/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vlist").join("config.toml"))
}

/// Parse the config file at `path`.
///
/// A missing file is `Ok(None)`: the defaults apply.
///
/// # Errors
///
/// [`ConfigError::ReadError`] when the file exists but cannot be read,
/// [`ConfigError::ParseError`] when its contents are rejected.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigError::ReadError {
                path,
                reason: e.to_string(),
            })
        }
    };
    toml::from_str(&contents)
        .map(Some)
        .map_err(|e| ConfigError::ParseError {
            path,
            reason: e.to_string(),
        })
}

/// Find and parse the config file.
///
/// The first source present wins:
/// 1. `config_path` (the `--config` flag)
/// 2. the [`CONFIG_ENV_VAR`] environment variable
/// 3. [`default_config_path`]
///
/// # Errors
///
/// Only when the chosen file exists and fails to load; see
/// [`load_config_file`].
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    let path = config_path
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
        .or_else(default_config_path);
    match path {
        Some(path) => load_config_file(path),
        None => Ok(None),
    }
}

/// Layer a parsed file over the defaults.
///
/// A file without a `[list]` table keeps the default list options.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();
    let Some(config) = config_file else {
        return defaults;
    };
    ResolvedConfig {
        list: config.list.unwrap_or(defaults.list),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Command-line overrides. `None` leaves the configured value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// Start in backward direction.
    pub backward: Option<bool>,
    /// Gap between items.
    pub gap: Option<usize>,
    /// Wrap-around navigation.
    pub wrap_navigation: Option<bool>,
    /// Mouse handling.
    pub enable_mouse: Option<bool>,
}

/// Apply command-line flags, the last and strongest layer.
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: &CliOverrides) -> ResolvedConfig {
    if let Some(backward) = cli.backward {
        config.list.direction = if backward {
            Direction::Backward
        } else {
            Direction::Forward
        };
    }

    if let Some(gap) = cli.gap {
        config.list.gap = gap;
    }

    if let Some(wrap) = cli.wrap_navigation {
        config.list.wrap_navigation = wrap;
    }

    if let Some(mouse) = cli.enable_mouse {
        config.list.enable_mouse = mouse;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
