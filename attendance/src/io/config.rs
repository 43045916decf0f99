//! Attendance configuration (`Helpers/config.json` by default).

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::core::types::{RunMode, Thresholds};
use crate::error::{AttendanceError, FileRole};

/// Settings for one run.
///
/// All keys except `archive` are required; a missing key fails the load
/// before any roster row is read.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// Number of sessions held so far; the denominator of every percentage.
    pub total_sessions: u32,

    pub thresholds: Thresholds,

    /// `"live"` writes alerts to the report log; anything else is a dry run.
    pub run_mode: RunMode,

    #[serde(default)]
    pub archive: ArchiveConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ArchiveConfig {
    /// Keep at most this many archived logs. Unset keeps all of them.
    pub keep: Option<usize>,
}

/// Document format, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Json,
        }
    }
}

type ParseError = Box<dyn std::error::Error + Send + Sync>;

/// Parse a config document.
pub fn parse_config(contents: &str, format: ConfigFormat) -> Result<Config, ParseError> {
    let cfg = match format {
        ConfigFormat::Json => serde_json::from_str(contents)?,
        ConfigFormat::Toml => toml::from_str(contents)?,
    };
    Ok(cfg)
}

/// Load config from disk.
///
/// A missing file is [`AttendanceError::MissingFile`]; unreadable syntax or a
/// missing key is [`AttendanceError::ConfigParse`].
pub fn load_config(path: &Path) -> Result<Config> {
    debug!(path = %path.display(), "loading config");
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(AttendanceError::MissingFile {
                role: FileRole::Config,
                path: path.to_path_buf(),
            }
            .into());
        }
        Err(err) => return Err(err).with_context(|| format!("read {}", path.display())),
    };
    let cfg = parse_config(&contents, ConfigFormat::from_path(path)).map_err(|source| {
        AttendanceError::ConfigParse {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!(
        total_sessions = cfg.total_sessions,
        failure = cfg.thresholds.failure,
        warning = cfg.thresholds.warning,
        run_mode = ?cfg.run_mode,
        "config loaded"
    );
    Ok(cfg)
}
