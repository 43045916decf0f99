//! Domain error taxonomy.
//!
//! Everything else (rename denied, unwritable log) travels as a plain
//! `anyhow::Error` with path context.

use std::path::PathBuf;

use thiserror::Error;

/// Which input a missing file was supposed to provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    Config,
    Roster,
}

impl std::fmt::Display for FileRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileRole::Config => f.write_str("config"),
            FileRole::Roster => f.write_str("roster"),
        }
    }
}

#[derive(Debug, Error)]
pub enum AttendanceError {
    #[error("{role} file not found: {}", .path.display())]
    MissingFile { role: FileRole, path: PathBuf },

    #[error("parse config {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("total_sessions is 0; attendance percentage is undefined")]
    ZeroSessions,

    #[error("malformed roster row at line {line}")]
    MalformedRow {
        line: u64,
        #[source]
        source: csv::Error,
    },
}
