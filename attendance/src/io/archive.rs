//! Rotation of the previous report log.
//!
//! `reports/reports.log` becomes `reports/reports_<YYYYMMDD_HHMMSS>.log.archive`.
//! Two rotations in the same second target the same name and the later one
//! replaces the earlier archive.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use tracing::{debug, info};

/// Timestamp format embedded in archive names.
pub const ARCHIVE_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const ARCHIVE_SUFFIX: &str = "archive";

/// Stem and extension of the live log, used to build and match archive names.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LogName {
    stem: String,
    ext: Option<String>,
}

impl LogName {
    fn from_path(log_path: &Path) -> Result<Self> {
        let stem = log_path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .with_context(|| format!("log path has no file name {}", log_path.display()))?;
        let ext = log_path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_string);
        Ok(Self {
            stem: stem.to_string(),
            ext,
        })
    }

    fn archive_file_name(&self, stamp: &str) -> String {
        match &self.ext {
            Some(ext) => format!("{}_{}.{}.{}", self.stem, stamp, ext, ARCHIVE_SUFFIX),
            None => format!("{}_{}.{}", self.stem, stamp, ARCHIVE_SUFFIX),
        }
    }

    /// Extract the timestamp portion if `file_name` is an archive of this log.
    fn archive_stamp<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        let rest = file_name.strip_prefix(self.stem.as_str())?.strip_prefix('_')?;
        let tail = match &self.ext {
            Some(ext) => format!(".{}.{}", ext, ARCHIVE_SUFFIX),
            None => format!(".{}", ARCHIVE_SUFFIX),
        };
        let stamp = rest.strip_suffix(tail.as_str())?;
        NaiveDateTime::parse_from_str(stamp, ARCHIVE_STAMP_FORMAT).ok()?;
        Some(stamp)
    }
}

fn log_dir(log_path: &Path) -> &Path {
    match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Archive path for `log_path` rotated at `at`, in the same directory.
pub fn archive_path(log_path: &Path, at: NaiveDateTime) -> Result<PathBuf> {
    let name = LogName::from_path(log_path)?;
    let stamp = at.format(ARCHIVE_STAMP_FORMAT).to_string();
    Ok(log_dir(log_path).join(name.archive_file_name(&stamp)))
}

/// Rename an existing log out of the way.
///
/// Returns the archive path, or `None` if there was no log to rotate.
pub fn archive_previous(log_path: &Path, at: NaiveDateTime) -> Result<Option<PathBuf>> {
    if !log_path.exists() {
        debug!(log = %log_path.display(), "no previous log to archive");
        return Ok(None);
    }
    let target = archive_path(log_path, at)?;
    fs::rename(log_path, &target)
        .with_context(|| format!("archive {} to {}", log_path.display(), target.display()))?;
    info!(archive = %target.display(), "previous log archived");
    Ok(Some(target))
}

/// Archives of `log_path`, oldest first.
pub fn list_archives(log_path: &Path) -> Result<Vec<PathBuf>> {
    let name = LogName::from_path(log_path)?;
    let dir = log_dir(log_path);
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut found = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))? {
        let entry = entry.context("read entry")?;
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };
        if let Some(stamp) = name.archive_stamp(file_name) {
            found.push((stamp.to_string(), entry.path()));
        }
    }
    found.sort();
    Ok(found.into_iter().map(|(_, path)| path).collect())
}

/// Delete the oldest archives so at most `keep` remain.
///
/// Returns the removed paths, oldest first.
pub fn prune_archives(log_path: &Path, keep: usize) -> Result<Vec<PathBuf>> {
    let archives = list_archives(log_path)?;
    let excess = archives.len().saturating_sub(keep);
    let mut removed = Vec::with_capacity(excess);
    for path in archives.into_iter().take(excess) {
        fs::remove_file(&path).with_context(|| format!("remove {}", path.display()))?;
        debug!(archive = %path.display(), "pruned archive");
        removed.push(path);
    }
    if !removed.is_empty() {
        info!(removed = removed.len(), keep, "archives pruned");
    }
    Ok(removed)
}
