//! Roster CSV reading (`Names`, `Email`, `Attendance Count`).

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::types::RosterRow;
use crate::error::{AttendanceError, FileRole};

/// Streaming roster reader. Rows are parsed lazily, one at a time.
pub struct Roster<R: Read> {
    reader: csv::Reader<R>,
}

impl Roster<File> {
    pub fn open(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "opening roster");
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(AttendanceError::MissingFile {
                    role: FileRole::Roster,
                    path: path.to_path_buf(),
                }
                .into());
            }
            Err(err) => return Err(err).with_context(|| format!("open {}", path.display())),
        };
        Ok(Self::from_reader(file))
    }
}

impl<R: Read> Roster<R> {
    pub fn from_reader(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Iterate rows in file order.
    ///
    /// Fields past the header (a trailing comma from a spreadsheet export)
    /// are ignored. A row with a missing column, too few fields, or a
    /// non-integer count yields [`AttendanceError::MalformedRow`].
    pub fn rows(&mut self) -> impl Iterator<Item = Result<RosterRow, AttendanceError>> + '_ {
        self.reader.deserialize::<RosterRow>().map(|result| {
            result.map_err(|source| AttendanceError::MalformedRow {
                line: source.position().map_or(0, |pos| pos.line()),
                source,
            })
        })
    }
}
