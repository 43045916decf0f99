//! Test-only helpers: a controllable clock and on-disk run fixtures.

use std::cell::Cell;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use tempfile::TempDir;

use crate::core::types::{RosterRow, Thresholds};
use crate::io::clock::Clock;
use crate::report::RunPaths;

/// Clock pinned to a fixed instant until advanced explicitly.
#[derive(Debug)]
pub struct FixedClock {
    now: Cell<NaiveDateTime>,
}

impl FixedClock {
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        let now = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, min, sec))
            .expect("valid fixed clock instant");
        Self {
            now: Cell::new(now),
        }
    }

    pub fn advance_secs(&self, secs: i64) {
        self.now.set(self.now.get() + TimeDelta::seconds(secs));
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}

pub fn thresholds(failure: f64, warning: f64) -> Thresholds {
    Thresholds { failure, warning }
}

pub fn roster_row(name: &str, email: &str, attended_sessions: u32) -> RosterRow {
    RosterRow {
        name: name.to_string(),
        email: email.to_string(),
        attended_sessions,
    }
}

/// JSON config document in the historical `Helpers/config.json` shape.
pub fn config_json(total_sessions: u32, failure: f64, warning: f64, run_mode: &str) -> String {
    format!(
        "{{\n  \"total_sessions\": {total_sessions},\n  \"thresholds\": {{ \"failure\": {failure}, \"warning\": {warning} }},\n  \"run_mode\": \"{run_mode}\"\n}}\n"
    )
}

/// Roster CSV with the standard header and one line per `(name, email, count)`.
pub fn roster_csv(rows: &[(&str, &str, &str)]) -> String {
    let mut csv = String::from("Names,Email,Attendance Count\n");
    for (name, email, count) in rows {
        csv.push_str(&format!("{name},{email},{count}\n"));
    }
    csv
}

/// Temporary directory laid out like a working directory for the CLI
/// (`Helpers/config.json`, `Helpers/assets.csv`, `reports/`).
pub struct TestWorkspace {
    temp: TempDir,
    pub paths: RunPaths,
}

impl TestWorkspace {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create tempdir")?;
        let paths = RunPaths::under(temp.path());
        fs::create_dir_all(temp.path().join("Helpers")).context("create Helpers")?;
        fs::create_dir_all(temp.path().join("reports")).context("create reports")?;
        Ok(Self { temp, paths })
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn write_config(&self, contents: &str) -> Result<()> {
        fs::write(&self.paths.config, contents)
            .with_context(|| format!("write {}", self.paths.config.display()))
    }

    pub fn write_roster(&self, contents: &str) -> Result<()> {
        fs::write(&self.paths.roster, contents)
            .with_context(|| format!("write {}", self.paths.roster.display()))
    }

    pub fn read_log(&self) -> Result<String> {
        fs::read_to_string(&self.paths.log)
            .with_context(|| format!("read {}", self.paths.log.display()))
    }
}
