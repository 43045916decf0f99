//! Orchestration for one attendance check.
//!
//! Config Loader → Archiver → Report Generator. Any failure aborts the run;
//! lines already written to the report log stay there.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

use crate::core::classify::attendance_percentage;
use crate::core::types::{Alert, ReportSummary, Severity};
use crate::io::archive::{archive_previous, prune_archives};
use crate::io::clock::{Clock, report_stamp};
use crate::io::config::{Config, load_config};
use crate::io::roster::Roster;
use crate::io::sink::sink_for;

pub const DEFAULT_CONFIG_PATH: &str = "Helpers/config.json";
pub const DEFAULT_ROSTER_PATH: &str = "Helpers/assets.csv";
pub const DEFAULT_LOG_PATH: &str = "reports/reports.log";

/// Files touched by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPaths {
    pub config: PathBuf,
    pub roster: PathBuf,
    pub log: PathBuf,
}

impl RunPaths {
    /// Default layout rooted at `root`.
    pub fn under(root: &Path) -> Self {
        Self {
            config: root.join(DEFAULT_CONFIG_PATH),
            roster: root.join(DEFAULT_ROSTER_PATH),
            log: root.join(DEFAULT_LOG_PATH),
        }
    }
}

/// Result of a completed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Where the previous log went, if there was one.
    pub archived: Option<PathBuf>,
    /// Archives deleted by retention.
    pub pruned: Vec<PathBuf>,
    pub summary: ReportSummary,
}

/// Run a full check: load config, rotate the previous log, write the report.
#[instrument(skip_all, fields(config = %paths.config.display(), log = %paths.log.display()))]
pub fn run_check(
    paths: &RunPaths,
    clock: &dyn Clock,
    console: &mut dyn Write,
) -> Result<RunOutcome> {
    info!("attendance check started");

    let config = load_config(&paths.config)?;

    let archived = archive_previous(&paths.log, clock.now())?;
    let pruned = match config.archive.keep {
        Some(keep) => prune_archives(&paths.log, keep)?,
        None => Vec::new(),
    };

    let summary = generate_report(&config, &paths.roster, &paths.log, clock, console)
        .context("generate report")?;

    info!(
        rows = summary.rows,
        urgent = summary.urgent,
        warning = summary.warning,
        "attendance check complete"
    );
    Ok(RunOutcome {
        archived,
        pruned,
        summary,
    })
}

/// Open the roster and the report log, then write the report.
pub fn generate_report(
    config: &Config,
    roster_path: &Path,
    log_path: &Path,
    clock: &dyn Clock,
    console: &mut dyn Write,
) -> Result<ReportSummary> {
    let roster = Roster::open(roster_path)?;

    if let Some(parent) = log_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("open {}", log_path.display()))?;
    let mut log = BufWriter::new(file);

    let summary = write_report(config, roster, &mut log, clock, console)?;
    log.flush()
        .with_context(|| format!("flush {}", log_path.display()))?;
    debug!(log = %log_path.display(), "report written");
    Ok(summary)
}

/// Write the header and one alert per qualifying row.
///
/// The header always goes to `log`; alerts go wherever the run mode's sink
/// sends them.
pub fn write_report<R: Read>(
    config: &Config,
    mut roster: Roster<R>,
    log: &mut dyn Write,
    clock: &dyn Clock,
    console: &mut dyn Write,
) -> Result<ReportSummary> {
    writeln!(
        log,
        "--- Attendance Report: {} ---",
        report_stamp(clock.now())
    )
    .context("write report header")?;

    let mut sink = sink_for(config.run_mode, log, console);
    let mut summary = ReportSummary::default();
    for row in roster.rows() {
        let row = row?;
        let pct = attendance_percentage(row.attended_sessions, config.total_sessions)?;
        let alert = Alert::for_row(&row, pct, &config.thresholds);
        let severity = alert.as_ref().map_or(Severity::None, |alert| alert.severity);
        debug!(name = %row.name, pct, severity = ?severity, "row classified");
        summary.record(severity);
        if let Some(alert) = alert {
            sink.deliver(&alert, clock.now())?;
        }
    }
    Ok(summary)
}
