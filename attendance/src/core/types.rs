use serde::Deserialize;

/// Percentage boundaries used to classify attendance.
///
/// `failure < warning` is assumed but not checked.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct Thresholds {
    pub failure: f64,
    pub warning: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Urgent,
    Warning,
    None,
}

/// Where alerts go for this run.
///
/// Parsed from the config's `run_mode` string: `"live"` is [`RunMode::Live`],
/// any other value is [`RunMode::DryRun`].
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(from = "String")]
pub enum RunMode {
    Live,
    DryRun,
}

impl From<String> for RunMode {
    fn from(value: String) -> Self {
        if value == "live" {
            RunMode::Live
        } else {
            RunMode::DryRun
        }
    }
}

/// One line of the roster CSV.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RosterRow {
    #[serde(rename = "Names")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Attendance Count")]
    pub attended_sessions: u32,
}

/// Alert derived from a single roster row.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub recipient_email: String,
    pub name: String,
    pub message: String,
    pub severity: Severity,
}

/// Counts reported back to the caller after a report run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub rows: usize,
    pub urgent: usize,
    pub warning: usize,
}

impl ReportSummary {
    pub fn record(&mut self, severity: Severity) {
        self.rows += 1;
        match severity {
            Severity::Urgent => self.urgent += 1,
            Severity::Warning => self.warning += 1,
            Severity::None => {}
        }
    }
}
