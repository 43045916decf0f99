//! Attendance percentage and severity classification.

use crate::core::types::{Alert, RosterRow, Severity, Thresholds};
use crate::error::AttendanceError;

/// `attended / total * 100`.
///
/// Errors with [`AttendanceError::ZeroSessions`] when `total` is 0.
pub fn attendance_percentage(attended: u32, total: u32) -> Result<f64, AttendanceError> {
    if total == 0 {
        return Err(AttendanceError::ZeroSessions);
    }
    Ok(f64::from(attended) / f64::from(total) * 100.0)
}

/// Classify a percentage against the thresholds.
///
/// Comparisons are strict: a percentage equal to a threshold falls into the
/// less severe category.
pub fn classify(pct: f64, thresholds: &Thresholds) -> Severity {
    if pct < thresholds.failure {
        Severity::Urgent
    } else if pct < thresholds.warning {
        Severity::Warning
    } else {
        Severity::None
    }
}

/// Alert text for a student, or `None` when no alert is due.
pub fn alert_message(name: &str, pct: f64, severity: Severity) -> Option<String> {
    match severity {
        Severity::Urgent => Some(format!(
            "URGENT: {name}, your attendance is {pct:.1}%. You will fail."
        )),
        Severity::Warning => Some(format!(
            "WARNING: {name}, your attendance is {pct:.1}%. Please be careful."
        )),
        Severity::None => None,
    }
}

impl Alert {
    /// Build the alert for `row`, if its percentage crosses a threshold.
    pub fn for_row(row: &RosterRow, pct: f64, thresholds: &Thresholds) -> Option<Alert> {
        let severity = classify(pct, thresholds);
        let message = alert_message(&row.name, pct, severity)?;
        Some(Alert {
            recipient_email: row.email.clone(),
            name: row.name.clone(),
            message,
            severity,
        })
    }
}
