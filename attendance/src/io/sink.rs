//! Alert delivery, one sink per run mode.
//!
//! - [`LogSink`] (live): appends the alert to the report log and prints a
//!   short confirmation.
//! - [`ConsoleSink`] (dry run): prints the alert with a `[DRY RUN]` prefix and
//!   never touches the log.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;

use crate::core::types::{Alert, RunMode};
use crate::io::clock::report_stamp;

pub trait AlertSink {
    fn deliver(&mut self, alert: &Alert, at: NaiveDateTime) -> Result<()>;
}

pub struct LogSink<'a> {
    log: &'a mut dyn Write,
    console: &'a mut dyn Write,
}

impl<'a> LogSink<'a> {
    pub fn new(log: &'a mut dyn Write, console: &'a mut dyn Write) -> Self {
        Self { log, console }
    }
}

impl AlertSink for LogSink<'_> {
    fn deliver(&mut self, alert: &Alert, at: NaiveDateTime) -> Result<()> {
        writeln!(
            self.log,
            "[{}] ALERT TO {}: {}",
            report_stamp(at),
            alert.recipient_email,
            alert.message
        )
        .context("write alert to report log")?;
        writeln!(self.console, "Alert logged for {}", alert.name).context("write console")?;
        Ok(())
    }
}

pub struct ConsoleSink<'a> {
    console: &'a mut dyn Write,
}

impl<'a> ConsoleSink<'a> {
    pub fn new(console: &'a mut dyn Write) -> Self {
        Self { console }
    }
}

impl AlertSink for ConsoleSink<'_> {
    fn deliver(&mut self, alert: &Alert, _at: NaiveDateTime) -> Result<()> {
        writeln!(
            self.console,
            "[DRY RUN] Email to {}: {}",
            alert.recipient_email, alert.message
        )
        .context("write console")?;
        Ok(())
    }
}

/// Pick the sink for `mode`. Called once per run.
pub fn sink_for<'a>(
    mode: RunMode,
    log: &'a mut dyn Write,
    console: &'a mut dyn Write,
) -> Box<dyn AlertSink + 'a> {
    match mode {
        RunMode::Live => Box::new(LogSink::new(log, console)),
        RunMode::DryRun => Box::new(ConsoleSink::new(console)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Severity;
    use crate::io::clock::Clock;
    use crate::test_support::FixedClock;

    fn urgent_alert() -> Alert {
        Alert {
            recipient_email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
            message: "URGENT: Ada, your attendance is 45.0%. You will fail.".to_string(),
            severity: Severity::Urgent,
        }
    }

    #[test]
    fn live_sink_writes_log_line_and_confirmation() {
        let clock = FixedClock::at(2026, 10, 19, 9, 0, 0);
        let mut log = Vec::new();
        let mut console = Vec::new();
        {
            let mut sink = sink_for(RunMode::Live, &mut log, &mut console);
            sink.deliver(&urgent_alert(), clock.now()).expect("deliver");
        }
        assert_eq!(
            String::from_utf8(log).expect("utf8"),
            "[2026-10-19 09:00:00.000000] ALERT TO ada@example.com: \
             URGENT: Ada, your attendance is 45.0%. You will fail.\n"
        );
        assert_eq!(
            String::from_utf8(console).expect("utf8"),
            "Alert logged for Ada\n"
        );
    }

    #[test]
    fn dry_run_sink_prints_and_leaves_log_untouched() {
        let clock = FixedClock::at(2026, 10, 19, 9, 0, 0);
        let mut log = Vec::new();
        let mut console = Vec::new();
        {
            let mut sink = sink_for(RunMode::DryRun, &mut log, &mut console);
            sink.deliver(&urgent_alert(), clock.now()).expect("deliver");
        }
        assert!(log.is_empty());
        assert_eq!(
            String::from_utf8(console).expect("utf8"),
            "[DRY RUN] Email to ada@example.com: \
             URGENT: Ada, your attendance is 45.0%. You will fail.\n"
        );
    }
}
