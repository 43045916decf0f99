//! Wall-clock access, injectable for tests.

use chrono::{Local, NaiveDateTime};

/// Source of the local time used for report headers, alert lines, and
/// archive names.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Format used in the report header and alert lines.
pub const REPORT_STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

pub fn report_stamp(at: NaiveDateTime) -> String {
    at.format(REPORT_STAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FixedClock;

    #[test]
    fn report_stamp_has_microseconds() {
        let clock = FixedClock::at(2026, 10, 19, 8, 5, 3);
        assert_eq!(report_stamp(clock.now()), "2026-10-19 08:05:03.000000");
    }
}
