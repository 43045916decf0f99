//! Attendance alert checker.
//!
//! Reads a roster of attendance counts, computes each student's attendance
//! percentage against the configured session total, and emits alerts for
//! students below the warning or failure threshold. The architecture keeps a
//! strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (percentages, classification,
//!   alert text). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config and roster reads, log
//!   archiving, alert sinks, wall clock).
//!
//! [`report`] coordinates core logic with I/O to implement a full run.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
