//! Stable exit codes for the `attendance` CLI.

use crate::error::{AttendanceError, FileRole};

/// Run completed (alerts, if any, were delivered).
pub const OK: i32 = 0;
/// I/O failure (rename denied, log not writable) or any other error.
pub const FAILED: i32 = 1;
/// Config file missing or invalid.
pub const INVALID_CONFIG: i32 = 2;
/// Roster could not be processed (malformed row or zero total sessions).
pub const INVALID_ROSTER: i32 = 3;

/// Map an error chain to an exit code using the first domain error found.
pub fn for_error(err: &anyhow::Error) -> i32 {
    let domain = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<AttendanceError>());
    match domain {
        Some(
            AttendanceError::MissingFile {
                role: FileRole::Config,
                ..
            }
            | AttendanceError::ConfigParse { .. },
        ) => INVALID_CONFIG,
        Some(
            AttendanceError::MissingFile {
                role: FileRole::Roster,
                ..
            }
            | AttendanceError::ZeroSessions
            | AttendanceError::MalformedRow { .. },
        ) => INVALID_ROSTER,
        None => FAILED,
    }
}
