//! I/O helpers for attendance runs.

pub mod archive;
pub mod clock;
pub mod config;
pub mod roster;
pub mod sink;
