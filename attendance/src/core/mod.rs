//! Pure, deterministic attendance logic (no filesystem or clock access).

pub mod classify;
pub mod types;
