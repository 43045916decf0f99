//! Diagnostics for attendance runs, on stderr.
//!
//! What a run produces for people (the report log, `Alert logged for ...`
//! confirmations, `[DRY RUN]` lines, the summary) is written by `io::sink` and
//! `main` to stdout and the log file. Tracing events only describe what the
//! pipeline did (config loaded, log archived, rows classified) and are off
//! below `warn` unless `RUST_LOG` asks for them.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber. Call once, first thing in `main`.
///
/// `RUST_LOG=attendance=debug attendance check` shows per-row classification.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .compact(),
        )
        .init();
}
