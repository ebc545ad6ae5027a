//! Diagnostic tracing
//!
//! Game output goes to stdout through the player I/O; diagnostics go to stderr
//! so the two never interleave on the same stream.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset or unparsable.
///
/// # Example
/// ```bash
/// RUST_LOG=hangman=debug hangman
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
