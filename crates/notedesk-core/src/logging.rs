//! Structured JSON logging to stderr.
//!
//! Events follow the `<layer>.<noun>.<verb>_<phase>` naming used across the
//! workspace, e.g. `core.mutation.delete_started`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Initialize the global tracing subscriber.
///
/// In quiet mode every level is filtered out so stdout/stderr stay clean
/// for user-facing output. Otherwise `RUST_LOG` is honored, defaulting to
/// `info`. Calling this twice is harmless; the second call is ignored.
pub fn init_logging(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_current_span(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
