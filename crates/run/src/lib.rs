//! Shared setup for the model binaries.

use tracing_subscriber::EnvFilter;

/// Sends diagnostics to stderr, filtered by `RUST_LOG` (default `warn`).
///
/// Reports go to stdout, so logs never interleave with them in a pipe.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
