//! Structured logging setup

use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is unset
pub const fn default_directive(quiet: bool) -> &'static str {
    if quiet { "warn" } else { "info" }
}

/// Install a stderr `tracing` subscriber honouring `RUST_LOG`
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(quiet: bool) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet))),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
