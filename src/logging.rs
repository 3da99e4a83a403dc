//! Diagnostic logging.
//!
//! User-facing output goes through [`crate::cli::report`]; this only wires up
//! `tracing` for diagnostics on stderr.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `debug` for this crate with `verbose`,
/// `warn` without.
pub fn init(verbose: bool) {
    let default_level = if verbose { "locsync=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
