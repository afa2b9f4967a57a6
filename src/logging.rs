//! @acp:module "Logging"
//! @acp:summary "Tracing subscriber setup for embedding binaries"
//! @acp:domain config
//! @acp:layer infrastructure
//!
//! The library only emits `tracing` events. Binaries and tests that embed it
//! call [`init`] once to get them printed to stderr.

use tracing_subscriber::EnvFilter;

/// Install a stderr fmt subscriber
///
/// `RUST_LOG` takes precedence; otherwise the level is `debug` when `verbose`
/// and `warn` when not. Returns false if a global subscriber was already set.
pub fn init(verbose: bool) -> bool {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
