//! Logging setup
use tracing_subscriber::EnvFilter;

use crate::config;

/// Install a `tracing` subscriber printing to stderr.
///
/// The default level comes from [`Config::log_level`](crate::config::Config::log_level),
/// `RUST_LOG` takes precedence. Calling this more than once is harmless.
pub fn init() {
    let filter = EnvFilter::builder()
        .with_default_directive(config::config().log_level.into())
        .from_env_lossy();

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_err()
    {
        debug!("logger already initialized");
    }
}
