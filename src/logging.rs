use std::error::Error;
use std::io;

use tracing_subscriber::{EnvFilter, fmt};

/// Logs go to stderr so stdout only carries the chart confirmations.
///
/// Fails if another global subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<(), Box<dyn Error + Send + Sync>> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
}

#[cfg(test)]
#[path = "../tests/src_inline/logging.rs"]
mod tests;
