// src/logging.rs
use tracing_subscriber::EnvFilter;

use crate::options::Verbosity;

/// Installs the stderr subscriber. `RUST_LOG` takes precedence over the CLI
/// verbosity flags.
pub fn init(verbosity: Verbosity) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialise logging: {err}"))
}
