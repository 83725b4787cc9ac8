//! Structured logging setup for callers embedding the parser.
//!
//! The parser itself only emits `tracing` events; this module wires a
//! subscriber for binaries and tests that want to see them.

use crate::{Error, Result};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a stderr subscriber filtered at `log_level` for this crate.
///
/// `RUST_LOG` takes precedence when set. Fails if a global subscriber is
/// already installed.
pub fn init_logging(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("moon_report_parser={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| Error::logging(e.to_string()))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
