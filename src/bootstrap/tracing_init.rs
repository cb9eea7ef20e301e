//! Tracing initialization utilities.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a stderr tracing subscriber with the given default filter.
///
/// `RUST_LOG` overrides `default_filter` when set. Returns `false` if a global
/// subscriber was already installed, in which case nothing changes.
///
/// # Example
///
/// ```rust
/// use agent_config::init_tracing;
///
/// // Debug output for the store, info for everything else
/// init_tracing("agent_config=debug,info");
/// ```
pub fn init_tracing(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .is_ok()
}
