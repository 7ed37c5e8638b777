//! # Logging
//!
//! Installs the tracing subscriber that receives the register's diagnostics.
//!
//! ## Log Levels
//! - `RUST_LOG=debug` - Show every register mutation
//! - `RUST_LOG=till_core=warn` - Only rejected/no-op operations
//! - Default: `TillConfig::log_filter`

use tracing::Subscriber;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::TillConfig;
use crate::error::{RuntimeError, RuntimeResult};

/// Parses filter directives, mapping parse failures to `RuntimeError::Logging`.
pub fn build_filter(directives: &str) -> RuntimeResult<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| RuntimeError::Logging(e.to_string()))
}

/// Builds the `fmt` subscriber. The filter alone decides what is recorded.
pub fn subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt().with_env_filter(filter).finish()
}

/// Initializes the global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter. Returns
/// `Ok(false)` when a global subscriber was already installed, so calling
/// this more than once is harmless.
pub fn init_tracing(config: &TillConfig) -> RuntimeResult<bool> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(&config.log_filter)?,
    };

    Ok(subscriber(filter).try_init().is_ok())
}
