//! # till-runtime
//!
//! Host layer for the Till cash register.
//!
//! ## Module Organization
//! ```text
//! till_runtime/
//! ├── lib.rs          ◄─── You are here (startup helper)
//! ├── config.rs       ◄─── TillConfig from TILL_* environment variables
//! ├── logging.rs      ◄─── tracing-subscriber setup
//! ├── state.rs        ◄─── Arc<Mutex<CashRegister>> shared handle
//! └── error.rs        ◄─── RuntimeError
//! ```
//!
//! ## Startup Sequence
//! ```text
//! 1. Load TillConfig ──► 2. Initialize Logging ──► 3. Open RegisterState
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod state;

pub use config::TillConfig;
pub use error::{ConfigError, RuntimeError, RuntimeResult};
pub use state::{RegisterState, RegisterTotals};

/// Loads configuration from the environment, installs logging and opens a
/// shared register.
pub fn start() -> RuntimeResult<RegisterState> {
    let config = TillConfig::from_env()?;
    start_with(&config)
}

/// Same as [`start`] with an explicit configuration.
pub fn start_with(config: &TillConfig) -> RuntimeResult<RegisterState> {
    logging::init_tracing(config)?;
    Ok(RegisterState::from_config(config))
}
