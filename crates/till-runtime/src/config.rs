//! # Configuration
//!
//! Register configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TILL_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable holding the initial discount percentage.
pub const DISCOUNT_VAR: &str = "TILL_DISCOUNT";

/// Environment variable holding the default log filter directives.
pub const LOG_VAR: &str = "TILL_LOG";

/// Host configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TillConfig {
    /// Discount the register starts with.
    ///
    /// Kept raw: the register validates it, so an out-of-range value behaves
    /// like any other rejected discount.
    pub initial_discount: i64,

    /// `EnvFilter` directives used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for TillConfig {
    fn default() -> Self {
        TillConfig {
            initial_discount: 0,
            log_filter: "info,till_core=debug".to_string(),
        }
    }
}

impl TillConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TILL_DISCOUNT`: initial discount percentage (e.g. `"10"`)
    /// - `TILL_LOG`: log filter directives
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = TillConfig::default();

        if let Some(raw) = lookup(DISCOUNT_VAR) {
            config.initial_discount = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(DISCOUNT_VAR.to_string()))?;
        }

        if let Some(filter) = lookup(LOG_VAR) {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }

        Ok(config)
    }
}
