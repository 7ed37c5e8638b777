//! # till-core: Pure Register Logic
//!
//! The cash register ledger with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Till Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 till-runtime (host layer)                       │   │
//! │  │     TillConfig ──► init_tracing ──► RegisterState (Mutex)       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ till-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ register  │  │ validation│  │   │
//! │  │   │ Discount  │  │   Money   │  │ CashReg-  │  │   rules   │  │   │
//! │  │   │ Ledger    │  │  cents    │  │  ister    │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO ENVIRONMENT • DIAGNOSTICS VIA `tracing` ONLY      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`register`] - The `CashRegister` ledger
//! - [`types`] - Discount, ledger records, operation outcomes
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Argument validation
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::{CashRegister, Money};
//!
//! let mut register = CashRegister::new();
//! register.add_item("apple", Money::from_cents(99), 3).unwrap();
//! assert_eq!(register.items().len(), 3);
//!
//! register.void_last_transaction();
//! assert!(register.total().is_zero());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod register;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use register::CashRegister;
pub use types::*;
