//! # Register State
//!
//! Shares one `CashRegister` between threads.
//!
//! ## Thread Safety
//! The register is wrapped in `Arc<Mutex<T>>` because:
//! 1. Several callers may ring up items on the same register
//! 2. Every register operation is a compound read-modify-write
//!    (`total`, `items` and the log change together)
//! 3. The whole call must run under one lock acquisition
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Register State Operations                            │
//! │                                                                         │
//! │  Caller                    RegisterState            Register Change     │
//! │  ──────                    ─────────────            ───────────────     │
//! │                                                                         │
//! │  ring up item ───────────► add_item() ────────────► items, total, log   │
//! │  change discount ────────► set_discount() ────────► discount            │
//! │  apply discount ─────────► apply_discount() ──────► total, log          │
//! │  undo ───────────────────► void_last_transaction() ► total, items, log  │
//! │  view totals ────────────► totals() ──────────────► (read only)         │
//! │                                                                         │
//! │  NOTE: All operations acquire the Mutex lock exclusively.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use till_core::{CashRegister, DiscountOutcome, Money, VoidOutcome};
use tracing::info;

use crate::config::TillConfig;
use crate::error::{RuntimeError, RuntimeResult};

/// Register totals summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTotals {
    pub discount_percent: u8,
    pub total_cents: i64,
    pub item_count: usize,
    pub transaction_count: usize,
}

impl From<&CashRegister> for RegisterTotals {
    fn from(register: &CashRegister) -> Self {
        RegisterTotals {
            discount_percent: register.discount().percent(),
            total_cents: register.total().cents(),
            item_count: register.item_count(),
            transaction_count: register.transaction_count(),
        }
    }
}

/// Thread-safe handle to a shared register.
///
/// Cloning the handle shares the same register.
#[derive(Debug, Clone, Default)]
pub struct RegisterState {
    register: Arc<Mutex<CashRegister>>,
}

impl RegisterState {
    /// Wraps an existing register.
    pub fn new(register: CashRegister) -> Self {
        RegisterState {
            register: Arc::new(Mutex::new(register)),
        }
    }

    /// Creates a fresh register with the configured initial discount.
    pub fn from_config(config: &TillConfig) -> Self {
        let register = CashRegister::with_discount(config.initial_discount);
        info!(register = %register, "Register opened");
        Self::new(register)
    }

    /// Executes a function with read access to the register.
    ///
    /// ## Usage
    /// ```rust
    /// use till_runtime::state::{RegisterState, RegisterTotals};
    ///
    /// let state = RegisterState::default();
    /// let totals = state.with_register(|register| RegisterTotals::from(register)).unwrap();
    /// assert_eq!(totals.item_count, 0);
    /// ```
    pub fn with_register<F, R>(&self, f: F) -> RuntimeResult<R>
    where
        F: FnOnce(&CashRegister) -> R,
    {
        let register = self
            .register
            .lock()
            .map_err(|_| RuntimeError::StatePoisoned)?;
        Ok(f(&register))
    }

    /// Executes a function with write access to the register.
    pub fn with_register_mut<F, R>(&self, f: F) -> RuntimeResult<R>
    where
        F: FnOnce(&mut CashRegister) -> R,
    {
        let mut register = self
            .register
            .lock()
            .map_err(|_| RuntimeError::StatePoisoned)?;
        Ok(f(&mut register))
    }

    pub fn add_item(&self, name: &str, price: Money, quantity: i64) -> RuntimeResult<()> {
        self.with_register_mut(|register| register.add_item(name, price, quantity))??;
        Ok(())
    }

    /// Decimal-priced variant of [`add_item`](RegisterState::add_item).
    pub fn add_item_decimal(&self, name: &str, price: f64, quantity: i64) -> RuntimeResult<()> {
        self.with_register_mut(|register| register.add_item_decimal(name, price, quantity))??;
        Ok(())
    }

    /// Returns `Ok(false)` when the discount was rejected.
    pub fn set_discount(&self, percent: i64) -> RuntimeResult<bool> {
        self.with_register_mut(|register| register.set_discount(percent).is_ok())
    }

    pub fn apply_discount(&self) -> RuntimeResult<DiscountOutcome> {
        self.with_register_mut(CashRegister::apply_discount)
    }

    pub fn void_last_transaction(&self) -> RuntimeResult<VoidOutcome> {
        self.with_register_mut(CashRegister::void_last_transaction)
    }

    pub fn totals(&self) -> RuntimeResult<RegisterTotals> {
        self.with_register(|register| RegisterTotals::from(register))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_from_config_applies_initial_discount() {
        let config = TillConfig {
            initial_discount: 10,
            ..TillConfig::default()
        };
        let state = RegisterState::from_config(&config);

        state.add_item("x", Money::from_cents(10_000), 1).unwrap();
        let outcome = state.apply_discount().unwrap();

        assert_eq!(
            outcome.to_string(),
            "After the discount, the total comes to $90."
        );
        assert_eq!(state.totals().unwrap().total_cents, 9_000);
    }

    #[test]
    fn test_from_config_invalid_discount_starts_at_zero() {
        let config = TillConfig {
            initial_discount: 101,
            ..TillConfig::default()
        };
        let state = RegisterState::from_config(&config);
        assert_eq!(state.totals().unwrap().discount_percent, 0);
    }

    #[test]
    fn test_invalid_item_surfaces_core_error() {
        let state = RegisterState::default();
        let err = state.add_item("", Money::from_cents(100), 1).unwrap_err();

        assert!(err.is_invalid_argument());
        assert_eq!(state.totals().unwrap().transaction_count, 0);
    }

    #[test]
    fn test_decimal_price_through_state() {
        let state = RegisterState::default();
        state.add_item_decimal("coffee", 3.5, 2).unwrap();
        assert_eq!(state.totals().unwrap().total_cents, 700);

        let err = state.add_item_decimal("tea", f64::NAN, 1).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(state.totals().unwrap().transaction_count, 1);
    }

    #[test]
    fn test_set_discount_reports_rejection() {
        let state = RegisterState::default();
        assert!(state.set_discount(25).unwrap());
        assert!(!state.set_discount(-5).unwrap());
        assert_eq!(state.totals().unwrap().discount_percent, 25);
    }

    #[test]
    fn test_void_through_state() {
        let state = RegisterState::default();
        assert_eq!(
            state.void_last_transaction().unwrap(),
            VoidOutcome::NothingToVoid
        );

        state.add_item("apple", Money::from_cents(50), 4).unwrap();
        assert!(state.void_last_transaction().unwrap().is_voided());
        assert_eq!(
            state.totals().unwrap(),
            RegisterTotals {
                discount_percent: 0,
                total_cents: 0,
                item_count: 0,
                transaction_count: 0,
            }
        );
    }

    #[test]
    fn test_concurrent_add_item() {
        let state = RegisterState::default();

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let state = state.clone();
                thread::spawn(move || {
                    let name = format!("item-{}", worker);
                    for _ in 0..50 {
                        state.add_item(&name, Money::from_cents(100), 2).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let totals = state.totals().unwrap();
        assert_eq!(totals.item_count, 8 * 50 * 2);
        assert_eq!(totals.transaction_count, 8 * 50);
        assert_eq!(totals.total_cents, 8 * 50 * 200);
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let state = RegisterState::default();
        let poisoner = state.clone();

        let _ = thread::spawn(move || {
            poisoner
                .with_register_mut(|_| panic!("cashier walked away"))
                .ok();
        })
        .join();

        assert!(matches!(state.totals(), Err(RuntimeError::StatePoisoned)));
    }

    #[test]
    fn test_totals_serialize_camel_case() {
        let state = RegisterState::default();
        state.add_item("pen", Money::from_cents(125), 2).unwrap();

        let json = serde_json::to_value(state.totals().unwrap()).unwrap();
        assert_eq!(json["totalCents"], 250);
        assert_eq!(json["itemCount"], 2);
    }
}
