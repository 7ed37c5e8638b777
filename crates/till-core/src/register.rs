//! # Cash Register
//!
//! The in-memory ledger: line items, a percentage discount, and a
//! single-step undo log.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Register Operations                                  │
//! │                                                                         │
//! │  Operation                 State Change                Log              │
//! │  ─────────                 ────────────                ───              │
//! │                                                                         │
//! │  set_discount(n) ────────► discount = n                (none)           │
//! │                                                                         │
//! │  add_item(x, p, q) ──────► total += p×q                push Item        │
//! │                            items += [x; q]                              │
//! │                                                                         │
//! │  apply_discount() ───────► total -= total×d%           push Discount    │
//! │                                                                         │
//! │  void_last_transaction() ► reverse top entry           pop              │
//! │                                                                         │
//! │  NOTE: voiding is strictly LIFO. The log is the only undo source.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use till_core::{CashRegister, Money};
//!
//! let mut register = CashRegister::with_discount(10);
//! register.add_item("x", Money::from_cents(10000), 1).unwrap();
//!
//! let outcome = register.apply_discount();
//! assert_eq!(outcome.to_string(), "After the discount, the total comes to $90.");
//!
//! register.void_last_transaction();
//! assert_eq!(register.total().cents(), 10000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Discount, DiscountOutcome, LedgerEntry, Transaction, VoidOutcome};
use crate::validation::{validate_item_name, validate_price, validate_quantity};

/// A point-of-sale ledger.
///
/// ## Invariants
/// - `discount` is within `0..=100`
/// - `total` is a whole number of cents and never negative
/// - `items.len()` equals the summed quantity of item entries in the log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashRegister {
    discount: Discount,
    total: Money,
    items: Vec<String>,
    transactions: Vec<LedgerEntry>,
}

impl CashRegister {
    /// Creates an empty register with no discount.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty register with an initial discount.
    ///
    /// The value goes through the same check as [`set_discount`]; an invalid
    /// one is reported and the register starts at 0%.
    ///
    /// [`set_discount`]: CashRegister::set_discount
    pub fn with_discount(percent: i64) -> Self {
        let mut register = Self::new();
        let _ = register.set_discount(percent);
        register
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn discount(&self) -> Discount {
        self.discount
    }

    pub fn total(&self) -> Money {
        self.total
    }

    /// One entry per unit purchased, in the order they were rung up.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Oldest first; the last entry is the next one to be voided.
    pub fn transactions(&self) -> &[LedgerEntry] {
        &self.transactions
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Replaces the discount percentage.
    ///
    /// Values outside `0..=100` are refused: the current discount is kept, a
    /// `Not valid discount` warning is emitted and the error is returned for
    /// callers that care. Nothing else about the register changes either way.
    pub fn set_discount(&mut self, percent: i64) -> Result<(), ValidationError> {
        match Discount::new(percent) {
            Ok(discount) => {
                debug!(discount = %discount, "Discount set");
                self.discount = discount;
                Ok(())
            }
            Err(err) => {
                warn!(value = percent, current = %self.discount, "{}", err);
                Err(err)
            }
        }
    }

    /// Rings up `quantity` units of `name` at `price` each.
    ///
    /// ## Errors
    /// `CoreError::InvalidArgument` naming `item`, `price` or `quantity`.
    /// A price whose line total would not fit the register total is reported
    /// as an out-of-range `price`. The register is untouched on error.
    pub fn add_item(&mut self, name: &str, price: Money, quantity: i64) -> CoreResult<()> {
        validate_item_name(name)?;
        validate_price(price)?;
        validate_quantity(quantity)?;

        let (line_total, total) = price
            .checked_mul(quantity)
            .and_then(|line_total| Some((line_total, self.total.checked_add(line_total)?)))
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: (i64::MAX - self.total.cents()) / quantity,
            })?;

        self.total = total;
        self.items
            .extend(std::iter::repeat(name.to_string()).take(quantity as usize));

        debug!(item = %name, price = %price, quantity, line_total = %line_total, "Item added");
        self.transactions.push(LedgerEntry::new(Transaction::Item {
            amount: line_total,
            item: name.to_string(),
            price,
            quantity,
        }));

        Ok(())
    }

    /// Rings up a single unit.
    pub fn add_single(&mut self, name: &str, price: Money) -> CoreResult<()> {
        self.add_item(name, price, 1)
    }

    /// Rings up an item priced as a decimal amount (`4.99`).
    ///
    /// The price is rounded to the nearest cent first; NaN and infinite prices
    /// are rejected as an invalid `price` before anything else is checked.
    pub fn add_item_decimal(&mut self, name: &str, price: f64, quantity: i64) -> CoreResult<()> {
        let price = Money::try_from_decimal(price)?;
        self.add_item(name, price, quantity)
    }

    /// Takes the configured discount off the current total.
    ///
    /// Not idempotent: every successful call discounts the already
    /// discounted total again and logs another entry.
    pub fn apply_discount(&mut self) -> DiscountOutcome {
        let outcome = self.discount_outcome();

        match outcome {
            DiscountOutcome::Applied { amount, total } => {
                self.total = total;
                self.transactions.push(LedgerEntry::new(Transaction::Discount {
                    amount: -amount,
                    discount_percent: self.discount,
                }));
                info!(discount = %self.discount, amount = %amount, "{}", outcome);
            }
            DiscountOutcome::NothingToApply => {
                warn!(discount = %self.discount, total = %self.total, "{}", outcome);
            }
        }

        outcome
    }

    fn discount_outcome(&self) -> DiscountOutcome {
        if self.discount.is_zero() || !self.total.is_positive() {
            return DiscountOutcome::NothingToApply;
        }

        let amount = self.total.percentage(u32::from(self.discount.percent()));
        if !amount.is_positive() {
            return DiscountOutcome::NothingToApply;
        }

        DiscountOutcome::Applied {
            amount,
            total: self.total - amount,
        }
    }

    /// Reverses the most recent transaction.
    ///
    /// ## Item entries
    /// The line total comes off the register and the last `quantity`
    /// occurrences of the item name are removed, skipping other names that
    /// were rung up in between.
    ///
    /// ## Discount entries
    /// The stored (negative) amount is subtracted, which adds the discount
    /// back.
    pub fn void_last_transaction(&mut self) -> VoidOutcome {
        let Some(entry) = self.transactions.pop() else {
            let outcome = VoidOutcome::NothingToVoid;
            warn!("{}", outcome);
            return outcome;
        };

        match &entry.transaction {
            Transaction::Item {
                amount,
                item,
                quantity,
                ..
            } => {
                // amount == price × quantity, checked when the item was added
                self.total -= *amount;
                self.remove_last_units(item, *quantity);
            }
            Transaction::Discount { amount, .. } => {
                self.total -= *amount;
            }
        }

        debug!(
            id = %entry.id,
            kind = entry.transaction.kind(),
            total = %self.total,
            "Transaction voided"
        );
        VoidOutcome::Voided(entry)
    }

    fn remove_last_units(&mut self, name: &str, quantity: i64) {
        let mut remaining = quantity;
        let mut index = self.items.len();

        while remaining > 0 && index > 0 {
            index -= 1;
            if self.items[index] == name {
                self.items.remove(index);
                remaining -= 1;
            }
        }
    }
}

/// Debug rendering for logs, not meant to be parsed.
impl fmt::Display for CashRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CashRegister(discount={}, total={}, items={} items, txns={})",
            self.discount.percent(),
            self.total,
            self.items.len(),
            self.transactions.len()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
