//! # Domain Types
//!
//! Types the register is built from.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────────────────────────┐    │
//! │  │    Discount     │   │              LedgerEntry                 │    │
//! │  │  ─────────────  │   │  ──────────────────────────────────────  │    │
//! │  │  percent (u8)   │   │  id (UUID)  recorded_at  transaction     │    │
//! │  │  0..=100        │   │                              │           │    │
//! │  └─────────────────┘   └──────────────────────────────┼───────────┘    │
//! │                                                       ▼                 │
//! │                        ┌──────────────────────────────────────────┐    │
//! │                        │  Transaction                             │    │
//! │                        │  ├── Item { amount, item, price, qty }   │    │
//! │                        │  └── Discount { amount (<0), percent }   │    │
//! │                        └──────────────────────────────────────────┘    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │ DiscountOutcome │   │   VoidOutcome   │   returned by register ops  │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::validate_discount_percent;

// =============================================================================
// Discount
// =============================================================================

/// Discount percentage, always within `0..=100`.
///
/// ## Example
/// ```rust
/// use till_core::types::Discount;
///
/// assert_eq!(Discount::new(20).unwrap().percent(), 20);
/// assert!(Discount::new(101).is_err());
/// assert!(Discount::default().is_zero());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Discount(u8);

impl Discount {
    /// Creates a discount from a whole percentage.
    pub fn new(percent: i64) -> Result<Self, ValidationError> {
        validate_discount_percent(percent)?;
        Ok(Discount(percent as u8))
    }

    /// Returns the percentage (0-100).
    #[inline]
    pub const fn percent(&self) -> u8 {
        self.0
    }

    /// No discount configured.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// Transactions
// =============================================================================

/// A reversible register operation.
///
/// Serialized with a `kind` tag so logged entries read as
/// `{"kind": "item", ...}` / `{"kind": "discount", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transaction {
    /// Units of one item rung up together.
    Item {
        /// `price × quantity`.
        amount: Money,
        item: String,
        price: Money,
        quantity: i64,
    },

    /// A discount taken off the running total.
    Discount {
        /// Negative: the amount removed from the total.
        amount: Money,
        discount_percent: Discount,
    },
}

impl Transaction {
    /// Signed effect this transaction had on the register total.
    pub fn amount(&self) -> Money {
        match self {
            Transaction::Item { amount, .. } | Transaction::Discount { amount, .. } => *amount,
        }
    }

    /// Short label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Transaction::Item { .. } => "item",
            Transaction::Discount { .. } => "discount",
        }
    }
}

/// A transaction as recorded in the register's log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unique identifier (UUID v4).
    pub id: Uuid,

    /// When the transaction was recorded.
    pub recorded_at: DateTime<Utc>,

    #[serde(flatten)]
    pub transaction: Transaction,
}

impl LedgerEntry {
    /// Stamps a transaction with a fresh id and the current time.
    pub fn new(transaction: Transaction) -> Self {
        LedgerEntry {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            transaction,
        }
    }
}

// =============================================================================
// Operation Outcomes
// =============================================================================

/// Result of `CashRegister::apply_discount`.
///
/// `Display` yields the exact message the register announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountOutcome {
    /// Discount was taken off the total.
    Applied {
        /// Amount removed from the total (positive).
        amount: Money,
        /// Total after the discount.
        total: Money,
    },

    /// No discount configured, empty total, or the discount rounds to zero.
    NothingToApply,
}

impl DiscountOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, DiscountOutcome::Applied { .. })
    }
}

impl fmt::Display for DiscountOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscountOutcome::Applied { total, .. } => write!(
                f,
                "After the discount, the total comes to {}.",
                total.compact()
            ),
            DiscountOutcome::NothingToApply => f.write_str("There is no discount to apply."),
        }
    }
}

/// Result of `CashRegister::void_last_transaction`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoidOutcome {
    /// The entry that was removed from the log and reversed.
    Voided(LedgerEntry),

    /// The log was empty.
    NothingToVoid,
}

impl VoidOutcome {
    pub fn is_voided(&self) -> bool {
        matches!(self, VoidOutcome::Voided(_))
    }
}

impl fmt::Display for VoidOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoidOutcome::Voided(entry) => write!(
                f,
                "Voided {} transaction of {}.",
                entry.transaction.kind(),
                entry.transaction.amount()
            ),
            VoidOutcome::NothingToVoid => f.write_str("No transactions to void."),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_bounds() {
        assert!(Discount::new(0).is_ok());
        assert!(Discount::new(100).is_ok());
        assert!(Discount::new(-1).is_err());
        assert!(Discount::new(101).is_err());
        assert_eq!(Discount::new(15).unwrap().to_string(), "15%");
    }

    #[test]
    fn test_transaction_serializes_with_kind_tag() {
        let entry = LedgerEntry::new(Transaction::Item {
            amount: Money::from_cents(300),
            item: "apple".to_string(),
            price: Money::from_cents(100),
            quantity: 3,
        });

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["kind"], "item");
        assert_eq!(json["amount"], 300);
        assert_eq!(json["quantity"], 3);

        let back: LedgerEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_discount_record_amount_is_negative() {
        let txn = Transaction::Discount {
            amount: -Money::from_cents(1000),
            discount_percent: Discount::new(10).unwrap(),
        };
        assert_eq!(txn.kind(), "discount");
        assert!(txn.amount().is_negative());

        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["discount_percent"], 10);
    }

    #[test]
    fn test_outcome_messages() {
        let applied = DiscountOutcome::Applied {
            amount: Money::from_cents(1000),
            total: Money::from_cents(9000),
        };
        assert_eq!(
            applied.to_string(),
            "After the discount, the total comes to $90."
        );

        let applied = DiscountOutcome::Applied {
            amount: Money::from_cents(90),
            total: Money::from_cents(810),
        };
        assert_eq!(
            applied.to_string(),
            "After the discount, the total comes to $8.10."
        );

        assert_eq!(
            DiscountOutcome::NothingToApply.to_string(),
            "There is no discount to apply."
        );
        assert_eq!(VoidOutcome::NothingToVoid.to_string(), "No transactions to void.");
    }
}
