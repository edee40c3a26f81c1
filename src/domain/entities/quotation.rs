//! # Quotation Record
//!
//! One lender's standing offer for a financing request.
//!
//! This module provides the [`QuotationRecord`] entity, the read-only view of
//! a persisted bank quotation that the optimizer consumes.
//!
//! # Examples
//!
//! ```
//! use syndicate_optimizer::domain::entities::quotation::QuotationRecord;
//! use syndicate_optimizer::domain::value_objects::{LenderId, QuotationId};
//! use rust_decimal::Decimal;
//!
//! let quotation = QuotationRecord::new(
//!     QuotationId::new_v4(),
//!     LenderId::new("bank-1"),
//!     "First Bank",
//!     Decimal::new(60_000_000, 0),
//!     Decimal::new(425, 2),
//! )
//! .with_conditions("Senior secured, 5y bullet");
//!
//! assert!(quotation.is_valid());
//! assert_eq!(quotation.conditions(), "Senior secured, 5y bullet");
//! ```

use crate::domain::value_objects::{LenderId, QuotationId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A lender's offer of an amount at an annual interest rate.
///
/// Records are never mutated once built. Records whose amount or rate is
/// not strictly positive are representable, since they arrive from storage
/// as-is, but [`QuotationRecord::is_valid`] reports them so the optimizer
/// can filter them out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotationRecord {
    /// Identifier assigned by the quotation store.
    id: QuotationId,
    /// Offering institution.
    lender_id: LenderId,
    /// Display name of the offering institution.
    lender_name: String,
    /// Amount offered, in request currency.
    offered_amount: Decimal,
    /// Annual interest rate, in percent.
    interest_rate: Decimal,
    /// Free-text terms, carried through unmodified.
    #[serde(default)]
    conditions: String,
}

impl QuotationRecord {
    /// Creates a quotation record with empty conditions.
    #[must_use]
    pub fn new(
        id: QuotationId,
        lender_id: LenderId,
        lender_name: impl Into<String>,
        offered_amount: Decimal,
        interest_rate: Decimal,
    ) -> Self {
        Self {
            id,
            lender_id,
            lender_name: lender_name.into(),
            offered_amount,
            interest_rate,
            conditions: String::new(),
        }
    }

    /// Attaches the lender's free-text conditions.
    #[must_use]
    pub fn with_conditions(mut self, conditions: impl Into<String>) -> Self {
        self.conditions = conditions.into();
        self
    }

    /// Returns the quotation ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> QuotationId {
        self.id
    }

    /// Returns the lender ID.
    #[inline]
    #[must_use]
    pub fn lender_id(&self) -> &LenderId {
        &self.lender_id
    }

    /// Returns the lender display name.
    #[inline]
    #[must_use]
    pub fn lender_name(&self) -> &str {
        &self.lender_name
    }

    /// Returns the offered amount.
    #[inline]
    #[must_use]
    pub fn offered_amount(&self) -> Decimal {
        self.offered_amount
    }

    /// Returns the annual interest rate in percent.
    #[inline]
    #[must_use]
    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    /// Returns the free-text conditions.
    #[inline]
    #[must_use]
    pub fn conditions(&self) -> &str {
        &self.conditions
    }

    /// Returns true if both the amount and the rate are strictly positive.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.offered_amount > Decimal::ZERO && self.interest_rate > Decimal::ZERO
    }
}

impl fmt::Display for QuotationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quotation({} lender={} amount={} rate={}%)",
            self.id, self.lender_id, self.offered_amount, self.interest_rate
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn quotation(amount: i64, rate: Decimal) -> QuotationRecord {
        QuotationRecord::new(
            QuotationId::new_v4(),
            LenderId::new("bank-1"),
            "First Bank",
            Decimal::new(amount, 0),
            rate,
        )
    }

    mod validity {
        use super::*;

        #[test]
        fn positive_amount_and_rate_is_valid() {
            assert!(quotation(60, Decimal::new(4, 0)).is_valid());
        }

        #[test]
        fn zero_amount_is_invalid() {
            assert!(!quotation(0, Decimal::new(4, 0)).is_valid());
        }

        #[test]
        fn negative_amount_is_invalid() {
            assert!(!quotation(-10, Decimal::new(4, 0)).is_valid());
        }

        #[test]
        fn zero_rate_is_invalid() {
            assert!(!quotation(60, Decimal::ZERO).is_valid());
        }

        #[test]
        fn negative_rate_is_invalid() {
            assert!(!quotation(60, Decimal::new(-1, 0)).is_valid());
        }
    }

    mod accessors {
        use super::*;

        #[test]
        fn all_accessors_work() {
            let id = QuotationId::new_v4();
            let q = QuotationRecord::new(
                id,
                LenderId::new("bank-9"),
                "Ninth Bank",
                Decimal::new(40, 0),
                Decimal::new(5, 0),
            )
            .with_conditions("no prepayment fee");

            assert_eq!(q.id(), id);
            assert_eq!(q.lender_id().as_str(), "bank-9");
            assert_eq!(q.lender_name(), "Ninth Bank");
            assert_eq!(q.offered_amount(), Decimal::new(40, 0));
            assert_eq!(q.interest_rate(), Decimal::new(5, 0));
            assert_eq!(q.conditions(), "no prepayment fee");
        }

        #[test]
        fn conditions_default_to_empty() {
            assert!(quotation(60, Decimal::new(4, 0)).conditions().is_empty());
        }
    }

    mod serde_tests {
        use super::*;

        #[test]
        fn serde_roundtrip() {
            let q = quotation(60, Decimal::new(425, 2)).with_conditions("covenant-lite");
            let json = serde_json::to_string(&q).unwrap();
            let back: QuotationRecord = serde_json::from_str(&json).unwrap();
            assert_eq!(q, back);
        }
    }

    #[test]
    fn display_format() {
        let display = quotation(60, Decimal::new(4, 0)).to_string();
        assert!(display.contains("Quotation"));
        assert!(display.contains("bank-1"));
        assert!(display.contains("rate=4%"));
    }
}
