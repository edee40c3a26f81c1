//! # Allocation Entities
//!
//! Per-lender allocations and the aggregate outcome of an optimization run.
//!
//! This module provides [`AllocationEntry`], which tracks how much of the
//! target amount has been assigned to one lender's quotation, and
//! [`AllocationResult`], the immutable outcome of one strategy or of a full
//! optimization.
//!
//! # Examples
//!
//! ```
//! use syndicate_optimizer::domain::entities::allocation::{AllocationEntry, AllocationResult};
//! use syndicate_optimizer::domain::entities::quotation::QuotationRecord;
//! use syndicate_optimizer::domain::value_objects::{LenderId, QuotationId};
//! use rust_decimal::Decimal;
//!
//! let quotation = QuotationRecord::new(
//!     QuotationId::new_v4(),
//!     LenderId::new("bank-1"),
//!     "First Bank",
//!     Decimal::new(60, 0),
//!     Decimal::new(4, 0),
//! );
//! let entry = AllocationEntry::new(quotation, Decimal::new(40, 0)).unwrap();
//! assert_eq!(entry.allocated_amount(), Decimal::new(40, 0));
//!
//! let none = AllocationResult::infeasible();
//! assert!(!none.is_feasible());
//! assert_eq!(none.score(), f64::INFINITY);
//! ```

use crate::domain::entities::quotation::QuotationRecord;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::{ArithmeticResult, CheckedArithmetic};
use crate::domain::value_objects::LenderId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount assigned to one lender's quotation.
///
/// # Invariants
///
/// - `0 < allocated_amount <= quotation.offered_amount()`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationEntry {
    /// The quotation this allocation draws on.
    quotation: QuotationRecord,
    /// Amount taken from the quotation.
    allocated_amount: Decimal,
}

impl AllocationEntry {
    /// Creates an allocation entry with validation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAllocation` if the amount is not
    /// positive or exceeds what the quotation offers.
    pub fn new(quotation: QuotationRecord, allocated_amount: Decimal) -> DomainResult<Self> {
        if allocated_amount <= Decimal::ZERO {
            return Err(DomainError::InvalidAllocation(
                "allocated amount must be positive".to_string(),
            ));
        }
        if allocated_amount > quotation.offered_amount() {
            return Err(DomainError::InvalidAllocation(format!(
                "allocated amount {} exceeds offered amount {}",
                allocated_amount,
                quotation.offered_amount()
            )));
        }
        Ok(Self {
            quotation,
            allocated_amount,
        })
    }

    /// Creates an entry without validation.
    ///
    /// Used by allocation strategies, whose walk already guarantees the
    /// invariants.
    #[must_use]
    pub(crate) fn from_parts(quotation: QuotationRecord, allocated_amount: Decimal) -> Self {
        Self {
            quotation,
            allocated_amount,
        }
    }

    /// Returns the underlying quotation.
    #[inline]
    #[must_use]
    pub fn quotation(&self) -> &QuotationRecord {
        &self.quotation
    }

    /// Returns the allocated amount.
    #[inline]
    #[must_use]
    pub fn allocated_amount(&self) -> Decimal {
        self.allocated_amount
    }

    /// Returns the quotation's interest rate.
    #[inline]
    #[must_use]
    pub fn interest_rate(&self) -> Decimal {
        self.quotation.interest_rate()
    }

    /// Returns the lender ID.
    #[inline]
    #[must_use]
    pub fn lender_id(&self) -> &LenderId {
        self.quotation.lender_id()
    }

    /// Returns `rate × allocated_amount`, the entry's weight in the blended rate.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the product overflows.
    pub fn weighted_rate(&self) -> ArithmeticResult<Decimal> {
        self.interest_rate().safe_mul(self.allocated_amount)
    }

    /// Returns this entry's share of `total` as a fraction.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::DivisionByZero` if `total` is zero.
    pub fn share_of(&self, total: Decimal) -> ArithmeticResult<Decimal> {
        self.allocated_amount.safe_div(total)
    }
}

impl fmt::Display for AllocationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Allocation(lender={}, quotation={}, amount={}, rate={}%)",
            self.quotation.lender_id(),
            self.quotation.id(),
            self.allocated_amount,
            self.quotation.interest_rate(),
        )
    }
}

/// Outcome of an allocation attempt.
///
/// A feasible result carries the selected entries in selection order. An
/// infeasible result is always the canonical empty shape: no entries, zero
/// numeric fields and an infinite score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationResult {
    /// Selected entries, in the order they were chosen.
    entries: Vec<AllocationEntry>,
    /// Sum of allocated amounts.
    total_allocated: Decimal,
    /// Amount-weighted average interest rate.
    blended_rate: Decimal,
    /// Number of participating lenders.
    lender_count: usize,
    /// Ranking score (lower is better).
    score: f64,
    /// Whether every constraint is met.
    feasible: bool,
}

impl AllocationResult {
    /// Returns the canonical infeasible result.
    #[must_use]
    pub fn infeasible() -> Self {
        Self {
            entries: Vec::new(),
            total_allocated: Decimal::ZERO,
            blended_rate: Decimal::ZERO,
            lender_count: 0,
            score: f64::INFINITY,
            feasible: false,
        }
    }

    /// Builds a feasible result from already-evaluated parts.
    #[must_use]
    pub(crate) fn feasible(
        entries: Vec<AllocationEntry>,
        total_allocated: Decimal,
        blended_rate: Decimal,
        score: f64,
    ) -> Self {
        let lender_count = entries.len();
        Self {
            entries,
            total_allocated,
            blended_rate,
            lender_count,
            score,
            feasible: true,
        }
    }

    /// Returns the selected entries.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[AllocationEntry] {
        &self.entries
    }

    /// Consumes the result and returns its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<AllocationEntry> {
        self.entries
    }

    /// Returns the total allocated amount.
    #[inline]
    #[must_use]
    pub fn total_allocated(&self) -> Decimal {
        self.total_allocated
    }

    /// Returns the blended rate.
    #[inline]
    #[must_use]
    pub fn blended_rate(&self) -> Decimal {
        self.blended_rate
    }

    /// Returns the number of participating lenders.
    #[inline]
    #[must_use]
    pub fn lender_count(&self) -> usize {
        self.lender_count
    }

    /// Returns the ranking score.
    #[inline]
    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Returns true if every constraint is met.
    #[inline]
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        self.feasible
    }
}

impl Default for AllocationResult {
    fn default() -> Self {
        Self::infeasible()
    }
}

impl fmt::Display for AllocationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.feasible {
            return write!(f, "AllocationResult(infeasible)");
        }
        write!(
            f,
            "AllocationResult(lenders={}, total={}, blended_rate={}%, score={:.4})",
            self.lender_count, self.total_allocated, self.blended_rate, self.score
        )
    }
}
