//! # Feasibility Evaluator
//!
//! Decides whether a candidate allocation meets a request's constraints and
//! computes its blended rate and score.
//!
//! # Feasibility
//!
//! A candidate is feasible when all of the following hold:
//!
//! ```text
//! total_allocated >= target_amount × min_coverage_ratio
//! min_lenders <= entries.len() <= max_lenders
//! blended_rate <= max_rate            (when a ceiling is set)
//! ```
//!
//! with
//!
//! ```text
//! blended_rate = Σ(rate × allocated) / total_allocated
//! score        = blended_rate + lender_penalty × entries.len()
//! ```
//!
//! # Examples
//!
//! ```
//! use syndicate_optimizer::application::services::feasibility::FeasibilityEvaluator;
//! use syndicate_optimizer::domain::value_objects::AllocationRequest;
//! use rust_decimal::Decimal;
//!
//! let evaluator = FeasibilityEvaluator::default();
//! let request = AllocationRequest::new(Decimal::new(100, 0));
//! let result = evaluator.evaluate(Vec::new(), Decimal::ZERO, &request);
//! assert!(!result.is_feasible());
//! ```

use crate::domain::entities::allocation::{AllocationEntry, AllocationResult};
use crate::domain::value_objects::AllocationRequest;
use crate::domain::value_objects::arithmetic::{ArithmeticResult, CheckedArithmetic};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Default score penalty per participating lender (one basis point).
pub const DEFAULT_LENDER_PENALTY: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Default fraction of the target that must be covered.
pub const DEFAULT_MIN_COVERAGE_RATIO: Decimal = Decimal::from_parts(99, 0, 0, false, 2);

/// Pure evaluator of candidate allocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeasibilityEvaluator {
    /// Score penalty added per lender.
    lender_penalty: Decimal,
    /// Fraction of the target that must be covered.
    min_coverage_ratio: Decimal,
}

impl Default for FeasibilityEvaluator {
    fn default() -> Self {
        Self {
            lender_penalty: DEFAULT_LENDER_PENALTY,
            min_coverage_ratio: DEFAULT_MIN_COVERAGE_RATIO,
        }
    }
}

impl FeasibilityEvaluator {
    /// Creates an evaluator with explicit parameters.
    #[must_use]
    pub fn new(lender_penalty: Decimal, min_coverage_ratio: Decimal) -> Self {
        Self {
            lender_penalty,
            min_coverage_ratio,
        }
    }

    /// Sets the per-lender score penalty.
    #[must_use]
    pub fn with_lender_penalty(mut self, lender_penalty: Decimal) -> Self {
        self.lender_penalty = lender_penalty;
        self
    }

    /// Returns the per-lender score penalty.
    #[inline]
    #[must_use]
    pub fn lender_penalty(&self) -> Decimal {
        self.lender_penalty
    }

    /// Returns the required coverage ratio.
    #[inline]
    #[must_use]
    pub fn min_coverage_ratio(&self) -> Decimal {
        self.min_coverage_ratio
    }

    /// Evaluates a candidate allocation.
    ///
    /// `total_allocated` is the caller's running sum of the entries'
    /// allocated amounts. Any failed constraint yields
    /// [`AllocationResult::infeasible`]; the attempted entries are dropped.
    #[must_use]
    pub fn evaluate(
        &self,
        entries: Vec<AllocationEntry>,
        total_allocated: Decimal,
        request: &AllocationRequest,
    ) -> AllocationResult {
        if total_allocated <= Decimal::ZERO {
            return AllocationResult::infeasible();
        }

        let required = match request.target_amount().safe_mul(self.min_coverage_ratio) {
            Ok(required) => required,
            Err(e) => {
                tracing::warn!(error = %e, "coverage threshold overflowed");
                return AllocationResult::infeasible();
            }
        };
        if total_allocated < required {
            return AllocationResult::infeasible();
        }

        if !request.accepts_lender_count(entries.len()) {
            return AllocationResult::infeasible();
        }

        let blended_rate = match blended_rate(&entries, total_allocated) {
            Ok(rate) => rate,
            Err(e) => {
                tracing::warn!(error = %e, lenders = entries.len(), "blended rate overflowed");
                return AllocationResult::infeasible();
            }
        };

        if request.max_rate().is_some_and(|max_rate| blended_rate > max_rate) {
            return AllocationResult::infeasible();
        }

        let score = match self.score(blended_rate, entries.len()) {
            Ok(score) => score,
            Err(e) => {
                tracing::warn!(error = %e, "score overflowed");
                return AllocationResult::infeasible();
            }
        };

        AllocationResult::feasible(entries, total_allocated, blended_rate, score)
    }

    /// `blended_rate + lender_penalty × lenders`, as `f64`.
    fn score(&self, blended_rate: Decimal, lenders: usize) -> ArithmeticResult<f64> {
        let penalty = self.lender_penalty.safe_mul(Decimal::from(lenders))?;
        let score = blended_rate.safe_add(penalty)?;
        Ok(score.to_f64().unwrap_or(f64::INFINITY))
    }
}

/// Amount-weighted average rate of `entries` over `total_allocated`.
fn blended_rate(entries: &[AllocationEntry], total_allocated: Decimal) -> ArithmeticResult<Decimal> {
    let weighted_sum = entries
        .iter()
        .try_fold(Decimal::ZERO, |acc, entry| acc.safe_add(entry.weighted_rate()?))?;
    weighted_sum.safe_div(total_allocated)
}
