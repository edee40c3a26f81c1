//! # Allocation Strategies
//!
//! Heuristics that build one candidate syndicate from a set of quotations.
//!
//! This module provides the [`AllocationStrategy`] trait and two greedy
//! implementations that differ only in the order quotations are consumed:
//!
//! - [`RateAscendingStrategy`]: Cheapest rate first
//! - [`AmountDescendingStrategy`]: Largest ticket first, favouring fewer lenders
//!
//! Both walk their ordering, taking `min(offered, remaining)` from each
//! quotation until the target is reached or `max_lenders` entries have been
//! accepted, then hand the candidate to a [`FeasibilityEvaluator`].
//!
//! # Examples
//!
//! ```
//! use syndicate_optimizer::application::services::allocation_strategy::{
//!     AllocationStrategy, RateAscendingStrategy,
//! };
//! use syndicate_optimizer::domain::entities::quotation::QuotationRecord;
//! use syndicate_optimizer::domain::value_objects::{AllocationRequest, LenderId, QuotationId};
//! use rust_decimal::Decimal;
//!
//! let quotations = vec![
//!     QuotationRecord::new(QuotationId::new_v4(), LenderId::new("b"), "Bank B",
//!         Decimal::new(60, 0), Decimal::new(5, 0)),
//!     QuotationRecord::new(QuotationId::new_v4(), LenderId::new("a"), "Bank A",
//!         Decimal::new(60, 0), Decimal::new(4, 0)),
//! ];
//! let request = AllocationRequest::new(Decimal::new(100, 0)).with_lender_bounds(1, 2);
//!
//! let result = RateAscendingStrategy::default().attempt(&quotations, &request);
//! assert!(result.is_feasible());
//! assert_eq!(result.entries()[0].lender_id().as_str(), "a");
//! assert_eq!(result.blended_rate(), Decimal::new(44, 1));
//! ```

use crate::application::services::feasibility::FeasibilityEvaluator;
use crate::domain::entities::allocation::{AllocationEntry, AllocationResult};
use crate::domain::entities::quotation::QuotationRecord;
use crate::domain::value_objects::AllocationRequest;
use crate::domain::value_objects::arithmetic::CheckedArithmetic;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;

/// Trait for allocation heuristics.
///
/// Implementations build one candidate allocation and report it through
/// the canonical [`AllocationResult`] shape. Strategies hold no mutable
/// state, so one instance may serve concurrent optimizations.
///
/// # Contract
///
/// - Invalid quotations (non-positive amount or rate) are never allocated.
/// - Every returned entry satisfies `0 < allocated <= offered`.
/// - An empty quotation set yields [`AllocationResult::infeasible`].
pub trait AllocationStrategy: Send + Sync + fmt::Debug {
    /// Builds and evaluates one candidate allocation.
    fn attempt(
        &self,
        quotations: &[QuotationRecord],
        request: &AllocationRequest,
    ) -> AllocationResult;

    /// Returns the name of this strategy.
    fn name(&self) -> &'static str;
}

/// Walks `ordered` greedily and returns the accepted entries with their sum.
fn greedy_fill<'a, I>(ordered: I, request: &AllocationRequest) -> (Vec<AllocationEntry>, Decimal)
where
    I: IntoIterator<Item = &'a QuotationRecord>,
{
    let mut entries = Vec::new();
    let mut total = Decimal::ZERO;

    for quotation in ordered {
        if entries.len() >= request.max_lenders() {
            break;
        }

        let Ok(remaining) = request.target_amount().safe_sub(total) else {
            break;
        };
        if remaining <= Decimal::ZERO {
            break;
        }

        let amount = quotation.offered_amount().min(remaining);
        let Ok(next_total) = total.safe_add(amount) else {
            tracing::warn!(quotation = %quotation.id(), "running total overflowed");
            break;
        };
        total = next_total;
        entries.push(AllocationEntry::from_parts(quotation.clone(), amount));
    }

    (entries, total)
}

/// Sorts the valid quotations with a stable sort, preserving input order
/// between equal keys, then fills and evaluates.
fn attempt_ordered<F>(
    evaluator: &FeasibilityEvaluator,
    quotations: &[QuotationRecord],
    request: &AllocationRequest,
    compare: F,
) -> AllocationResult
where
    F: FnMut(&&QuotationRecord, &&QuotationRecord) -> Ordering,
{
    let mut ordered: Vec<&QuotationRecord> = quotations.iter().filter(|q| q.is_valid()).collect();
    if ordered.is_empty() {
        return AllocationResult::infeasible();
    }
    ordered.sort_by(compare);

    let (entries, total) = greedy_fill(ordered, request);
    evaluator.evaluate(entries, total, request)
}

// ============================================================================
// Rate-Ascending Strategy
// ============================================================================

/// Consumes quotations from the lowest interest rate upwards.
///
/// Ties keep input order.
#[derive(Debug, Clone, Default)]
pub struct RateAscendingStrategy {
    evaluator: FeasibilityEvaluator,
}

impl RateAscendingStrategy {
    /// Creates a rate-ascending strategy using `evaluator`.
    #[must_use]
    pub fn new(evaluator: FeasibilityEvaluator) -> Self {
        Self { evaluator }
    }
}

impl AllocationStrategy for RateAscendingStrategy {
    fn attempt(
        &self,
        quotations: &[QuotationRecord],
        request: &AllocationRequest,
    ) -> AllocationResult {
        attempt_ordered(&self.evaluator, quotations, request, |a, b| {
            a.interest_rate().cmp(&b.interest_rate())
        })
    }

    fn name(&self) -> &'static str {
        "RateAscending"
    }
}

// ============================================================================
// Amount-Descending Strategy
// ============================================================================

/// Consumes quotations from the largest offered amount downwards.
///
/// Minimises the lender count at the cost of possibly accepting
/// higher-rate large tickets. Ties keep input order.
#[derive(Debug, Clone, Default)]
pub struct AmountDescendingStrategy {
    evaluator: FeasibilityEvaluator,
}

impl AmountDescendingStrategy {
    /// Creates an amount-descending strategy using `evaluator`.
    #[must_use]
    pub fn new(evaluator: FeasibilityEvaluator) -> Self {
        Self { evaluator }
    }
}

impl AllocationStrategy for AmountDescendingStrategy {
    fn attempt(
        &self,
        quotations: &[QuotationRecord],
        request: &AllocationRequest,
    ) -> AllocationResult {
        attempt_ordered(&self.evaluator, quotations, request, |a, b| {
            b.offered_amount().cmp(&a.offered_amount())
        })
    }

    fn name(&self) -> &'static str {
        "AmountDescending"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{LenderId, QuotationId};

    fn quotation(lender: &str, amount: i64, rate: Decimal) -> QuotationRecord {
        QuotationRecord::new(
            QuotationId::new_v4(),
            LenderId::new(lender),
            format!("Bank {lender}"),
            Decimal::new(amount, 0),
            rate,
        )
    }

    fn pct(value: i64) -> Decimal {
        Decimal::new(value, 0)
    }

    fn lenders(result: &AllocationResult) -> Vec<&str> {
        result.entries().iter().map(|e| e.lender_id().as_str()).collect()
    }

    fn request(target: i64, min: usize, max: usize) -> AllocationRequest {
        AllocationRequest::new(Decimal::new(target, 0)).with_lender_bounds(min, max)
    }

    mod rate_ascending {
        use super::*;

        #[test]
        fn reference_two_lender_scenario() {
            let quotations = vec![quotation("A", 60, pct(4)), quotation("B", 60, pct(5))];
            let result = RateAscendingStrategy::default().attempt(&quotations, &request(100, 1, 2));

            assert!(result.is_feasible());
            assert_eq!(lenders(&result), vec!["A", "B"]);
            assert_eq!(result.entries()[0].allocated_amount(), Decimal::new(60, 0));
            assert_eq!(result.entries()[1].allocated_amount(), Decimal::new(40, 0));
            assert_eq!(result.total_allocated(), Decimal::new(100, 0));
            assert_eq!(result.blended_rate(), Decimal::new(44, 1));
            assert_eq!(result.lender_count(), 2);
        }

        #[test]
        fn sorts_by_rate_regardless_of_input_order() {
            let quotations = vec![
                quotation("C", 50, pct(6)),
                quotation("A", 50, pct(3)),
                quotation("B", 50, pct(4)),
            ];
            let result = RateAscendingStrategy::default().attempt(&quotations, &request(100, 1, 3));
            assert_eq!(lenders(&result), vec!["A", "B"]);
        }

        #[test]
        fn equal_rates_keep_input_order() {
            let quotations = vec![
                quotation("first", 50, pct(4)),
                quotation("second", 50, pct(4)),
                quotation("third", 50, pct(4)),
            ];
            let result = RateAscendingStrategy::default().attempt(&quotations, &request(100, 1, 3));
            assert_eq!(lenders(&result), vec!["first", "second"]);
        }

        #[test]
        fn stops_at_target() {
            let quotations = vec![
                quotation("A", 150, pct(4)),
                quotation("B", 60, pct(5)),
            ];
            let result = RateAscendingStrategy::default().attempt(&quotations, &request(100, 1, 5));
            assert_eq!(lenders(&result), vec!["A"]);
            assert_eq!(result.total_allocated(), Decimal::new(100, 0));
        }

        #[test]
        fn stops_at_max_lenders() {
            let quotations = vec![quotation("A", 60, pct(4)), quotation("B", 60, pct(5))];
            let result = RateAscendingStrategy::default().attempt(&quotations, &request(100, 1, 1));
            assert!(!result.is_feasible());
        }

        #[test]
        fn empty_input_is_infeasible() {
            let result = RateAscendingStrategy::default().attempt(&[], &request(100, 1, 2));
            assert_eq!(result, AllocationResult::infeasible());
        }

        #[test]
        fn invalid_quotations_are_skipped() {
            let quotations = vec![
                quotation("zero", 0, pct(1)),
                quotation("free", 80, Decimal::ZERO),
                quotation("A", 100, pct(4)),
            ];
            let result = RateAscendingStrategy::default().attempt(&quotations, &request(100, 1, 2));
            assert!(result.is_feasible());
            assert_eq!(lenders(&result), vec!["A"]);
        }

        #[test]
        fn only_invalid_quotations_is_infeasible() {
            let quotations = vec![quotation("neg", -10, pct(4))];
            let result = RateAscendingStrategy::default().attempt(&quotations, &request(100, 1, 2));
            assert_eq!(result, AllocationResult::infeasible());
        }

        #[test]
        fn name() {
            assert_eq!(RateAscendingStrategy::default().name(), "RateAscending");
        }
    }

    mod amount_descending {
        use super::*;

        #[test]
        fn largest_ticket_first() {
            let quotations = vec![
                quotation("small-cheap", 30, pct(3)),
                quotation("large", 90, pct(5)),
                quotation("mid", 50, pct(4)),
            ];
            let result =
                AmountDescendingStrategy::default().attempt(&quotations, &request(100, 1, 3));

            assert!(result.is_feasible());
            assert_eq!(lenders(&result), vec!["large", "mid"]);
            assert_eq!(result.entries()[1].allocated_amount(), Decimal::new(10, 0));
        }

        #[test]
        fn equal_amounts_keep_input_order() {
            let quotations = vec![quotation("A", 60, pct(4)), quotation("B", 60, pct(5))];
            let result =
                AmountDescendingStrategy::default().attempt(&quotations, &request(100, 1, 1));
            assert!(!result.is_feasible());

            let result =
                AmountDescendingStrategy::default().attempt(&quotations, &request(100, 1, 2));
            assert_eq!(lenders(&result), vec!["A", "B"]);
        }

        #[test]
        fn single_large_ticket_covers_target() {
            let quotations = vec![quotation("A", 40, pct(3)), quotation("B", 120, pct(6))];
            let result =
                AmountDescendingStrategy::default().attempt(&quotations, &request(100, 1, 2));
            assert_eq!(lenders(&result), vec!["B"]);
            assert_eq!(result.blended_rate(), pct(6));
        }

        #[test]
        fn empty_input_is_infeasible() {
            let result = AmountDescendingStrategy::default().attempt(&[], &request(100, 1, 2));
            assert_eq!(result, AllocationResult::infeasible());
        }

        #[test]
        fn name() {
            assert_eq!(AmountDescendingStrategy::default().name(), "AmountDescending");
        }
    }

    mod greedy_walk {
        use super::*;

        #[test]
        fn partial_last_allocation() {
            let quotations = [quotation("A", 70, pct(4)), quotation("B", 70, pct(5))];
            let (entries, total) = greedy_fill(quotations.iter(), &request(100, 1, 2));
            assert_eq!(entries.len(), 2);
            assert_eq!(entries[1].allocated_amount(), Decimal::new(30, 0));
            assert_eq!(total, Decimal::new(100, 0));
        }

        #[test]
        fn never_exceeds_offer() {
            let quotations = [quotation("A", 10, pct(4)), quotation("B", 15, pct(5))];
            let (entries, total) = greedy_fill(quotations.iter(), &request(100, 1, 5));
            for entry in &entries {
                assert!(entry.allocated_amount() <= entry.quotation().offered_amount());
            }
            assert_eq!(total, Decimal::new(25, 0));
        }
    }
}
