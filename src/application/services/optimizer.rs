//! # Syndicate Optimizer
//!
//! Public entry point of the allocation core.
//!
//! [`SyndicateOptimizer`] validates the request, drops invalid quotations,
//! runs every registered [`AllocationStrategy`] and selects one result.
//!
//! # Selection
//!
//! Strategies are compared in registration order. The first strategy's
//! result is the fallback answer. A later result replaces the current pick
//! when it is feasible and either the pick is infeasible or the later result
//! has a strictly lower blended rate. Scores are not compared.
//!
//! With the default registration (rate-ascending, then amount-descending)
//! the amount-descending result wins only when it is feasible and beats an
//! infeasible or more expensive rate-ascending result.
//!
//! # Examples
//!
//! ```
//! use syndicate_optimizer::application::services::SyndicateOptimizer;
//! use syndicate_optimizer::domain::value_objects::AllocationRequest;
//! use rust_decimal::Decimal;
//!
//! let optimizer = SyndicateOptimizer::default();
//! let request = AllocationRequest::new(Decimal::new(100, 0));
//!
//! let result = optimizer.optimize(&[], &request).unwrap();
//! assert!(!result.is_feasible());
//! assert_eq!(result.score(), f64::INFINITY);
//! ```

use crate::application::services::allocation_strategy::{
    AllocationStrategy, AmountDescendingStrategy, RateAscendingStrategy,
};
use crate::application::services::feasibility::FeasibilityEvaluator;
use crate::domain::entities::allocation::AllocationResult;
use crate::domain::entities::quotation::QuotationRecord;
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::AllocationRequest;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// One strategy's candidate within an [`OptimizationReport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyOutcome {
    /// Name of the strategy that produced the candidate.
    pub strategy: &'static str,
    /// The candidate allocation.
    pub result: AllocationResult,
}

/// Every candidate considered by one optimization, plus the selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationReport {
    /// Candidates in strategy registration order.
    pub candidates: Vec<StrategyOutcome>,
    /// Strategy whose result was selected. `None` when no strategy ran.
    pub selected_strategy: Option<&'static str>,
    /// The selected allocation.
    pub selected: AllocationResult,
}

impl OptimizationReport {
    fn empty() -> Self {
        Self {
            candidates: Vec::new(),
            selected_strategy: None,
            selected: AllocationResult::infeasible(),
        }
    }

    /// Returns `true` if the selected allocation is feasible.
    #[inline]
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        self.selected.is_feasible()
    }
}

/// Runs allocation strategies and selects the best candidate.
///
/// The optimizer is immutable once built and holds no per-call state, so it
/// may be shared across tasks behind an `Arc`.
#[derive(Clone)]
pub struct SyndicateOptimizer {
    strategies: Vec<Arc<dyn AllocationStrategy>>,
}

impl SyndicateOptimizer {
    /// Creates an optimizer with the two greedy strategies sharing `evaluator`.
    #[must_use]
    pub fn new(evaluator: FeasibilityEvaluator) -> Self {
        Self {
            strategies: vec![
                Arc::new(RateAscendingStrategy::new(evaluator)),
                Arc::new(AmountDescendingStrategy::new(evaluator)),
            ],
        }
    }

    /// Creates an optimizer with an explicit strategy list.
    ///
    /// The first strategy provides the fallback result.
    #[must_use]
    pub fn with_strategies(strategies: Vec<Arc<dyn AllocationStrategy>>) -> Self {
        Self { strategies }
    }

    /// Appends a strategy after the existing ones.
    #[must_use]
    pub fn register(mut self, strategy: Arc<dyn AllocationStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Returns the registered strategy names in order.
    #[must_use]
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Selects the best allocation for `request`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRequest` if the request fails validation.
    /// An unsatisfiable request is not an error; it yields an infeasible
    /// result.
    pub fn optimize(
        &self,
        quotations: &[QuotationRecord],
        request: &AllocationRequest,
    ) -> DomainResult<AllocationResult> {
        self.optimize_with_report(quotations, request)
            .map(|report| report.selected)
    }

    /// Like [`optimize`](Self::optimize) but also returns every candidate.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRequest` if the request fails validation.
    pub fn optimize_with_report(
        &self,
        quotations: &[QuotationRecord],
        request: &AllocationRequest,
    ) -> DomainResult<OptimizationReport> {
        request.validate()?;

        let eligible: Vec<QuotationRecord> =
            quotations.iter().filter(|q| q.is_valid()).cloned().collect();

        tracing::debug!(
            total = quotations.len(),
            eligible = eligible.len(),
            target = %request.target_amount(),
            "optimizing syndicate allocation"
        );

        if eligible.is_empty() {
            return Ok(OptimizationReport::empty());
        }

        let candidates: Vec<StrategyOutcome> = self
            .strategies
            .iter()
            .map(|strategy| {
                let result = strategy.attempt(&eligible, request);
                tracing::debug!(
                    strategy = strategy.name(),
                    feasible = result.is_feasible(),
                    blended_rate = %result.blended_rate(),
                    lenders = result.lender_count(),
                    "strategy attempt complete"
                );
                StrategyOutcome {
                    strategy: strategy.name(),
                    result,
                }
            })
            .collect();

        let Some(winner) = select(&candidates) else {
            return Ok(OptimizationReport::empty());
        };
        let selected_strategy = winner.strategy;
        let selected = winner.result.clone();

        tracing::info!(
            strategy = selected_strategy,
            feasible = selected.is_feasible(),
            blended_rate = %selected.blended_rate(),
            lenders = selected.lender_count(),
            "allocation selected"
        );

        Ok(OptimizationReport {
            candidates,
            selected_strategy: Some(selected_strategy),
            selected,
        })
    }
}

/// Winning candidate, or `None` if there are none.
fn select(candidates: &[StrategyOutcome]) -> Option<&StrategyOutcome> {
    let (first, rest) = candidates.split_first()?;

    Some(rest.iter().fold(first, |best, challenger| {
        let (current, next) = (&best.result, &challenger.result);
        if next.is_feasible()
            && (!current.is_feasible() || next.blended_rate() < current.blended_rate())
        {
            challenger
        } else {
            best
        }
    }))
}

impl Default for SyndicateOptimizer {
    fn default() -> Self {
        Self::new(FeasibilityEvaluator::default())
    }
}

impl fmt::Debug for SyndicateOptimizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyndicateOptimizer")
            .field("strategies", &self.strategy_names())
            .finish()
    }
}
