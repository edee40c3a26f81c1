//! # Application Services
//!
//! The allocation core.
//!
//! - [`FeasibilityEvaluator`]: Constraint check, blended rate and score
//! - [`AllocationStrategy`]: Pluggable greedy heuristics
//! - [`SyndicateOptimizer`]: Runs strategies and selects a result

pub mod allocation_strategy;
pub mod feasibility;
pub mod optimizer;

pub use allocation_strategy::{AllocationStrategy, AmountDescendingStrategy, RateAscendingStrategy};
pub use feasibility::{DEFAULT_LENDER_PENALTY, DEFAULT_MIN_COVERAGE_RATIO, FeasibilityEvaluator};
pub use optimizer::{OptimizationReport, StrategyOutcome, SyndicateOptimizer};
