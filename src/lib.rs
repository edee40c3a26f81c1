//! # Syndicate Optimizer
//!
//! Selects which bank quotations fund a syndicated loan.
//!
//! Given a target amount and a set of lender quotations, the optimizer picks
//! quotations that together cover the target while keeping the
//! amount-weighted ("blended") interest rate low, subject to lender-count
//! bounds and an optional rate ceiling.
//!
//! ## Architecture
//!
//! - [`domain`]: Quotations, allocations, syndicates and their invariants
//! - [`application`]: Feasibility evaluation, allocation strategies, the
//!   optimizer and the optimize-syndicate use case
//! - [`infrastructure`]: Repository ports and in-memory adapters
//! - [`config`] and [`telemetry`]: Settings and logging
//!
//! ## Quick Start
//!
//! ```
//! use syndicate_optimizer::application::services::SyndicateOptimizer;
//! use syndicate_optimizer::domain::entities::QuotationRecord;
//! use syndicate_optimizer::domain::value_objects::{AllocationRequest, LenderId, QuotationId};
//! use rust_decimal::Decimal;
//!
//! let quotations = vec![
//!     QuotationRecord::new(QuotationId::new_v4(), LenderId::new("a"), "Bank A",
//!         Decimal::new(60, 0), Decimal::new(4, 0)),
//!     QuotationRecord::new(QuotationId::new_v4(), LenderId::new("b"), "Bank B",
//!         Decimal::new(60, 0), Decimal::new(5, 0)),
//! ];
//! let request = AllocationRequest::new(Decimal::new(100, 0)).with_lender_bounds(1, 2);
//!
//! let result = SyndicateOptimizer::default().optimize(&quotations, &request).unwrap();
//! assert!(result.is_feasible());
//! assert_eq!(result.blended_rate(), Decimal::new(44, 1));
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;

pub use application::services::{AllocationStrategy, FeasibilityEvaluator, SyndicateOptimizer};
pub use domain::entities::{AllocationEntry, AllocationResult, QuotationRecord, Syndicate};
pub use domain::value_objects::AllocationRequest;
