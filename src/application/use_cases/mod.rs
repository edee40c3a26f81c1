//! # Use Cases
//!
//! - [`OptimizeSyndicateUseCase`]: Fetch quotations, optimize, store the syndicate

pub mod optimize_syndicate;

pub use optimize_syndicate::{OptimizeSyndicateResponse, OptimizeSyndicateUseCase};
