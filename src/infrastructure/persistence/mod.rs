//! # Persistence Layer
//!
//! ## Repository Traits (Ports)
//!
//! - [`QuotationRepository`]: Lender quotations per financing request
//! - [`SyndicateRepository`]: Formed syndicates
//!
//! ## Implementations
//!
//! - `in_memory`: In-memory implementations for tests and the CLI

pub mod in_memory;
pub mod traits;

pub use traits::{QuotationRepository, RepositoryError, RepositoryResult, SyndicateRepository};
