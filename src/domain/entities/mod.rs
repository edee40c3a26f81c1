//! # Domain Entities
//!
//! ## Aggregates
//!
//! - [`Syndicate`]: Formed syndicate with its member records
//!
//! ## Entities
//!
//! - [`QuotationRecord`]: A lender's offer
//! - [`AllocationEntry`]: Amount assigned to one quotation
//! - [`AllocationResult`]: Outcome of an allocation attempt

pub mod allocation;
pub mod quotation;
pub mod syndicate;

pub use allocation::{AllocationEntry, AllocationResult};
pub use quotation::QuotationRecord;
pub use syndicate::{Syndicate, SyndicateMember};
