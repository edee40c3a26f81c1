//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`QuotationId`], [`SyndicateId`], [`FinancingRequestId`]: UUID-based identifiers
//! - [`LenderId`]: String-based identifier
//!
//! ## Requests
//!
//! - [`AllocationRequest`]: Target amount, rate ceiling and lender bounds
//!
//! ## Arithmetic
//!
//! - [`ArithmeticError`]: Error type for arithmetic failures
//! - [`CheckedArithmetic`]: Trait for safe arithmetic operations
//!
//! ## Domain Enums
//!
//! - [`QuotationStatus`]: Quotation lifecycle
//! - [`MemberRole`]: Lead or participant

pub mod allocation_request;
pub mod arithmetic;
pub mod enums;
pub mod ids;
pub mod timestamp;

pub use allocation_request::{AllocationRequest, DEFAULT_MAX_LENDERS, DEFAULT_MIN_LENDERS};
pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic};
pub use enums::{MemberRole, ParseEnumError, QuotationStatus};
pub use ids::{FinancingRequestId, LenderId, QuotationId, SyndicateId};
pub use timestamp::Timestamp;
