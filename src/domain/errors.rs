//! # Domain Errors
//!
//! Business-rule violations raised by the domain layer.
//!
//! Infeasibility of an allocation is not an error: it is reported through
//! `AllocationResult::is_feasible`. Errors here mean the caller supplied
//! something that cannot be processed at all.

use crate::domain::value_objects::arithmetic::ArithmeticError;
use thiserror::Error;

/// Domain layer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The allocation request violates its invariants.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// An allocation entry violates its invariants.
    #[error("invalid allocation: {0}")]
    InvalidAllocation(String),

    /// A syndicate was requested from an infeasible allocation.
    #[error("allocation is infeasible")]
    InfeasibleAllocation,

    /// Checked arithmetic failed.
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

impl DomainError {
    /// Returns true if the caller must change its input before retrying.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidRequest(_) | Self::InvalidAllocation(_))
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats() {
        assert_eq!(
            DomainError::InvalidRequest("min lenders (3) exceeds max lenders (2)".into())
                .to_string(),
            "invalid request: min lenders (3) exceeds max lenders (2)"
        );
        assert_eq!(
            DomainError::InfeasibleAllocation.to_string(),
            "allocation is infeasible"
        );
    }

    #[test]
    fn arithmetic_converts() {
        let err: DomainError = ArithmeticError::Overflow.into();
        assert_eq!(err, DomainError::Arithmetic(ArithmeticError::Overflow));
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn invalid_input_classification() {
        assert!(DomainError::InvalidRequest(String::new()).is_invalid_input());
        assert!(DomainError::InvalidAllocation(String::new()).is_invalid_input());
        assert!(!DomainError::InfeasibleAllocation.is_invalid_input());
    }
}
