//! # Application Errors
//!
//! Error types for the application layer.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)         - Invalid requests and allocations
//! ├── Repository(RepositoryError) - Storage failures
//! ├── NotFound                    - Unknown financing request
//! └── Configuration(String)       - Invalid settings
//! ```
//!
//! # Examples
//!
//! ```
//! use syndicate_optimizer::application::error::ApplicationError;
//! use syndicate_optimizer::infrastructure::persistence::RepositoryError;
//!
//! let err = ApplicationError::not_found("FinancingRequest", "req-42");
//! assert!(err.is_not_found());
//!
//! let err: ApplicationError = RepositoryError::connection("pool exhausted").into();
//! assert!(err.is_retryable());
//! ```

use crate::domain::errors::DomainError;
use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain error from business logic.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Storage error from a repository.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Resource not found.
    #[error("not found: {resource_type} with id {id}")]
    NotFound {
        /// Type of resource.
        resource_type: String,
        /// Resource identifier.
        id: String,
    },

    /// Settings could not be loaded or are out of range.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Returns true if this error is retryable.
    ///
    /// Only transient storage failures qualify; invalid requests must be
    /// corrected by the caller.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Repository(e) => e.is_transient(),
            _ => false,
        }
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Repository(e) => e.is_not_found(),
            _ => false,
        }
    }

    /// Returns true if the caller supplied an invalid request.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        match self {
            Self::Domain(e) => e.is_invalid_input(),
            _ => false,
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_counts_as_validation() {
        let err: ApplicationError = DomainError::InvalidRequest("max lenders is zero".into()).into();
        assert!(err.is_validation());
        assert!(!err.is_retryable());
    }

    #[test]
    fn infeasible_allocation_is_not_validation() {
        let err: ApplicationError = DomainError::InfeasibleAllocation.into();
        assert!(!err.is_validation());
    }

    #[test]
    fn not_found_error() {
        let err = ApplicationError::not_found("FinancingRequest", "req-1");
        assert!(err.to_string().contains("FinancingRequest"));
        assert!(err.to_string().contains("req-1"));
        assert!(err.is_not_found());
    }

    #[test]
    fn repository_not_found_is_not_found() {
        let err: ApplicationError = RepositoryError::not_found("Quotation", "q-1").into();
        assert!(err.is_not_found());
    }

    #[test]
    fn connection_failure_is_retryable() {
        let err: ApplicationError = RepositoryError::connection("refused").into();
        assert!(err.is_retryable());
    }

    #[test]
    fn duplicate_is_not_retryable() {
        let err: ApplicationError = RepositoryError::duplicate("Quotation", "q-1").into();
        assert!(!err.is_retryable());
    }

    #[test]
    fn configuration_error() {
        let err = ApplicationError::configuration("min_coverage_ratio out of range");
        assert!(err.to_string().starts_with("configuration error"));
    }
}
