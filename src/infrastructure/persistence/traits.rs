//! # Repository Traits
//!
//! Port definitions for persistence abstraction.
//!
//! The optimizer itself never touches storage. These ports describe the
//! collaborators that feed it quotations and keep the syndicates it forms.
//!
//! # Available Repositories
//!
//! - [`QuotationRepository`]: Lender quotations per financing request
//! - [`SyndicateRepository`]: Syndicates formed from feasible allocations
//!
//! # Examples
//!
//! ```ignore
//! use syndicate_optimizer::infrastructure::persistence::traits::QuotationRepository;
//!
//! async fn eligible_count(repo: &impl QuotationRepository, id: &FinancingRequestId) {
//!     let eligible = repo.find_eligible(id).await.unwrap();
//!     println!("{} quotations can be allocated", eligible.len());
//! }
//! ```

use crate::domain::entities::quotation::QuotationRecord;
use crate::domain::entities::syndicate::Syndicate;
use crate::domain::value_objects::{FinancingRequestId, QuotationId, QuotationStatus};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Entity not found.
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Duplicate entity.
    #[error("Duplicate entity: {entity_type} with id {id} already exists")]
    Duplicate {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),
}

impl RepositoryError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a duplicate error.
    #[must_use]
    pub fn duplicate(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is a duplicate error.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// Returns true if retrying the same operation may succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository for lender quotations.
///
/// Quotations are grouped by financing request and carry their workflow
/// status. Lookups return quotations in the order they were first saved.
#[async_trait]
pub trait QuotationRepository: Send + Sync + fmt::Debug {
    /// Saves a quotation for `request_id` with `status`.
    ///
    /// Saving a quotation id that already exists replaces its record and
    /// status in place.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Duplicate` if the quotation id is already
    /// stored under a different financing request.
    async fn save(
        &self,
        request_id: &FinancingRequestId,
        status: QuotationStatus,
        quotation: &QuotationRecord,
    ) -> RepositoryResult<()>;

    /// Finds every quotation for a financing request, whatever its status.
    async fn find_by_request(
        &self,
        request_id: &FinancingRequestId,
    ) -> RepositoryResult<Vec<QuotationRecord>>;

    /// Finds quotations that may be allocated: those in
    /// [`QuotationStatus::Responded`].
    async fn find_eligible(
        &self,
        request_id: &FinancingRequestId,
    ) -> RepositoryResult<Vec<QuotationRecord>>;

    /// Gets the status of a quotation.
    ///
    /// Returns `None` if the quotation does not exist.
    async fn status(&self, id: &QuotationId) -> RepositoryResult<Option<QuotationStatus>>;

    /// Changes the status of a quotation.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the quotation does not exist.
    async fn update_status(&self, id: &QuotationId, status: QuotationStatus)
    -> RepositoryResult<()>;

    /// Counts all quotations.
    async fn count(&self) -> RepositoryResult<u64>;
}

/// Repository for formed syndicates.
///
/// A financing request has at most one syndicate.
#[async_trait]
pub trait SyndicateRepository: Send + Sync + fmt::Debug {
    /// Saves a syndicate.
    ///
    /// Any syndicate previously stored for the same financing request is
    /// replaced.
    async fn save(&self, syndicate: &Syndicate) -> RepositoryResult<()>;

    /// Finds the syndicate formed for a financing request.
    ///
    /// Returns `None` if no syndicate exists.
    async fn find_by_request(
        &self,
        request_id: &FinancingRequestId,
    ) -> RepositoryResult<Option<Syndicate>>;

    /// Deletes the syndicate of a financing request.
    ///
    /// Returns `Ok(true)` if a syndicate was deleted, `Ok(false)` if none existed.
    async fn delete(&self, request_id: &FinancingRequestId) -> RepositoryResult<bool>;

    /// Counts all syndicates.
    async fn count(&self) -> RepositoryResult<u64>;
}
