//! # In-Memory Syndicate Repository
//!
//! In-memory implementation of [`SyndicateRepository`] for testing.

use crate::domain::entities::syndicate::Syndicate;
use crate::domain::value_objects::FinancingRequestId;
use crate::infrastructure::persistence::traits::{RepositoryResult, SyndicateRepository};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`SyndicateRepository`].
///
/// Keyed by financing request, so saving replaces the previous syndicate.
#[derive(Debug, Clone)]
pub struct InMemorySyndicateRepository {
    storage: Arc<RwLock<HashMap<FinancingRequestId, Syndicate>>>,
}

impl InMemorySyndicateRepository {
    /// Creates a new empty in-memory syndicate repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the number of syndicates in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage
            .try_read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Returns true if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all syndicates from the repository.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }
}

impl Default for InMemorySyndicateRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SyndicateRepository for InMemorySyndicateRepository {
    async fn save(&self, syndicate: &Syndicate) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        storage.insert(syndicate.financing_request_id(), syndicate.clone());
        Ok(())
    }

    async fn find_by_request(
        &self,
        request_id: &FinancingRequestId,
    ) -> RepositoryResult<Option<Syndicate>> {
        let storage = self.storage.read().await;
        Ok(storage.get(request_id).cloned())
    }

    async fn delete(&self, request_id: &FinancingRequestId) -> RepositoryResult<bool> {
        let mut storage = self.storage.write().await;
        Ok(storage.remove(request_id).is_some())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let storage = self.storage.read().await;
        Ok(storage.len() as u64)
    }
}
