//! # In-Memory Quotation Repository
//!
//! In-memory implementation of [`QuotationRepository`] for testing.
//!
//! Quotations are kept per financing request in the order they were first
//! saved, so eligible lookups feed the optimizer a stable input order.

use crate::domain::entities::quotation::QuotationRecord;
use crate::domain::value_objects::{FinancingRequestId, QuotationId, QuotationStatus};
use crate::infrastructure::persistence::traits::{
    QuotationRepository, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct StoredQuotation {
    status: QuotationStatus,
    record: QuotationRecord,
}

/// In-memory implementation of [`QuotationRepository`].
#[derive(Debug, Clone)]
pub struct InMemoryQuotationRepository {
    storage: Arc<RwLock<HashMap<FinancingRequestId, Vec<StoredQuotation>>>>,
}

impl InMemoryQuotationRepository {
    /// Creates a new empty in-memory quotation repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the number of quotations in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage
            .try_read()
            .map(|guard| guard.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    /// Returns true if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all quotations from the repository.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }
}

impl Default for InMemoryQuotationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuotationRepository for InMemoryQuotationRepository {
    async fn save(
        &self,
        request_id: &FinancingRequestId,
        status: QuotationStatus,
        quotation: &QuotationRecord,
    ) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;

        let owner = storage.iter().find_map(|(owner, stored)| {
            stored
                .iter()
                .any(|s| s.record.id() == quotation.id())
                .then_some(*owner)
        });
        if owner.is_some_and(|owner| owner != *request_id) {
            return Err(RepositoryError::duplicate(
                "Quotation",
                quotation.id().to_string(),
            ));
        }

        let stored = storage.entry(*request_id).or_default();
        let entry = StoredQuotation {
            status,
            record: quotation.clone(),
        };
        match stored.iter_mut().find(|s| s.record.id() == quotation.id()) {
            Some(existing) => *existing = entry,
            None => stored.push(entry),
        }
        Ok(())
    }

    async fn find_by_request(
        &self,
        request_id: &FinancingRequestId,
    ) -> RepositoryResult<Vec<QuotationRecord>> {
        let storage = self.storage.read().await;
        Ok(storage
            .get(request_id)
            .map(|stored| stored.iter().map(|s| s.record.clone()).collect())
            .unwrap_or_default())
    }

    async fn find_eligible(
        &self,
        request_id: &FinancingRequestId,
    ) -> RepositoryResult<Vec<QuotationRecord>> {
        let storage = self.storage.read().await;
        Ok(storage
            .get(request_id)
            .map(|stored| {
                stored
                    .iter()
                    .filter(|s| s.status.is_eligible())
                    .map(|s| s.record.clone())
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn status(&self, id: &QuotationId) -> RepositoryResult<Option<QuotationStatus>> {
        let storage = self.storage.read().await;
        Ok(storage
            .values()
            .flatten()
            .find(|s| s.record.id() == *id)
            .map(|s| s.status))
    }

    async fn update_status(
        &self,
        id: &QuotationId,
        status: QuotationStatus,
    ) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        let stored = storage
            .values_mut()
            .flatten()
            .find(|s| s.record.id() == *id)
            .ok_or_else(|| RepositoryError::not_found("Quotation", id.to_string()))?;
        stored.status = status;
        Ok(())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let storage = self.storage.read().await;
        Ok(storage.values().map(Vec::len).sum::<usize>() as u64)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::value_objects::LenderId;
    use rust_decimal::Decimal;

    fn create_test_quotation(lender: &str, amount: i64) -> QuotationRecord {
        QuotationRecord::new(
            QuotationId::new_v4(),
            LenderId::new(lender),
            lender,
            Decimal::new(amount, 0),
            Decimal::new(4, 0),
        )
    }

    #[tokio::test]
    async fn new_repository_is_empty() {
        let repo = InMemoryQuotationRepository::new();
        assert!(repo.is_empty());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn find_by_request_preserves_insertion_order() {
        let repo = InMemoryQuotationRepository::new();
        let request_id = FinancingRequestId::new_v4();

        for lender in ["c", "a", "b"] {
            repo.save(&request_id, QuotationStatus::Responded, &create_test_quotation(lender, 10))
                .await
                .unwrap();
        }

        let found = repo.find_by_request(&request_id).await.unwrap();
        let lenders: Vec<&str> = found.iter().map(|q| q.lender_id().as_str()).collect();
        assert_eq!(lenders, vec!["c", "a", "b"]);
        assert_eq!(repo.len(), 3);
    }

    #[tokio::test]
    async fn find_eligible_returns_only_responded() {
        let repo = InMemoryQuotationRepository::new();
        let request_id = FinancingRequestId::new_v4();

        repo.save(&request_id, QuotationStatus::Sent, &create_test_quotation("sent", 10))
            .await
            .unwrap();
        repo.save(&request_id, QuotationStatus::Responded, &create_test_quotation("ok", 10))
            .await
            .unwrap();
        repo.save(&request_id, QuotationStatus::Rejected, &create_test_quotation("no", 10))
            .await
            .unwrap();

        let eligible = repo.find_eligible(&request_id).await.unwrap();
        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].lender_id().as_str(), "ok");
    }

    #[tokio::test]
    async fn requests_are_isolated() {
        let repo = InMemoryQuotationRepository::new();
        let first = FinancingRequestId::new_v4();
        let second = FinancingRequestId::new_v4();

        repo.save(&first, QuotationStatus::Responded, &create_test_quotation("a", 10))
            .await
            .unwrap();

        assert!(repo.find_eligible(&second).await.unwrap().is_empty());
        assert_eq!(repo.find_by_request(&first).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn resave_replaces_in_place() {
        let repo = InMemoryQuotationRepository::new();
        let request_id = FinancingRequestId::new_v4();
        let first = create_test_quotation("a", 10);
        let second = create_test_quotation("b", 10);

        repo.save(&request_id, QuotationStatus::Sent, &first).await.unwrap();
        repo.save(&request_id, QuotationStatus::Responded, &second).await.unwrap();
        repo.save(&request_id, QuotationStatus::Responded, &first.clone().with_conditions("secured"))
            .await
            .unwrap();

        let found = repo.find_eligible(&request_id).await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id(), first.id());
        assert_eq!(found[0].conditions(), "secured");
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn same_quotation_under_other_request_is_duplicate() {
        let repo = InMemoryQuotationRepository::new();
        let quotation = create_test_quotation("a", 10);

        repo.save(&FinancingRequestId::new_v4(), QuotationStatus::Responded, &quotation)
            .await
            .unwrap();
        let err = repo
            .save(&FinancingRequestId::new_v4(), QuotationStatus::Responded, &quotation)
            .await
            .unwrap_err();
        assert!(err.is_duplicate());
    }

    #[tokio::test]
    async fn update_status() {
        let repo = InMemoryQuotationRepository::new();
        let request_id = FinancingRequestId::new_v4();
        let quotation = create_test_quotation("a", 10);

        repo.save(&request_id, QuotationStatus::Viewed, &quotation).await.unwrap();
        assert!(repo.find_eligible(&request_id).await.unwrap().is_empty());

        repo.update_status(&quotation.id(), QuotationStatus::Responded)
            .await
            .unwrap();
        assert_eq!(
            repo.status(&quotation.id()).await.unwrap(),
            Some(QuotationStatus::Responded)
        );
        assert_eq!(repo.find_eligible(&request_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_status_of_unknown_quotation_fails() {
        let repo = InMemoryQuotationRepository::new();
        let err = repo
            .update_status(&QuotationId::new_v4(), QuotationStatus::Accepted)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn clear() {
        let repo = InMemoryQuotationRepository::new();
        repo.save(&FinancingRequestId::new_v4(), QuotationStatus::Responded, &create_test_quotation("a", 10))
            .await
            .unwrap();
        repo.clear().await;
        assert!(repo.is_empty());
    }
}
