//! # Optimize Syndicate Use Case
//!
//! Forms a syndicate for one financing request.
//!
//! # Flow
//!
//! 1. Validate the allocation request
//! 2. Reject requests with no quotations on record
//! 3. Load the request's eligible quotations
//! 4. Run the [`SyndicateOptimizer`]
//! 5. If the selected allocation is feasible, build and save a [`Syndicate`]
//!
//! An infeasible allocation is returned to the caller without touching
//! storage, leaving any previously stored syndicate in place.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::optimizer::SyndicateOptimizer;
use crate::domain::entities::allocation::AllocationResult;
use crate::domain::entities::syndicate::Syndicate;
use crate::domain::value_objects::{AllocationRequest, FinancingRequestId};
use crate::infrastructure::persistence::traits::{QuotationRepository, SyndicateRepository};
use serde::Serialize;
use std::sync::Arc;

/// Outcome of [`OptimizeSyndicateUseCase::execute`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizeSyndicateResponse {
    /// The selected allocation, feasible or not.
    pub result: AllocationResult,
    /// Strategy that produced `result`. `None` when no quotation was usable.
    pub selected_strategy: Option<&'static str>,
    /// The stored syndicate, present only for feasible results.
    pub syndicate: Option<Syndicate>,
}

impl OptimizeSyndicateResponse {
    /// Returns `true` if a syndicate was formed.
    #[must_use]
    pub fn is_formed(&self) -> bool {
        self.syndicate.is_some()
    }
}

/// Use case for optimizing and storing a syndicate.
#[derive(Debug, Clone)]
pub struct OptimizeSyndicateUseCase {
    quotation_repository: Arc<dyn QuotationRepository>,
    syndicate_repository: Arc<dyn SyndicateRepository>,
    optimizer: SyndicateOptimizer,
}

impl OptimizeSyndicateUseCase {
    /// Creates a new use case.
    #[must_use]
    pub fn new(
        quotation_repository: Arc<dyn QuotationRepository>,
        syndicate_repository: Arc<dyn SyndicateRepository>,
        optimizer: SyndicateOptimizer,
    ) -> Self {
        Self {
            quotation_repository,
            syndicate_repository,
            optimizer,
        }
    }

    /// Optimizes the syndicate for `request_id`.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::Domain` if the request is invalid
    /// - `ApplicationError::NotFound` if no quotation was ever recorded for
    ///   `request_id`
    /// - `ApplicationError::Repository` if loading or saving fails
    pub async fn execute(
        &self,
        request_id: &FinancingRequestId,
        request: &AllocationRequest,
    ) -> ApplicationResult<OptimizeSyndicateResponse> {
        request.validate()?;

        if self
            .quotation_repository
            .find_by_request(request_id)
            .await?
            .is_empty()
        {
            return Err(ApplicationError::not_found(
                "FinancingRequest",
                request_id.to_string(),
            ));
        }

        let quotations = self.quotation_repository.find_eligible(request_id).await?;
        tracing::debug!(
            request_id = %request_id,
            quotations = quotations.len(),
            "loaded eligible quotations"
        );

        let report = self.optimizer.optimize_with_report(&quotations, request)?;

        if !report.is_feasible() {
            tracing::info!(request_id = %request_id, "no feasible syndicate");
            return Ok(OptimizeSyndicateResponse {
                result: report.selected,
                selected_strategy: report.selected_strategy,
                syndicate: None,
            });
        }

        let syndicate = Syndicate::from_allocation(*request_id, &report.selected)?;
        self.syndicate_repository.save(&syndicate).await?;

        tracing::info!(
            request_id = %request_id,
            syndicate_id = %syndicate.id(),
            lenders = syndicate.lender_count(),
            weighted_avg_rate = %syndicate.weighted_avg_rate(),
            "syndicate formed"
        );

        Ok(OptimizeSyndicateResponse {
            result: report.selected,
            selected_strategy: report.selected_strategy,
            syndicate: Some(syndicate),
        })
    }
}
