//! # Syndicate Aggregate
//!
//! The persisted form of a feasible allocation.
//!
//! A [`Syndicate`] is one aggregate record per financing request, holding
//! one [`SyndicateMember`] per participating lender. It is what the
//! persistence layer stores after a successful optimization.
//!
//! # Examples
//!
//! ```
//! use syndicate_optimizer::application::services::SyndicateOptimizer;
//! use syndicate_optimizer::domain::entities::quotation::QuotationRecord;
//! use syndicate_optimizer::domain::entities::syndicate::Syndicate;
//! use syndicate_optimizer::domain::value_objects::{
//!     AllocationRequest, FinancingRequestId, LenderId, QuotationId,
//! };
//! use rust_decimal::Decimal;
//!
//! let quotations = vec![
//!     QuotationRecord::new(QuotationId::new_v4(), LenderId::new("a"), "Bank A",
//!         Decimal::new(60, 0), Decimal::new(4, 0)),
//!     QuotationRecord::new(QuotationId::new_v4(), LenderId::new("b"), "Bank B",
//!         Decimal::new(60, 0), Decimal::new(5, 0)),
//! ];
//! let request = AllocationRequest::new(Decimal::new(100, 0)).with_lender_bounds(1, 2);
//! let result = SyndicateOptimizer::default().optimize(&quotations, &request).unwrap();
//!
//! let syndicate = Syndicate::from_allocation(FinancingRequestId::new_v4(), &result).unwrap();
//! assert_eq!(syndicate.members().len(), 2);
//! assert!(syndicate.members()[0].role().is_lead());
//! ```

use crate::domain::entities::allocation::{AllocationEntry, AllocationResult};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{
    FinancingRequestId, LenderId, MemberRole, QuotationId, SyndicateId, Timestamp,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One lender's membership record in a syndicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyndicateMember {
    quotation_id: QuotationId,
    lender_id: LenderId,
    lender_name: String,
    allocated_amount: Decimal,
    interest_rate: Decimal,
    /// `allocated_amount / total_amount`, in `(0, 1]`.
    participation_share: Decimal,
    role: MemberRole,
    conditions: String,
}

impl SyndicateMember {
    fn from_entry(entry: &AllocationEntry, total: Decimal, role: MemberRole) -> DomainResult<Self> {
        let quotation = entry.quotation();
        Ok(Self {
            quotation_id: quotation.id(),
            lender_id: quotation.lender_id().clone(),
            lender_name: quotation.lender_name().to_string(),
            allocated_amount: entry.allocated_amount(),
            interest_rate: quotation.interest_rate(),
            participation_share: entry.share_of(total)?,
            role,
            conditions: quotation.conditions().to_string(),
        })
    }

    /// Returns the quotation this membership was drawn from.
    #[inline]
    #[must_use]
    pub fn quotation_id(&self) -> QuotationId {
        self.quotation_id
    }

    /// Returns the lender ID.
    #[inline]
    #[must_use]
    pub fn lender_id(&self) -> &LenderId {
        &self.lender_id
    }

    /// Returns the lender display name.
    #[inline]
    #[must_use]
    pub fn lender_name(&self) -> &str {
        &self.lender_name
    }

    /// Returns the allocated amount.
    #[inline]
    #[must_use]
    pub fn allocated_amount(&self) -> Decimal {
        self.allocated_amount
    }

    /// Returns the lender's interest rate.
    #[inline]
    #[must_use]
    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    /// Returns the participation as a fraction of the syndicate total.
    #[inline]
    #[must_use]
    pub fn participation_share(&self) -> Decimal {
        self.participation_share
    }

    /// Returns the participation in percent.
    #[must_use]
    pub fn participation_percentage(&self) -> Decimal {
        self.participation_share * Decimal::ONE_HUNDRED
    }

    /// Returns the member's role.
    #[inline]
    #[must_use]
    pub fn role(&self) -> MemberRole {
        self.role
    }

    /// Returns the lender's conditions.
    #[inline]
    #[must_use]
    pub fn conditions(&self) -> &str {
        &self.conditions
    }
}

/// A formed syndicate for one financing request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Syndicate {
    id: SyndicateId,
    financing_request_id: FinancingRequestId,
    total_amount: Decimal,
    weighted_avg_rate: Decimal,
    lender_count: usize,
    optimization_score: f64,
    members: Vec<SyndicateMember>,
    created_at: Timestamp,
    approved_at: Option<Timestamp>,
}

impl Syndicate {
    /// Builds a syndicate from a feasible allocation.
    ///
    /// Members keep the allocation's selection order. The member with the
    /// largest allocation is the lead; on ties the earliest selected wins.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InfeasibleAllocation` if `result` is not
    /// feasible, or `DomainError::Arithmetic` if a participation share
    /// cannot be computed.
    pub fn from_allocation(
        financing_request_id: FinancingRequestId,
        result: &AllocationResult,
    ) -> DomainResult<Self> {
        if !result.is_feasible() || result.entries().is_empty() {
            return Err(DomainError::InfeasibleAllocation);
        }

        let total = result.total_allocated();
        let lead_index = lead_position(result.entries());
        let members = result
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let role = if Some(i) == lead_index {
                    MemberRole::Lead
                } else {
                    MemberRole::Participant
                };
                SyndicateMember::from_entry(entry, total, role)
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Self {
            id: SyndicateId::new_v4(),
            financing_request_id,
            total_amount: total,
            weighted_avg_rate: result.blended_rate(),
            lender_count: members.len(),
            optimization_score: result.score(),
            members,
            created_at: Timestamp::now(),
            approved_at: None,
        })
    }

    /// Records the client's approval. Approving twice keeps the first time.
    pub fn approve(&mut self) {
        if self.approved_at.is_none() {
            self.approved_at = Some(Timestamp::now());
        }
    }

    /// Returns the syndicate ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> SyndicateId {
        self.id
    }

    /// Returns the financing request this syndicate funds.
    #[inline]
    #[must_use]
    pub fn financing_request_id(&self) -> FinancingRequestId {
        self.financing_request_id
    }

    /// Returns the total syndicated amount.
    #[inline]
    #[must_use]
    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    /// Returns the amount-weighted average rate.
    #[inline]
    #[must_use]
    pub fn weighted_avg_rate(&self) -> Decimal {
        self.weighted_avg_rate
    }

    /// Returns the number of lenders.
    #[inline]
    #[must_use]
    pub fn lender_count(&self) -> usize {
        self.lender_count
    }

    /// Returns the optimizer's score for this syndicate.
    #[inline]
    #[must_use]
    pub fn optimization_score(&self) -> f64 {
        self.optimization_score
    }

    /// Returns the members in selection order.
    #[inline]
    #[must_use]
    pub fn members(&self) -> &[SyndicateMember] {
        &self.members
    }

    /// Returns the lead arranger.
    #[must_use]
    pub fn lead(&self) -> Option<&SyndicateMember> {
        self.members.iter().find(|m| m.role.is_lead())
    }

    /// Returns when the syndicate was formed.
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns when the client approved the syndicate, if it has.
    #[inline]
    #[must_use]
    pub fn approved_at(&self) -> Option<Timestamp> {
        self.approved_at
    }

    /// Returns true once the client has approved.
    #[inline]
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.approved_at.is_some()
    }
}

impl fmt::Display for Syndicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Syndicate({} request={} lenders={} total={} rate={}%)",
            self.id,
            self.financing_request_id,
            self.lender_count,
            self.total_amount,
            self.weighted_avg_rate
        )
    }
}

/// Index of the largest allocation, earliest on ties.
fn lead_position(entries: &[AllocationEntry]) -> Option<usize> {
    let mut best: Option<(usize, Decimal)> = None;
    for (i, entry) in entries.iter().enumerate() {
        match best {
            Some((_, amount)) if entry.allocated_amount() <= amount => {}
            _ => best = Some((i, entry.allocated_amount())),
        }
    }
    best.map(|(i, _)| i)
}
