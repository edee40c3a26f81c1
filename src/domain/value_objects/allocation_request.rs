//! # Allocation Request
//!
//! The financing target a syndicate must satisfy.
//!
//! # Examples
//!
//! ```
//! use syndicate_optimizer::domain::value_objects::allocation_request::AllocationRequest;
//! use rust_decimal::Decimal;
//!
//! let request = AllocationRequest::new(Decimal::new(100_000_000, 0))
//!     .with_max_rate(Decimal::new(45, 1))
//!     .with_lender_bounds(2, 5);
//!
//! assert!(request.validate().is_ok());
//! assert_eq!(request.max_lenders(), 5);
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default minimum number of lenders in a syndicate.
pub const DEFAULT_MIN_LENDERS: usize = 1;

/// Default maximum number of lenders in a syndicate.
pub const DEFAULT_MAX_LENDERS: usize = 10;

fn default_min_lenders() -> usize {
    DEFAULT_MIN_LENDERS
}

fn default_max_lenders() -> usize {
    DEFAULT_MAX_LENDERS
}

/// Target amount and constraints for one optimization run.
///
/// # Invariants (checked by [`AllocationRequest::validate`])
///
/// - `target_amount > 0`
/// - `max_lenders >= 1`
/// - `min_lenders <= max_lenders`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// Amount the syndicate must fund.
    target_amount: Decimal,
    /// Ceiling on the blended rate, in annual percent.
    #[serde(default)]
    max_rate: Option<Decimal>,
    /// Fewest lenders allowed.
    #[serde(default = "default_min_lenders")]
    min_lenders: usize,
    /// Most lenders allowed.
    #[serde(default = "default_max_lenders")]
    max_lenders: usize,
}

impl AllocationRequest {
    /// Creates a request for `target_amount` with default lender bounds and
    /// no rate ceiling.
    #[must_use]
    pub fn new(target_amount: Decimal) -> Self {
        Self {
            target_amount,
            max_rate: None,
            min_lenders: DEFAULT_MIN_LENDERS,
            max_lenders: DEFAULT_MAX_LENDERS,
        }
    }

    /// Sets the blended-rate ceiling.
    #[must_use]
    pub fn with_max_rate(mut self, max_rate: Decimal) -> Self {
        self.max_rate = Some(max_rate);
        self
    }

    /// Sets the inclusive lender-count bounds.
    #[must_use]
    pub fn with_lender_bounds(mut self, min_lenders: usize, max_lenders: usize) -> Self {
        self.min_lenders = min_lenders;
        self.max_lenders = max_lenders;
        self
    }

    /// Checks the request invariants.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRequest` if the target is not positive,
    /// `max_lenders` is zero, or `min_lenders` exceeds `max_lenders`.
    pub fn validate(&self) -> DomainResult<()> {
        if self.target_amount <= Decimal::ZERO {
            return Err(DomainError::InvalidRequest(format!(
                "target amount must be positive, got {}",
                self.target_amount
            )));
        }
        if self.max_lenders < 1 {
            return Err(DomainError::InvalidRequest(
                "max lenders must be at least 1".to_string(),
            ));
        }
        if self.min_lenders > self.max_lenders {
            return Err(DomainError::InvalidRequest(format!(
                "min lenders ({}) exceeds max lenders ({})",
                self.min_lenders, self.max_lenders
            )));
        }
        Ok(())
    }

    /// Returns the target amount.
    #[inline]
    #[must_use]
    pub fn target_amount(&self) -> Decimal {
        self.target_amount
    }

    /// Returns the blended-rate ceiling, if any.
    #[inline]
    #[must_use]
    pub fn max_rate(&self) -> Option<Decimal> {
        self.max_rate
    }

    /// Returns the minimum lender count.
    #[inline]
    #[must_use]
    pub fn min_lenders(&self) -> usize {
        self.min_lenders
    }

    /// Returns the maximum lender count.
    #[inline]
    #[must_use]
    pub fn max_lenders(&self) -> usize {
        self.max_lenders
    }

    /// Returns true if `count` lies within the lender bounds.
    #[inline]
    #[must_use]
    pub fn accepts_lender_count(&self, count: usize) -> bool {
        (self.min_lenders..=self.max_lenders).contains(&count)
    }
}

impl fmt::Display for AllocationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AllocationRequest(target={}, lenders={}..={}",
            self.target_amount, self.min_lenders, self.max_lenders
        )?;
        if let Some(rate) = self.max_rate {
            write!(f, ", max_rate={}", rate)?;
        }
        write!(f, ")")
    }
}
