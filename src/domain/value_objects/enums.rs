//! # Domain Enums
//!
//! Enumeration types for syndication concepts.
//!
//! - [`QuotationStatus`] - Lifecycle of a bank's quotation
//! - [`MemberRole`] - Role of a lender inside a formed syndicate
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `Display`, `FromStr`, and Serde traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a quotation sent to a bank.
///
/// # Examples
///
/// ```
/// use syndicate_optimizer::domain::value_objects::enums::QuotationStatus;
///
/// assert!(QuotationStatus::Responded.is_eligible());
/// assert!(!QuotationStatus::Sent.is_eligible());
/// assert_eq!(QuotationStatus::Responded.to_string(), "responded");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotationStatus {
    /// Request delivered to the bank, no answer yet.
    #[default]
    Sent,
    /// Bank opened the request.
    Viewed,
    /// Bank answered with an amount and a rate.
    Responded,
    /// Offer accepted into a syndicate.
    Accepted,
    /// Offer declined.
    Rejected,
    /// Offer lapsed before a decision.
    Expired,
}

impl QuotationStatus {
    /// Returns true if a quotation in this status may enter an optimization run.
    ///
    /// Only answered, still-open offers are eligible.
    #[inline]
    #[must_use]
    pub const fn is_eligible(self) -> bool {
        matches!(self, Self::Responded)
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Viewed => "viewed",
            Self::Responded => "responded",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for QuotationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuotationStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sent" => Ok(Self::Sent),
            "viewed" => Ok(Self::Viewed),
            "responded" => Ok(Self::Responded),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            "expired" => Ok(Self::Expired),
            _ => Err(ParseEnumError::InvalidValue(
                "QuotationStatus",
                s.to_string(),
            )),
        }
    }
}

/// Role of a lender within a syndicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    /// Arranger holding the largest allocation.
    Lead,
    /// Any other participating lender.
    Participant,
}

impl MemberRole {
    /// Returns true for the lead arranger.
    #[inline]
    #[must_use]
    pub const fn is_lead(self) -> bool {
        matches!(self, Self::Lead)
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lead => write!(f, "Lead"),
            Self::Participant => write!(f, "Participant"),
        }
    }
}

impl FromStr for MemberRole {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lead" => Ok(Self::Lead),
            "participant" => Ok(Self::Participant),
            _ => Err(ParseEnumError::InvalidValue("MemberRole", s.to_string())),
        }
    }
}

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEnumError {
    /// The provided string value is not valid for the enum.
    InvalidValue(&'static str, String),
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue(enum_name, value) => {
                write!(f, "invalid {} value: '{}'", enum_name, value)
            }
        }
    }
}

impl std::error::Error for ParseEnumError {}
