//! # Identifiers
//!
//! Strongly typed identifiers for syndication entities.
//!
//! - [`QuotationId`], [`SyndicateId`], [`FinancingRequestId`]: UUID-based
//! - [`LenderId`]: string-based, as issued by the bank registry
//!
//! # Examples
//!
//! ```
//! use syndicate_optimizer::domain::value_objects::{LenderId, QuotationId};
//!
//! let lender = LenderId::new("bank-042");
//! assert_eq!(lender.as_str(), "bank-042");
//!
//! let a = QuotationId::new_v4();
//! let b = QuotationId::new_v4();
//! assert_ne!(a, b);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            #[must_use]
            pub fn new_v4() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wraps an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID.
            #[inline]
            #[must_use]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

uuid_id!(
    /// Identifier of a bank quotation, assigned by the quotation store.
    QuotationId
);

uuid_id!(
    /// Identifier of a formed syndicate.
    SyndicateId
);

uuid_id!(
    /// Identifier of the financing request (loan proposal) quotations answer.
    FinancingRequestId
);

/// Identifier of a lending institution.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LenderId(String);

impl LenderId {
    /// Creates a lender identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LenderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LenderId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn uuid_ids_roundtrip_through_uuid() {
        let uuid = Uuid::new_v4();
        let id = QuotationId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }

    #[test]
    fn uuid_ids_serialize_as_plain_strings() {
        let id = FinancingRequestId::new_v4();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
        let back: FinancingRequestId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn lender_id_display_and_from() {
        let id = LenderId::from("bank-7");
        assert_eq!(id.to_string(), "bank-7");
        assert_eq!(id, LenderId::new(String::from("bank-7")));
    }
}
