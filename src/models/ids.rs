//! Strongly-typed ID wrappers for all entity types
//!
//! Identifiers are opaque strings assigned by the backend. Using newtype
//! wrappers prevents accidentally mixing up IDs from different entity types
//! at compile time; equality is plain string equality.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Prefix carried by identifiers minted locally before the backend confirms them
pub const PROVISIONAL_PREFIX: &str = "local-";

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an identifier issued by the backend
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Mint a fresh random identifier
            pub fn generate() -> Self {
                Self(Uuid::new_v4().simple().to_string())
            }

            /// Mint a placeholder identifier for an optimistic insert
            pub fn provisional() -> Self {
                Self(format!("{}{}", PROVISIONAL_PREFIX, Uuid::new_v4().simple()))
            }

            /// Whether this id was minted locally and not yet confirmed
            pub fn is_provisional(&self) -> bool {
                self.0.starts_with(PROVISIONAL_PREFIX)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

define_id!(ExpenseId);
define_id!(JobId);
define_id!(WorkEntryId);
define_id!(PaymentId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_by_string() {
        let a = JobId::new("65f0c2");
        let b = JobId::from("65f0c2");
        assert_eq!(a, b);
        assert_ne!(a, JobId::new("65f0c3"));
    }

    #[test]
    fn test_generate_is_unique() {
        let a = ExpenseId::generate();
        let b = ExpenseId::generate();
        assert_ne!(a, b);
        assert!(!a.is_provisional());
    }

    #[test]
    fn test_provisional() {
        let id = WorkEntryId::provisional();
        assert!(id.is_provisional());
        assert!(id.to_string().starts_with(PROVISIONAL_PREFIX));
    }

    #[test]
    fn test_serialization_is_transparent() {
        let id = PaymentId::new("abc123");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc123\"");
        let back: PaymentId = serde_json::from_str("\"abc123\"").unwrap();
        assert_eq!(back, id);
    }
}
