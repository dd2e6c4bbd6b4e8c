//! Validation errors for record drafts
//!
//! Drafts are checked before anything reaches the backend. The aggregation
//! engine itself never validates; it coerces.

use std::fmt;

use super::money::Money;

/// Reasons a draft can be rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftValidationError {
    EmptyTitle,
    EmptyName,
    NameTooLong(usize),
    NonPositiveAmount(Money),
    MissingJob,
}

impl fmt::Display for DraftValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Title cannot be empty"),
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Name is too long ({} characters, max 100)", len)
            }
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::MissingJob => write!(f, "A job must be selected"),
        }
    }
}

impl std::error::Error for DraftValidationError {}

/// Check that an amount entered by the user is strictly positive
pub fn require_positive(amount: Money) -> Result<(), DraftValidationError> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(DraftValidationError::NonPositiveAmount(amount))
    }
}
