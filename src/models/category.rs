//! Expense categories
//!
//! A closed set of eight categories. Unknown values coming from the backend
//! fall into `Other` rather than failing to decode.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Spending category of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Default)]
pub enum ExpenseCategory {
    #[default]
    Food,
    Transport,
    Shopping,
    Entertainment,
    Bills,
    Healthcare,
    Education,
    Other,
}

impl ExpenseCategory {
    /// All categories in form order
    pub const ALL: [ExpenseCategory; 8] = [
        Self::Food,
        Self::Transport,
        Self::Shopping,
        Self::Entertainment,
        Self::Bills,
        Self::Healthcare,
        Self::Education,
        Self::Other,
    ];

    /// Display name, identical to the wire value
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Bills => "Bills",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }

    /// Parse a category name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
    }

    /// Parse a category name, falling back to `Other` for unknown values
    pub fn parse_or_other(s: &str) -> Self {
        Self::parse(s).unwrap_or(Self::Other)
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl<'de> Deserialize<'de> for ExpenseCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw {
            Some(s) => {
                let category = Self::parse(&s);
                if category.is_none() {
                    log::debug!("unknown category {:?} mapped to Other", s);
                }
                category.unwrap_or(Self::Other)
            }
            None => Self::Other,
        })
    }
}
