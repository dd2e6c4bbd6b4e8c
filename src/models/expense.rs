//! Expense model
//!
//! An expense is a single dated purchase in one of the fixed categories.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::ids::ExpenseId;
use super::money::Money;
use super::validation::{require_positive, DraftValidationError};
use super::Record;

/// An expense record as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(rename = "_id", alias = "id")]
    pub id: ExpenseId,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub category: ExpenseCategory,

    #[serde(default)]
    pub amount: Money,

    /// When the expense happened; `None` when the stored value was unparseable
    #[serde(default, with = "super::timestamp")]
    pub date: Option<NaiveDateTime>,
}

impl Expense {
    /// Materialise a draft under the given id
    pub fn from_draft(id: ExpenseId, draft: &ExpenseDraft) -> Self {
        Self {
            id,
            title: draft.title.trim().to_string(),
            category: draft.category,
            amount: draft.amount,
            date: Some(draft.date),
        }
    }
}

impl Record for Expense {
    fn date(&self) -> Option<NaiveDateTime> {
        self.date
    }

    fn amount(&self) -> Money {
        self.amount
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.title, self.category, self.amount)
    }
}

/// Fields the user supplies when creating or editing an expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub title: String,
    pub category: ExpenseCategory,
    pub amount: Money,
    #[serde(with = "super::timestamp::required")]
    pub date: NaiveDateTime,
}

impl ExpenseDraft {
    pub fn new(
        title: impl Into<String>,
        category: ExpenseCategory,
        amount: Money,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            title: title.into(),
            category,
            amount,
            date,
        }
    }

    /// Start an edit from an existing record
    ///
    /// Returns `None` when the record's date could not be read, since a draft
    /// always needs one.
    pub fn from_expense(expense: &Expense) -> Option<Self> {
        Some(Self {
            title: expense.title.clone(),
            category: expense.category,
            amount: expense.amount,
            date: expense.date?,
        })
    }

    /// Validate the draft
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        if self.title.trim().is_empty() {
            return Err(DraftValidationError::EmptyTitle);
        }
        require_positive(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_decode_api_shape() {
        let json = r#"{
            "_id": "65f1a0",
            "title": "Lunch",
            "category": "Food",
            "amount": 12.5,
            "date": "2024-03-01T12:00:00",
            "user": "u1",
            "__v": 0
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.id.as_str(), "65f1a0");
        assert_eq!(expense.category, ExpenseCategory::Food);
        assert_eq!(expense.amount.cents(), 1250);
        assert_eq!(expense.date, Some(noon(2024, 3, 1)));
    }

    #[test]
    fn test_decode_degraded_record() {
        let json = r#"{"id": "x", "category": "Pets", "amount": null, "date": "soon"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.category, ExpenseCategory::Other);
        assert!(expense.amount.is_zero());
        assert!(expense.date.is_none());
        assert!(expense.title.is_empty());
    }

    #[test]
    fn test_decode_malformed_string_amount() {
        let json = r#"[
            {"_id": "a", "title": "Tea", "category": "Food", "amount": "1.€", "date": "2024-03-01"},
            {"_id": "b", "title": "Bus", "category": "Transport", "amount": "2.75", "date": "2024-03-01"}
        ]"#;
        let expenses: Vec<Expense> = serde_json::from_str(json).unwrap();
        assert_eq!(expenses.len(), 2);
        assert!(expenses[0].amount.is_zero());
        assert_eq!(expenses[1].amount.cents(), 275);
    }

    #[test]
    fn test_draft_validation() {
        let date = noon(2024, 3, 1);
        let ok = ExpenseDraft::new("Bus", ExpenseCategory::Transport, Money::from_cents(275), date);
        assert!(ok.validate().is_ok());

        let blank = ExpenseDraft::new("  ", ExpenseCategory::Food, Money::from_cents(100), date);
        assert_eq!(blank.validate(), Err(DraftValidationError::EmptyTitle));

        let zero = ExpenseDraft::new("Tea", ExpenseCategory::Food, Money::zero(), date);
        assert!(matches!(
            zero.validate(),
            Err(DraftValidationError::NonPositiveAmount(_))
        ));
    }

    #[test]
    fn test_from_draft_trims_title() {
        let draft = ExpenseDraft::new(
            "  Rent ",
            ExpenseCategory::Bills,
            Money::from_cents(90000),
            noon(2024, 3, 1),
        );
        let expense = Expense::from_draft(ExpenseId::new("e1"), &draft);
        assert_eq!(expense.title, "Rent");
        assert_eq!(ExpenseDraft::from_expense(&expense).unwrap().title, "Rent");
    }
}
