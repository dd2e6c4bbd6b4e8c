//! Core data models for Tally
//!
//! Value records as the backend stores them (expenses, jobs, work entries,
//! salary payments), the drafts users fill in to create them, and the money
//! and calendar types the aggregation engine works with.

pub mod category;
pub mod expense;
pub mod ids;
pub mod job;
pub mod money;
pub mod period;
pub mod salary_payment;
pub mod timestamp;
pub mod validation;
pub mod work_entry;

pub use category::ExpenseCategory;
pub use expense::{Expense, ExpenseDraft};
pub use ids::{ExpenseId, JobId, PaymentId, WorkEntryId};
pub use job::{resolve_job_name, Job, JobDraft, UNKNOWN_JOB};
pub use money::Money;
pub use period::{shift_month, MonthRange};
pub use salary_payment::{PaymentDraft, SalaryPayment};
pub use validation::DraftValidationError;
pub use work_entry::{WorkEntry, WorkEntryDraft};

use chrono::NaiveDateTime;

/// A dated monetary record the aggregation engine can filter and total
pub trait Record {
    /// The record's timestamp, `None` when it could not be read
    fn date(&self) -> Option<NaiveDateTime>;

    /// The record's amount
    fn amount(&self) -> Money;
}

impl<R: Record + ?Sized> Record for &R {
    fn date(&self) -> Option<NaiveDateTime> {
        (**self).date()
    }

    fn amount(&self) -> Money {
        (**self).amount()
    }
}
