//! Salary payment model
//!
//! A salary payment is money actually received against a job's accumulated
//! earnings. Its date is the moment it was recorded.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::ids::{JobId, PaymentId};
use super::job::job_ref;
use super::money::Money;
use super::validation::{require_positive, DraftValidationError};
use super::Record;

/// Money received for a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryPayment {
    #[serde(rename = "_id", alias = "id")]
    pub id: PaymentId,

    #[serde(default, with = "job_ref")]
    pub job: Option<JobId>,

    #[serde(default)]
    pub amount: Money,

    /// When the payment was recorded
    #[serde(default, alias = "createdAt", with = "super::timestamp")]
    pub date: Option<NaiveDateTime>,
}

impl SalaryPayment {
    /// Materialise a draft under the given id, stamped with `recorded_at`
    pub fn from_draft(id: PaymentId, draft: &PaymentDraft, recorded_at: NaiveDateTime) -> Self {
        Self {
            id,
            job: Some(draft.job.clone()),
            amount: draft.amount,
            date: Some(recorded_at),
        }
    }

    /// Whether this payment belongs to the given job
    pub fn is_for(&self, job: &JobId) -> bool {
        self.job.as_ref() == Some(job)
    }
}

impl Record for SalaryPayment {
    fn date(&self) -> Option<NaiveDateTime> {
        self.date
    }

    fn amount(&self) -> Money {
        self.amount
    }
}

/// Fields the user supplies when recording a payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDraft {
    pub job: JobId,
    pub amount: Money,
}

impl PaymentDraft {
    pub fn new(job: JobId, amount: Money) -> Self {
        Self { job, amount }
    }

    /// Validate the draft
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        if self.job.as_str().trim().is_empty() {
            return Err(DraftValidationError::MissingJob);
        }
        require_positive(self.amount)
    }
}
