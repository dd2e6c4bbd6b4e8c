//! Work entry model
//!
//! A work entry records an amount earned for a job on a given day.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::ids::{JobId, WorkEntryId};
use super::job::job_ref;
use super::money::Money;
use super::validation::{require_positive, DraftValidationError};
use super::Record;

/// Earnings recorded against a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkEntry {
    #[serde(rename = "_id", alias = "id")]
    pub id: WorkEntryId,

    /// The job this entry belongs to; `None` when the job was deleted
    #[serde(default, with = "job_ref")]
    pub job: Option<JobId>,

    #[serde(default, with = "super::timestamp")]
    pub date: Option<NaiveDateTime>,

    #[serde(default)]
    pub amount: Money,
}

impl WorkEntry {
    /// Materialise a draft under the given id
    pub fn from_draft(id: WorkEntryId, draft: &WorkEntryDraft) -> Self {
        Self {
            id,
            job: Some(draft.job.clone()),
            date: Some(draft.date),
            amount: draft.amount,
        }
    }

    /// Whether this entry belongs to the given job
    pub fn is_for(&self, job: &JobId) -> bool {
        self.job.as_ref() == Some(job)
    }
}

impl Record for WorkEntry {
    fn date(&self) -> Option<NaiveDateTime> {
        self.date
    }

    fn amount(&self) -> Money {
        self.amount
    }
}

/// Fields the user supplies when logging work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkEntryDraft {
    pub job: JobId,
    #[serde(with = "super::timestamp::required")]
    pub date: NaiveDateTime,
    pub amount: Money,
}

impl WorkEntryDraft {
    pub fn new(job: JobId, date: NaiveDateTime, amount: Money) -> Self {
        Self { job, date, amount }
    }

    /// Validate the draft
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        if self.job.as_str().trim().is_empty() {
            return Err(DraftValidationError::MissingJob);
        }
        require_positive(self.amount)
    }
}
