//! The persistence seam
//!
//! `Backend` mirrors the record API the application talks to: list, create,
//! update and delete for each collection. Creates take a draft and return the
//! stored record with the id the backend assigned. Implementations decide
//! where the data lives; [`crate::storage::JsonStorage`] keeps it in local
//! JSON files.

use crate::error::TallyResult;
use crate::models::{
    Expense, ExpenseDraft, ExpenseId, Job, JobDraft, JobId, PaymentDraft, PaymentId,
    SalaryPayment, WorkEntry, WorkEntryDraft, WorkEntryId,
};

/// Record storage for the four collections
pub trait Backend {
    fn list_expenses(&self) -> TallyResult<Vec<Expense>>;
    fn create_expense(&self, draft: &ExpenseDraft) -> TallyResult<Expense>;
    fn update_expense(&self, id: &ExpenseId, draft: &ExpenseDraft) -> TallyResult<Expense>;
    fn delete_expense(&self, id: &ExpenseId) -> TallyResult<()>;

    fn list_jobs(&self) -> TallyResult<Vec<Job>>;
    fn create_job(&self, draft: &JobDraft) -> TallyResult<Job>;
    fn update_job(&self, id: &JobId, draft: &JobDraft) -> TallyResult<Job>;
    fn delete_job(&self, id: &JobId) -> TallyResult<()>;

    fn list_work_entries(&self) -> TallyResult<Vec<WorkEntry>>;
    fn create_work_entry(&self, draft: &WorkEntryDraft) -> TallyResult<WorkEntry>;
    fn delete_work_entry(&self, id: &WorkEntryId) -> TallyResult<()>;

    fn list_salary_payments(&self) -> TallyResult<Vec<SalaryPayment>>;
    fn create_salary_payment(&self, draft: &PaymentDraft) -> TallyResult<SalaryPayment>;
    fn delete_salary_payment(&self, id: &PaymentId) -> TallyResult<()>;
}
