//! Local JSON storage for Tally
//!
//! One JSON file per collection with atomic writes and automatic directory
//! creation. `JsonStorage` implements [`Backend`], assigning ids and payment
//! timestamps the way the record API does.

pub mod collection;
pub mod file_io;
pub mod init;

pub use collection::{CollectionRepository, StoredRecord};
pub use file_io::{read_json, write_json_atomic};
pub use init::{initialize_storage, needs_initialization};

use chrono::Local;

use crate::backend::Backend;
use crate::config::paths::TallyPaths;
use crate::error::{TallyError, TallyResult};
use crate::models::{
    Expense, ExpenseDraft, ExpenseId, Job, JobDraft, JobId, PaymentDraft, PaymentId,
    SalaryPayment, WorkEntry, WorkEntryDraft, WorkEntryId,
};

/// Backend that keeps every collection in a local JSON file
pub struct JsonStorage {
    paths: TallyPaths,
    pub expenses: CollectionRepository<Expense>,
    pub jobs: CollectionRepository<Job>,
    pub work_entries: CollectionRepository<WorkEntry>,
    pub salary_payments: CollectionRepository<SalaryPayment>,
}

impl JsonStorage {
    /// Create the storage and make sure its directories exist
    pub fn new(paths: TallyPaths) -> Result<Self, TallyError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: CollectionRepository::new(paths.expenses_file()),
            jobs: CollectionRepository::new(paths.jobs_file()),
            work_entries: CollectionRepository::new(paths.work_entries_file()),
            salary_payments: CollectionRepository::new(paths.salary_payments_file()),
            paths,
        })
    }

    /// Open storage and load everything from disk
    pub fn open(paths: TallyPaths) -> Result<Self, TallyError> {
        let storage = Self::new(paths)?;
        storage.load_all()?;
        Ok(storage)
    }

    pub fn paths(&self) -> &TallyPaths {
        &self.paths
    }

    /// Load all collections from disk
    pub fn load_all(&self) -> Result<(), TallyError> {
        self.expenses.load()?;
        self.jobs.load()?;
        self.work_entries.load()?;
        self.salary_payments.load()?;
        Ok(())
    }

    fn require_job(&self, id: &JobId) -> TallyResult<()> {
        if self.jobs.contains(id)? {
            Ok(())
        } else {
            Err(TallyError::job_not_found(id.as_str()))
        }
    }
}

impl Backend for JsonStorage {
    fn list_expenses(&self) -> TallyResult<Vec<Expense>> {
        self.expenses.get_all()
    }

    fn create_expense(&self, draft: &ExpenseDraft) -> TallyResult<Expense> {
        draft.validate()?;
        let expense = Expense::from_draft(ExpenseId::generate(), draft);
        self.expenses.insert(expense.clone())?;
        Ok(expense)
    }

    fn update_expense(&self, id: &ExpenseId, draft: &ExpenseDraft) -> TallyResult<Expense> {
        draft.validate()?;
        let expense = Expense::from_draft(id.clone(), draft);
        self.expenses.replace(expense.clone())?;
        Ok(expense)
    }

    fn delete_expense(&self, id: &ExpenseId) -> TallyResult<()> {
        self.expenses.remove(id).map(|_| ())
    }

    fn list_jobs(&self) -> TallyResult<Vec<Job>> {
        self.jobs.get_all()
    }

    fn create_job(&self, draft: &JobDraft) -> TallyResult<Job> {
        draft.validate()?;
        let job = Job::new(JobId::generate(), draft.normalized_name());
        self.jobs.insert(job.clone())?;
        Ok(job)
    }

    fn update_job(&self, id: &JobId, draft: &JobDraft) -> TallyResult<Job> {
        draft.validate()?;
        let job = Job::new(id.clone(), draft.normalized_name());
        self.jobs.replace(job.clone())?;
        Ok(job)
    }

    fn delete_job(&self, id: &JobId) -> TallyResult<()> {
        // Entries and payments keep their job reference and show as unknown
        self.jobs.remove(id).map(|_| ())
    }

    fn list_work_entries(&self) -> TallyResult<Vec<WorkEntry>> {
        self.work_entries.get_all()
    }

    fn create_work_entry(&self, draft: &WorkEntryDraft) -> TallyResult<WorkEntry> {
        draft.validate()?;
        self.require_job(&draft.job)?;
        let entry = WorkEntry::from_draft(WorkEntryId::generate(), draft);
        self.work_entries.insert(entry.clone())?;
        Ok(entry)
    }

    fn delete_work_entry(&self, id: &WorkEntryId) -> TallyResult<()> {
        self.work_entries.remove(id).map(|_| ())
    }

    fn list_salary_payments(&self) -> TallyResult<Vec<SalaryPayment>> {
        self.salary_payments.get_all()
    }

    fn create_salary_payment(&self, draft: &PaymentDraft) -> TallyResult<SalaryPayment> {
        draft.validate()?;
        self.require_job(&draft.job)?;
        let payment =
            SalaryPayment::from_draft(PaymentId::generate(), draft, Local::now().naive_local());
        self.salary_payments.insert(payment.clone())?;
        Ok(payment)
    }

    fn delete_salary_payment(&self, id: &PaymentId) -> TallyResult<()> {
        self.salary_payments.remove(id).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn setup() -> (TempDir, JsonStorage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = JsonStorage::open(paths).unwrap();
        (temp_dir, storage)
    }

    fn noon(d: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, storage) = setup();
        assert!(temp_dir.path().join("data").exists());
        assert!(storage.list_expenses().unwrap().is_empty());
    }

    #[test]
    fn test_expense_crud_persists() {
        let (temp_dir, storage) = setup();
        let draft = ExpenseDraft::new(" Lunch ", ExpenseCategory::Food, Money::from_cents(1250), noon(1));

        let created = storage.create_expense(&draft).unwrap();
        assert_eq!(created.title, "Lunch");
        assert!(!created.id.is_provisional());

        let edit = ExpenseDraft::new("Dinner", ExpenseCategory::Food, Money::from_cents(3000), noon(2));
        storage.update_expense(&created.id, &edit).unwrap();

        let reopened =
            JsonStorage::open(TallyPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let expenses = reopened.list_expenses().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].title, "Dinner");
        assert_eq!(expenses[0].amount, Money::from_cents(3000));

        reopened.delete_expense(&created.id).unwrap();
        assert!(reopened.list_expenses().unwrap().is_empty());
    }

    #[test]
    fn test_rejects_invalid_drafts() {
        let (_temp_dir, storage) = setup();
        let draft = ExpenseDraft::new("", ExpenseCategory::Food, Money::from_cents(100), noon(1));
        assert!(storage.create_expense(&draft).unwrap_err().is_validation());

        assert!(storage.create_job(&JobDraft::new("  ")).unwrap_err().is_validation());
    }

    #[test]
    fn test_entries_and_payments_need_existing_job() {
        let (_temp_dir, storage) = setup();
        let ghost = JobId::new("ghost");

        let err = storage
            .create_work_entry(&WorkEntryDraft::new(ghost.clone(), noon(1), Money::from_cents(500)))
            .unwrap_err();
        assert!(err.is_not_found());

        let err = storage
            .create_salary_payment(&PaymentDraft::new(ghost, Money::from_cents(500)))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_payment_is_timestamped() {
        let (_temp_dir, storage) = setup();
        let job = storage.create_job(&JobDraft::new("Cafe")).unwrap();

        let payment = storage
            .create_salary_payment(&PaymentDraft::new(job.id.clone(), Money::from_cents(6000)))
            .unwrap();
        assert!(payment.date.is_some());
        assert_eq!(payment.job, Some(job.id));
    }

    #[test]
    fn test_deleting_job_keeps_its_entries() {
        let (_temp_dir, storage) = setup();
        let job = storage.create_job(&JobDraft::new("Cafe")).unwrap();
        storage
            .create_work_entry(&WorkEntryDraft::new(job.id.clone(), noon(1), Money::from_cents(500)))
            .unwrap();

        storage.delete_job(&job.id).unwrap();
        let entries = storage.list_work_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].job, Some(job.id));
    }

    #[test]
    fn test_update_missing_job_is_not_found() {
        let (_temp_dir, storage) = setup();
        let err = storage
            .update_job(&JobId::new("ghost"), &JobDraft::new("Name"))
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
