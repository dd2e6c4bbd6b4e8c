//! Application state
//!
//! `AppState` owns the four collections and is the only place they change.
//! Views read slices or a borrowed [`Snapshot`]; mutations go through the
//! command methods below.
//!
//! Every command validates its draft, applies the change locally first, then
//! asks the backend. A confirmed create swaps the provisional record for the
//! backend's copy. A failed call undoes the local change and returns the
//! error, so the collections always match what the backend last confirmed.

use chrono::{Local, NaiveDate};

use crate::backend::Backend;
use crate::engine::{expenses_on, Snapshot};
use crate::error::{TallyError, TallyResult};
use crate::models::{
    Expense, ExpenseDraft, ExpenseId, Job, JobDraft, JobId, PaymentDraft, PaymentId,
    SalaryPayment, WorkEntry, WorkEntryDraft, WorkEntryId,
};

/// The loaded collections plus the backend they came from
pub struct AppState<B: Backend> {
    backend: B,
    expenses: Vec<Expense>,
    jobs: Vec<Job>,
    work_entries: Vec<WorkEntry>,
    salary_payments: Vec<SalaryPayment>,
}

impl<B: Backend> AppState<B> {
    /// Fetch every collection and build the state
    pub fn load(backend: B) -> TallyResult<Self> {
        let mut state = Self {
            backend,
            expenses: Vec::new(),
            jobs: Vec::new(),
            work_entries: Vec::new(),
            salary_payments: Vec::new(),
        };
        state.refresh()?;
        Ok(state)
    }

    /// Reload all four collections
    ///
    /// Nothing is replaced unless every fetch succeeds.
    pub fn refresh(&mut self) -> TallyResult<()> {
        let expenses = self.backend.list_expenses()?;
        let jobs = self.backend.list_jobs()?;
        let work_entries = self.backend.list_work_entries()?;
        let salary_payments = self.backend.list_salary_payments()?;

        log::debug!(
            "state refreshed: {} expenses, {} jobs, {} work entries, {} payments",
            expenses.len(),
            jobs.len(),
            work_entries.len(),
            salary_payments.len()
        );

        self.expenses = expenses;
        self.jobs = jobs;
        self.work_entries = work_entries;
        self.salary_payments = salary_payments;
        Ok(())
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn work_entries(&self) -> &[WorkEntry] {
        &self.work_entries
    }

    pub fn salary_payments(&self) -> &[SalaryPayment] {
        &self.salary_payments
    }

    /// Borrow all collections for the aggregation engine
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            expenses: &self.expenses,
            jobs: &self.jobs,
            work_entries: &self.work_entries,
            salary_payments: &self.salary_payments,
        }
    }

    pub fn find_expense(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| &e.id == id)
    }

    pub fn find_job(&self, id: &JobId) -> Option<&Job> {
        self.jobs.iter().find(|j| &j.id == id)
    }

    /// Find a job by exact id, or by case-insensitive name
    pub fn lookup_job(&self, key: &str) -> Option<&Job> {
        let key = key.trim();
        self.jobs
            .iter()
            .find(|j| j.id.as_str() == key)
            .or_else(|| self.jobs.iter().find(|j| j.name.eq_ignore_ascii_case(key)))
    }

    // Expenses

    pub fn create_expense(&mut self, draft: &ExpenseDraft) -> TallyResult<Expense> {
        draft.validate()?;

        let provisional = Expense::from_draft(ExpenseId::provisional(), draft);
        let local_id = provisional.id.clone();
        self.expenses.push(provisional);

        match self.backend.create_expense(draft) {
            Ok(confirmed) => {
                replace_where(&mut self.expenses, |e| e.id == local_id, confirmed.clone());
                log::info!("created expense {}", confirmed.id);
                Ok(confirmed)
            }
            Err(err) => {
                self.expenses.retain(|e| e.id != local_id);
                log::warn!("create expense failed, rolled back: {}", err);
                Err(err)
            }
        }
    }

    pub fn update_expense(&mut self, id: &ExpenseId, draft: &ExpenseDraft) -> TallyResult<Expense> {
        draft.validate()?;

        let index = self
            .expenses
            .iter()
            .position(|e| &e.id == id)
            .ok_or_else(|| TallyError::expense_not_found(id.as_str()))?;
        let previous = std::mem::replace(
            &mut self.expenses[index],
            Expense::from_draft(id.clone(), draft),
        );

        match self.backend.update_expense(id, draft) {
            Ok(confirmed) => {
                replace_where(&mut self.expenses, |e| &e.id == id, confirmed.clone());
                log::info!("updated expense {}", id);
                Ok(confirmed)
            }
            Err(err) => {
                replace_where(&mut self.expenses, |e| &e.id == id, previous);
                log::warn!("update expense {} failed, rolled back: {}", id, err);
                Err(err)
            }
        }
    }

    pub fn delete_expense(&mut self, id: &ExpenseId) -> TallyResult<()> {
        let index = self
            .expenses
            .iter()
            .position(|e| &e.id == id)
            .ok_or_else(|| TallyError::expense_not_found(id.as_str()))?;
        let removed = self.expenses.remove(index);

        match self.backend.delete_expense(id) {
            Ok(()) => {
                log::info!("deleted expense {}", id);
                Ok(())
            }
            Err(err) => {
                self.expenses.insert(index.min(self.expenses.len()), removed);
                log::warn!("delete expense {} failed, rolled back: {}", id, err);
                Err(err)
            }
        }
    }

    /// Delete every expense on a calendar day
    ///
    /// Stops at the first failure; expenses already deleted stay deleted.
    /// Returns how many were removed.
    pub fn clear_day(&mut self, day: NaiveDate) -> TallyResult<usize> {
        let ids: Vec<ExpenseId> = expenses_on(&self.expenses, day)
            .into_iter()
            .map(|e| e.id.clone())
            .collect();

        for id in &ids {
            self.delete_expense(id)?;
        }

        log::info!("cleared {} expense(s) on {}", ids.len(), day);
        Ok(ids.len())
    }

    // Jobs

    pub fn create_job(&mut self, draft: &JobDraft) -> TallyResult<Job> {
        draft.validate()?;

        let provisional = Job::new(JobId::provisional(), draft.normalized_name());
        let local_id = provisional.id.clone();
        self.jobs.push(provisional);

        match self.backend.create_job(draft) {
            Ok(confirmed) => {
                replace_where(&mut self.jobs, |j| j.id == local_id, confirmed.clone());
                log::info!("created job {} ({})", confirmed.name, confirmed.id);
                Ok(confirmed)
            }
            Err(err) => {
                self.jobs.retain(|j| j.id != local_id);
                log::warn!("create job failed, rolled back: {}", err);
                Err(err)
            }
        }
    }

    /// Rename a job
    pub fn update_job(&mut self, id: &JobId, draft: &JobDraft) -> TallyResult<Job> {
        draft.validate()?;

        let index = self
            .jobs
            .iter()
            .position(|j| &j.id == id)
            .ok_or_else(|| TallyError::job_not_found(id.as_str()))?;
        let previous = std::mem::replace(
            &mut self.jobs[index],
            Job::new(id.clone(), draft.normalized_name()),
        );

        match self.backend.update_job(id, draft) {
            Ok(confirmed) => {
                replace_where(&mut self.jobs, |j| &j.id == id, confirmed.clone());
                log::info!("renamed job {} to {}", id, confirmed.name);
                Ok(confirmed)
            }
            Err(err) => {
                replace_where(&mut self.jobs, |j| &j.id == id, previous);
                log::warn!("rename job {} failed, rolled back: {}", id, err);
                Err(err)
            }
        }
    }

    /// Delete a job; its entries and payments stay and show as unknown
    pub fn delete_job(&mut self, id: &JobId) -> TallyResult<()> {
        let index = self
            .jobs
            .iter()
            .position(|j| &j.id == id)
            .ok_or_else(|| TallyError::job_not_found(id.as_str()))?;
        let removed = self.jobs.remove(index);

        match self.backend.delete_job(id) {
            Ok(()) => {
                log::info!("deleted job {}", id);
                Ok(())
            }
            Err(err) => {
                self.jobs.insert(index.min(self.jobs.len()), removed);
                log::warn!("delete job {} failed, rolled back: {}", id, err);
                Err(err)
            }
        }
    }

    // Work entries

    pub fn create_work_entry(&mut self, draft: &WorkEntryDraft) -> TallyResult<WorkEntry> {
        draft.validate()?;
        if self.find_job(&draft.job).is_none() {
            return Err(TallyError::job_not_found(draft.job.as_str()));
        }

        let provisional = WorkEntry::from_draft(WorkEntryId::provisional(), draft);
        let local_id = provisional.id.clone();
        self.work_entries.push(provisional);

        match self.backend.create_work_entry(draft) {
            Ok(confirmed) => {
                replace_where(&mut self.work_entries, |e| e.id == local_id, confirmed.clone());
                log::info!("created work entry {}", confirmed.id);
                Ok(confirmed)
            }
            Err(err) => {
                self.work_entries.retain(|e| e.id != local_id);
                log::warn!("create work entry failed, rolled back: {}", err);
                Err(err)
            }
        }
    }

    pub fn delete_work_entry(&mut self, id: &WorkEntryId) -> TallyResult<()> {
        let index = self
            .work_entries
            .iter()
            .position(|e| &e.id == id)
            .ok_or_else(|| TallyError::work_entry_not_found(id.as_str()))?;
        let removed = self.work_entries.remove(index);

        match self.backend.delete_work_entry(id) {
            Ok(()) => {
                log::info!("deleted work entry {}", id);
                Ok(())
            }
            Err(err) => {
                self.work_entries.insert(index.min(self.work_entries.len()), removed);
                log::warn!("delete work entry {} failed, rolled back: {}", id, err);
                Err(err)
            }
        }
    }

    // Salary payments

    pub fn create_salary_payment(&mut self, draft: &PaymentDraft) -> TallyResult<SalaryPayment> {
        draft.validate()?;
        if self.find_job(&draft.job).is_none() {
            return Err(TallyError::job_not_found(draft.job.as_str()));
        }

        let provisional =
            SalaryPayment::from_draft(PaymentId::provisional(), draft, Local::now().naive_local());
        let local_id = provisional.id.clone();
        self.salary_payments.push(provisional);

        match self.backend.create_salary_payment(draft) {
            Ok(confirmed) => {
                replace_where(&mut self.salary_payments, |p| p.id == local_id, confirmed.clone());
                log::info!("recorded salary payment {}", confirmed.id);
                Ok(confirmed)
            }
            Err(err) => {
                self.salary_payments.retain(|p| p.id != local_id);
                log::warn!("record salary payment failed, rolled back: {}", err);
                Err(err)
            }
        }
    }

    pub fn delete_salary_payment(&mut self, id: &PaymentId) -> TallyResult<()> {
        let index = self
            .salary_payments
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| TallyError::payment_not_found(id.as_str()))?;
        let removed = self.salary_payments.remove(index);

        match self.backend.delete_salary_payment(id) {
            Ok(()) => {
                log::info!("deleted salary payment {}", id);
                Ok(())
            }
            Err(err) => {
                self.salary_payments.insert(index.min(self.salary_payments.len()), removed);
                log::warn!("delete salary payment {} failed, rolled back: {}", id, err);
                Err(err)
            }
        }
    }
}

fn replace_where<T>(items: &mut [T], matches: impl Fn(&T) -> bool, replacement: T) {
    if let Some(slot) = items.iter_mut().find(|item| matches(item)) {
        *slot = replacement;
    }
}
