//! Monthly dashboard figures
//!
//! Everything on the dashboard is scoped to the selected month: expenses,
//! work entries and salary payments are each filtered to the month before
//! they are totalled, so "pending" here is the month's earned minus the
//! month's received, not a job's lifetime balance.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Expense, ExpenseCategory, Job, Money, MonthRange, SalaryPayment, WorkEntry};

use super::aggregate::{filter_by_range, top_category};

/// A borrowed view of the four collections, as the engine consumes them
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub expenses: &'a [Expense],
    pub jobs: &'a [Job],
    pub work_entries: &'a [WorkEntry],
    pub salary_payments: &'a [SalaryPayment],
}

/// Month-scoped totals shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyOverview {
    pub range: MonthRange,
    pub expense_count: usize,
    pub total_expenses: Money,
    pub work_entry_count: usize,
    pub total_earned: Money,
    pub payment_count: usize,
    pub total_received: Money,
    /// Earned minus received within the month
    pub total_pending: Money,
    /// Earned minus spent within the month
    pub net: Money,
    pub top_category: Option<(ExpenseCategory, Money)>,
    /// Records of any kind left out because their date could not be read
    pub skipped: usize,
}

impl MonthlyOverview {
    /// Compute the overview for the month containing `date`
    pub fn compute(snapshot: &Snapshot<'_>, date: NaiveDate) -> Self {
        let range = MonthRange::containing(date);

        let expenses = filter_by_range(snapshot.expenses, &range);
        let entries = filter_by_range(snapshot.work_entries, &range);
        let payments = filter_by_range(snapshot.salary_payments, &range);

        let total_expenses = expenses.total();
        let total_earned = entries.total();
        let total_received = payments.total();

        Self {
            range,
            expense_count: expenses.len(),
            total_expenses,
            work_entry_count: entries.len(),
            total_earned,
            payment_count: payments.len(),
            total_received,
            total_pending: total_earned - total_received,
            net: total_earned - total_expenses,
            top_category: top_category(expenses.records.iter().copied()),
            skipped: expenses.skipped + entries.skipped + payments.skipped,
        }
    }
}
