//! JSON export of a month's records

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::engine::{filter_by_range, MonthlyOverview, Snapshot};
use crate::error::{TallyError, TallyResult};
use crate::models::{Expense, Job, MonthRange, SalaryPayment, WorkEntry};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Everything recorded in one month, plus the month's overview figures
#[derive(Debug, Clone, Serialize)]
pub struct MonthExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,

    /// `YYYY-MM`
    pub month: String,
    pub overview: MonthlyOverview,

    /// Every job, so entries and payments can be resolved
    pub jobs: Vec<Job>,
    pub expenses: Vec<Expense>,
    pub work_entries: Vec<WorkEntry>,
    pub salary_payments: Vec<SalaryPayment>,
}

impl MonthExport {
    pub fn from_snapshot(snapshot: &Snapshot<'_>, month: MonthRange) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            month: month.to_string(),
            overview: MonthlyOverview::compute(snapshot, month.start),
            jobs: snapshot.jobs.to_vec(),
            expenses: cloned(filter_by_range(snapshot.expenses, &month).records),
            work_entries: cloned(filter_by_range(snapshot.work_entries, &month).records),
            salary_payments: cloned(filter_by_range(snapshot.salary_payments, &month).records),
        }
    }
}

fn cloned<T: Clone>(records: Vec<&T>) -> Vec<T> {
    records.into_iter().cloned().collect()
}

/// Write a month export as pretty JSON
pub fn export_month_json<W: Write>(export: &MonthExport, writer: &mut W) -> TallyResult<()> {
    serde_json::to_writer_pretty(&mut *writer, export)
        .map_err(|e| TallyError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TallyError::Export(e.to_string()))?;
    Ok(())
}
