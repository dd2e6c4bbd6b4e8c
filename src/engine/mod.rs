//! Aggregation engine
//!
//! Pure functions from record collections and a reference date to the
//! figures the views display: per-day totals, month subsets, daily average
//! and month-end projection, per-job earned/received/pending, and the top
//! spending category.
//!
//! Nothing here performs I/O, holds state or returns errors. Missing amounts
//! are already zero by the time records reach the engine; records with an
//! unreadable date are left out of date-based selections and counted as
//! `skipped`.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use tally::engine::{daily_average, month_range, projected_monthly};
//! use tally::models::Money;
//!
//! let range = month_range(NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
//! assert_eq!(range.end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
//!
//! let spent = Money::from_cents(10000);
//! assert_eq!(daily_average(spent, 3), Money::from_cents(3333));
//! assert_eq!(projected_monthly(spent, 3, 31), Money::from_cents(103333));
//! ```

pub mod aggregate;
pub mod jobs;
pub mod overview;
pub mod projection;

pub use aggregate::{
    category_totals, day_expenses, expenses_on, filter_by_range, group_expenses_by_date, month_range, sum,
    top_category, RangeFilter,
};
pub use jobs::{job_stats, sorted_work_history, JobStats, SalaryTotals};
pub use overview::{MonthlyOverview, Snapshot};
pub use projection::{
    clamp_percent, daily_average, days_in_month, month_progress, projected_monthly, ExpenseSummary,
};
