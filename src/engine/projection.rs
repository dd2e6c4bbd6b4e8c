//! Daily averages, month-end projection and month progress
//!
//! The average divides by the day of the month of the reference date, not by
//! the number of days that actually have expenses. A sparse month therefore
//! averages low on purpose.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::{Expense, Money, MonthRange};

use super::aggregate::{expenses_on, filter_by_range, sum};

/// Average spend per elapsed day, rounded to the cent
pub fn daily_average(monthly_total: Money, day_of_month: u32) -> Money {
    if day_of_month == 0 {
        return Money::zero();
    }
    monthly_total.div_round(i64::from(day_of_month))
}

/// Linear month-end extrapolation of the month so far
///
/// Computed as `monthly_total * days_in_month / day_of_month` and rounded
/// once, so the cent rounding of the displayed average never compounds.
pub fn projected_monthly(monthly_total: Money, day_of_month: u32, days_in_month: u32) -> Money {
    if day_of_month == 0 {
        return Money::zero();
    }
    monthly_total.mul_div_round(i64::from(days_in_month), i64::from(day_of_month))
}

/// Share of the month elapsed, in percent
///
/// Not clamped: callers clamp with [`clamp_percent`] when drawing.
pub fn month_progress(day_of_month: u32, days_in_month: u32) -> f64 {
    if days_in_month == 0 {
        return 0.0;
    }
    (f64::from(day_of_month) / f64::from(days_in_month)) * 100.0
}

/// Clamp a percentage into `[0, 100]` for display
pub fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0)
}

/// Number of days in the month containing `date`
pub fn days_in_month(date: NaiveDate) -> u32 {
    MonthRange::containing(date).days()
}

/// Figures behind the expense summary panel for a selected day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseSummary {
    pub selected_date: NaiveDate,
    /// Total spent on the selected day
    pub daily_total: Money,
    pub daily_count: usize,
    /// Total spent in the selected day's month
    pub monthly_total: Money,
    pub monthly_count: usize,
    pub day_of_month: u32,
    pub days_in_month: u32,
    /// Unclamped elapsed share of the month
    pub month_progress: f64,
    pub daily_average: Money,
    pub projected_monthly: Money,
    /// Expenses left out because their date could not be read
    pub skipped: usize,
}

impl ExpenseSummary {
    pub fn compute(expenses: &[Expense], selected_date: NaiveDate) -> Self {
        let range = MonthRange::containing(selected_date);
        let month = filter_by_range(expenses, &range);
        let day = expenses_on(expenses, selected_date);

        let monthly_total = month.total();
        let day_of_month = selected_date.day();
        let days_in_month = range.days();
        let average = daily_average(monthly_total, day_of_month);

        Self {
            selected_date,
            daily_total: sum(day.iter()),
            daily_count: day.len(),
            monthly_total,
            monthly_count: month.len(),
            day_of_month,
            days_in_month,
            month_progress: month_progress(day_of_month, days_in_month),
            daily_average: average,
            projected_monthly: projected_monthly(monthly_total, day_of_month, days_in_month),
            skipped: month.skipped,
        }
    }
}
