//! Read-only views: summary, calendar, overview and salary

use crate::backend::Backend;
use crate::display::{
    format_calendar, format_expense_summary, format_expense_table, format_job_breakdown,
    format_month_navigation, format_overview, format_salary_totals, DisplayOptions,
};
use crate::engine::{
    day_expenses, group_expenses_by_date, job_stats, ExpenseSummary, MonthlyOverview,
    SalaryTotals,
};
use crate::error::TallyResult;
use crate::state::AppState;

use super::{parse_date, parse_month, today};

/// Expense summary card plus the selected day's list
pub fn handle_summary<B: Backend>(
    state: &AppState<B>,
    opts: &DisplayOptions,
    date: Option<&str>,
) -> TallyResult<()> {
    let day = match date {
        Some(d) => parse_date(d)?,
        None => today(),
    };

    let summary = ExpenseSummary::compute(state.expenses(), day);
    print!("{}", format_expense_summary(&summary, opts));

    let (list, _) = day_expenses(state.expenses(), day);
    if !list.is_empty() {
        println!();
        print!("{}", format_expense_table(&list, opts));
    }
    Ok(())
}

/// Month calendar with per-day totals
///
/// The selected day is today when it falls in the month, else the 1st.
pub fn handle_calendar<B: Backend>(
    state: &AppState<B>,
    opts: &DisplayOptions,
    month: Option<&str>,
) -> TallyResult<()> {
    let range = parse_month(month)?;
    let now = today();
    let selected = if range.contains_date(now) { now } else { range.start };

    let by_day = group_expenses_by_date(state.expenses());
    print!("{}", format_calendar(&by_day, selected, opts));
    println!();
    print!("{}", format_month_navigation(&range));
    Ok(())
}

/// Monthly dashboard
pub fn handle_overview<B: Backend>(
    state: &AppState<B>,
    opts: &DisplayOptions,
    month: Option<&str>,
) -> TallyResult<()> {
    let range = parse_month(month)?;
    let overview = MonthlyOverview::compute(&state.snapshot(), range.start);
    print!("{}", format_overview(&overview, opts));
    println!();
    print!("{}", format_month_navigation(&range));
    Ok(())
}

/// Salary totals and the per-job breakdown
pub fn handle_salary<B: Backend>(state: &AppState<B>, opts: &DisplayOptions) -> TallyResult<()> {
    let stats = job_stats(state.jobs(), state.work_entries(), state.salary_payments());
    let totals = SalaryTotals::from_stats(&stats);

    print!("{}", format_salary_totals(&totals, opts));
    println!();
    print!("{}", format_job_breakdown(&stats, opts));
    Ok(())
}
