//! Display formatting for terminal output
//!
//! Plain-text renderings of the engine's figures: the expense summary card,
//! the month calendar, tables, salary breakdowns and the monthly overview.

pub mod calendar;
pub mod expense;
pub mod format;
pub mod overview;
pub mod salary;

pub use calendar::format_calendar;
pub use expense::{format_expense_summary, format_expense_table};
pub use format::{format_bar, format_month_navigation, format_percentage, DisplayOptions};
pub use overview::format_overview;
pub use salary::{
    format_job_breakdown, format_job_list, format_payment_list, format_salary_totals,
    format_work_history,
};
