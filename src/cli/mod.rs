//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the application state.

pub mod expense;
pub mod export;
pub mod job;
pub mod payment;
pub mod report;
pub mod work;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs};
pub use job::{handle_job_command, JobCommands};
pub use payment::{handle_payment_command, PaymentCommands};
pub use report::{handle_calendar, handle_overview, handle_salary, handle_summary};
pub use work::{handle_work_command, WorkCommands};

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::backend::Backend;
use crate::error::{TallyError, TallyResult};
use crate::models::{shift_month, Job, Money, MonthRange};
use crate::state::AppState;

/// Today's date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date; `today` and `yesterday` are accepted too
pub fn parse_date(input: &str) -> TallyResult<NaiveDate> {
    match input.trim().to_lowercase().as_str() {
        "today" => Ok(today()),
        "yesterday" => today()
            .pred_opt()
            .ok_or_else(|| TallyError::Validation("Date out of range".into())),
        s => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            TallyError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD.", input))
        }),
    }
}

/// The timestamp stored for a user-entered date: local midnight, or now when
/// no date was given
pub fn entry_timestamp(date: Option<&str>) -> TallyResult<NaiveDateTime> {
    match date {
        Some(d) => Ok(parse_date(d)?.and_time(NaiveTime::MIN)),
        None => Ok(Local::now().naive_local()),
    }
}

/// Parse a month, defaulting to the current month
///
/// Accepts `YYYY-MM`, `prev`/`next`, or a signed offset from the current
/// month such as `-1` or `+2`.
pub fn parse_month(input: Option<&str>) -> TallyResult<MonthRange> {
    let Some(input) = input else {
        return Ok(MonthRange::current());
    };

    match input.trim().to_lowercase().as_str() {
        "prev" | "last" => Ok(MonthRange::current().prev()),
        "next" => Ok(MonthRange::current().next()),
        s if s.starts_with(['-', '+']) => {
            let offset: i32 = s.parse().map_err(|_| {
                TallyError::Validation(format!("Invalid month offset '{}'", input))
            })?;
            Ok(MonthRange::containing(shift_month(today(), offset)))
        }
        s => MonthRange::parse(s).map_err(|e| TallyError::Validation(e.to_string())),
    }
}

/// Parse an amount such as `12.50` or `$1,200`
pub fn parse_amount(input: &str) -> TallyResult<Money> {
    Money::parse(input).map_err(|e| TallyError::Validation(e.to_string()))
}

/// Resolve a job by id or name
pub fn find_job<'a, B: Backend>(state: &'a AppState<B>, key: &str) -> TallyResult<&'a Job> {
    state
        .lookup_job(key)
        .ok_or_else(|| TallyError::job_not_found(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(parse_date("Today").unwrap(), today());
        assert!(parse_date("03/01/2024").unwrap_err().is_validation());
    }

    #[test]
    fn test_entry_timestamp_is_local_midnight() {
        let ts = entry_timestamp(Some("2024-03-01")).unwrap();
        assert_eq!(ts.time(), NaiveTime::MIN);
    }

    #[test]
    fn test_parse_month_and_amount() {
        let month = parse_month(Some("2024-02")).unwrap();
        assert_eq!(month.days(), 29);
        assert!(parse_month(Some("2024-13")).unwrap_err().is_validation());
        assert_eq!(parse_month(None).unwrap(), MonthRange::current());

        assert_eq!(parse_amount("$1,200.50").unwrap(), Money::from_cents(120050));
        assert!(parse_amount("abc").unwrap_err().is_validation());
        assert!(parse_amount("99999999999999999").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_relative_month() {
        let current = MonthRange::current();
        assert_eq!(parse_month(Some("prev")).unwrap(), current.prev());
        assert_eq!(parse_month(Some("next")).unwrap(), current.next());
        assert_eq!(parse_month(Some("-1")).unwrap(), current.prev());
        assert_eq!(parse_month(Some("+1")).unwrap(), current.next());
        assert_eq!(parse_month(Some("+0")).unwrap(), current);
        assert_eq!(parse_month(Some("-12")).unwrap().year(), current.year() - 1);
        assert!(parse_month(Some("-x")).unwrap_err().is_validation());
    }
}
