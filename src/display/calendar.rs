//! Month calendar grid
//!
//! Each week is two lines: day numbers, then the whole-currency total spent
//! under every day that has expenses. The selected day is bracketed.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{Money, MonthRange};

use super::format::DisplayOptions;

const CELL: usize = 7;

/// Render the month containing `selected` with per-day totals
pub fn format_calendar(
    by_day: &BTreeMap<NaiveDate, Money>,
    selected: NaiveDate,
    opts: &DisplayOptions,
) -> String {
    let range = MonthRange::containing(selected);
    let width = CELL * 7;
    let mut output = String::new();

    output.push_str(&format!("{:^width$}\n", opts.month(&range), width = width));

    let names: [&str; 7] = if opts.week_starts_on_monday {
        ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
    } else {
        ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
    };
    for name in names {
        output.push_str(&format!("{:^CELL$}", name));
    }
    output.push('\n');

    let offset = if opts.week_starts_on_monday {
        range.start.weekday().num_days_from_monday()
    } else {
        range.start.weekday().num_days_from_sunday()
    } as usize;

    let mut days: Vec<Option<NaiveDate>> = vec![None; offset];
    days.extend(range.iter_days().map(Some));
    while days.len() % 7 != 0 {
        days.push(None);
    }

    for week in days.chunks(7) {
        let mut numbers = String::new();
        let mut totals = String::new();

        for day in week {
            let (label, total) = match day {
                Some(d) => {
                    let label = if *d == selected {
                        format!("[{}]", d.day())
                    } else {
                        d.day().to_string()
                    };
                    let total = by_day
                        .get(d)
                        .filter(|t| !t.is_zero())
                        .map(|t| opts.money_whole(*t))
                        .unwrap_or_default();
                    (label, total)
                }
                None => (String::new(), String::new()),
            };
            numbers.push_str(&format!("{:^CELL$}", label));
            totals.push_str(&format!("{:^CELL$}", total));
        }

        output.push_str(numbers.trim_end());
        output.push('\n');
        if !totals.trim().is_empty() {
            output.push_str(totals.trim_end());
            output.push('\n');
        }
    }

    output
}
