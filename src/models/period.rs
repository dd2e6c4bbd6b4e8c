//! Calendar month ranges
//!
//! A `MonthRange` is the inclusive span from the first to the last calendar
//! day of a month. Containment is decided at day granularity, so a record
//! stamped at any time on the last day of the month still belongs to it.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The first and last day of a calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MonthRange {
    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let end = first_of_next_month(start)
            .map(|next| next - Duration::days(1))
            .unwrap_or(start);
        Self { start, end }
    }

    /// Build from a year and 1-based month, `None` when out of range
    pub fn from_year_month(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self::containing)
    }

    /// The current month in local time
    pub fn current() -> Self {
        Self::containing(chrono::Local::now().date_naive())
    }

    /// Start of the range at local midnight
    pub fn start_timestamp(&self) -> NaiveDateTime {
        self.start.and_time(chrono::NaiveTime::MIN)
    }

    /// Last day of the range at local midnight
    pub fn end_timestamp(&self) -> NaiveDateTime {
        self.end.and_time(chrono::NaiveTime::MIN)
    }

    pub fn year(&self) -> i32 {
        self.start.year()
    }

    pub fn month(&self) -> u32 {
        self.start.month()
    }

    /// Number of days in the month
    pub fn days(&self) -> u32 {
        self.end.day()
    }

    /// Check if a calendar day falls within this month
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Check if a timestamp falls within this month (inclusive at both ends)
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        self.contains_date(ts.date())
    }

    /// Every day of the month in order
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    pub fn next(&self) -> Self {
        first_of_next_month(self.start)
            .map(Self::containing)
            .unwrap_or(*self)
    }

    pub fn prev(&self) -> Self {
        self.start
            .pred_opt()
            .map(Self::containing)
            .unwrap_or(*self)
    }

    /// Parse a month string ("2024-03")
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }

        Self::from_year_month(year, month).ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))
    }
}

fn first_of_next_month(date: NaiveDate) -> Option<NaiveDate> {
    if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    }
}

/// Move a date by whole months, clamping the day to the target month's length
pub fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let index = date.year() * 12 + date.month0() as i32 + months;
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    let Some(range) = MonthRange::from_year_month(year, month) else {
        return date;
    };
    let day = date.day().min(range.days());
    range.start.with_day(day).unwrap_or(range.start)
}

impl fmt::Display for MonthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid month format: {} (expected YYYY-MM)", s),
            Self::InvalidMonth(m) => write!(f, "Invalid month: {} (must be 1-12)", m),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_leap_february() {
        let range = MonthRange::containing(ymd(2024, 2, 15));
        assert_eq!(range.start, ymd(2024, 2, 1));
        assert_eq!(range.end, ymd(2024, 2, 29));
        assert_eq!(range.days(), 29);
    }

    #[test]
    fn test_december_rolls_year() {
        let range = MonthRange::containing(ymd(2023, 12, 31));
        assert_eq!(range.end, ymd(2023, 12, 31));
        assert_eq!(range.next().start, ymd(2024, 1, 1));
        assert_eq!(range.next().prev(), range);
    }

    #[test]
    fn test_timestamps_are_midnight() {
        let range = MonthRange::containing(ymd(2024, 3, 20));
        assert_eq!(range.start_timestamp(), ymd(2024, 3, 1).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(range.end_timestamp(), ymd(2024, 3, 31).and_hms_opt(0, 0, 0).unwrap());
        assert!(range.start_timestamp() <= range.end_timestamp());
    }

    #[test]
    fn test_contains_whole_last_day() {
        let range = MonthRange::containing(ymd(2024, 3, 1));
        assert!(range.contains(ymd(2024, 3, 31).and_hms_opt(23, 59, 59).unwrap()));
        assert!(range.contains(range.start_timestamp()));
        assert!(!range.contains(ymd(2024, 4, 1).and_hms_opt(0, 0, 0).unwrap()));
        assert!(!range.contains(ymd(2024, 2, 29).and_hms_opt(23, 59, 59).unwrap()));
    }

    #[test]
    fn test_iter_days() {
        let days: Vec<_> = MonthRange::containing(ymd(2023, 2, 1)).iter_days().collect();
        assert_eq!(days.len(), 28);
        assert_eq!(days[27], ymd(2023, 2, 28));
    }

    #[test]
    fn test_parse() {
        assert_eq!(MonthRange::parse("2024-03").unwrap().start, ymd(2024, 3, 1));
        assert_eq!(MonthRange::parse("2024-13"), Err(MonthParseError::InvalidMonth(13)));
        assert!(MonthRange::parse("March").is_err());
        assert_eq!(MonthRange::parse("2024-03").unwrap().to_string(), "2024-03");
    }

    #[test]
    fn test_shift_month() {
        assert_eq!(shift_month(ymd(2024, 1, 31), 1), ymd(2024, 2, 29));
        assert_eq!(shift_month(ymd(2024, 1, 15), -1), ymd(2023, 12, 15));
        assert_eq!(shift_month(ymd(2024, 3, 31), -13), ymd(2023, 2, 28));
        assert_eq!(shift_month(ymd(2024, 3, 10), 0), ymd(2024, 3, 10));
    }
}
