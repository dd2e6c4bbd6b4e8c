//! Shared formatting helpers
//!
//! `DisplayOptions` carries the user's presentation settings; the free
//! functions below are the small building blocks every view uses.

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::Settings;
use crate::models::{Money, MonthRange};

/// Presentation preferences taken from [`Settings`]
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayOptions {
    pub currency_symbol: String,
    pub date_format: String,
    pub month_format: String,
    pub week_starts_on_monday: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for DisplayOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
            month_format: settings.month_format.clone(),
            week_starts_on_monday: settings.week_starts_on_monday,
        }
    }
}

impl DisplayOptions {
    /// `$1,234.50`
    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Whole-currency amount for tight spaces: `$13`
    pub fn money_whole(&self, amount: Money) -> String {
        let whole = amount.div_round(100).cents();
        if whole < 0 {
            format!("-{}{}", self.currency_symbol, whole.unsigned_abs())
        } else {
            format!("{}{}", self.currency_symbol, whole)
        }
    }

    /// Amount with an explicit sign: `+$70.00` / `-$5.00`
    pub fn money_signed(&self, amount: Money) -> String {
        if amount.is_negative() {
            self.money(amount)
        } else {
            format!("+{}", self.money(amount))
        }
    }

    /// `Mar 1, 2024`
    pub fn date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }

    /// Date of a record timestamp; unreadable dates show as a placeholder
    pub fn timestamp(&self, ts: Option<NaiveDateTime>) -> String {
        match ts {
            Some(ts) => self.date(ts.date()),
            None => "(no date)".to_string(),
        }
    }

    /// `March 2024`
    pub fn month(&self, range: &MonthRange) -> String {
        range.start.format(&self.month_format).to_string()
    }
}

/// Format a percentage with one decimal
pub fn format_percentage(pct: f64) -> String {
    if pct.is_finite() {
        format!("{:.1}%", pct)
    } else {
        "0.0%".to_string()
    }
}

/// A bar filled to `percent` of `width`; the fill is clamped to the bar
pub fn format_bar(percent: f64, width: usize) -> String {
    let fraction = if percent.is_finite() {
        (percent / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = ((fraction * width as f64).round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Footer pointing at the neighbouring months
pub fn format_month_navigation(range: &MonthRange) -> String {
    format!(
        "< {}  |  {} >   (--month prev, next or YYYY-MM)\n",
        range.prev(),
        range.next()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_navigation_wraps_years() {
        let jan = MonthRange::from_year_month(2025, 1).unwrap();
        assert_eq!(
            format_month_navigation(&jan),
            "< 2024-12  |  2025-02 >   (--month prev, next or YYYY-MM)\n"
        );
    }

    #[test]
    fn test_money_formats() {
        let opts = DisplayOptions::default();
        assert_eq!(opts.money(Money::from_cents(123450)), "$1,234.50");
        assert_eq!(opts.money(Money::from_cents(-5000)), "-$50.00");
        assert_eq!(opts.money_whole(Money::from_cents(1250)), "$13");
        assert_eq!(opts.money_whole(Money::from_cents(1249)), "$12");
        assert_eq!(opts.money_signed(Money::from_cents(7000)), "+$70.00");
        assert_eq!(opts.money_signed(Money::zero()), "+$0.00");
        assert_eq!(opts.money_signed(Money::from_cents(-500)), "-$5.00");
    }

    #[test]
    fn test_date_formats() {
        let opts = DisplayOptions::default();
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(opts.date(day), "Mar 1, 2024");
        assert_eq!(opts.month(&MonthRange::containing(day)), "March 2024");
        assert_eq!(opts.timestamp(None), "(no date)");
    }

    #[test]
    fn test_bar_is_clamped() {
        assert_eq!(format_bar(50.0, 4), "██░░");
        assert_eq!(format_bar(150.0, 4), "████");
        assert_eq!(format_bar(-10.0, 4), "░░░░");
        assert_eq!(format_bar(f64::NAN, 2), "░░");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long title", 10), "a very ...");
    }
}
