//! Expense views: summary card and expense tables

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::engine::{clamp_percent, ExpenseSummary};
use crate::models::{Expense, Money};

use super::format::{format_bar, format_percentage, separator, truncate, DisplayOptions};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Expenses as a table, in the order given, with a total line
pub fn format_expense_table(expenses: &[&Expense], opts: &DisplayOptions) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow {
            id: e.id.to_string(),
            date: opts.timestamp(e.date),
            title: truncate(&e.title, 30),
            category: e.category.to_string(),
            amount: opts.money(e.amount),
        })
        .collect();

    let total: Money = expenses.iter().map(|e| e.amount).sum();

    let mut output = Table::new(rows).with(Style::modern()).to_string();
    output.push('\n');
    output.push_str(&format!(
        "{} expense(s), total {}\n",
        expenses.len(),
        opts.money(total)
    ));
    output
}

/// The summary card for a selected day
pub fn format_expense_summary(summary: &ExpenseSummary, opts: &DisplayOptions) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense Summary for {}\n", opts.date(summary.selected_date)));
    output.push_str(&separator(44));
    output.push('\n');

    output.push_str(&format!(
        "Today:            {:>14}  ({} item(s))\n",
        opts.money(summary.daily_total),
        summary.daily_count
    ));
    output.push_str(&format!(
        "This month:       {:>14}  ({} item(s))\n",
        opts.money(summary.monthly_total),
        summary.monthly_count
    ));
    output.push_str(&format!(
        "Daily average:    {:>14}\n",
        opts.money(summary.daily_average)
    ));
    output.push_str(&format!(
        "Projected month:  {:>14}\n",
        opts.money(summary.projected_monthly)
    ));

    output.push('\n');
    output.push_str(&format!(
        "Day {} of {}  {} {}\n",
        summary.day_of_month,
        summary.days_in_month,
        format_bar(summary.month_progress, 20),
        format_percentage(clamp_percent(summary.month_progress))
    ));

    if summary.skipped > 0 {
        output.push_str(&format!(
            "\n{} expense(s) with an unreadable date were left out.\n",
            summary.skipped
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, ExpenseId};
    use chrono::NaiveDate;

    fn ymd(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn expense(title: &str, cents: i64, d: u32) -> Expense {
        Expense {
            id: ExpenseId::new(format!("e{}", d)),
            title: title.into(),
            category: ExpenseCategory::Food,
            amount: Money::from_cents(cents),
            date: ymd(d).and_hms_opt(12, 0, 0),
        }
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(
            format_expense_table(&[], &DisplayOptions::default()),
            "No expenses found.\n"
        );
    }

    #[test]
    fn test_table_contents() {
        let a = expense("Lunch", 1250, 1);
        let b = expense("Groceries", 123456, 2);
        let out = format_expense_table(&[&a, &b], &DisplayOptions::default());

        assert!(out.contains("Lunch"));
        assert!(out.contains("Mar 2, 2024"));
        assert!(out.contains("$1,234.56"));
        assert!(out.contains("2 expense(s), total $1,247.06"));
    }

    #[test]
    fn test_summary_card() {
        let expenses = vec![expense("Lunch", 2000, 1), expense("Power", 3000, 15)];
        let summary = ExpenseSummary::compute(&expenses, ymd(20));
        let out = format_expense_summary(&summary, &DisplayOptions::default());

        assert!(out.contains("Expense Summary for Mar 20, 2024"));
        assert!(out.contains("$50.00"));
        assert!(out.contains("$2.50"));
        assert!(out.contains("$77.50"));
        assert!(out.contains("Day 20 of 31"));
        assert!(!out.contains("unreadable"));
    }
}
