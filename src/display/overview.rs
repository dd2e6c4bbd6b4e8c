//! Monthly dashboard

use crate::engine::MonthlyOverview;

use super::format::{separator, DisplayOptions};

pub fn format_overview(overview: &MonthlyOverview, opts: &DisplayOptions) -> String {
    let mut output = String::new();

    output.push_str(&format!("Overview for {}\n", opts.month(&overview.range)));
    output.push_str(&separator(44));
    output.push('\n');

    output.push_str(&format!(
        "Expenses:   {:>16}  ({} item(s))\n",
        opts.money(overview.total_expenses),
        overview.expense_count
    ));
    output.push_str(&format!(
        "Earned:     {:>16}  ({} entr{})\n",
        opts.money(overview.total_earned),
        overview.work_entry_count,
        if overview.work_entry_count == 1 { "y" } else { "ies" }
    ));
    output.push_str(&format!(
        "Received:   {:>16}  ({} payment(s))\n",
        opts.money(overview.total_received),
        overview.payment_count
    ));
    output.push_str(&format!(
        "Pending:    {:>16}\n",
        opts.money(overview.total_pending)
    ));
    output.push_str(&separator(44));
    output.push('\n');
    output.push_str(&format!("Net:        {:>16}\n", opts.money_signed(overview.net)));

    match overview.top_category {
        Some((category, total)) => {
            output.push_str(&format!("Top category: {} ({})\n", category, opts.money(total)))
        }
        None => output.push_str("Top category: none\n"),
    }

    if overview.skipped > 0 {
        output.push_str(&format!(
            "\n{} record(s) with an unreadable date were left out.\n",
            overview.skipped
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Snapshot;
    use crate::models::{Expense, ExpenseCategory, ExpenseId, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_negative_net_and_top_category() {
        let expenses = vec![Expense {
            id: ExpenseId::new("e1"),
            title: "Rent".into(),
            category: ExpenseCategory::Bills,
            amount: Money::from_cents(90000),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).and_then(|d| d.and_hms_opt(8, 0, 0)),
        }];
        let snapshot = Snapshot {
            expenses: &expenses,
            jobs: &[],
            work_entries: &[],
            salary_payments: &[],
        };
        let overview =
            MonthlyOverview::compute(&snapshot, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        let out = format_overview(&overview, &DisplayOptions::default());

        assert!(out.contains("Overview for March 2024"));
        assert!(out.contains("-$900.00"));
        assert!(out.contains("Top category: Bills ($900.00)"));
    }

    #[test]
    fn test_empty_month_has_positive_zero_net() {
        let snapshot = Snapshot {
            expenses: &[],
            jobs: &[],
            work_entries: &[],
            salary_payments: &[],
        };
        let overview =
            MonthlyOverview::compute(&snapshot, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        let out = format_overview(&overview, &DisplayOptions::default());

        assert!(out.contains("+$0.00"));
        assert!(out.contains("Top category: none"));
    }
}
