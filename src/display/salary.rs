//! Salary views: job breakdown, overall progress and history lists

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::engine::{clamp_percent, JobStats, SalaryTotals};
use crate::models::{resolve_job_name, Job, SalaryPayment, WorkEntry};

use super::format::{format_bar, format_percentage, separator, DisplayOptions};

const BAR_WIDTH: usize = 24;

/// Per-job earned/received/pending with a payment progress bar
pub fn format_job_breakdown(stats: &[JobStats], opts: &DisplayOptions) -> String {
    if stats.is_empty() {
        return "No jobs yet.\n".to_string();
    }

    let mut output = String::new();
    for stat in stats {
        let progress = stat.payment_progress();
        output.push_str(&format!("{}\n", stat.job.name));
        output.push_str(&format!(
            "  Earned {}  Received {}  Pending {}\n",
            opts.money(stat.total_earned),
            opts.money(stat.total_received),
            opts.money(stat.pending)
        ));
        output.push_str(&format!(
            "  {} {}\n",
            format_bar(progress, BAR_WIDTH),
            format_percentage(clamp_percent(progress))
        ));
    }
    output
}

/// Overall salary totals across every job
pub fn format_salary_totals(totals: &SalaryTotals, opts: &DisplayOptions) -> String {
    let mut output = String::new();

    output.push_str("Salary Overview\n");
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format!("Total earned:    {:>16}\n", opts.money(totals.total_earned)));
    output.push_str(&format!("Total received:  {:>16}\n", opts.money(totals.total_received)));
    output.push_str(&format!("Pending:         {:>16}\n", opts.money(totals.total_pending)));
    output.push_str(&format!(
        "Paid:            {} {}\n",
        format_bar(totals.progress, 16),
        format_percentage(clamp_percent(totals.progress))
    ));
    output
}

#[derive(Tabled)]
struct JobRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
}

pub fn format_job_list(jobs: &[Job]) -> String {
    if jobs.is_empty() {
        return "No jobs yet.\n".to_string();
    }

    let rows = jobs.iter().map(|j| JobRow {
        id: j.id.to_string(),
        name: j.name.clone(),
    });
    let mut output = Table::new(rows).with(Style::modern()).to_string();
    output.push('\n');
    output
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Job")]
    job: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Work entries in the order given, with job names resolved
pub fn format_work_history(entries: &[&WorkEntry], jobs: &[Job], opts: &DisplayOptions) -> String {
    if entries.is_empty() {
        return "No work entries yet.\n".to_string();
    }

    let rows = entries.iter().map(|e| HistoryRow {
        id: e.id.to_string(),
        date: opts.timestamp(e.date),
        job: resolve_job_name(jobs, e.job.as_ref()).to_string(),
        amount: opts.money(e.amount),
    });
    let mut output = Table::new(rows).with(Style::modern()).to_string();
    output.push('\n');
    output
}

/// Salary payments in the order given, with job names resolved
pub fn format_payment_list(payments: &[&SalaryPayment], jobs: &[Job], opts: &DisplayOptions) -> String {
    if payments.is_empty() {
        return "No salary payments yet.\n".to_string();
    }

    let rows = payments.iter().map(|p| HistoryRow {
        id: p.id.to_string(),
        date: opts.timestamp(p.date),
        job: resolve_job_name(jobs, p.job.as_ref()).to_string(),
        amount: opts.money(p.amount),
    });
    let mut output = Table::new(rows).with(Style::modern()).to_string();
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::job_stats;
    use crate::models::{JobId, Money, PaymentId, WorkEntryId};
    use chrono::NaiveDate;

    fn fixtures() -> (Vec<Job>, Vec<WorkEntry>, Vec<SalaryPayment>) {
        let day = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap().and_hms_opt(9, 0, 0);
        let jobs = vec![Job::new(JobId::new("j1"), "Cafe")];
        let entries = vec![
            WorkEntry {
                id: WorkEntryId::new("w1"),
                job: Some(JobId::new("j1")),
                date: day,
                amount: Money::from_cents(12000),
            },
            WorkEntry {
                id: WorkEntryId::new("w2"),
                job: Some(JobId::new("gone")),
                date: day,
                amount: Money::from_cents(500),
            },
        ];
        let payments = vec![SalaryPayment {
            id: PaymentId::new("p1"),
            job: Some(JobId::new("j1")),
            amount: Money::from_cents(6000),
            date: day,
        }];
        (jobs, entries, payments)
    }

    #[test]
    fn test_job_breakdown() {
        let (jobs, entries, payments) = fixtures();
        let stats = job_stats(&jobs, &entries, &payments);
        let out = format_job_breakdown(&stats, &DisplayOptions::default());

        assert!(out.contains("Cafe"));
        assert!(out.contains("Earned $120.00"));
        assert!(out.contains("Pending $60.00"));
        assert!(out.contains("50.0%"));
    }

    #[test]
    fn test_overpaid_bar_is_clamped() {
        let (jobs, entries, _) = fixtures();
        let payments = vec![SalaryPayment {
            id: PaymentId::new("p1"),
            job: Some(JobId::new("j1")),
            amount: Money::from_cents(24000),
            date: None,
        }];
        let stats = job_stats(&jobs, &entries, &payments);
        let out = format_job_breakdown(&stats, &DisplayOptions::default());

        assert!(out.contains("-$120.00"));
        assert!(out.contains("100.0%"));
        assert!(!out.contains('░'));
    }

    #[test]
    fn test_salary_totals() {
        let (jobs, entries, payments) = fixtures();
        let totals = SalaryTotals::from_stats(&job_stats(&jobs, &entries, &payments));
        let out = format_salary_totals(&totals, &DisplayOptions::default());
        assert!(out.contains("$120.00"));
        assert!(out.contains("$60.00"));
    }

    #[test]
    fn test_history_resolves_unknown_jobs() {
        let (jobs, entries, _) = fixtures();
        let refs: Vec<&WorkEntry> = entries.iter().collect();
        let out = format_work_history(&refs, &jobs, &DisplayOptions::default());
        assert!(out.contains("Cafe"));
        assert!(out.contains("Unknown Job"));
        assert!(out.contains("Mar 2, 2024"));
    }

    #[test]
    fn test_empty_lists() {
        let opts = DisplayOptions::default();
        assert_eq!(format_job_list(&[]), "No jobs yet.\n");
        assert_eq!(format_work_history(&[], &[], &opts), "No work entries yet.\n");
        assert_eq!(format_payment_list(&[], &[], &opts), "No salary payments yet.\n");
    }
}
