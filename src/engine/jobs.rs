//! Per-job earnings breakdown
//!
//! Entries and payments are matched to jobs by id. Records pointing at a
//! deleted job belong to no job and do not appear in any breakdown.

use serde::Serialize;

use crate::models::{Job, Money, SalaryPayment, WorkEntry};

use super::aggregate::sum;

/// A job with its earned, received and pending totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobStats {
    pub job: Job,
    pub total_earned: Money,
    pub total_received: Money,
    /// `total_earned - total_received`; negative when overpaid
    pub pending: Money,
    pub entry_count: usize,
    pub payment_count: usize,
}

impl JobStats {
    /// Received as a share of earned, in percent (0 when nothing was earned)
    pub fn payment_progress(&self) -> f64 {
        self.total_received.percent_of(self.total_earned)
    }
}

/// Earned/received/pending figures for every job, in job order
pub fn job_stats(jobs: &[Job], work_entries: &[WorkEntry], payments: &[SalaryPayment]) -> Vec<JobStats> {
    jobs.iter()
        .map(|job| {
            let entries: Vec<&WorkEntry> = work_entries.iter().filter(|e| e.is_for(&job.id)).collect();
            let received: Vec<&SalaryPayment> = payments.iter().filter(|p| p.is_for(&job.id)).collect();

            let total_earned = sum(entries.iter());
            let total_received = sum(received.iter());

            JobStats {
                job: job.clone(),
                total_earned,
                total_received,
                pending: total_earned - total_received,
                entry_count: entries.len(),
                payment_count: received.len(),
            }
        })
        .collect()
}

/// Totals across all jobs
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalaryTotals {
    pub total_earned: Money,
    pub total_received: Money,
    pub total_pending: Money,
    /// Received as a share of earned, in percent; unclamped
    pub progress: f64,
}

impl SalaryTotals {
    pub fn from_stats(stats: &[JobStats]) -> Self {
        let total_earned: Money = stats.iter().map(|s| s.total_earned).sum();
        let total_received: Money = stats.iter().map(|s| s.total_received).sum();

        Self {
            total_earned,
            total_received,
            total_pending: total_earned - total_received,
            progress: total_received.percent_of(total_earned),
        }
    }
}

/// Work entries newest first; entries without a readable date go last
pub fn sorted_work_history(entries: &[WorkEntry]) -> Vec<&WorkEntry> {
    let mut sorted: Vec<&WorkEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{JobId, PaymentId, WorkEntryId};
    use chrono::{NaiveDate, NaiveDateTime};

    fn day(d: u32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(2024, 3, d).and_then(|d| d.and_hms_opt(0, 0, 0))
    }

    fn entry(id: &str, job: Option<&str>, cents: i64, date: Option<NaiveDateTime>) -> WorkEntry {
        WorkEntry {
            id: WorkEntryId::new(id),
            job: job.map(JobId::from),
            date,
            amount: Money::from_cents(cents),
        }
    }

    fn payment(job: &str, cents: i64) -> SalaryPayment {
        SalaryPayment {
            id: PaymentId::generate(),
            job: Some(JobId::new(job)),
            amount: Money::from_cents(cents),
            date: day(10),
        }
    }

    #[test]
    fn test_single_job_scenario() {
        let jobs = vec![Job::new(JobId::new("j1"), "Cafe")];
        let entries = vec![
            entry("w1", Some("j1"), 5000, day(1)),
            entry("w2", Some("j1"), 7000, day(2)),
        ];
        let payments = vec![payment("j1", 6000)];

        let stats = job_stats(&jobs, &entries, &payments);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].total_earned, Money::from_cents(12000));
        assert_eq!(stats[0].total_received, Money::from_cents(6000));
        assert_eq!(stats[0].pending, Money::from_cents(6000));
        assert!((stats[0].payment_progress() - 50.0).abs() < 1e-9);

        let totals = SalaryTotals::from_stats(&stats);
        assert_eq!(totals.total_pending, Money::from_cents(6000));
        assert!((totals.progress - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_overpayment_is_not_clamped() {
        let jobs = vec![Job::new(JobId::new("j1"), "Cafe")];
        let entries = vec![entry("w1", Some("j1"), 10000, day(1))];
        let payments = vec![payment("j1", 15000)];

        let stats = job_stats(&jobs, &entries, &payments);
        assert_eq!(stats[0].pending, Money::from_cents(-5000));
        assert!(stats[0].payment_progress() > 100.0);
    }

    #[test]
    fn test_orphans_and_other_jobs_are_excluded() {
        let jobs = vec![
            Job::new(JobId::new("j1"), "Cafe"),
            Job::new(JobId::new("j2"), "Tutoring"),
        ];
        let entries = vec![
            entry("w1", Some("j1"), 1000, day(1)),
            entry("w2", Some("j2"), 2000, day(1)),
            entry("w3", None, 4000, day(1)),
            entry("w4", Some("deleted"), 8000, day(1)),
        ];

        let stats = job_stats(&jobs, &entries, &[]);
        assert_eq!(stats[0].total_earned, Money::from_cents(1000));
        assert_eq!(stats[1].total_earned, Money::from_cents(2000));
        assert_eq!(stats[1].job.name, "Tutoring");

        let totals = SalaryTotals::from_stats(&stats);
        assert_eq!(totals.total_earned, Money::from_cents(3000));
        assert_eq!(totals.progress, 0.0);
    }

    #[test]
    fn test_job_without_records() {
        let jobs = vec![Job::new(JobId::new("j1"), "Cafe")];
        let stats = job_stats(&jobs, &[], &[]);
        assert_eq!(stats[0].pending, Money::zero());
        assert_eq!(stats[0].payment_progress(), 0.0);
    }

    #[test]
    fn test_work_history_order() {
        let entries = vec![
            entry("old", Some("j1"), 100, day(1)),
            entry("undated", Some("j1"), 100, None),
            entry("new", Some("j1"), 100, day(20)),
            entry("mid", Some("j1"), 100, day(10)),
        ];
        let ids: Vec<_> = sorted_work_history(&entries)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["new", "mid", "old", "undated"]);
    }
}
