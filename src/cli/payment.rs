//! Salary payment CLI commands

use clap::Subcommand;

use crate::backend::Backend;
use crate::display::{format_payment_list, DisplayOptions};
use crate::error::TallyResult;
use crate::models::{resolve_job_name, PaymentDraft, PaymentId, SalaryPayment};
use crate::state::AppState;

use super::{find_job, parse_amount};

/// Salary payment subcommands
#[derive(Subcommand)]
pub enum PaymentCommands {
    /// Record money received for a job
    Add {
        /// Job name or ID
        job: String,
        /// Amount received
        amount: String,
    },
    /// List salary payments, newest first
    List {
        /// Only show payments for this job
        #[arg(short, long)]
        job: Option<String>,
    },
    /// Delete a salary payment
    Delete {
        /// Payment ID
        id: String,
    },
}

/// Handle a salary payment command
pub fn handle_payment_command<B: Backend>(
    state: &mut AppState<B>,
    opts: &DisplayOptions,
    cmd: PaymentCommands,
) -> TallyResult<()> {
    match cmd {
        PaymentCommands::Add { job, amount } => {
            let job_id = find_job(state, &job)?.id.clone();
            let payment = state.create_salary_payment(&PaymentDraft::new(job_id, parse_amount(&amount)?))?;

            println!(
                "Recorded payment of {} from {}",
                opts.money(payment.amount),
                resolve_job_name(state.jobs(), payment.job.as_ref())
            );
            println!("  ID: {}", payment.id);
        }

        PaymentCommands::List { job } => {
            let mut payments: Vec<&SalaryPayment> = state.salary_payments().iter().collect();
            if let Some(key) = job {
                let id = find_job(state, &key)?.id.clone();
                payments.retain(|p| p.is_for(&id));
            }
            payments.sort_by(|a, b| b.date.cmp(&a.date));
            print!("{}", format_payment_list(&payments, state.jobs(), opts));
        }

        PaymentCommands::Delete { id } => {
            let id = PaymentId::new(id);
            state.delete_salary_payment(&id)?;
            println!("Deleted salary payment {}", id);
        }
    }

    Ok(())
}
