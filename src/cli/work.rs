//! Work entry CLI commands

use clap::Subcommand;

use crate::backend::Backend;
use crate::display::{format_work_history, DisplayOptions};
use crate::engine::sorted_work_history;
use crate::error::TallyResult;
use crate::models::{resolve_job_name, WorkEntry, WorkEntryDraft, WorkEntryId};
use crate::state::AppState;

use super::{entry_timestamp, find_job, parse_amount};

/// Work entry subcommands
#[derive(Subcommand)]
pub enum WorkCommands {
    /// Record earnings for a job
    Add {
        /// Job name or ID
        job: String,
        /// Amount earned
        amount: String,
        /// Date worked (YYYY-MM-DD); defaults to now
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show work history, newest first
    List {
        /// Only show entries for this job
        #[arg(short, long)]
        job: Option<String>,
    },
    /// Delete a work entry
    Delete {
        /// Work entry ID
        id: String,
    },
}

/// Handle a work entry command
pub fn handle_work_command<B: Backend>(
    state: &mut AppState<B>,
    opts: &DisplayOptions,
    cmd: WorkCommands,
) -> TallyResult<()> {
    match cmd {
        WorkCommands::Add { job, amount, date } => {
            let job_id = find_job(state, &job)?.id.clone();
            let draft = WorkEntryDraft::new(job_id, entry_timestamp(date.as_deref())?, parse_amount(&amount)?);
            let entry = state.create_work_entry(&draft)?;

            println!(
                "Recorded {} for {} on {}",
                opts.money(entry.amount),
                resolve_job_name(state.jobs(), entry.job.as_ref()),
                opts.timestamp(entry.date)
            );
            println!("  ID: {}", entry.id);
        }

        WorkCommands::List { job } => {
            let history = sorted_work_history(state.work_entries());
            let history: Vec<&WorkEntry> = match job {
                Some(key) => {
                    let id = find_job(state, &key)?.id.clone();
                    history.into_iter().filter(|e| e.is_for(&id)).collect()
                }
                None => history,
            };
            print!("{}", format_work_history(&history, state.jobs(), opts));
        }

        WorkCommands::Delete { id } => {
            let id = WorkEntryId::new(id);
            state.delete_work_entry(&id)?;
            println!("Deleted work entry {}", id);
        }
    }

    Ok(())
}
