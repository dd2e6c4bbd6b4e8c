//! Job CLI commands

use clap::Subcommand;

use crate::backend::Backend;
use crate::display::format_job_list;
use crate::error::TallyResult;
use crate::models::JobDraft;
use crate::state::AppState;

use super::find_job;

/// Job subcommands
#[derive(Subcommand)]
pub enum JobCommands {
    /// Add a job
    Add {
        /// Job name
        name: String,
    },
    /// Rename a job
    Rename {
        /// Job name or ID
        job: String,
        /// New name
        name: String,
    },
    /// Delete a job (its work entries and payments are kept)
    Delete {
        /// Job name or ID
        job: String,
    },
    /// List all jobs
    List,
}

/// Handle a job command
pub fn handle_job_command<B: Backend>(state: &mut AppState<B>, cmd: JobCommands) -> TallyResult<()> {
    match cmd {
        JobCommands::Add { name } => {
            let job = state.create_job(&JobDraft::new(name))?;
            println!("Added job: {}", job.name);
            println!("  ID: {}", job.id);
        }

        JobCommands::Rename { job, name } => {
            let id = find_job(state, &job)?.id.clone();
            let renamed = state.update_job(&id, &JobDraft::new(name))?;
            println!("Renamed job to: {}", renamed.name);
        }

        JobCommands::Delete { job } => {
            let found = find_job(state, &job)?;
            let (id, name) = (found.id.clone(), found.name.clone());
            state.delete_job(&id)?;
            println!("Deleted job: {}", name);
        }

        JobCommands::List => {
            print!("{}", format_job_list(state.jobs()));
        }
    }

    Ok(())
}
