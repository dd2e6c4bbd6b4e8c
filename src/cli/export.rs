//! Export CLI command

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Args;

use crate::backend::Backend;
use crate::error::{TallyError, TallyResult};
use crate::export::{export_month, ExportFormat};
use crate::state::AppState;

use super::parse_month;

/// Arguments for `tally export`
#[derive(Args)]
pub struct ExportArgs {
    /// Month to export (YYYY-MM, prev, next, or an offset like -1);
    /// defaults to the current month
    #[arg(short, long, allow_hyphen_values = true)]
    pub month: Option<String>,
    /// Output format: json, yaml or csv
    #[arg(short, long, default_value = "json")]
    pub format: String,
    /// Output file; writes to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command<B: Backend>(state: &AppState<B>, args: ExportArgs) -> TallyResult<()> {
    let format: ExportFormat = args.format.parse()?;
    let month = parse_month(args.month.as_deref())?;
    let snapshot = state.snapshot();

    match args.output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                TallyError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export_month(format, &snapshot, month, &mut writer)?;
            writer
                .flush()
                .map_err(|e| TallyError::Export(e.to_string()))?;
            println!(
                "Exported {} as {} to {}",
                month,
                format.extension(),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            export_month(format, &snapshot, month, &mut handle)?;
        }
    }

    Ok(())
}
