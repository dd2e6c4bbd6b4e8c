//! YAML export of a month's records

use std::io::Write;

use crate::error::{TallyError, TallyResult};
use crate::export::json::MonthExport;

/// Write a month export as YAML with a short header comment
pub fn export_month_yaml<W: Write>(export: &MonthExport, writer: &mut W) -> TallyResult<()> {
    writeln!(writer, "# Tally export for {}", export.month)
        .map_err(|e| TallyError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| TallyError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TallyError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| TallyError::Export(e.to_string()))?;

    Ok(())
}
