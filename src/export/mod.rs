//! Export module for Tally
//!
//! Exports one month of records:
//! - JSON: machine-readable, with the month's overview figures
//! - YAML: the same document, human-readable
//! - CSV: the month's expenses only (spreadsheet-compatible)

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use json::{export_month_json, MonthExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_month_yaml;

use std::io::Write;
use std::str::FromStr;

use crate::engine::Snapshot;
use crate::error::{TallyError, TallyResult};
use crate::models::MonthRange;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
}

impl ExportFormat {
    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            other => Err(TallyError::Export(format!(
                "Unknown export format '{}' (expected json, yaml or csv)",
                other
            ))),
        }
    }
}

/// Export the records of `month` in the given format
pub fn export_month<W: Write>(
    format: ExportFormat,
    snapshot: &Snapshot<'_>,
    month: MonthRange,
    writer: &mut W,
) -> TallyResult<()> {
    let export = MonthExport::from_snapshot(snapshot, month);
    log::debug!(
        "exporting {} as {:?}: {} expense(s), {} work entr(ies), {} payment(s)",
        export.month,
        format,
        export.expenses.len(),
        export.work_entries.len(),
        export.salary_payments.len()
    );

    match format {
        ExportFormat::Json => export_month_json(&export, writer),
        ExportFormat::Yaml => export_month_yaml(&export, writer),
        ExportFormat::Csv => export_expenses_csv(&export.expenses, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("yml".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!(matches!(
            "xlsx".parse::<ExportFormat>(),
            Err(TallyError::Export(_))
        ));
    }

    #[test]
    fn test_export_month_csv_of_empty_month() {
        let snapshot = Snapshot {
            expenses: &[],
            jobs: &[],
            work_entries: &[],
            salary_payments: &[],
        };
        let mut buf = Vec::new();
        export_month(
            ExportFormat::Csv,
            &snapshot,
            MonthRange::from_year_month(2024, 3).unwrap(),
            &mut buf,
        )
        .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "ID,Date,Title,Category,Amount\n");
    }
}
