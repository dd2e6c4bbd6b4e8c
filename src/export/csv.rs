//! CSV export of a month's expenses

use std::io::Write;

use crate::error::{TallyError, TallyResult};
use crate::models::timestamp;
use crate::models::Expense;

/// Write expenses as CSV: ID, Date, Title, Category, Amount
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> TallyResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["ID", "Date", "Title", "Category", "Amount"])
        .map_err(|e| TallyError::Export(e.to_string()))?;

    for expense in expenses {
        let date = expense.date.as_ref().map(timestamp::format).unwrap_or_default();
        wtr.write_record([
            expense.id.as_str(),
            date.as_str(),
            expense.title.as_str(),
            expense.category.name(),
            format!("{:.2}", expense.amount.as_decimal()).as_str(),
        ])
        .map_err(|e| TallyError::Export(e.to_string()))?;
    }

    wtr.flush().map_err(|e| TallyError::Export(e.to_string()))?;
    Ok(())
}
