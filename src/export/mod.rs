//! Spreadsheet export of audited invoices.
//!
//! Produces a `;`-separated file with comma decimals, one row per record and
//! a trailing `TOTAL GERAL` row with the column sums.
//!
//! # Example
//!
//! ```ignore
//! use nfe_auditor::export::to_csv;
//!
//! let view = build_view(&results, &state);
//! let export = to_csv(view.rows.iter().copied(), &AuditConfig::default()).unwrap();
//! std::fs::write(&export.file_name, export.content).unwrap();
//! ```

mod csv_export;

use crate::core::{AuditConfig, AuditError, InvoiceRecord};

pub use csv_export::CSV_HEADER;

/// A rendered export file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    /// Suggested file name (from [`AuditConfig::export_file_name`]).
    pub file_name: String,
    pub content: String,
}

/// Render `rows` as CSV. An empty row set cannot be exported.
pub fn to_csv<'a, I>(rows: I, config: &AuditConfig) -> Result<CsvExport, AuditError>
where
    I: IntoIterator<Item = &'a InvoiceRecord>,
{
    let rows: Vec<&InvoiceRecord> = rows.into_iter().collect();
    if rows.is_empty() {
        return Err(AuditError::Export("no records to export".into()));
    }

    Ok(CsvExport {
        file_name: config.export_file_name.clone(),
        content: csv_export::generate_csv(&rows),
    })
}
