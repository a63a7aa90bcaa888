use std::path::Path;

use tracing::{info, warn};

use super::extract::{extract_document, extract_invoice};
use crate::core::{ExtractionIssue, InvoiceRecord, RawInvoiceDocument, ResultSet, source_name_for};

/// Extract every document in order, one record per document.
///
/// Documents are handled strictly one after another; the result set is
/// returned only once the whole batch is done.
pub fn process_batch<I>(documents: I) -> ResultSet
where
    I: IntoIterator<Item = RawInvoiceDocument>,
{
    let results: ResultSet = documents
        .into_iter()
        .map(|doc| extract_document(&doc))
        .collect();
    log_batch(&results);
    results
}

/// Read and extract files in order. An unreadable file still produces a
/// record, marked as an error and named after the file.
pub fn process_paths<I, P>(paths: I) -> ResultSet
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let results: ResultSet = paths
        .into_iter()
        .map(|path| {
            let path = path.as_ref();
            let name = source_name_for(path);
            match std::fs::read(path) {
                Ok(content) => extract_invoice(&content, &name),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to read invoice file");
                    InvoiceRecord::failed(name, ExtractionIssue::new("file", e.to_string()))
                }
            }
        })
        .collect();
    log_batch(&results);
    results
}

fn log_batch(results: &ResultSet) {
    info!(
        records = results.len(),
        errors = results.error_count(),
        "batch processed"
    );
}
