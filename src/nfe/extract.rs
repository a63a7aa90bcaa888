use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::document::NfeDocument;
use crate::core::money::{parse_amount, round_cents};
use crate::core::*;

/// Extract one invoice record from raw NFe bytes.
///
/// Never fails: an ill-formed document yields a zeroed record marked
/// [`ParseStatus::Error`], and a document missing its `ide` or `ICMSTot`
/// block is extracted as far as possible and marked the same way.
pub fn extract_invoice(content: &[u8], source_name: &str) -> InvoiceRecord {
    let xml = String::from_utf8_lossy(content);
    let record = match NfeDocument::parse(&xml) {
        Ok(doc) => extract_from_document(&doc, source_name),
        Err(e) => InvoiceRecord::failed(source_name, ExtractionIssue::new("document", e.to_string())),
    };

    if record.is_ok() {
        debug!(
            source = %record.source_name,
            number = %record.invoice_number,
            status = %record.financial_status,
            "invoice extracted"
        );
    } else {
        for issue in &record.issues {
            warn!(source = %record.source_name, %issue, "invoice extracted with errors");
        }
    }
    record
}

/// [`extract_invoice`] for a [`RawInvoiceDocument`].
pub fn extract_document(document: &RawInvoiceDocument) -> InvoiceRecord {
    extract_invoice(&document.content, &document.name)
}

/// Build a record from an already parsed document.
pub fn extract_from_document(doc: &NfeDocument, source_name: &str) -> InvoiceRecord {
    let mut issues = Vec::new();

    let identification = doc.identification();
    if identification.is_none() {
        issues.push(ExtractionIssue::missing("ide"));
    }
    let header = InvoiceHeader {
        invoice_number: identification
            .and_then(|ide| ide.number())
            .unwrap_or_default(),
        issue_date: identification
            .and_then(|ide| ide.issued_at())
            .unwrap_or_default(),
        issuer_tax_id: doc
            .issuer()
            .and_then(|emit| emit.tax_id())
            .unwrap_or_default(),
    };

    let totals = doc.totals();
    if totals.is_none() {
        issues.push(ExtractionIssue::missing("ICMSTot"));
    }

    let gross_payment = round_cents(
        doc.payment_details()
            .map(|det| parse_amount(det.amount().as_deref()))
            .fold(Decimal::ZERO, Decimal::saturating_add),
    );

    let amounts = DeclaredAmounts {
        product_total: parse_amount(totals.and_then(|t| t.product_total()).as_deref()),
        invoice_total: parse_amount(totals.and_then(|t| t.invoice_total()).as_deref()),
        gross_payment,
        declared_change: parse_amount(doc.payment().and_then(|p| p.change()).as_deref()),
    };

    let line_items = doc
        .products()
        .map(|prod| LineItem {
            name: prod.name().unwrap_or_default(),
            price: parse_amount(prod.price().as_deref()),
        })
        .collect();

    InvoiceRecord::from_declared(header, amounts, line_items, source_name, issues)
}
