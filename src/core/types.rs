use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{AuditError, ExtractionIssue};
use super::money::{SYSTEM_FEE, format_brl};
use super::reconcile::{self, ReconciliationInput};

/// One source file as handed over by the caller: display name plus raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInvoiceDocument {
    /// File name shown to the user and carried into the record.
    pub name: String,
    /// Undecoded file content.
    pub content: Vec<u8>,
}

impl RawInvoiceDocument {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Read a document from disk, naming it after the file name component.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AuditError> {
        let path = path.as_ref();
        let content = std::fs::read(path)?;
        Ok(Self::new(source_name_for(path), content))
    }
}

/// Display name for a path: the file name, or the whole path if it has none.
pub fn source_name_for(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Product line (`det/prod`) of an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// `xProd`: product description.
    pub name: String,
    /// `vProd`: line value, rounded to cents.
    pub price: Decimal,
}

/// Outcome of reading the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ParseStatus {
    #[default]
    Ok,
    /// Ill-formed document or a required block is missing.
    Error,
}

/// One labelled finding of the reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount")]
pub enum StatusFragment {
    /// Declared product total exceeds the invoice total by this amount.
    Discount(Decimal),
    /// Net payment exceeds the invoice total by this amount (tip or extra fee).
    TipOrFee(Decimal),
    /// Declared change was the flat 0.99 system fee.
    SystemFee,
}

impl std::fmt::Display for StatusFragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Discount(amount) => write!(f, "DESCONTO ({})", format_brl(*amount)),
            Self::TipOrFee(amount) => write!(f, "GORJETA/TAXA ({})", format_brl(*amount)),
            Self::SystemFee => write!(f, "TAXA SISTEMA ({SYSTEM_FEE})"),
        }
    }
}

/// Financial situation of an invoice (situação financeira).
///
/// Fragments are kept in the order discount, tip/fee, system fee. An empty
/// list renders as `NORMAL`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FinancialStatus {
    fragments: Vec<StatusFragment>,
}

impl FinancialStatus {
    pub const NORMAL_LABEL: &'static str = "NORMAL";

    pub fn normal() -> Self {
        Self::default()
    }

    pub(crate) fn from_fragments(fragments: Vec<StatusFragment>) -> Self {
        Self { fragments }
    }

    pub fn fragments(&self) -> &[StatusFragment] {
        &self.fragments
    }

    pub fn is_normal(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn has_discount(&self) -> bool {
        self.fragments
            .iter()
            .any(|f| matches!(f, StatusFragment::Discount(_)))
    }

    pub fn has_tip_or_fee(&self) -> bool {
        self.fragments
            .iter()
            .any(|f| matches!(f, StatusFragment::TipOrFee(_)))
    }

    pub fn has_system_fee(&self) -> bool {
        self.fragments.contains(&StatusFragment::SystemFee)
    }

    /// The human-readable label, e.g. `DESCONTO (R$ 10,00) + TAXA SISTEMA (0.99)`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for FinancialStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.fragments.is_empty() {
            return f.write_str(Self::NORMAL_LABEL);
        }
        for (i, fragment) in self.fragments.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "{fragment}")?;
        }
        Ok(())
    }
}

/// Identification fields of an invoice, kept as found in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceHeader {
    /// `ide/nNF`
    pub invoice_number: String,
    /// `ide/dhEmi`, not parsed or normalized.
    pub issue_date: String,
    /// `emit/CNPJ`
    pub issuer_tax_id: String,
}

/// Amounts as declared by the document, already normalized to cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeclaredAmounts {
    /// `ICMSTot/vProd`
    pub product_total: Decimal,
    /// `ICMSTot/vNF`
    pub invoice_total: Decimal,
    /// Sum of every `detPag/vPag`.
    pub gross_payment: Decimal,
    /// `pag/vTroco`
    pub declared_change: Decimal,
}

/// The audited view of one invoice document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// Invoice number (`nNF`), may be empty.
    pub invoice_number: String,
    /// Issue timestamp (`dhEmi`) exactly as found in the source.
    pub issue_date: String,
    /// Issuer CNPJ.
    pub issuer_tax_id: String,
    /// vProd_total: declared product total.
    pub product_total: Decimal,
    /// vNF: declared final invoice total.
    pub invoice_total: Decimal,
    /// vDesconto: `max(0, product_total - invoice_total)`.
    pub discount: Decimal,
    /// vPag_bruto: sum of all declared payments.
    pub gross_payment: Decimal,
    /// vTroco_real: change actually returned to the customer.
    pub change_given: Decimal,
    /// vPag_liquido: payment kept after change.
    pub net_payment: Decimal,
    /// Set only when the declared change was the system fee.
    pub change_note: Option<String>,
    pub financial_status: FinancialStatus,
    /// Originating file name.
    pub source_name: String,
    pub line_items: Vec<LineItem>,
    pub parse_status: ParseStatus,
    /// Why `parse_status` is `Error`; empty otherwise.
    pub issues: Vec<ExtractionIssue>,
}

impl InvoiceRecord {
    /// Assemble a record from extracted values, deriving discount, change,
    /// net payment and status. A non-empty `issues` marks the record as `Error`.
    pub fn from_declared(
        header: InvoiceHeader,
        amounts: DeclaredAmounts,
        line_items: Vec<LineItem>,
        source_name: impl Into<String>,
        issues: Vec<ExtractionIssue>,
    ) -> Self {
        let discount = reconcile::derive_discount(amounts.product_total, amounts.invoice_total);
        let outcome = reconcile::classify(&ReconciliationInput {
            product_total: amounts.product_total,
            invoice_total: amounts.invoice_total,
            discount,
            gross_payment: amounts.gross_payment,
            declared_change: amounts.declared_change,
        });

        let parse_status = if issues.is_empty() {
            ParseStatus::Ok
        } else {
            ParseStatus::Error
        };

        Self {
            invoice_number: header.invoice_number,
            issue_date: header.issue_date,
            issuer_tax_id: header.issuer_tax_id,
            product_total: amounts.product_total,
            invoice_total: amounts.invoice_total,
            discount,
            gross_payment: amounts.gross_payment,
            change_given: outcome.change_given,
            net_payment: outcome.net_payment,
            change_note: outcome.change_note,
            financial_status: outcome.financial_status,
            source_name: source_name.into(),
            line_items,
            parse_status,
            issues,
        }
    }

    /// A zeroed `Error` record for a document that could not be read at all.
    pub fn failed(source_name: impl Into<String>, issue: ExtractionIssue) -> Self {
        Self::from_declared(
            InvoiceHeader::default(),
            DeclaredAmounts::default(),
            Vec::new(),
            source_name,
            vec![issue],
        )
    }

    pub fn is_ok(&self) -> bool {
        self.parse_status == ParseStatus::Ok
    }

    /// Issue timestamp parsed as RFC 3339, if it is one.
    pub fn issued_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.issue_date.trim()).ok()
    }
}

/// Records of one processed batch, in input order.
///
/// A batch is only ever handed out complete; re-processing replaces the whole set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    records: Vec<InvoiceRecord>,
}

impl ResultSet {
    pub fn new(records: Vec<InvoiceRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[InvoiceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InvoiceRecord> {
        self.records.iter()
    }

    /// Number of records whose document could not be fully read.
    pub fn error_count(&self) -> usize {
        self.records.iter().filter(|r| !r.is_ok()).count()
    }

    pub fn into_records(self) -> Vec<InvoiceRecord> {
        self.records
    }
}

impl FromIterator<InvoiceRecord> for ResultSet {
    fn from_iter<I: IntoIterator<Item = InvoiceRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a InvoiceRecord;
    type IntoIter = std::slice::Iter<'a, InvoiceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn status_label_joins_fragments() {
        let status = FinancialStatus::from_fragments(vec![
            StatusFragment::Discount(dec!(10)),
            StatusFragment::TipOrFee(dec!(0.99)),
            StatusFragment::SystemFee,
        ]);
        assert_eq!(
            status.label(),
            "DESCONTO (R$ 10,00) + GORJETA/TAXA (R$ 0,99) + TAXA SISTEMA (0.99)"
        );
        assert_eq!(FinancialStatus::normal().label(), "NORMAL");
    }

    #[test]
    fn failed_record_is_zeroed() {
        let record = InvoiceRecord::failed("broken.xml", ExtractionIssue::new("document", "bad"));
        assert_eq!(record.parse_status, ParseStatus::Error);
        assert_eq!(record.source_name, "broken.xml");
        assert!(record.product_total.is_zero());
        assert!(record.net_payment.is_zero());
        assert!(record.line_items.is_empty());
        assert!(record.financial_status.is_normal());
    }

    #[test]
    fn issued_at_parses_rfc3339_only() {
        let mut record = InvoiceRecord::failed("a.xml", ExtractionIssue::missing("ide"));
        record.issue_date = "2024-03-15T10:30:00-03:00".into();
        assert!(record.issued_at().is_some());
        record.issue_date = "15/03/2024".into();
        assert!(record.issued_at().is_none());
    }

    #[test]
    fn source_name_uses_file_name() {
        assert_eq!(source_name_for(Path::new("/tmp/notas/nfe-1.xml")), "nfe-1.xml");
    }
}
