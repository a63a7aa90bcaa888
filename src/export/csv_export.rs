//! CSV generation: semicolon separators, comma decimals, `\n` between lines.

use rust_decimal::Decimal;

use crate::core::money::format_decimal_comma;
use crate::core::{AggregateSummary, InvoiceRecord};

/// Header line of the export.
pub const CSV_HEADER: &str = "nNF;dataEmissao;vProd_total;vDesconto;vNF;vPag_bruto;vTroco_real;vPag_liquido;obs_troco;situacao_financeira;arquivo";

const TOTAL_LABEL: &str = "TOTAL GERAL";

/// Columns: nNF;dataEmissao;vProd_total;vDesconto;vNF;vPag_bruto;
///          vTroco_real;vPag_liquido;obs_troco;situacao_financeira;arquivo
pub(super) fn generate_csv(rows: &[&InvoiceRecord]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(CSV_HEADER.to_string());

    for record in rows {
        let mut out = String::new();
        csv_field_plain(&mut out, &record.invoice_number);
        out.push(';');
        csv_field_plain(&mut out, &record.issue_date);
        out.push(';');
        push_amounts(
            &mut out,
            [
                record.product_total,
                record.discount,
                record.invoice_total,
                record.gross_payment,
                record.change_given,
                record.net_payment,
            ],
        );
        csv_field_plain(&mut out, record.change_note.as_deref().unwrap_or(""));
        out.push(';');
        csv_field_quoted(&mut out, &record.financial_status.label());
        out.push(';');
        csv_field_plain(&mut out, &record.source_name);
        lines.push(out);
    }

    let summary = AggregateSummary::from_records(rows.iter().copied());
    let mut total = String::new();
    total.push_str(TOTAL_LABEL);
    total.push_str(";;");
    push_amounts(
        &mut total,
        [
            summary.product_total,
            summary.discount,
            summary.invoice_total,
            summary.gross_payment,
            summary.change_given,
            summary.net_payment,
        ],
    );
    total.push_str(";;");
    lines.push(total);

    lines.join("\n")
}

/// Six amount columns, each followed by `;`.
fn push_amounts(out: &mut String, amounts: [Decimal; 6]) {
    for amount in amounts {
        out.push_str(&format_decimal_comma(amount));
        out.push(';');
    }
}

/// Written verbatim unless it would break the row.
fn csv_field_plain(out: &mut String, value: &str) {
    if value.contains([';', '"', '\n', '\r']) {
        csv_field_quoted(out, value);
    } else {
        out.push_str(value);
    }
}

fn csv_field_quoted(out: &mut String, value: &str) {
    out.push('"');
    for ch in value.chars() {
        if ch == '"' {
            out.push_str("\"\"");
        } else {
            out.push(ch);
        }
    }
    out.push('"');
}
