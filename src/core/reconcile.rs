//! Reconciliation of declared totals against declared payments.
//!
//! Pure functions: identical input always yields identical output, and there
//! is no failure path.

use rust_decimal::Decimal;

use super::money::{SYSTEM_FEE, TOLERANCE, round_cents};
use super::types::{FinancialStatus, StatusFragment};

/// Annotation put on the change column when the system fee rule applies.
pub const SYSTEM_FEE_NOTE: &str = "(Taxa 0.99)";

/// Normalized totals handed to [`classify`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconciliationInput {
    pub product_total: Decimal,
    pub invoice_total: Decimal,
    pub discount: Decimal,
    pub gross_payment: Decimal,
    pub declared_change: Decimal,
}

/// Derived payment fields and status label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub change_given: Decimal,
    pub net_payment: Decimal,
    pub change_note: Option<String>,
    pub financial_status: FinancialStatus,
}

/// `round(max(0, product_total - invoice_total), 2)`.
pub fn derive_discount(product_total: Decimal, invoice_total: Decimal) -> Decimal {
    round_cents(product_total.saturating_sub(invoice_total).max(Decimal::ZERO))
}

/// Whether a declared change amount is the flat system fee (strictly within one cent of 0.99).
pub fn is_system_fee(declared_change: Decimal) -> bool {
    declared_change.saturating_sub(SYSTEM_FEE).abs() < TOLERANCE
}

/// Classify one invoice.
///
/// Differences saturate at the bounds of [`Decimal`] instead of overflowing.
///
/// A system fee declared as change is not returned to the customer: change
/// becomes zero and the fee stays in the net payment. Status fragments are
/// appended in the fixed order discount, tip/fee, system fee.
pub fn classify(input: &ReconciliationInput) -> Reconciliation {
    let system_fee = is_system_fee(input.declared_change);

    let (change_given, net_payment, change_note) = if system_fee {
        (
            Decimal::ZERO,
            input.gross_payment,
            Some(SYSTEM_FEE_NOTE.to_string()),
        )
    } else {
        (
            input.declared_change,
            round_cents(input.gross_payment.saturating_sub(input.declared_change)),
            None,
        )
    };

    let mut fragments = Vec::new();
    if input.discount > TOLERANCE {
        fragments.push(StatusFragment::Discount(input.discount));
    }

    let paid_over_total = round_cents(net_payment.saturating_sub(input.invoice_total));
    if paid_over_total > TOLERANCE {
        fragments.push(StatusFragment::TipOrFee(paid_over_total));
    }

    if system_fee {
        fragments.push(StatusFragment::SystemFee);
    }

    Reconciliation {
        change_given,
        net_payment,
        change_note,
        financial_status: FinancialStatus::from_fragments(fragments),
    }
}
