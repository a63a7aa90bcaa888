use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::InvoiceRecord;

/// Column sums over a set of records. Sums saturate at [`Decimal::MAX`] / [`Decimal::MIN`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateSummary {
    pub product_total: Decimal,
    pub invoice_total: Decimal,
    pub discount: Decimal,
    pub gross_payment: Decimal,
    pub change_given: Decimal,
    pub net_payment: Decimal,
    pub count: usize,
}

impl AggregateSummary {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a InvoiceRecord>,
    {
        records.into_iter().fold(Self::default(), |mut acc, r| {
            acc.add(r);
            acc
        })
    }

    pub fn add(&mut self, record: &InvoiceRecord) {
        self.product_total = self.product_total.saturating_add(record.product_total);
        self.invoice_total = self.invoice_total.saturating_add(record.invoice_total);
        self.discount = self.discount.saturating_add(record.discount);
        self.gross_payment = self.gross_payment.saturating_add(record.gross_payment);
        self.change_given = self.change_given.saturating_add(record.change_given);
        self.net_payment = self.net_payment.saturating_add(record.net_payment);
        self.count += 1;
    }
}
