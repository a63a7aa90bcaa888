//! Filtering and sorting over a result set.
//!
//! Fields are addressed through closed enums with typed accessors, so an
//! unknown column cannot be requested.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::money::TOLERANCE;
use super::types::InvoiceRecord;

/// Currency columns of an [`InvoiceRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AmountField {
    ProductTotal,
    InvoiceTotal,
    Discount,
    GrossPayment,
    ChangeGiven,
    NetPayment,
}

impl AmountField {
    pub fn value(self, record: &InvoiceRecord) -> Decimal {
        match self {
            Self::ProductTotal => record.product_total,
            Self::InvoiceTotal => record.invoice_total,
            Self::Discount => record.discount,
            Self::GrossPayment => record.gross_payment,
            Self::ChangeGiven => record.change_given,
            Self::NetPayment => record.net_payment,
        }
    }
}

/// Situation categories offered by the status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    /// No finding at all.
    Normal,
    WithDiscount,
    WithTip,
    SystemFee,
    /// Any finding.
    AnyDiscrepancy,
}

impl StatusFilter {
    pub fn matches(self, record: &InvoiceRecord) -> bool {
        let status = &record.financial_status;
        match self {
            Self::All => true,
            Self::Normal => status.is_normal(),
            Self::WithDiscount => record.discount > TOLERANCE,
            Self::WithTip => status.has_tip_or_fee(),
            Self::SystemFee => status.has_system_fee(),
            Self::AnyDiscrepancy => !status.is_normal(),
        }
    }
}

/// Inclusive bounds; an absent bound does not constrain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountRange {
    pub min: Option<Decimal>,
    pub max: Option<Decimal>,
}

impl AmountRange {
    pub fn new(min: Option<Decimal>, max: Option<Decimal>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: Decimal) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Every predicate a caller can combine over the result set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    pub status: StatusFilter,
    pub ranges: BTreeMap<AmountField, AmountRange>,
    /// Keep records having at least one line item priced strictly above this.
    pub item_priced_above: Option<Decimal>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn range(mut self, field: AmountField, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        let range = AmountRange::new(min, max);
        if range.is_unbounded() {
            self.ranges.remove(&field);
        } else {
            self.ranges.insert(field, range);
        }
        self
    }

    pub fn item_priced_above(mut self, threshold: Decimal) -> Self {
        self.item_priced_above = Some(threshold);
        self
    }

    pub fn matches(&self, record: &InvoiceRecord) -> bool {
        if !self.status.matches(record) {
            return false;
        }
        if !self
            .ranges
            .iter()
            .all(|(field, range)| range.contains(field.value(record)))
        {
            return false;
        }
        match self.item_priced_above {
            Some(threshold) => record.line_items.iter().any(|item| item.price > threshold),
            None => true,
        }
    }

    /// Matching records, in their original order.
    pub fn apply<'a, I>(&self, records: I) -> Vec<&'a InvoiceRecord>
    where
        I: IntoIterator<Item = &'a InvoiceRecord>,
    {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

/// Sortable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortField {
    Amount(AmountField),
    /// By parsed issue instant; unparsable dates first, then by raw text.
    IssueDate,
}

impl SortField {
    pub fn compare(self, a: &InvoiceRecord, b: &InvoiceRecord) -> Ordering {
        match self {
            Self::Amount(field) => field.value(a).cmp(&field.value(b)),
            Self::IssueDate => a
                .issued_at()
                .cmp(&b.issued_at())
                .then_with(|| a.issue_date.cmp(&b.issue_date)),
        }
    }
}

impl From<AmountField> for SortField {
    fn from(field: AmountField) -> Self {
        Self::Amount(field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Current sort column, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    active: Option<(SortField, SortDirection)>,
}

impl SortOrder {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn by(field: impl Into<SortField>, direction: SortDirection) -> Self {
        Self {
            active: Some((field.into(), direction)),
        }
    }

    pub fn active(&self) -> Option<(SortField, SortDirection)> {
        self.active
    }

    /// Next order after the user asks to sort by `field`: a new field starts
    /// ascending, the same field goes ascending → descending → unsorted.
    pub fn toggle(self, field: impl Into<SortField>) -> Self {
        let field = field.into();
        let next = match self.active {
            Some((current, SortDirection::Ascending)) if current == field => {
                Some((field, SortDirection::Descending))
            }
            Some((current, SortDirection::Descending)) if current == field => None,
            _ => Some((field, SortDirection::Ascending)),
        };
        Self { active: next }
    }

    /// Stable in-place sort; unsorted keeps the current order.
    pub fn sort(&self, rows: &mut [&InvoiceRecord]) {
        let Some((field, direction)) = self.active else {
            return;
        };
        rows.sort_by(|a, b| {
            let ord = field.compare(a, b);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }
}
