//! Caller-owned view state and the derived view over a result set.
//!
//! Records go in, a filtered/sorted/summarized view comes out; nothing is
//! cached between calls.

use serde::{Deserialize, Serialize};

use super::config::AuditConfig;
use super::query::{RecordFilter, SortField, SortOrder};
use super::summary::AggregateSummary;
use super::types::InvoiceRecord;

/// Incrementally revealed window over the rows ("load more").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    page_size: usize,
    visible: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(AuditConfig::default().page_size)
    }
}

impl Pagination {
    /// A page size of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            visible: page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Rows to show out of `total`.
    pub fn visible_count(&self, total: usize) -> usize {
        self.visible.min(total)
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.visible < total
    }

    /// Reveal one more page, capped at `total`.
    pub fn load_more(&mut self, total: usize) {
        if self.has_more(total) {
            self.visible = (self.visible + self.page_size).min(total);
        }
    }

    pub fn reset(&mut self) {
        self.visible = self.page_size;
    }
}

/// Everything the user has chosen about how to look at a result set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    filter: RecordFilter,
    sort: SortOrder,
    pagination: Pagination,
}

impl ViewState {
    pub fn new(config: &AuditConfig) -> Self {
        Self {
            filter: RecordFilter::default(),
            sort: SortOrder::default(),
            pagination: Pagination::new(config.page_size),
        }
    }

    pub fn filter(&self) -> &RecordFilter {
        &self.filter
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Replace the filter; the visible window starts over.
    pub fn set_filter(&mut self, filter: RecordFilter) {
        self.filter = filter;
        self.pagination.reset();
    }

    pub fn clear_filter(&mut self) {
        self.set_filter(RecordFilter::default());
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    /// Cycle the sort order for a column header click.
    pub fn toggle_sort(&mut self, field: impl Into<SortField>) {
        self.sort = self.sort.toggle(field);
    }

    pub fn load_more(&mut self, total: usize) {
        self.pagination.load_more(total);
    }
}

/// Filtered, sorted rows plus their summary.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditView<'a> {
    /// All rows passing the filter, in display order.
    pub rows: Vec<&'a InvoiceRecord>,
    /// Sums over `rows`.
    pub summary: AggregateSummary,
    /// Size of the unfiltered result set.
    pub total_records: usize,
    pub pagination: Pagination,
}

impl<'a> AuditView<'a> {
    /// Rows inside the current window.
    pub fn visible_rows(&self) -> &[&'a InvoiceRecord] {
        &self.rows[..self.pagination.visible_count(self.rows.len())]
    }

    pub fn has_more(&self) -> bool {
        self.pagination.has_more(self.rows.len())
    }
}

/// Derive the view of `records` under `state`.
pub fn build_view<'a, I>(records: I, state: &ViewState) -> AuditView<'a>
where
    I: IntoIterator<Item = &'a InvoiceRecord>,
{
    let mut total_records = 0;
    let mut rows: Vec<&'a InvoiceRecord> = records
        .into_iter()
        .inspect(|_| total_records += 1)
        .filter(|r| state.filter.matches(r))
        .collect();

    let summary = AggregateSummary::from_records(rows.iter().copied());
    state.sort.sort(&mut rows);

    AuditView {
        rows,
        summary,
        total_records,
        pagination: state.pagination,
    }
}
