//! Core audit types, reconciliation rules and result-set views.
//!
//! This module holds everything that does not depend on the source format:
//! the [`InvoiceRecord`] model, the reconciliation classifier and the
//! filter/sort/summary machinery the presentation layer drives.

mod config;
mod error;
pub mod money;
mod query;
pub mod reconcile;
mod summary;
mod types;
mod view;

pub use config::*;
pub use error::*;
pub use query::*;
pub use reconcile::{Reconciliation, ReconciliationInput, classify, derive_discount, is_system_fee};
pub use summary::*;
pub use types::*;
pub use view::*;
