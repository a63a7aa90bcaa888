//! # nfe-auditor
//!
//! Audits batches of Brazilian NFe (Nota Fiscal eletrônica) XML documents:
//! extracts totals, payments and products, reconciles the declared totals
//! against the declared payments and labels each invoice's financial
//! situation (discount, tip/fee, 0.99 system fee).
//!
//! All monetary values use [`rust_decimal::Decimal`] rounded to cents, never
//! floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use nfe_auditor::core::*;
//! use rust_decimal_macros::dec;
//!
//! let outcome = classify(&ReconciliationInput {
//!     product_total: dec!(50.00),
//!     invoice_total: dec!(50.00),
//!     discount: derive_discount(dec!(50.00), dec!(50.00)),
//!     gross_payment: dec!(50.99),
//!     declared_change: dec!(0.99),
//! });
//!
//! assert_eq!(outcome.net_payment, dec!(50.99));
//! assert_eq!(
//!     outcome.financial_status.label(),
//!     "GORJETA/TAXA (R$ 0,99) + TAXA SISTEMA (0.99)"
//! );
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Record types, reconciliation, filter/sort/summary views |
//! | `nfe` | NFe XML extraction and batch processing |
//! | `export` | `;`-separated CSV export |
//! | `all` | Everything |
//!
//! All three are enabled by default.

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "nfe")]
pub mod nfe;

#[cfg(feature = "export")]
pub mod export;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
