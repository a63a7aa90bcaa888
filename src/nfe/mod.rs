//! NFe (Nota Fiscal eletrônica) XML extraction.
//!
//! Only the fields the audit needs are read:
//!
//! | Block | Fields |
//! |-------|--------|
//! | `ide` | `nNF`, `dhEmi` |
//! | `emit` | `CNPJ` |
//! | `ICMSTot` | `vProd`, `vNF` |
//! | `detPag` (repeatable) | `vPag` |
//! | `pag` | `vTroco` |
//! | `det/prod` (repeatable) | `xProd`, `vProd` |
//!
//! Everything else in the document is ignored and no schema validation is done.
//!
//! # Example
//!
//! ```
//! use nfe_auditor::nfe;
//!
//! let xml = br#"<nfeProc><NFe><infNFe>
//!   <ide><nNF>42</nNF></ide>
//!   <total><ICMSTot><vProd>100.00</vProd><vNF>90.00</vNF></ICMSTot></total>
//!   <pag><detPag><vPag>90.00</vPag></detPag></pag>
//! </infNFe></NFe></nfeProc>"#;
//!
//! let record = nfe::extract_invoice(xml, "42.xml");
//! assert_eq!(record.financial_status.label(), "DESCONTO (R$ 10,00)");
//! ```

mod batch;
mod document;
mod extract;
mod tree;

pub use batch::{process_batch, process_paths};
pub use document::{Identification, Issuer, NfeDocument, Payment, PaymentDetail, Product, Totals};
pub use extract::{extract_document, extract_from_document, extract_invoice};
