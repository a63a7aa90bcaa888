use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while reading, configuring or exporting an audit.
///
/// Extraction itself never returns these to the caller: a document that fails
/// to parse still yields a record, with the failure kept as an
/// [`ExtractionIssue`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuditError {
    /// Ill-formed XML document.
    #[error("XML error: {0}")]
    Xml(String),

    /// Reading an input file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV export could not be produced.
    #[error("export error: {0}")]
    Export(String),

    /// Invalid audit configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// A single extraction problem attached to an invoice record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionIssue {
    /// Element (or pseudo-element such as `document` / `file`) the problem concerns.
    pub element: String,
    /// Human-readable description.
    pub message: String,
}

impl std::fmt::Display for ExtractionIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.element, self.message)
    }
}

impl ExtractionIssue {
    pub fn new(element: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            message: message.into(),
        }
    }

    /// A required block is absent from the document.
    pub fn missing(element: impl Into<String>) -> Self {
        Self::new(element, "missing element")
    }
}
