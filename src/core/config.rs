use serde::{Deserialize, Serialize};

use super::error::AuditError;

/// Settings shared by the result views and the CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Rows revealed initially and per "load more" step.
    pub page_size: usize,
    /// File name offered for the CSV export.
    pub export_file_name: String,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            page_size: 50,
            export_file_name: "resultado_auditoria.csv".into(),
        }
    }
}

impl AuditConfig {
    pub fn validate(&self) -> Result<(), AuditError> {
        if self.page_size == 0 {
            return Err(AuditError::Config("page_size must be at least 1".into()));
        }
        if self.export_file_name.trim().is_empty() {
            return Err(AuditError::Config("export_file_name must not be empty".into()));
        }
        Ok(())
    }
}
