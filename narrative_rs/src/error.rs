//! Error taxonomy for report rendering.
//!
//! Every variant is fatal: the renderer stops at the first error and the
//! document is never written. Messages name the offending artifact, path
//! or column verbatim.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("artifact '{name}' not found at {}", .path.display())]
    ArtifactNotFound { name: String, path: PathBuf },

    #[error("artifact '{artifact}' has no column '{column}' (available: {})", .available.join(", "))]
    SchemaMismatch {
        artifact: String,
        column: String,
        available: Vec<String>,
    },

    #[error("section {section} references artifact '{name}', which is not in the artifact catalog")]
    UnresolvedArtifact { section: usize, name: String },

    #[error("artifact '{name}' is malformed: {reason}")]
    MalformedArtifact { name: String, reason: String },

    #[error("section {section}: pie has {labels} labels but {values} static values")]
    PartitionMismatch {
        section: usize,
        labels: usize,
        values: usize,
    },

    #[error("config {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;

impl ReportError {
    /// The absent column of a `SchemaMismatch`, `None` for every other error.
    pub fn missing_column(&self) -> Option<&str> {
        match self {
            ReportError::SchemaMismatch { column, .. } => Some(column),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_mismatch_names_the_column() {
        let err = ReportError::SchemaMismatch {
            artifact: "ptype_rate".into(),
            column: "medicaid_use".into(),
            available: vec!["year".into(), "state".into(), "rate".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'medicaid_use'"));
        assert!(msg.contains("year, state, rate"));
        assert_eq!(err.missing_column(), Some("medicaid_use"));
    }

    #[test]
    fn not_found_names_the_path() {
        let err = ReportError::ArtifactNotFound {
            name: "did_results".into(),
            path: PathBuf::from("/data/img/dd_modsf.jpg"),
        };
        assert_eq!(
            err.to_string(),
            "artifact 'did_results' not found at /data/img/dd_modsf.jpg"
        );
    }
}
