//! Engine errors.

use crate::field::{Field, FieldIssue, IssueKind};
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur during osmolarity calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A numeric input that cannot take part in a calculation.
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: Field, reason: String },

    /// Reference table rejected (empty, duplicate keys, bad values).
    #[error("Invalid reference table: {what}")]
    InvalidTable { what: String },

    /// Tonicity thresholds that do not form a band.
    #[error("Invalid tonicity band: {what}")]
    InvalidBand { what: String },
}

impl EngineError {
    /// Report a failed calculation against the field it blames.
    pub fn into_field_issue(self) -> FieldIssue {
        match self {
            EngineError::InvalidInput { field, reason } => {
                FieldIssue::new(field, IssueKind::OutOfRange { reason })
            }
            other => FieldIssue::new(
                Field::Concentration,
                IssueKind::OutOfRange {
                    reason: other.to_string(),
                },
            ),
        }
    }
}
