//! Error types for the osm-app layer.

use std::path::PathBuf;

/// Application error type that wraps engine and file failures and provides a
/// single error surface for front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Failed to read reference table: {path}")]
    ReferenceRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Reference table error: {0}")]
    Reference(String),

    #[error("Failed to read action script: {path}")]
    ScriptRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Action script error: {0}")]
    Script(String),

    #[error("Reference solution not found: {0}")]
    PresetNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    Engine(#[from] osm_engine::EngineError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for osm-app operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use osm_engine::{EngineError, Field};

    #[test]
    fn engine_errors_convert() {
        let err: AppError = EngineError::InvalidInput {
            field: Field::MolecularWeight,
            reason: "must be greater than zero".into(),
        }
        .into();
        assert!(matches!(err, AppError::Engine(_)));
        assert!(err.to_string().contains("molecular weight"));
    }

    #[test]
    fn preset_not_found_names_key() {
        let err = AppError::PresetNotFound("plasma".into());
        assert_eq!(err.to_string(), "Reference solution not found: plasma");
    }
}
