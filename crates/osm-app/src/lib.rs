//! Shared application layer for osmoflow.
//!
//! This crate sits between the pure calculation engine and any front end.
//! It owns the calculator form state and its reducer, configuration and
//! reference-table loading, text rendering, and replay of recorded actions.

pub mod config;
pub mod error;
pub mod form;
pub mod reference_service;
pub mod render;
pub mod replay;
pub mod session;

// Re-export key types for convenience
pub use config::{AppConfig, load_config};
pub use error::{AppError, AppResult};
pub use form::{Action, FormState, Mode, RowIssue, SoluteField, reduce};
pub use reference_service::{load_reference_table, parse_reference_json, parse_reference_yaml};
pub use replay::{ActionScript, load_script};
pub use session::Session;
