use thiserror::Error;

pub type OsmResult<T> = Result<T, OsmError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OsmError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Non-positive value for {what}: {value}")]
    NonPositive { what: &'static str, value: f64 },
}
