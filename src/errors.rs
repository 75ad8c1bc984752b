use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),
    #[error("Invalid date window: {start} is after {end}")]
    InvalidWindow {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },
    #[error("Unrecognized {field}: `{value}`")]
    Unrecognized { field: &'static str, value: String },
    #[error("Unknown session: {0}")]
    UnknownSession(Uuid),
}

impl LedgerError {
    pub(crate) fn unrecognized(field: &'static str, value: impl Into<String>) -> Self {
        LedgerError::Unrecognized {
            field,
            value: value.into(),
        }
    }
}
