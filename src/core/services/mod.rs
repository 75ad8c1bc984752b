pub mod report_service;
pub mod transaction_service;

pub use report_service::{Dashboard, ReportService, StatementReport};
pub use transaction_service::{AmountPolicy, TransactionDraft, TransactionService, MAX_AMOUNT};

use crate::errors::LedgerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("{0}")]
    Invalid(String),
}
