//! Ledger domain models: transactions, categories, and reporting periods.

pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod period;
pub mod transaction;

pub use category::Category;
pub use ledger::Ledger;
pub use period::{DateWindow, ReportPeriod};
pub use transaction::{Transaction, TransactionKind};
