use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::{period::DateWindow, transaction::Transaction};

/// Append-only, insertion-ordered record of one session's transactions.
///
/// Transactions cannot be edited or removed; record an offsetting transaction
/// to correct one. Serialize-only, like `Transaction`.
///
/// ```compile_fail
/// let _: finpath_core::ledger::Ledger = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Ledger {
    pub id: Uuid,
    pub name: String,
    transactions: Vec<Transaction>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ledger {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            transactions: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Adds `transaction` to the end of the sequence and returns its id.
    pub fn append(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id();
        self.transactions.push(transaction);
        self.touch();
        id
    }

    /// Read-only snapshot in insertion order.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id() == id)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Copy of this ledger restricted to transactions dated inside `window`,
    /// keeping their relative order.
    pub fn within(&self, window: DateWindow) -> Ledger {
        Ledger {
            id: self.id,
            name: self.name.clone(),
            transactions: self
                .transactions
                .iter()
                .filter(|txn| window.contains(txn.date()))
                .cloned()
                .collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Extend<Transaction> for Ledger {
    fn extend<I: IntoIterator<Item = Transaction>>(&mut self, iter: I) {
        for txn in iter {
            self.append(txn);
        }
    }
}
