use std::collections::HashMap;

use uuid::Uuid;

use crate::errors::LedgerError;
use crate::ledger::Ledger;

/// Owns one ledger per user session.
///
/// Ledgers live only as long as their session; closing a session drops its
/// ledger. Sessions never share state with each other.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<Uuid, Ledger>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session with an empty ledger and returns its key.
    pub fn open(&mut self, name: impl Into<String>) -> Uuid {
        let key = Uuid::new_v4();
        let ledger = Ledger::new(name);
        tracing::info!(session = %key, ledger = %ledger.name, "session opened");
        self.sessions.insert(key, ledger);
        key
    }

    pub fn ledger(&self, key: Uuid) -> Result<&Ledger, LedgerError> {
        self.sessions.get(&key).ok_or(LedgerError::UnknownSession(key))
    }

    pub fn ledger_mut(&mut self, key: Uuid) -> Result<&mut Ledger, LedgerError> {
        self.sessions
            .get_mut(&key)
            .ok_or(LedgerError::UnknownSession(key))
    }

    /// Ends a session, handing back its ledger.
    pub fn close(&mut self, key: Uuid) -> Result<Ledger, LedgerError> {
        let ledger = self
            .sessions
            .remove(&key)
            .ok_or(LedgerError::UnknownSession(key))?;
        tracing::info!(
            session = %key,
            transactions = ledger.transaction_count(),
            "session closed"
        );
        Ok(ledger)
    }

    pub fn contains(&self, key: Uuid) -> bool {
        self.sessions.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
