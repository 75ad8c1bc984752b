//! Validation boundary in front of `Ledger::append`.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::errors::LedgerError;
use crate::ledger::{Category, Ledger, Transaction, TransactionKind};

/// Largest amount a single transaction may carry. Keeps every report sum far
/// from `Decimal::MAX`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Which amounts are accepted when recording a transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AmountPolicy {
    /// Amounts must be strictly positive.
    #[default]
    Strict,
    /// Zero is accepted; negatives are still rejected.
    AllowZero,
}

impl AmountPolicy {
    pub fn check(self, amount: Decimal) -> Result<(), LedgerError> {
        let accepted = match self {
            AmountPolicy::Strict => amount > Decimal::ZERO,
            AmountPolicy::AllowZero => amount >= Decimal::ZERO,
        } && amount <= MAX_AMOUNT;
        if accepted {
            Ok(())
        } else {
            Err(LedgerError::InvalidAmount(amount))
        }
    }
}

impl fmt::Display for AmountPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountPolicy::Strict => f.write_str("strict"),
            AmountPolicy::AllowZero => f.write_str("allow_zero"),
        }
    }
}

impl FromStr for AmountPolicy {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "strict" => Ok(AmountPolicy::Strict),
            "allow_zero" => Ok(AmountPolicy::AllowZero),
            _ => Err(LedgerError::unrecognized("amount policy", s)),
        }
    }
}

/// Fields collected from a transaction entry form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionDraft {
    pub date: NaiveDate,
    pub kind: TransactionKind,
    pub category: Category,
    pub amount: Decimal,
    #[serde(default)]
    pub description: String,
}

impl TransactionDraft {
    pub fn new(date: NaiveDate, kind: TransactionKind, category: Category, amount: Decimal) -> Self {
        Self {
            date,
            kind,
            category,
            amount,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    fn into_transaction(self) -> Transaction {
        Transaction::new(self.date, self.kind, self.category, self.amount)
            .with_description(self.description)
    }
}

/// Validated entry point for adding transactions to a ledger.
pub struct TransactionService;

impl TransactionService {
    /// Validates `draft` against `policy` and appends it, returning the new id.
    /// The ledger is left untouched when validation fails.
    pub fn record(
        ledger: &mut Ledger,
        draft: TransactionDraft,
        policy: AmountPolicy,
    ) -> ServiceResult<Uuid> {
        if let Err(err) = policy.check(draft.amount) {
            tracing::warn!(amount = %draft.amount, %policy, "rejected transaction");
            return Err(ServiceError::from(err));
        }
        let id = ledger.append(draft.into_transaction());
        tracing::debug!(ledger = %ledger.id, transaction = %id, "transaction recorded");
        Ok(id)
    }

    /// Transactions newest first; same-day entries keep insertion order.
    pub fn history(ledger: &Ledger) -> Vec<&Transaction> {
        let mut rows: Vec<&Transaction> = ledger.all().iter().collect();
        rows.sort_by(|a, b| b.date().cmp(&a.date()));
        rows
    }

    /// Looks up a single transaction by id.
    pub fn get(ledger: &Ledger, id: Uuid) -> ServiceResult<&Transaction> {
        ledger
            .transaction(id)
            .ok_or_else(|| ServiceError::Invalid("Transaction not found".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn draft(amount: Decimal) -> TransactionDraft {
        TransactionDraft::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            TransactionKind::Income,
            Category::Sales,
            amount,
        )
    }

    #[test]
    fn strict_policy_rejects_zero() {
        let mut ledger = Ledger::new("Txn");
        let err = TransactionService::record(&mut ledger, draft(dec!(0)), AmountPolicy::Strict)
            .expect_err("zero must be rejected");
        assert!(
            matches!(err, ServiceError::Ledger(LedgerError::InvalidAmount(amount)) if amount.is_zero()),
            "unexpected error: {err:?}"
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn allow_zero_accepts_zero_but_not_negative() {
        let mut ledger = Ledger::new("Txn");
        TransactionService::record(&mut ledger, draft(dec!(0)), AmountPolicy::AllowZero).unwrap();
        assert_eq!(ledger.transaction_count(), 1);

        let err = TransactionService::record(&mut ledger, draft(dec!(-5)), AmountPolicy::AllowZero)
            .expect_err("negative must be rejected");
        assert!(err.to_string().contains("-5"), "unexpected error: {err}");
        assert_eq!(ledger.transaction_count(), 1);
    }

    #[test]
    fn max_amount_is_one_quadrillion() {
        assert_eq!(MAX_AMOUNT, dec!(1000000000000000));
    }

    #[test]
    fn amounts_above_the_cap_are_rejected() {
        let mut ledger = Ledger::new("Txn");
        TransactionService::record(&mut ledger, draft(MAX_AMOUNT), AmountPolicy::Strict).unwrap();

        for policy in [AmountPolicy::Strict, AmountPolicy::AllowZero] {
            let err = TransactionService::record(&mut ledger, draft(MAX_AMOUNT + dec!(0.01)), policy)
                .expect_err("amount above cap");
            assert!(
                matches!(err, ServiceError::Ledger(LedgerError::InvalidAmount(_))),
                "unexpected error: {err:?}"
            );
            TransactionService::record(&mut ledger, draft(Decimal::MAX), policy)
                .expect_err("Decimal::MAX must be rejected");
        }
        assert_eq!(ledger.transaction_count(), 1);
    }

    #[test]
    fn get_fails_for_missing_transaction() {
        let ledger = Ledger::new("Txn");
        let err = TransactionService::get(&ledger, Uuid::new_v4()).expect_err("missing");
        assert!(
            matches!(err, ServiceError::Invalid(ref message) if message.contains("not found")),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn policy_parses_config_spellings() {
        assert_eq!("allow-zero".parse::<AmountPolicy>().unwrap(), AmountPolicy::AllowZero);
        assert_eq!("Strict".parse::<AmountPolicy>().unwrap(), AmountPolicy::Strict);
    }
}
