use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;
use crate::errors::LedgerError;
use crate::labels::{Labeled, Language};

/// A single dated money movement. Immutable once constructed.
///
/// Serialize-only: transactions enter a ledger through `Transaction::new`, never
/// from JSON.
///
/// ```compile_fail
/// let _: finpath_core::ledger::Transaction = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Transaction {
    id: Uuid,
    date: NaiveDate,
    kind: TransactionKind,
    category: Category,
    amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Transaction {
    /// Builds a transaction without validating `amount`; callers that take user
    /// input go through `TransactionService::record` instead.
    pub fn new(date: NaiveDate, kind: TransactionKind, category: Category, amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            kind,
            category,
            amount,
            description: None,
        }
    }

    /// Attaches a description; blank text is treated as absent.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let text = description.into();
        let trimmed = text.trim();
        self.description = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// `+amount` for income, `-amount` for expenses.
    pub fn signed_amount(&self) -> Decimal {
        self.kind.sign() * self.amount
    }
}

/// Direction of a money movement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 2] = [TransactionKind::Income, TransactionKind::Expense];

    pub fn sign(self) -> Decimal {
        match self {
            TransactionKind::Income => Decimal::ONE,
            TransactionKind::Expense => Decimal::NEGATIVE_ONE,
        }
    }
}

impl Labeled for TransactionKind {
    fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (TransactionKind::Income, Language::English) => "Income",
            (TransactionKind::Income, Language::Spanish) => "Ingreso",
            (TransactionKind::Expense, Language::English) => "Expense",
            (TransactionKind::Expense, Language::Spanish) => "Gasto",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(Language::English))
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "ingreso" | "ingresos" => Ok(TransactionKind::Income),
            "expense" | "expenses" | "gasto" | "gastos" => Ok(TransactionKind::Expense),
            _ => Err(LedgerError::unrecognized("transaction kind", s)),
        }
    }
}
