use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::totals::total_by_kind;
use crate::ledger::{Ledger, TransactionKind};

/// Simple income statement. Zero-filled when the ledger is empty.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct IncomeStatement {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_income: Decimal,
}

impl IncomeStatement {
    pub fn from_totals(total_income: Decimal, total_expenses: Decimal) -> Self {
        Self {
            total_income,
            total_expenses,
            net_income: total_income.saturating_sub(total_expenses),
        }
    }
}

pub fn income_statement(ledger: &Ledger) -> IncomeStatement {
    IncomeStatement::from_totals(
        total_by_kind(ledger, TransactionKind::Income),
        total_by_kind(ledger, TransactionKind::Expense),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Category, Transaction};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_ledger_is_zero_filled() {
        assert_eq!(income_statement(&Ledger::new("Empty")), IncomeStatement::default());
    }

    #[test]
    fn net_income_can_go_negative() {
        let day = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let mut ledger = Ledger::new("Loss");
        ledger.append(Transaction::new(day, TransactionKind::Income, Category::Sales, dec!(100)));
        ledger.append(Transaction::new(day, TransactionKind::Expense, Category::Inventory, dec!(340.25)));

        let statement = income_statement(&ledger);
        assert_eq!(statement.total_income, dec!(100));
        assert_eq!(statement.total_expenses, dec!(340.25));
        assert_eq!(statement.net_income, dec!(-240.25));
    }
}
