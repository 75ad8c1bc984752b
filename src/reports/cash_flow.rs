use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{Ledger, Transaction, TransactionKind};

/// One step of the running cash balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CashFlowPoint {
    pub date: NaiveDate,
    pub running_balance: Decimal,
}

/// Income and expense totals for a single day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyKindTotals {
    pub date: NaiveDate,
    pub income: Decimal,
    pub expenses: Decimal,
}

/// Running balance over the ledger ordered by date, one point per transaction.
///
/// Transactions sharing a date keep their insertion order. Recomputed from the
/// full ledger on every call.
pub fn cash_flow_series(ledger: &Ledger) -> Vec<CashFlowPoint> {
    let mut ordered: Vec<&Transaction> = ledger.all().iter().collect();
    // Must stay a stable sort.
    ordered.sort_by_key(|txn| txn.date());

    let mut balance = Decimal::ZERO;
    ordered
        .into_iter()
        .map(|txn| {
            balance = balance.saturating_add(txn.signed_amount());
            CashFlowPoint {
                date: txn.date(),
                running_balance: balance,
            }
        })
        .collect()
}

/// Signed net flow per date, date ascending.
pub fn daily_net_flow(ledger: &Ledger) -> Vec<(NaiveDate, Decimal)> {
    let mut days: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for txn in ledger.all() {
        let net = days.entry(txn.date()).or_insert(Decimal::ZERO);
        *net = net.saturating_add(txn.signed_amount());
    }
    days.into_iter().collect()
}

/// Income and expense totals per date, date ascending.
pub fn daily_kind_totals(ledger: &Ledger) -> Vec<DailyKindTotals> {
    let mut days: BTreeMap<NaiveDate, DailyKindTotals> = BTreeMap::new();
    for txn in ledger.all() {
        let entry = days.entry(txn.date()).or_insert(DailyKindTotals {
            date: txn.date(),
            income: Decimal::ZERO,
            expenses: Decimal::ZERO,
        });
        match txn.kind() {
            TransactionKind::Income => entry.income = entry.income.saturating_add(txn.amount()),
            TransactionKind::Expense => entry.expenses = entry.expenses.saturating_add(txn.amount()),
        }
    }
    days.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Category;
    use rust_decimal_macros::dec;

    fn ymd(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn series_sorts_by_date_not_insertion() {
        let mut ledger = Ledger::new("Flow");
        ledger.append(Transaction::new(ymd(5), TransactionKind::Income, Category::Sales, dec!(500)));
        ledger.append(Transaction::new(ymd(3), TransactionKind::Expense, Category::Rent, dec!(200)));

        assert_eq!(
            cash_flow_series(&ledger),
            vec![
                CashFlowPoint { date: ymd(3), running_balance: dec!(-200) },
                CashFlowPoint { date: ymd(5), running_balance: dec!(300) },
            ]
        );
    }

    #[test]
    fn same_day_entries_keep_insertion_order() {
        let mut ledger = Ledger::new("Flow");
        ledger.append(Transaction::new(ymd(2), TransactionKind::Expense, Category::Supplies, dec!(40)));
        ledger.append(Transaction::new(ymd(2), TransactionKind::Income, Category::Sales, dec!(100)));
        ledger.append(Transaction::new(ymd(1), TransactionKind::Income, Category::Sales, dec!(10)));

        let balances: Vec<_> = cash_flow_series(&ledger)
            .into_iter()
            .map(|point| point.running_balance)
            .collect();
        assert_eq!(balances, vec![dec!(10), dec!(-30), dec!(70)]);
    }

    #[test]
    fn daily_views_merge_same_day() {
        let mut ledger = Ledger::new("Daily");
        ledger.append(Transaction::new(ymd(2), TransactionKind::Income, Category::Sales, dec!(100)));
        ledger.append(Transaction::new(ymd(1), TransactionKind::Expense, Category::Rent, dec!(60)));
        ledger.append(Transaction::new(ymd(2), TransactionKind::Expense, Category::Utilities, dec!(25)));

        assert_eq!(daily_net_flow(&ledger), vec![(ymd(1), dec!(-60)), (ymd(2), dec!(75))]);

        let totals = daily_kind_totals(&ledger);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[1].income, dec!(100));
        assert_eq!(totals[1].expenses, dec!(25));
    }

    #[test]
    fn empty_ledger_has_empty_series() {
        let ledger = Ledger::new("Empty");
        assert!(cash_flow_series(&ledger).is_empty());
        assert!(daily_net_flow(&ledger).is_empty());
        assert!(daily_kind_totals(&ledger).is_empty());
    }
}
