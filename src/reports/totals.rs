use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::ledger::{Category, Ledger, TransactionKind};

/// Sum of amounts over all transactions of `kind`. Zero for an empty ledger.
///
/// Sums saturate at the `Decimal` bounds instead of panicking.
pub fn total_by_kind(ledger: &Ledger, kind: TransactionKind) -> Decimal {
    ledger
        .all()
        .iter()
        .filter(|txn| txn.kind() == kind)
        .fold(Decimal::ZERO, |total, txn| total.saturating_add(txn.amount()))
}

/// Net of all income minus all expenses to date.
pub fn cash_position(ledger: &Ledger) -> Decimal {
    total_by_kind(ledger, TransactionKind::Income)
        .saturating_sub(total_by_kind(ledger, TransactionKind::Expense))
}

/// Per-category sums for `kind`. Categories with no transactions are absent.
pub fn category_breakdown(ledger: &Ledger, kind: TransactionKind) -> BTreeMap<Category, Decimal> {
    let mut groups = BTreeMap::new();
    for txn in ledger.all().iter().filter(|txn| txn.kind() == kind) {
        let sum = groups.entry(txn.category()).or_insert(Decimal::ZERO);
        *sum = sum.saturating_add(txn.amount());
    }
    groups
}

/// Number of transactions dated exactly `date`.
pub fn transactions_on(ledger: &Ledger, date: NaiveDate) -> usize {
    ledger.all().iter().filter(|txn| txn.date() == date).count()
}
