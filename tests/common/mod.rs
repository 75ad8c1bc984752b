#![allow(dead_code)]

use chrono::NaiveDate;
use finpath_core::ledger::{Category, Ledger, Transaction, TransactionKind};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn income(date: NaiveDate, category: Category, amount: Decimal) -> Transaction {
    Transaction::new(date, TransactionKind::Income, category, amount)
}

pub fn expense(date: NaiveDate, category: Category, amount: Decimal) -> Transaction {
    Transaction::new(date, TransactionKind::Expense, category, amount)
}

/// A small shop's first weeks, appended out of date order.
pub static SHOP_TRANSACTIONS: Lazy<Vec<Transaction>> = Lazy::new(|| {
    vec![
        income(ymd(2024, 3, 4), Category::Sales, dec!(420.00)),
        expense(ymd(2024, 3, 1), Category::Rent, dec!(650.00)),
        income(ymd(2024, 3, 2), Category::Services, dec!(180.50)),
        expense(ymd(2024, 3, 4), Category::Inventory, dec!(95.25)),
        income(ymd(2024, 2, 27), Category::Sales, dec!(300.00)),
        expense(ymd(2024, 3, 6), Category::Utilities, dec!(48.10)),
        income(ymd(2024, 3, 6), Category::Sales, dec!(512.75)),
    ]
});

pub fn shop_ledger() -> Ledger {
    let mut ledger = Ledger::new("Tienda Rosa");
    ledger.extend(SHOP_TRANSACTIONS.iter().cloned());
    ledger
}
