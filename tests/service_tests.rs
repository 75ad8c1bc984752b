mod common;

use common::{shop_ledger, ymd};
use finpath_core::{
    core::services::{
        AmountPolicy, ReportService, ServiceError, TransactionDraft, TransactionService, MAX_AMOUNT,
    },
    core::SessionRegistry,
    errors::LedgerError,
    ledger::{Category, ReportPeriod, TransactionKind},
    reports,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn rejected_draft_leaves_ledger_unchanged() {
    let mut ledger = shop_ledger();
    let before = ledger.transaction_count();
    let draft = TransactionDraft::new(ymd(2024, 3, 8), TransactionKind::Expense, Category::Rent, dec!(-10));

    let err = TransactionService::record(&mut ledger, draft, AmountPolicy::AllowZero)
        .expect_err("negative amount");
    assert!(matches!(err, ServiceError::Ledger(LedgerError::InvalidAmount(_))));
    assert_eq!(ledger.transaction_count(), before);
}

#[test]
fn recorded_draft_is_retrievable() {
    let mut ledger = shop_ledger();
    let draft = TransactionDraft::new(ymd(2024, 3, 8), TransactionKind::Income, Category::OtherIncome, dec!(75))
        .with_description("refund from supplier");
    let id = TransactionService::record(&mut ledger, draft, AmountPolicy::Strict).unwrap();

    let txn = TransactionService::get(&ledger, id).unwrap();
    assert_eq!(txn.category(), Category::OtherIncome);
    assert_eq!(txn.description(), Some("refund from supplier"));
    assert_eq!(ledger.all().last().map(|t| t.id()), Some(id));
}

#[test]
fn history_is_newest_first() {
    let ledger = shop_ledger();
    let dates: Vec<_> = TransactionService::history(&ledger)
        .into_iter()
        .map(|txn| txn.date())
        .collect();
    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);
    assert_eq!(dates.first(), Some(&ymd(2024, 3, 6)));
}

#[test]
fn history_keeps_insertion_order_within_a_day() {
    let ledger = shop_ledger();
    let amounts: Vec<_> = TransactionService::history(&ledger)
        .into_iter()
        .map(|txn| txn.amount())
        .collect();
    assert_eq!(
        amounts,
        vec![
            dec!(48.10),
            dec!(512.75),
            dec!(420.00),
            dec!(95.25),
            dec!(180.50),
            dec!(650.00),
            dec!(300.00),
        ]
    );

    let mut ledger = shop_ledger();
    let day = ymd(2024, 3, 6);
    let ids: Vec<_> = (1..=20_i64)
        .map(|n| {
            let draft = TransactionDraft::new(day, TransactionKind::Income, Category::Sales, Decimal::from(n));
            TransactionService::record(&mut ledger, draft, AmountPolicy::Strict).unwrap()
        })
        .collect();
    let same_day: Vec<_> = TransactionService::history(&ledger)
        .into_iter()
        .filter(|txn| ids.contains(&txn.id()))
        .map(|txn| txn.id())
        .collect();
    assert_eq!(same_day, ids);
}

#[test]
fn correction_is_an_offsetting_entry() {
    let mut ledger = shop_ledger();
    let cash = reports::cash_position(&ledger);
    let wrong = TransactionDraft::new(ymd(2024, 3, 9), TransactionKind::Income, Category::Sales, dec!(99));
    let reversal = TransactionDraft::new(ymd(2024, 3, 9), TransactionKind::Expense, Category::Other, dec!(99))
        .with_description("reverse duplicate sale");
    TransactionService::record(&mut ledger, wrong, AmountPolicy::Strict).unwrap();
    TransactionService::record(&mut ledger, reversal, AmountPolicy::Strict).unwrap();

    assert_eq!(reports::cash_position(&ledger), cash);
}

#[test]
fn statement_for_last_month_only_sees_february() {
    let report = ReportService::statement_for(&shop_ledger(), ReportPeriod::LastMonth, ymd(2024, 3, 10));
    assert_eq!(report.statement.total_income, dec!(300));
    assert_eq!(report.statement.total_expenses, dec!(0));
    assert!(report.expenses_by_category.is_empty());
}

#[test]
fn dashboard_matches_reports() {
    let ledger = shop_ledger();
    let dashboard = ReportService::dashboard(&ledger, ymd(2024, 3, 4));
    assert_eq!(dashboard.cash_position, reports::cash_position(&ledger));
    assert_eq!(dashboard.transactions_today, 2);
    assert_eq!(dashboard.transaction_count, 7);
    assert_eq!(dashboard.level_title, "Startup Explorer");
    assert_eq!(dashboard.achievement_count, reports::achievements(&ledger).len());
}

#[test]
fn sessions_are_isolated() {
    let mut registry = SessionRegistry::new();
    let first = registry.open("Panadería");
    let second = registry.open("Ferretería");

    let draft = TransactionDraft::new(ymd(2024, 1, 2), TransactionKind::Income, Category::Sales, dec!(40));
    TransactionService::record(registry.ledger_mut(first).unwrap(), draft, AmountPolicy::Strict).unwrap();

    assert_eq!(registry.ledger(first).unwrap().transaction_count(), 1);
    assert!(registry.ledger(second).unwrap().is_empty());
    assert_eq!(registry.len(), 2);

    registry.close(first).unwrap();
    assert!(matches!(registry.ledger(first), Err(LedgerError::UnknownSession(_))));
    assert!(registry.contains(second));
}

#[test]
fn amounts_beyond_the_cap_never_reach_the_reports() {
    let mut ledger = shop_ledger();
    for _ in 0..2 {
        let draft = TransactionDraft::new(ymd(2024, 3, 8), TransactionKind::Income, Category::Sales, Decimal::MAX);
        let err = TransactionService::record(&mut ledger, draft, AmountPolicy::Strict)
            .expect_err("amount above cap");
        assert!(matches!(err, ServiceError::Ledger(LedgerError::InvalidAmount(_))));
    }
    for _ in 0..2 {
        let draft = TransactionDraft::new(ymd(2024, 3, 8), TransactionKind::Income, Category::Sales, MAX_AMOUNT);
        TransactionService::record(&mut ledger, draft, AmountPolicy::Strict).unwrap();
    }

    let dashboard = ReportService::dashboard(&ledger, ymd(2024, 3, 8));
    assert_eq!(dashboard.total_income, dec!(1413.25) + MAX_AMOUNT + MAX_AMOUNT);
    assert_eq!(dashboard.transactions_today, 2);
}
