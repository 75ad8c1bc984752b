use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use finpath_core::ledger::{Category, Ledger, Transaction, TransactionKind};
use finpath_core::reports;
use rust_decimal::Decimal;

fn build_sample_ledger(txn_count: usize) -> Ledger {
    let mut ledger = Ledger::new("Benchmark");
    let start_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    for idx in 0..txn_count {
        let date = start_date + Duration::days((idx % 365) as i64);
        let (kind, category) = if idx % 3 == 0 {
            (TransactionKind::Expense, Category::Inventory)
        } else {
            (TransactionKind::Income, Category::Sales)
        };
        let amount = Decimal::new(5_000 + (idx % 100) as i64 * 25, 2);
        ledger.append(Transaction::new(date, kind, category, amount));
    }

    ledger
}

fn bench_reports(c: &mut Criterion) {
    let ledger = build_sample_ledger(10_000);

    c.bench_function("cash_flow_series_10k", |b| {
        b.iter(|| black_box(reports::cash_flow_series(black_box(&ledger))))
    });

    c.bench_function("income_statement_10k", |b| {
        b.iter(|| black_box(reports::income_statement(black_box(&ledger))))
    });

    c.bench_function("achievements_10k", |b| {
        b.iter(|| black_box(reports::achievements(black_box(&ledger))))
    });
}

criterion_group!(benches, bench_reports);
criterion_main!(benches);
