use std::borrow::Cow;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::labels::{Labeled, Language};
use crate::ledger::{Category, DateWindow, Ledger, ReportPeriod, TransactionKind};
use crate::reports::{self, IncomeStatement};

/// Headline metrics shown on the dashboard.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Dashboard {
    pub cash_position: Decimal,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub transaction_count: usize,
    pub transactions_today: usize,
    pub level: u8,
    pub level_title: &'static str,
    pub achievement_count: usize,
    pub progress_ratio: f64,
}

/// Income statement for one reporting period, with per-category detail.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatementReport {
    pub period: ReportPeriod,
    pub window: Option<DateWindow>,
    pub statement: IncomeStatement,
    pub income_by_category: BTreeMap<Category, Decimal>,
    pub expenses_by_category: BTreeMap<Category, Decimal>,
}

pub struct ReportService;

impl ReportService {
    pub fn dashboard(ledger: &Ledger, today: NaiveDate) -> Dashboard {
        let statement = reports::income_statement(ledger);
        let level = reports::formalization_level(ledger);
        Dashboard {
            cash_position: reports::cash_position(ledger),
            total_income: statement.total_income,
            total_expenses: statement.total_expenses,
            transaction_count: ledger.transaction_count(),
            transactions_today: reports::transactions_on(ledger, today),
            level: level.number,
            level_title: level.label(Language::English),
            achievement_count: reports::achievements(ledger).len(),
            progress_ratio: reports::progress_ratio(ledger),
        }
    }

    /// Ledger restricted to `period` as resolved against `reference`.
    /// `AllTime` borrows the ledger as is.
    pub fn scoped(ledger: &Ledger, period: ReportPeriod, reference: NaiveDate) -> Cow<'_, Ledger> {
        match period.window(reference) {
            Some(window) => Cow::Owned(ledger.within(window)),
            None => Cow::Borrowed(ledger),
        }
    }

    pub fn statement_for(
        ledger: &Ledger,
        period: ReportPeriod,
        reference: NaiveDate,
    ) -> StatementReport {
        let scoped = Self::scoped(ledger, period, reference);
        tracing::debug!(
            %period,
            transactions = scoped.transaction_count(),
            "computing income statement"
        );
        StatementReport {
            period,
            window: period.window(reference),
            statement: reports::income_statement(&scoped),
            income_by_category: reports::category_breakdown(&scoped, TransactionKind::Income),
            expenses_by_category: reports::category_breakdown(&scoped, TransactionKind::Expense),
        }
    }
}
