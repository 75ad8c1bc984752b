//! Derived views over a ledger.
//!
//! Every function here is a pure function of `Ledger::all()`: each call
//! recomputes its result from the full transaction list, and none of them
//! mutate or cache anything. All are defined for an empty ledger.

pub mod cash_flow;
pub mod progress;
pub mod statement;
pub mod totals;

pub use cash_flow::{
    cash_flow_series, daily_kind_totals, daily_net_flow, CashFlowPoint, DailyKindTotals,
};
pub use progress::{
    achievements, formalization_level, level, levels, next_level, progress_ratio, AchievementId,
    FormalizationLevel, LevelText, MAX_LEVEL, PROGRESS_TARGET,
};
pub use statement::{income_statement, IncomeStatement};
pub use totals::{cash_position, category_breakdown, total_by_kind, transactions_on};
