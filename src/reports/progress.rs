use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::totals::{cash_position, total_by_kind};
use crate::labels::{Labeled, Language};
use crate::ledger::{Ledger, TransactionKind};

/// Transaction count at which formalization progress reaches 100%.
pub const PROGRESS_TARGET: usize = 100;

/// Fraction of the progress target reached, in `[0, 1]`.
pub fn progress_ratio(ledger: &Ledger) -> f64 {
    (ledger.transaction_count() as f64 / PROGRESS_TARGET as f64).min(1.0)
}

/// Milestones unlocked by transaction count and income thresholds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    FirstTransaction,
    TenTransactions,
    FiftyTransactions,
    RecordKeeper,
    FirstIncome,
    ThousandIncome,
    FiveThousandIncome,
    CashMaster,
}

/// Inputs every achievement predicate is evaluated against.
#[derive(Debug, Clone, Copy)]
struct Standing {
    count: usize,
    income: Decimal,
    cash: Decimal,
}

impl AchievementId {
    pub const ALL: [AchievementId; 8] = [
        AchievementId::FirstTransaction,
        AchievementId::TenTransactions,
        AchievementId::FiftyTransactions,
        AchievementId::RecordKeeper,
        AchievementId::FirstIncome,
        AchievementId::ThousandIncome,
        AchievementId::FiveThousandIncome,
        AchievementId::CashMaster,
    ];

    fn is_met(self, standing: &Standing) -> bool {
        match self {
            AchievementId::FirstTransaction => standing.count >= 1,
            AchievementId::TenTransactions => standing.count >= 10,
            AchievementId::FiftyTransactions => standing.count >= 50,
            AchievementId::RecordKeeper => standing.count > 10,
            AchievementId::FirstIncome => standing.income > Decimal::ZERO,
            AchievementId::ThousandIncome => standing.income > Decimal::from(1_000),
            AchievementId::FiveThousandIncome => standing.income > Decimal::from(5_000),
            AchievementId::CashMaster => standing.cash > Decimal::from(1_000),
        }
    }
}

impl Labeled for AchievementId {
    fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (AchievementId::FirstTransaction, Language::English) => "First transaction recorded",
            (AchievementId::FirstTransaction, Language::Spanish) => "Primera transacción registrada",
            (AchievementId::TenTransactions, Language::English) => "10 transactions milestone",
            (AchievementId::TenTransactions, Language::Spanish) => "Meta de 10 transacciones",
            (AchievementId::FiftyTransactions, Language::English) => "50 transactions milestone",
            (AchievementId::FiftyTransactions, Language::Spanish) => "Meta de 50 transacciones",
            (AchievementId::RecordKeeper, Language::English) => {
                "Record Keeper: Tracked 10+ transactions"
            }
            (AchievementId::RecordKeeper, Language::Spanish) => {
                "Guardián de Registros: más de 10 transacciones"
            }
            (AchievementId::FirstIncome, Language::English) => "First income recorded",
            (AchievementId::FirstIncome, Language::Spanish) => "Primer ingreso registrado",
            (AchievementId::ThousandIncome, Language::English) => "$1,000 income milestone",
            (AchievementId::ThousandIncome, Language::Spanish) => "Meta de $1,000 en ingresos",
            (AchievementId::FiveThousandIncome, Language::English) => "$5,000 income milestone",
            (AchievementId::FiveThousandIncome, Language::Spanish) => "Meta de $5,000 en ingresos",
            (AchievementId::CashMaster, Language::English) => {
                "Cash Master: Reached $1,000 in net cash"
            }
            (AchievementId::CashMaster, Language::Spanish) => {
                "Maestro del Efectivo: $1,000 en efectivo neto"
            }
        }
    }
}

/// Achievements currently satisfied by the ledger. Nothing is remembered
/// between calls.
pub fn achievements(ledger: &Ledger) -> BTreeSet<AchievementId> {
    let standing = Standing {
        count: ledger.transaction_count(),
        income: total_by_kind(ledger, TransactionKind::Income),
        cash: cash_position(ledger),
    };
    AchievementId::ALL
        .into_iter()
        .filter(|id| id.is_met(&standing))
        .collect()
}

/// English and Spanish wording of one catalog string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelText {
    pub english: &'static str,
    pub spanish: &'static str,
}

const fn text(english: &'static str, spanish: &'static str) -> LevelText {
    LevelText { english, spanish }
}

impl Labeled for LevelText {
    fn label(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.english,
            Language::Spanish => self.spanish,
        }
    }
}

/// Step on the formalization journey. Its label is the level title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormalizationLevel {
    pub number: u8,
    pub title: LevelText,
    pub requirements: [LevelText; 3],
}

impl FormalizationLevel {
    pub fn requirement_labels(&self, language: Language) -> [&'static str; 3] {
        self.requirements.map(|requirement| requirement.label(language))
    }
}

impl Labeled for FormalizationLevel {
    fn label(&self, language: Language) -> &'static str {
        self.title.label(language)
    }
}

pub const MAX_LEVEL: u8 = 5;

static LEVELS: [FormalizationLevel; MAX_LEVEL as usize] = [
    FormalizationLevel {
        number: 1,
        title: text("Startup Explorer", "Explorador Emprendedor"),
        requirements: [
            text("Track daily transactions", "Registrar transacciones diarias"),
            text("Create business name", "Crear nombre del negocio"),
            text("Set up digital wallet", "Configurar billetera digital"),
        ],
    },
    FormalizationLevel {
        number: 2,
        title: text("Record Keeper", "Guardián de Registros"),
        requirements: [
            text("30 days of transactions", "30 días de transacciones"),
            text("Separate personal/business money", "Separar dinero personal y del negocio"),
            text("Create simple budget", "Crear un presupuesto simple"),
        ],
    },
    FormalizationLevel {
        number: 3,
        title: text("Growth Master", "Maestro del Crecimiento"),
        requirements: [
            text("Register business name", "Registrar el nombre del negocio"),
            text("Get tax ID", "Obtener el RUC"),
            text("3 months of records", "3 meses de registros"),
        ],
    },
    FormalizationLevel {
        number: 4,
        title: text("Financial Pro", "Profesional Financiero"),
        requirements: [
            text("Full business registration", "Registro completo del negocio"),
            text("Basic accounting system", "Sistema contable básico"),
            text("Employee registration", "Registro de empleados"),
        ],
    },
    FormalizationLevel {
        number: 5,
        title: text("Business Champion", "Campeón Empresarial"),
        requirements: [
            text("Complete formal status", "Estatus formal completo"),
            text("Banking relationship", "Relación bancaria"),
            text("Credit history", "Historial crediticio"),
        ],
    },
];

/// The full level catalog, lowest first.
pub fn levels() -> &'static [FormalizationLevel] {
    &LEVELS
}

/// Catalog entry for level `number` (1-based).
pub fn level(number: u8) -> Option<&'static FormalizationLevel> {
    LEVELS.get(usize::from(number).checked_sub(1)?)
}

/// Current level, derived from progress: `min(5, 1 + floor(ratio * 5))`.
pub fn formalization_level(ledger: &Ledger) -> &'static FormalizationLevel {
    let step = (progress_ratio(ledger) * f64::from(MAX_LEVEL)).floor() as usize;
    &LEVELS[step.min(LEVELS.len() - 1)]
}

/// The level after `current`, if any.
pub fn next_level(current: &FormalizationLevel) -> Option<&'static FormalizationLevel> {
    level(current.number.checked_add(1)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Category, Transaction};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn ledger_with(count: usize, kind: TransactionKind, amount: Decimal) -> Ledger {
        let day = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let mut ledger = Ledger::new("Progress");
        for _ in 0..count {
            ledger.append(Transaction::new(day, kind, Category::Sales, amount));
        }
        ledger
    }

    #[test]
    fn ratio_caps_at_one() {
        assert_eq!(progress_ratio(&Ledger::new("Empty")), 0.0);
        assert_eq!(progress_ratio(&ledger_with(25, TransactionKind::Income, dec!(1))), 0.25);
        assert_eq!(progress_ratio(&ledger_with(150, TransactionKind::Income, dec!(1))), 1.0);
    }

    #[test]
    fn empty_ledger_has_no_achievements() {
        assert!(achievements(&Ledger::new("Empty")).is_empty());
    }

    #[test]
    fn expense_only_ledger_counts_but_earns_nothing_for_income() {
        let unlocked = achievements(&ledger_with(1, TransactionKind::Expense, dec!(50)));
        assert!(unlocked.contains(&AchievementId::FirstTransaction));
        assert!(!unlocked.contains(&AchievementId::FirstIncome));
    }

    #[test]
    fn record_keeper_needs_more_than_ten() {
        let ten = achievements(&ledger_with(10, TransactionKind::Income, dec!(1)));
        assert!(ten.contains(&AchievementId::TenTransactions));
        assert!(!ten.contains(&AchievementId::RecordKeeper));

        let eleven = achievements(&ledger_with(11, TransactionKind::Income, dec!(1)));
        assert!(eleven.contains(&AchievementId::RecordKeeper));
    }

    #[test]
    fn income_thresholds_are_strict() {
        let exactly = achievements(&ledger_with(1, TransactionKind::Income, dec!(1000)));
        assert!(!exactly.contains(&AchievementId::ThousandIncome));
        assert!(!exactly.contains(&AchievementId::CashMaster));
    }

    #[test]
    fn level_follows_progress() {
        assert_eq!(formalization_level(&Ledger::new("Empty")).number, 1);
        assert_eq!(
            formalization_level(&ledger_with(45, TransactionKind::Income, dec!(1))).number,
            3
        );
        assert_eq!(
            formalization_level(&ledger_with(100, TransactionKind::Income, dec!(1)))
                .label(Language::English),
            "Business Champion"
        );
    }

    #[test]
    fn levels_are_labeled_in_spanish() {
        let first = level(1).unwrap();
        assert_eq!(first.label(Language::Spanish), "Explorador Emprendedor");
        assert_eq!(
            first.requirement_labels(Language::Spanish)[0],
            "Registrar transacciones diarias"
        );
        assert!(levels()
            .iter()
            .all(|entry| entry.label(Language::Spanish) != entry.label(Language::English)));
    }

    #[test]
    fn catalog_lookup_and_next() {
        assert_eq!(level(0), None);
        let first = level(1).unwrap();
        assert_eq!(next_level(first).map(|l| l.number), Some(2));
        assert_eq!(next_level(level(MAX_LEVEL).unwrap()), None);
    }
}
