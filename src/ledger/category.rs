use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::transaction::TransactionKind;
use crate::errors::LedgerError;
use crate::labels::{Labeled, Language};

/// Fixed set of categories offered when recording a transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Sales,
    Services,
    OtherIncome,
    Inventory,
    Supplies,
    Rent,
    Utilities,
    Other,
    OtherExpenses,
}

impl Category {
    /// All categories, in the order a form presents them.
    pub const ALL: [Category; 9] = [
        Category::Sales,
        Category::Services,
        Category::OtherIncome,
        Category::Inventory,
        Category::Supplies,
        Category::Rent,
        Category::Utilities,
        Category::Other,
        Category::OtherExpenses,
    ];

    /// Kind a form should preselect for this category. Never enforced.
    pub fn suggested_kind(self) -> TransactionKind {
        match self {
            Category::Sales | Category::Services | Category::OtherIncome => {
                TransactionKind::Income
            }
            _ => TransactionKind::Expense,
        }
    }

    pub fn identifier(self) -> &'static str {
        match self {
            Category::Sales => "sales",
            Category::Services => "services",
            Category::OtherIncome => "other_income",
            Category::Inventory => "inventory",
            Category::Supplies => "supplies",
            Category::Rent => "rent",
            Category::Utilities => "utilities",
            Category::Other => "other",
            Category::OtherExpenses => "other_expenses",
        }
    }
}

impl Labeled for Category {
    fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (Category::Sales, Language::English) => "Sales",
            (Category::Sales, Language::Spanish) => "Ventas",
            (Category::Services, Language::English) => "Services",
            (Category::Services, Language::Spanish) => "Servicios",
            (Category::OtherIncome, Language::English) => "Other Income",
            (Category::OtherIncome, Language::Spanish) => "Otros Ingresos",
            (Category::Inventory, Language::English) => "Inventory",
            (Category::Inventory, Language::Spanish) => "Inventario",
            (Category::Supplies, Language::English) => "Supplies",
            (Category::Supplies, Language::Spanish) => "Suministros",
            (Category::Rent, Language::English) => "Rent",
            (Category::Rent, Language::Spanish) => "Alquiler",
            (Category::Utilities, Language::English) => "Utilities",
            (Category::Utilities, Language::Spanish) => "Servicios Públicos",
            (Category::Other, Language::English) => "Other",
            (Category::Other, Language::Spanish) => "Otro",
            (Category::OtherExpenses, Language::English) => "Other Expenses",
            (Category::OtherExpenses, Language::Spanish) => "Otros Gastos",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(Language::English))
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    /// Accepts the identifier or either language's label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| {
                category.identifier().eq_ignore_ascii_case(needle)
                    || category.label(Language::English).eq_ignore_ascii_case(needle)
                    || category
                        .label(Language::Spanish)
                        .to_lowercase()
                        .eq(&needle.to_lowercase())
            })
            .ok_or_else(|| LedgerError::unrecognized("category", s))
    }
}
