use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Categorises ledger activity for budgeting and reporting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExpenseCategory {
    Utility,
    Food,
    Hazard,
    Treat,
    Wage,
    Gift,
    General,
}

struct CategoryInfo {
    name: &'static str,
    description: &'static str,
}

const CATEGORY_INFO: [CategoryInfo; 7] = [
    CategoryInfo {
        name: "UTILITY",
        description: "Money spent on bills (e.g. rent, water, gas, ...)",
    },
    CategoryInfo {
        name: "FOOD",
        description: "Money spent on food including going out to eat",
    },
    CategoryInfo {
        name: "HAZARD",
        description: "Unexpected payments for repairs or emergency costs",
    },
    CategoryInfo {
        name: "TREAT",
        description: "Unnecessary purchases as a treat to yourself",
    },
    CategoryInfo {
        name: "WAGE",
        description: "Income from employment or expense for employees",
    },
    CategoryInfo {
        name: "GIFT",
        description: "Gifts for other people (e.g. birthdays)",
    },
    CategoryInfo {
        name: "GENERAL",
        description: "Anything that does not fit another category",
    },
];

/// Display palette cycled over by category ordinal.
pub const PALETTE: [&str; 6] = ["cyan", "green", "red", "bright red", "magenta", "purple"];

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 7] = [
        ExpenseCategory::Utility,
        ExpenseCategory::Food,
        ExpenseCategory::Hazard,
        ExpenseCategory::Treat,
        ExpenseCategory::Wage,
        ExpenseCategory::Gift,
        ExpenseCategory::General,
    ];

    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Stable storage name, also the CLI-facing label.
    pub fn as_str(self) -> &'static str {
        CATEGORY_INFO[self.ordinal()].name
    }

    pub fn description(self) -> &'static str {
        CATEGORY_INFO[self.ordinal()].description
    }

    pub fn palette_index(self) -> usize {
        self.ordinal() % PALETTE.len()
    }

    pub fn colour(self) -> &'static str {
        PALETTE[self.palette_index()]
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .find(|cat| cat.as_str() == upper)
            .copied()
            .ok_or_else(|| LedgerError::InvalidArgument(format!("unknown category `{}`", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for cat in ExpenseCategory::ALL {
            assert_eq!(cat.as_str().parse::<ExpenseCategory>().unwrap(), cat);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            "food".parse::<ExpenseCategory>().unwrap(),
            ExpenseCategory::Food
        );
        assert_eq!(
            " Treat ".parse::<ExpenseCategory>().unwrap(),
            ExpenseCategory::Treat
        );
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!("groceries".parse::<ExpenseCategory>().is_err());
    }

    #[test]
    fn palette_wraps_after_six_variants() {
        assert_eq!(ExpenseCategory::Utility.palette_index(), 0);
        assert_eq!(ExpenseCategory::Gift.palette_index(), 5);
        assert_eq!(ExpenseCategory::General.palette_index(), 0);
    }
}
