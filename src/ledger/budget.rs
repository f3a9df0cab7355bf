use serde::{Deserialize, Serialize};

use super::category::ExpenseCategory;
use super::time_frame::TimeFrame;

/// A spending ceiling for a category over its rolling time frame.
///
/// The category is the identity: at most one budget row exists per category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub category: ExpenseCategory,
    pub amount: f64,
    pub time_frame: TimeFrame,
}

/// Derived read model pairing a category's in-window spend with its ceiling.
/// Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryOverview {
    pub category: ExpenseCategory,
    pub spent: f64,
    pub budget: f64,
}

impl CategoryOverview {
    pub fn level(&self) -> BudgetLevel {
        BudgetLevel::classify(self.budget, self.spent)
    }
}

/// Severity of spend relative to the budget ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetLevel {
    Over,
    High,
    Medium,
    Low,
}

impl BudgetLevel {
    /// Classifies `spent` against `total`. A non-positive ceiling counts as
    /// over-budget rather than dividing by zero.
    pub fn classify(total: f64, spent: f64) -> BudgetLevel {
        if total <= 0.0 {
            return BudgetLevel::Over;
        }
        let ratio = spent / total;
        if ratio >= 1.0 {
            BudgetLevel::Over
        } else if ratio >= 0.7 {
            BudgetLevel::High
        } else if ratio >= 0.4 {
            BudgetLevel::Medium
        } else {
            BudgetLevel::Low
        }
    }
}
