//! Ledger domain models, persistence-friendly types, and helpers.

pub mod account;
pub mod budget;
pub mod category;
pub mod expense;
pub mod recurring;
pub mod time_frame;

pub use account::Account;
pub use budget::{Budget, BudgetLevel, CategoryOverview};
pub use category::ExpenseCategory;
pub use expense::{Expense, ExpenseWithAccount, NewExpense};
pub use recurring::RecurringExpense;
pub use time_frame::TimeFrame;
