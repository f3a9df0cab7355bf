pub mod account_service;
pub mod budget_service;
pub mod expense_service;
pub mod overview_service;
pub mod recurring_service;

pub use account_service::AccountService;
pub use budget_service::{BudgetChange, BudgetService};
pub use expense_service::{ExpenseService, RecordedCashFlow};
pub use overview_service::OverviewService;
pub use recurring_service::RecurringService;
