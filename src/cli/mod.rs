//! One-shot command surface. Parsing and rendering only; every subcommand
//! maps 1:1 onto a service call and the core hands back plain data.

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use colored::{Color, Colorize};

use crate::core::services::{
    AccountService, BudgetChange, BudgetService, ExpenseService, OverviewService, RecurringService,
};
use crate::errors::Result;
use crate::ledger::{BudgetLevel, ExpenseCategory, TimeFrame};
use crate::storage::Store;

#[derive(Parser)]
#[command(name = "ledger_core", about = "Personal finance ledger", version)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Document an expense
    Spend {
        amount: f64,
        account: String,
        category: ExpenseCategory,
        reason: String,
    },
    /// Document a deposit
    Deposit {
        amount: f64,
        account: String,
        category: ExpenseCategory,
        reason: String,
    },
    /// Set a category budget
    Budget {
        category: ExpenseCategory,
        amount: f64,
        #[arg(default_value = "month")]
        timeframe: TimeFrame,
    },
    /// Spend versus budget for every active category
    Overview,
    /// List the known categories
    Categories,
    /// List recent expenses
    Expenses {
        #[arg(long)]
        category: Option<ExpenseCategory>,
        #[arg(long, default_value_t = 10)]
        count: u32,
        /// RFC 3339 lower bound, e.g. 2025-01-01T00:00:00Z
        #[arg(long)]
        since: Option<DateTime<Utc>>,
    },
    /// Open a new account
    Account {
        name: String,
        #[arg(default_value_t = 0.0)]
        balance: f64,
    },
    /// List accounts and balances
    Accounts,
    /// Clear one category, or everything when no category is given
    Clear { category: Option<ExpenseCategory> },
    /// Record a recurring payment
    Recur {
        amount: f64,
        account: String,
        category: ExpenseCategory,
        reason: String,
        timeframe: TimeFrame,
    },
    /// List recurring payments
    Recurring,
}

fn category_color(category: ExpenseCategory) -> Color {
    Color::from(category.colour())
}

fn level_color(level: BudgetLevel) -> Color {
    match level {
        BudgetLevel::Over => Color::Red,
        BudgetLevel::High => Color::BrightRed,
        BudgetLevel::Medium => Color::Yellow,
        BudgetLevel::Low => Color::Green,
    }
}

/// Parses the process arguments and executes one command against the store
/// at the default application path.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut store = Store::open_default()?;
    dispatch(&mut store, cli.command, Utc::now())
}

fn dispatch(store: &mut Store, command: Command, now: DateTime<Utc>) -> Result<()> {
    match command {
        Command::Spend {
            amount,
            account,
            category,
            reason,
        } => {
            let recorded =
                ExpenseService::record_spend(store, &account, amount, category, &reason, now)?;
            println!(
                "Spent {:.2} on {} from `{}` (balance {:.2})",
                amount,
                category.to_string().color(category_color(category)),
                account,
                recorded.new_balance
            );
        }
        Command::Deposit {
            amount,
            account,
            category,
            reason,
        } => {
            let recorded =
                ExpenseService::record_deposit(store, &account, amount, category, &reason, now)?;
            println!(
                "Deposited {:.2} as {} into `{}` (balance {:.2})",
                amount,
                category.to_string().color(category_color(category)),
                account,
                recorded.new_balance
            );
        }
        Command::Budget {
            category,
            amount,
            timeframe,
        } => match BudgetService::set(store, category, amount, timeframe)? {
            BudgetChange::Created => {
                println!("Set {} budget to {:.2} per {}", category, amount, timeframe)
            }
            BudgetChange::Unchanged(old) => {
                println!("{} budget is already {:.2}", category, old)
            }
            BudgetChange::Updated { from } => println!(
                "Updated {} budget from {:.2} to {:.2}",
                category, from, amount
            ),
        },
        Command::Overview => {
            println!("{}", "Overview".bold());
            for overview in OverviewService::full_overview(store, now)? {
                let remaining = overview.budget - overview.spent;
                let level = overview.level();
                println!(
                    "{:<8} net {:>8.2}  budget {:>8.2}  remaining {}",
                    overview
                        .category
                        .to_string()
                        .color(category_color(overview.category)),
                    overview.spent,
                    overview.budget,
                    format!("{:>8.2}", remaining).color(level_color(level)).bold()
                );
            }
        }
        Command::Categories => {
            for category in ExpenseCategory::ALL {
                println!(
                    "{:<8} {}",
                    category.to_string().color(category_color(category)),
                    category.description()
                );
            }
        }
        Command::Expenses {
            category,
            count,
            since,
        } => {
            let rows = match category {
                Some(category) => ExpenseService::list_by_category(store, category, count, since)?,
                None => ExpenseService::list_recent(store, count, since)?,
            };
            for row in rows {
                println!(
                    "{}  {:>8.2}  {:<8} {:<12} {}",
                    row.expense.created_at.format("%Y-%m-%d %H:%M"),
                    row.expense.amount,
                    row.expense
                        .category
                        .to_string()
                        .color(category_color(row.expense.category)),
                    row.account.name,
                    row.expense.reason
                );
            }
        }
        Command::Account { name, balance } => {
            let account = AccountService::open(store, &name, balance)?;
            println!(
                "Opened account `{}` with balance {:.2}",
                account.name, account.balance
            );
        }
        Command::Accounts => {
            for account in AccountService::list(store)? {
                println!("{:<16} {:>10.2}", account.name, account.balance);
            }
        }
        Command::Clear { category } => match category {
            Some(category) => {
                store.clear_category(category)?;
                println!("Cleared {}", category);
            }
            None => {
                store.clear_all()?;
                println!("Cleared all ledger data");
            }
        },
        Command::Recur {
            amount,
            account,
            category,
            reason,
            timeframe,
        } => {
            RecurringService::record(store, &account, amount, category, &reason, timeframe, now)?;
            println!(
                "Recorded recurring {} payment of {:.2} every {}",
                category.to_string().color(category_color(category)),
                amount,
                timeframe
            );
        }
        Command::Recurring => {
            for payment in RecurringService::list(store)? {
                println!(
                    "{:<8} {:>8.2}  every {:<8} last paid {}  ({})",
                    payment
                        .expense
                        .category
                        .to_string()
                        .color(category_color(payment.expense.category)),
                    -payment.expense.amount,
                    payment.time_frame,
                    payment.last_paid.format("%Y-%m-%d"),
                    payment.account.name
                );
            }
        }
    }
    Ok(())
}
