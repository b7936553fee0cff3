//! budget-cli - per-category cash budgets
//!
//! Each [`models::Category`] owns an append-only ledger of deposits and
//! withdrawals. Categories support balance queries, funds-checked
//! withdrawals and transfers, and render as a fixed-width statement.
//! [`display::create_spend_chart`] draws the share of spending per category
//! as a text bar chart.
//!
//! # Modules
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, ledger entries, categories and budgets
//! - `display`: Category statements, spend chart and summary table
//! - `services`: Scripted scenario runner
//! - `cli`: Command handlers for the `budget` binary
//!
//! # Example
//!
//! ```
//! use budget::display::create_spend_chart;
//! use budget::models::{Category, Money};
//!
//! let mut food = Category::new("Food");
//! let mut auto = Category::new("Auto");
//! food.deposit(Money::from_cents(100_000), "initial deposit");
//! assert!(food.withdraw(Money::from_cents(1_015), "groceries"));
//! assert!(food.transfer(Money::from_cents(5_000), &mut auto));
//!
//! assert_eq!(food.get_balance(), Money::from_cents(93_985));
//! let chart = create_spend_chart(&[food, auto]).unwrap();
//! assert!(chart.starts_with("Percentage spent by category"));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;

pub use error::{BudgetError, BudgetResult};
