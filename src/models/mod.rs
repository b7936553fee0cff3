//! Core data models
//!
//! Money amounts, ledger entries, categories and the budget that groups them.

pub mod budget;
pub mod category;
pub mod ledger;
pub mod money;

pub use budget::Budget;
pub use category::{Category, CategoryValidationError};
pub use ledger::LedgerEntry;
pub use money::{Money, MoneyParseError};
