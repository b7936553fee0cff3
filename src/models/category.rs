//! Category model
//!
//! A category is a named budget bucket owning an append-only ledger.
//! The balance is always the sum of the ledger; nothing is cached.

use log::{debug, info};
use std::fmt;

use super::ledger::LedgerEntry;
use super::money::Money;
use crate::error::{BudgetError, BudgetResult};

/// Maximum length of a category name accepted by [`Category::validate`]
pub const MAX_NAME_LEN: usize = 50;

/// A budget category with its own ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    ledger: Vec<LedgerEntry>,
}

impl Category {
    /// Create a new category with an empty ledger
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ledger: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ledger entries in insertion order
    pub fn ledger(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    /// Sum of every entry in the ledger
    pub fn get_balance(&self) -> Money {
        self.ledger.iter().map(|e| e.amount).sum()
    }

    /// Total withdrawn from this category, as a zero or negative amount
    pub fn spent(&self) -> Money {
        self.ledger
            .iter()
            .filter(|e| e.is_withdrawal())
            .map(|e| e.amount)
            .sum()
    }

    /// Total deposited into this category
    pub fn deposited(&self) -> Money {
        self.ledger
            .iter()
            .filter(|e| e.amount.is_positive())
            .map(|e| e.amount)
            .sum()
    }

    /// Record a deposit
    ///
    /// The amount is stored as given, including zero or negative values.
    /// Use [`Category::checked_deposit`] to reject negative amounts.
    pub fn deposit(&mut self, amount: Money, description: impl Into<String>) {
        self.record(amount, description.into());
    }

    /// Record a withdrawal if the balance covers it
    ///
    /// Returns `false` and leaves the ledger untouched when funds are
    /// insufficient. A withdrawal that brings the balance to exactly zero
    /// succeeds.
    pub fn withdraw(&mut self, amount: Money, description: impl Into<String>) -> bool {
        if !self.check_funds(amount) {
            info!(
                "Declined withdrawal of {} from '{}': balance is {}",
                amount,
                self.name,
                self.get_balance()
            );
            return false;
        }
        self.record(-amount, description.into());
        true
    }

    /// Whether `amount` can be taken out without going below zero
    pub fn check_funds(&self, amount: Money) -> bool {
        !(self.get_balance() - amount).is_negative()
    }

    /// Move `amount` from this category into `target`
    ///
    /// Funds are checked once, up front. On success this category gets a
    /// "Transfer to ..." withdrawal and the target a "Transfer from ..."
    /// deposit; on failure neither ledger changes.
    pub fn transfer(&mut self, amount: Money, target: &mut Category) -> bool {
        if !self.check_funds(amount) {
            info!(
                "Declined transfer of {} from '{}' to '{}': balance is {}",
                amount,
                self.name,
                target.name,
                self.get_balance()
            );
            return false;
        }

        self.record(-amount, format!("Transfer to {}", target.name));
        target.record(amount, format!("Transfer from {}", self.name));
        true
    }

    /// Deposit that rejects negative amounts
    pub fn checked_deposit(
        &mut self,
        amount: Money,
        description: impl Into<String>,
    ) -> BudgetResult<()> {
        if amount.is_negative() {
            return Err(BudgetError::Validation(format!(
                "Deposit amount cannot be negative: {}",
                amount
            )));
        }
        self.deposit(amount, description);
        Ok(())
    }

    /// Withdrawal that rejects zero or negative amounts
    ///
    /// Insufficient funds is still reported as `Ok(false)`.
    pub fn checked_withdraw(
        &mut self,
        amount: Money,
        description: impl Into<String>,
    ) -> BudgetResult<bool> {
        require_positive(amount, "Withdrawal")?;
        Ok(self.withdraw(amount, description))
    }

    /// Transfer that rejects zero or negative amounts
    pub fn checked_transfer(&mut self, amount: Money, target: &mut Category) -> BudgetResult<bool> {
        require_positive(amount, "Transfer")?;
        Ok(self.transfer(amount, target))
    }

    /// Validate the category name
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        let len = self.name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(CategoryValidationError::NameTooLong(len));
        }

        Ok(())
    }

    fn record(&mut self, amount: Money, description: String) {
        debug!(
            "{}: recorded {} ({:?})",
            self.name,
            amount.to_plain_string(),
            description
        );
        self.ledger.push(LedgerEntry {
            amount,
            description,
        });
    }
}

fn require_positive(amount: Money, what: &str) -> BudgetResult<()> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(BudgetError::Validation(format!(
            "{} amount must be positive: {}",
            what, amount
        )))
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(
                    f,
                    "Category name too long ({} chars, max {})",
                    len, MAX_NAME_LEN
                )
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
