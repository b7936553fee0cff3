//! Ledger entries
//!
//! A ledger entry is one signed movement of money within a category.
//! Deposits are stored positive, withdrawals negative.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// A single line in a category's ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Signed amount; negative for withdrawals
    pub amount: Money,

    /// Free-form description, stored untruncated
    #[serde(default)]
    pub description: String,
}

impl LedgerEntry {
    /// Create an entry with the given signed amount
    pub fn new(amount: Money, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }

    /// Whether this entry is a withdrawal (money leaving the category)
    pub fn is_withdrawal(&self) -> bool {
        self.amount.is_negative()
    }
}
