//! Budget: an ordered collection of categories
//!
//! Categories keep their insertion order, which is the column order of the
//! spend chart. Lookups are by exact name.

use super::category::Category;
use super::money::Money;
use crate::error::{BudgetError, BudgetResult};

/// A set of uniquely named categories owned by the caller
#[derive(Debug, Clone, Default)]
pub struct Budget {
    categories: Vec<Category>,
}

impl Budget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a budget with one empty category per name
    pub fn with_categories<I, S>(names: I) -> BudgetResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut budget = Self::new();
        for name in names {
            budget.add_category(name)?;
        }
        Ok(budget)
    }

    /// Add a new, empty category
    pub fn add_category(&mut self, name: impl Into<String>) -> BudgetResult<&mut Category> {
        let category = Category::new(name);
        category
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        if self.position(category.name()).is_some() {
            return Err(BudgetError::duplicate_category(category.name()));
        }

        self.categories.push(category);
        let last = self.categories.len() - 1;
        Ok(&mut self.categories[last])
    }

    /// Categories in insertion order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.name() == name)
    }

    /// Like [`Budget::get`], but a missing category is an error
    pub fn require(&self, name: &str) -> BudgetResult<&Category> {
        self.get(name)
            .ok_or_else(|| BudgetError::category_not_found(name))
    }

    /// Like [`Budget::get_mut`], but a missing category is an error
    pub fn require_mut(&mut self, name: &str) -> BudgetResult<&mut Category> {
        self.get_mut(name)
            .ok_or_else(|| BudgetError::category_not_found(name))
    }

    /// Transfer between two member categories
    ///
    /// Returns `Ok(false)` when the source lacks funds.
    pub fn transfer(&mut self, from: &str, to: &str, amount: Money) -> BudgetResult<bool> {
        let (source, target) = self.transfer_pair(from, to)?;
        Ok(source.transfer(amount, target))
    }

    /// Transfer that rejects zero or negative amounts
    pub fn checked_transfer(&mut self, from: &str, to: &str, amount: Money) -> BudgetResult<bool> {
        let (source, target) = self.transfer_pair(from, to)?;
        source.checked_transfer(amount, target)
    }

    /// Sum of every category's balance
    pub fn total_balance(&self) -> Money {
        self.categories.iter().map(Category::get_balance).sum()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name() == name)
    }

    /// Resolve source and target for a transfer, borrowed together
    fn transfer_pair(
        &mut self,
        from: &str,
        to: &str,
    ) -> BudgetResult<(&mut Category, &mut Category)> {
        let from_idx = self
            .position(from)
            .ok_or_else(|| BudgetError::category_not_found(from))?;
        let to_idx = self
            .position(to)
            .ok_or_else(|| BudgetError::category_not_found(to))?;

        pair_mut(&mut self.categories, from_idx, to_idx).ok_or_else(|| {
            BudgetError::Validation(format!("Cannot transfer from '{}' to itself", from))
        })
    }
}

/// Borrow two distinct elements mutably; `None` when `a == b`
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> Option<(&mut T, &mut T)> {
    if a < b {
        let (left, right) = items.split_at_mut(b);
        Some((&mut left[a], &mut right[0]))
    } else if a > b {
        let (left, right) = items.split_at_mut(a);
        Some((&mut right[0], &mut left[b]))
    } else {
        None
    }
}
