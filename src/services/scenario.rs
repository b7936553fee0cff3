//! Scenario service
//!
//! Replays a scripted list of deposits, withdrawals and transfers against a
//! fresh [`Budget`]. Scenarios are JSON documents:
//!
//! ```json
//! {
//!   "categories": ["Food", "Clothing"],
//!   "operations": [
//!     { "op": "deposit", "category": "Food", "amount": 1000, "description": "initial deposit" },
//!     { "op": "withdraw", "category": "Food", "amount": "10.15", "description": "groceries" },
//!     { "op": "transfer", "from": "Food", "to": "Clothing", "amount": 50 }
//!   ]
//! }
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Budget, Money};

/// A single scripted operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Operation {
    Deposit {
        category: String,
        amount: Money,
        #[serde(default)]
        description: String,
    },
    Withdraw {
        category: String,
        amount: Money,
        #[serde(default)]
        description: String,
    },
    Transfer {
        from: String,
        to: String,
        amount: Money,
    },
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit {
                category, amount, ..
            } => write!(f, "deposit {} into {}", amount, category),
            Self::Withdraw {
                category, amount, ..
            } => write!(f, "withdraw {} from {}", amount, category),
            Self::Transfer { from, to, amount } => {
                write!(f, "transfer {} from {} to {}", amount, from, to)
            }
        }
    }
}

/// Categories to create and operations to replay, in order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub categories: Vec<String>,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

impl Scenario {
    /// Parse a scenario from JSON text
    pub fn from_json(json: &str) -> BudgetResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| BudgetError::Json(format!("Failed to parse scenario: {}", e)))
    }

    /// Read and parse a scenario file
    pub fn load(path: &Path) -> BudgetResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            BudgetError::Io(format!(
                "Failed to read scenario file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&contents)
    }

    /// The demonstration run: a grocery budget that overspends once, then
    /// sends part of its balance to a second category
    pub fn demo() -> Self {
        let deposit = |category: &str, amount: Money, description: &str| Operation::Deposit {
            category: category.to_string(),
            amount,
            description: description.to_string(),
        };
        let withdraw = |category: &str, amount: Money, description: &str| Operation::Withdraw {
            category: category.to_string(),
            amount,
            description: description.to_string(),
        };

        Self {
            categories: vec!["Groceries".to_string(), "Clubbing".to_string()],
            operations: vec![
                deposit("Groceries", Money::from_cents(10099), "paycheck"),
                deposit("Groceries", Money::zero(), ""),
                deposit("Groceries", Money::from_cents(99), "loose change"),
                withdraw("Groceries", Money::zero(), ""),
                withdraw(
                    "Groceries",
                    Money::from_cents(99),
                    "a very long description of a snack",
                ),
                withdraw("Groceries", Money::from_cents(20099), "fancy snack"),
                deposit("Clubbing", Money::from_cents(30099), "paycheck"),
                Operation::Transfer {
                    from: "Groceries".to_string(),
                    to: "Clubbing".to_string(),
                    amount: Money::from_cents(10000),
                },
            ],
        }
    }
}

/// What happened to one operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// Not enough funds; nothing was written
    Declined,
}

/// One operation and its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationResult {
    pub operation: Operation,
    pub outcome: Outcome,
}

/// Final budget plus per-operation outcomes
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub budget: Budget,
    pub results: Vec<OperationResult>,
}

impl ScenarioReport {
    /// Operations refused for insufficient funds
    pub fn declined(&self) -> impl Iterator<Item = &Operation> {
        self.results
            .iter()
            .filter(|r| r.outcome == Outcome::Declined)
            .map(|r| &r.operation)
    }
}

/// Applies scenarios to a fresh budget
#[derive(Debug, Clone, Copy, Default)]
pub struct ScenarioRunner {
    strict: bool,
}

impl ScenarioRunner {
    /// Create a runner; `strict` rejects negative deposits and
    /// non-positive withdrawals or transfers
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Run every operation in order
    ///
    /// Insufficient funds is recorded as [`Outcome::Declined`] and the run
    /// continues. Unknown categories and (in strict mode) invalid amounts
    /// stop the run with an error.
    pub fn run(&self, scenario: &Scenario) -> BudgetResult<ScenarioReport> {
        let mut budget = Budget::with_categories(scenario.categories.iter().cloned())?;
        let mut results = Vec::with_capacity(scenario.operations.len());

        for operation in &scenario.operations {
            let applied = self.apply(&mut budget, operation)?;
            let outcome = if applied {
                Outcome::Applied
            } else {
                warn!("Declined for insufficient funds: {}", operation);
                Outcome::Declined
            };
            results.push(OperationResult {
                operation: operation.clone(),
                outcome,
            });
        }

        debug!(
            "Scenario finished: {} operations, {} categories",
            results.len(),
            budget.len()
        );

        Ok(ScenarioReport { budget, results })
    }

    fn apply(&self, budget: &mut Budget, operation: &Operation) -> BudgetResult<bool> {
        match operation {
            Operation::Deposit {
                category,
                amount,
                description,
            } => {
                let category = budget.require_mut(category)?;
                if self.strict {
                    category.checked_deposit(*amount, description.as_str())?;
                } else {
                    category.deposit(*amount, description.as_str());
                }
                Ok(true)
            }
            Operation::Withdraw {
                category,
                amount,
                description,
            } => {
                let category = budget.require_mut(category)?;
                if self.strict {
                    category.checked_withdraw(*amount, description.as_str())
                } else {
                    Ok(category.withdraw(*amount, description.as_str()))
                }
            }
            Operation::Transfer { from, to, amount } => {
                if self.strict {
                    budget.checked_transfer(from, to, *amount)
                } else {
                    budget.transfer(from, to, *amount)
                }
            }
        }
    }
}
