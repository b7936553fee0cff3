//! Category ledger formatting
//!
//! Renders a category as a fixed-width statement:
//!
//! ```text
//! *************Food*************
//! initial deposit        1000.00
//! groceries               -10.15
//! Total: 989.85
//! ```

use std::fmt;

use crate::models::{Category, LedgerEntry};

/// Width of the title line
pub const TITLE_WIDTH: usize = 30;

/// Description column width; longer descriptions are cut to this many characters
pub const DESCRIPTION_WIDTH: usize = 23;

/// Amount column width
pub const AMOUNT_WIDTH: usize = 7;

const TITLE_FILL: char = '*';

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", format_title(self.name()))?;
        for entry in self.ledger() {
            writeln!(f, "{}", format_entry(entry))?;
        }
        write!(f, "Total: {}", self.get_balance().to_plain_string())
    }
}

/// Center `name` in a line of asterisks
pub fn format_title(name: &str) -> String {
    let len = name.chars().count();
    if len >= TITLE_WIDTH {
        return name.to_string();
    }
    let left = (TITLE_WIDTH - len) / 2;
    let right = TITLE_WIDTH - len - left;
    let fill = |n: usize| TITLE_FILL.to_string().repeat(n);
    format!("{}{}{}", fill(left), name, fill(right))
}

/// One ledger line: truncated description, right-aligned amount
pub fn format_entry(entry: &LedgerEntry) -> String {
    let description: String = entry.description.chars().take(DESCRIPTION_WIDTH).collect();
    format!(
        "{:<dw$}{:>aw$}",
        description,
        entry.amount.to_plain_string(),
        dw = DESCRIPTION_WIDTH,
        aw = AMOUNT_WIDTH
    )
}

/// Render several categories separated by blank lines
pub fn format_categories(categories: &[Category]) -> String {
    categories
        .iter()
        .map(Category::to_string)
        .collect::<Vec<_>>()
        .join("\n\n")
}
