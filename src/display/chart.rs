//! Spend chart
//!
//! Renders the share of total withdrawals taken by each category as a
//! vertical bar chart, one three-column bar per category:
//!
//! ```text
//! Percentage spent by category
//! 100|
//!  ...
//!  10| o
//!   0| o  o
//!     -------
//!      F  A
//!      o  u
//! ```
//!
//! Percentages are rounded down to a multiple of ten.

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Category, Money};

pub const CHART_HEADER: &str = "Percentage spent by category";

const MARKER: char = 'o';
const MARGIN: &str = "    ";

/// Render the spend chart for `categories`, in the given column order
///
/// # Errors
///
/// - [`BudgetError::EmptyChart`] when `categories` is empty
/// - [`BudgetError::NoSpending`] when no category has any withdrawal
pub fn create_spend_chart(categories: &[Category]) -> BudgetResult<String> {
    if categories.is_empty() {
        return Err(BudgetError::EmptyChart);
    }

    let percentages = spend_percentages(categories)?;

    let mut chart = String::new();
    chart.push_str(CHART_HEADER);
    chart.push('\n');
    chart.push_str(&y_axis(&percentages));
    chart.push_str(&divider(categories.len()));
    chart.push_str(&x_axis(categories));
    Ok(chart)
}

/// Each category's share of total withdrawals, rounded down to a multiple of 10
pub fn spend_percentages(categories: &[Category]) -> BudgetResult<Vec<u32>> {
    let spent: Vec<Money> = categories.iter().map(Category::spent).collect();
    let total_spent: Money = spent.iter().sum();

    if total_spent.is_zero() {
        return Err(BudgetError::NoSpending);
    }

    Ok(spent
        .iter()
        .map(|s| percentage(*s, total_spent))
        .collect())
}

fn percentage(spent: Money, total_spent: Money) -> u32 {
    // Both operands are zero or negative, so the quotient is in 0..=100.
    let pct = i128::from(spent.cents()) * 100 / i128::from(total_spent.cents());
    let pct = pct.clamp(0, 100) as u32;
    pct - pct % 10
}

fn y_axis(percentages: &[u32]) -> String {
    let mut remaining: Vec<i64> = percentages.iter().map(|&p| i64::from(p)).collect();
    let mut lines = String::new();

    for row in (0..=100).rev().step_by(10) {
        lines.push_str(&format!("{:>3}|", row));
        for left in remaining.iter_mut() {
            if *left == row {
                lines.push_str(&format!("{:^3}", MARKER));
                *left -= 10;
            } else {
                lines.push_str("   ");
            }
        }
        lines.push_str(" \n");
    }

    lines
}

fn divider(columns: usize) -> String {
    format!("{}{}\n", MARGIN, "-".repeat(3 * columns + 1))
}

fn x_axis(categories: &[Category]) -> String {
    let names: Vec<Vec<char>> = categories.iter().map(|c| c.name().chars().collect()).collect();
    let height = names.iter().map(Vec::len).max().unwrap_or(0);

    (0..height)
        .map(|i| {
            let mut line = String::from(MARGIN);
            for name in &names {
                line.push_str(&format!("{:^3}", name.get(i).copied().unwrap_or(' ')));
            }
            line.push(' ');
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
