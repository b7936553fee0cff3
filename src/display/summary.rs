//! Summary table of categories
//!
//! One row per category with deposits, withdrawals, balance and the exact
//! share of total spending.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Category, Money};

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Deposited")]
    deposited: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "% of spend")]
    share: String,
}

/// Format a summary table of `categories`
pub fn format_summary(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories.".to_string();
    }

    let total_spent: Money = categories.iter().map(Category::spent).sum();

    let mut rows: Vec<SummaryRow> = categories
        .iter()
        .map(|c| SummaryRow {
            name: c.name().to_string(),
            deposited: c.deposited().to_plain_string(),
            spent: c.spent().abs().to_plain_string(),
            balance: c.get_balance().to_plain_string(),
            share: format_share(c.spent(), total_spent),
        })
        .collect();

    let total_balance: Money = categories.iter().map(Category::get_balance).sum();
    let total_deposited: Money = categories.iter().map(Category::deposited).sum();
    rows.push(SummaryRow {
        name: "Total".to_string(),
        deposited: total_deposited.to_plain_string(),
        spent: total_spent.abs().to_plain_string(),
        balance: total_balance.to_plain_string(),
        share: if total_spent.is_zero() {
            "-".to_string()
        } else {
            "100.0%".to_string()
        },
    });

    Table::new(rows).with(Style::psql()).to_string()
}

fn format_share(spent: Money, total_spent: Money) -> String {
    if total_spent.is_zero() {
        return "-".to_string();
    }
    let share = spent.cents() as f64 / total_spent.cents() as f64 * 100.0;
    format!("{:.1}%", share)
}
