//! Report commands
//!
//! Runs a scenario (the built-in demo or a JSON file) and prints the
//! resulting ledgers, spend chart and optional summary table.

use clap::Args;
use log::info;
use std::path::PathBuf;

use crate::config::Settings;
use crate::display::{create_spend_chart, format_categories, format_summary};
use crate::error::BudgetResult;
use crate::services::{Scenario, ScenarioReport, ScenarioRunner};

/// Output switches shared by `demo` and `run`
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Also print a summary table
    #[arg(long)]
    pub summary: bool,

    /// Do not print the spend chart
    #[arg(long)]
    pub no_chart: bool,

    /// Do not print category ledgers
    #[arg(long)]
    pub no_ledgers: bool,
}

/// What to include in a printed report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub ledgers: bool,
    pub chart: bool,
    pub summary: bool,
}

impl ReportOptions {
    /// Combine saved settings with command-line switches; switches only turn sections off
    pub fn resolve(settings: &Settings, args: &ReportArgs) -> Self {
        Self {
            ledgers: settings.show_ledgers && !args.no_ledgers,
            chart: settings.show_chart && !args.no_chart,
            summary: args.summary,
        }
    }
}

/// Run the built-in demonstration scenario
pub fn handle_demo_command(settings: &Settings, args: &ReportArgs) -> BudgetResult<()> {
    // The demo withdraws zero on purpose, so it always runs leniently.
    let report = ScenarioRunner::new(false).run(&Scenario::demo())?;
    print!("{}", render_report(&report, ReportOptions::resolve(settings, args)));
    Ok(())
}

/// Run a scenario file
pub fn handle_run_command(
    settings: &Settings,
    file: PathBuf,
    strict: bool,
    args: &ReportArgs,
) -> BudgetResult<()> {
    let scenario = Scenario::load(&file)?;
    let strict = strict || settings.strict_amounts;
    info!(
        "Running {} ({} operations, strict: {})",
        file.display(),
        scenario.operations.len(),
        strict
    );

    let report = ScenarioRunner::new(strict).run(&scenario)?;
    print!("{}", render_report(&report, ReportOptions::resolve(settings, args)));
    Ok(())
}

/// Build the printable report; every section ends with a newline
pub fn render_report(report: &ScenarioReport, options: ReportOptions) -> String {
    let categories = report.budget.categories();
    let mut sections: Vec<String> = Vec::new();

    if options.ledgers && !categories.is_empty() {
        sections.push(format_categories(categories));
    }

    if options.chart {
        match create_spend_chart(categories) {
            Ok(chart) => sections.push(chart),
            Err(e) => sections.push(format!("Spend chart unavailable: {}", e)),
        }
    }

    if options.summary {
        sections.push(format_summary(categories));
    }

    let declined: Vec<String> = report
        .declined()
        .map(|op| format!("  - {}", op))
        .collect();
    if !declined.is_empty() {
        sections.push(format!(
            "Declined for insufficient funds:\n{}",
            declined.join("\n")
        ));
    }

    sections
        .into_iter()
        .map(|s| s + "\n")
        .collect::<Vec<_>>()
        .join("\n")
}
