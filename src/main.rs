use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use budget::cli::{handle_demo_command, handle_run_command, ReportArgs};
use budget::config::{BudgetPaths, Settings};

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Per-category cash budgets with a text spend chart",
    long_about = "budget replays deposits, withdrawals and transfers across named \
                  categories, then prints each category's ledger and a chart of \
                  how spending splits between them."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in demonstration scenario
    Demo {
        #[command(flatten)]
        report: ReportArgs,
    },

    /// Run a JSON scenario file
    Run {
        /// Path to the scenario file
        file: PathBuf,

        /// Reject negative deposits and non-positive withdrawals
        #[arg(long)]
        strict: bool,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Write default settings to the config directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_level.as_str()),
    )
    .init();

    match cli.command {
        Some(Commands::Demo { report }) => {
            handle_demo_command(&settings, &report)?;
        }
        Some(Commands::Run {
            file,
            strict,
            report,
        }) => {
            handle_run_command(&settings, file, strict, &report)?;
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("budget-cli Configuration");
            println!("========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Show ledgers:   {}", settings.show_ledgers);
            println!("  Show chart:     {}", settings.show_chart);
            println!("  Strict amounts: {}", settings.strict_amounts);
            println!("  Log level:      {}", settings.log_level);
        }
        None => {
            println!("budget - per-category cash budgets");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget demo' to see an example report.");
        }
    }

    Ok(())
}
