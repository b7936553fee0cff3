//! CLI command handlers
//!
//! Bridges the clap argument parsing in `main.rs` with the scenario and
//! display layers.

pub mod report;

pub use report::{handle_demo_command, handle_run_command, ReportArgs, ReportOptions};
