//! Service layer
//!
//! Business logic that drives the models from scripted input.

pub mod scenario;

pub use scenario::{Operation, OperationResult, Outcome, Scenario, ScenarioReport, ScenarioRunner};
