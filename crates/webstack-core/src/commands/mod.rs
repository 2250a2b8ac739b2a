//! Command-plan generation and execution
//!
//! This module provides:
//! - Command plans derived from an ordered selection
//! - Unique app-directory naming
//! - Sequential plan execution with streamed output

pub mod plan;
pub mod runner;

pub use plan::{build_plan, next_steps, unique_app_dir, CommandPlan, PlannedCommand, BASE_APP_NAME};
pub use runner::run_plan;
