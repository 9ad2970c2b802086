//! CLI command handlers.
//!
//! Testable command handlers invoked by main.rs. Each returns the process
//! exit code instead of exiting.

mod build;

pub use build::{run_build, run_check};

// Re-export config types used by handlers
pub use crate::config::{AppConfig, ConfigOverrides};
