//! Compensation CLI Library
//!
//! Command-line front end for the compensation engine: random downline
//! simulation, the bonus schedule, and single-participant earnings.
//!
//! ## Architecture
//!
//! - **Functional Core** (`commands` pure section, `report`): tree building and formatting
//! - **Imperative Shell** (`commands` handlers): printing and command orchestration
//! - **Error Handling** (`error`): structured CLI error types
//! - **Output Abstraction** (`output`): testable printing interface

pub mod argument_parsing;
pub mod cli_config;
pub mod commands;
pub mod error;
pub mod output;
pub mod report;

pub use argument_parsing::{execute, run_cli, CompensationCli, CompensationCommand, OutputFormat};
pub use error::{CliError, CliResult};
pub use output::Output;

/// Compensation CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
