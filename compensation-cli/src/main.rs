//! Compensation Command-Line Interface
//!
//! Entry point for the compensation-cli binary.

use compensation_cli::run_cli;

fn main() -> anyhow::Result<()> {
    run_cli()
}
