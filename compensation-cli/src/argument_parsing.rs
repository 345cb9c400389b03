//! Compensation CLI
//!
//! Command-line interface for simulating downlines and inspecting earnings
//! under the compensation plan.

use crate::cli_config::{load_config, CliConfig};
use crate::commands;
use crate::output::{ConsoleOutput, Output};

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Compensation plan simulator
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(name = "compensation-cli")]
pub struct CompensationCli {
    /// Enable verbose output
    #[arg(short, long, env = "COMPENSATION_VERBOSE")]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, env = "COMPENSATION_FORMAT")]
    pub format: OutputFormat,

    /// Configuration file path
    #[arg(short, long, env = "COMPENSATION_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: CompensationCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CompensationCommand {
    /// Generate a random downline and report its earnings
    Simulate(SimulateArgs),

    /// Print the performance bonus schedule
    Tiers,

    /// Earnings of a single participant with no downline
    Earnings(EarningsArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct SimulateArgs {
    /// Registration month, also seeds the generator
    #[arg(short, long)]
    pub month: Option<u32>,

    /// Participants sponsored directly by the root
    #[arg(long)]
    pub frontline: Option<usize>,

    /// Participants placed under random downline members
    #[arg(long)]
    pub downline: Option<usize>,

    /// Report every participant instead of the root only
    #[arg(short, long)]
    pub all: bool,
}

#[derive(Args, Debug, Clone)]
pub struct EarningsArgs {
    /// Personal point value
    #[arg(long)]
    pub personal_pv: Option<f64>,

    /// Point value from verified customer sales
    #[arg(long)]
    pub vcs_pv: Option<f64>,
}

/// Run a parsed command against a loaded configuration
pub fn execute(cli: &CompensationCli, config: &CliConfig, output: &dyn Output) -> Result<()> {
    match &cli.command {
        CompensationCommand::Simulate(args) => {
            commands::handle_simulate(args, cli.format, config, output)?
        }
        CompensationCommand::Tiers => commands::handle_tiers(cli.format, output)?,
        CompensationCommand::Earnings(args) => {
            commands::handle_earnings(args, cli.format, config, output)?
        }
    }
    Ok(())
}

pub fn run_cli() -> Result<()> {
    let cli = CompensationCli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref())?;
    execute(&cli, &config, &ConsoleOutput)
}
