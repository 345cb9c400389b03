//! Compensation CLI commands
//!
//! Architecture: Functional Core, Imperative Shell (FCIS)
//!
//! - **Pure Logic**: tree construction, schedule and report formatting
//! - **Imperative Shell**: printing through [`Output`]

use crate::argument_parsing::{EarningsArgs, OutputFormat, SimulateArgs};
use crate::cli_config::CliConfig;
use crate::error::CliResult;
use crate::output::Output;
use crate::report::{render_tree, DownlineReport, EarningsStatus};

use lib_compensation::{
    create_random_downline, DifferentialLine, DownlineShape, ParticipantId, SponsorTree,
    BONUS_SCHEDULE,
};
use serde_json::json;

// ============================================================================
// PURE LOGIC - No side effects, fully testable
// ============================================================================

/// Generator shape from config, with command-line flags taking precedence
pub fn resolve_shape(args: &SimulateArgs, config: &CliConfig) -> DownlineShape {
    let base = config.generator;
    DownlineShape {
        month: args.month.unwrap_or(base.month),
        frontline_count: args.frontline.unwrap_or(base.frontline_count),
        downline_count: args.downline.unwrap_or(base.downline_count),
    }
}

/// Root with plan-default volume plus a generated downline
pub fn build_simulation(
    config: &CliConfig,
    shape: &DownlineShape,
) -> CliResult<(SponsorTree, ParticipantId)> {
    let mut tree = SponsorTree::with_plan(config.plan.clone())?;
    let root = tree.enroll(None, shape.month)?;
    create_random_downline(&mut tree, root, shape)?;
    Ok((tree, root))
}

pub fn format_tier_table() -> String {
    let mut lines = vec![
        "Performance Bonus Schedule".to_string(),
        format!("{:>4}  {:>8}   {}", "Rate", "Group PV", "Range"),
    ];
    lines.extend(BONUS_SCHEDULE.iter().map(|tier| tier.to_string()));
    lines.join("\n")
}

/// Differential lines of every frontline leg of `root`
pub fn differential_lines(tree: &SponsorTree, root: ParticipantId) -> CliResult<Vec<DifferentialLine>> {
    let lines = tree
        .participant(root)?
        .differential_bonus_list()
        .iter()
        .map(|differential| differential.line())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines)
}

// ============================================================================
// IMPERATIVE SHELL - All side effects here
// ============================================================================

pub fn handle_simulate(
    args: &SimulateArgs,
    format: OutputFormat,
    config: &CliConfig,
    output: &dyn Output,
) -> CliResult<()> {
    let shape = resolve_shape(args, config);
    let (tree, root) = build_simulation(config, &shape)?;
    tracing::info!(
        participants = tree.len(),
        month = shape.month,
        "simulated downline"
    );

    let report = DownlineReport::build(&tree, root)?;
    let differentials = differential_lines(&tree, root)?;

    match format {
        OutputFormat::Json => {
            let participants = if args.all {
                serde_json::to_value(&report.participants)?
            } else {
                serde_json::to_value(&report.participants[..1])?
            };
            output.print_json(&json!({
                "shape": shape,
                "root": root,
                "participants": participants,
                "differentials": differentials,
            }))
        }
        OutputFormat::Table => {
            output.header(&format!("Downline of {}", root))?;
            output.print(&render_tree(&tree, root)?)?;

            if args.all {
                output.header("Downline Earnings")?;
                output.print(&report.to_table())?;
            }

            output.header("Differential Bonuses")?;
            for line in &differentials {
                output.print(&line.to_string())?;
            }

            print_status(root, &report.participants[0].earnings, output)
        }
    }
}

pub fn handle_tiers(format: OutputFormat, output: &dyn Output) -> CliResult<()> {
    match format {
        OutputFormat::Json => output.print_json(&serde_json::to_value(&BONUS_SCHEDULE)?),
        OutputFormat::Table => output.print(&format_tier_table()),
    }
}

pub fn handle_earnings(
    args: &EarningsArgs,
    format: OutputFormat,
    config: &CliConfig,
    output: &dyn Output,
) -> CliResult<()> {
    let mut tree = SponsorTree::with_plan(config.plan.clone())?;
    let personal_pv = args.personal_pv.unwrap_or(config.plan.default_personal_pv);
    let vcs_pv = args.vcs_pv.unwrap_or(config.plan.default_vcs_pv);
    let id = tree.enroll_with_volume(None, config.generator.month, personal_pv, vcs_pv)?;

    let report = DownlineReport::build(&tree, id)?;
    let status = &report.participants[0].earnings;

    match format {
        OutputFormat::Json => output.print_json(&serde_json::to_value(status)?),
        OutputFormat::Table => print_status(id, status, output),
    }
}

fn print_status(id: ParticipantId, status: &EarningsStatus, output: &dyn Output) -> CliResult<()> {
    match status {
        EarningsStatus::Paid(breakdown) => {
            output.print("")?;
            output.print(&breakdown.to_string())
        }
        EarningsStatus::Unqualified { reason } => {
            output.warning(&format!("{} earns nothing this period: {}", id, reason))
        }
    }
}
