//! Tree rendering and downline earnings reports
//!
//! The engine leaves the fallback for ineligible participants to its caller.
//! Reports record a failed qualification check against the participant and
//! keep going; any other engine error aborts the report.

use crate::error::CliResult;
use lib_compensation::{EarningsBreakdown, IboLevel, ParticipantId, SponsorTree};
use serde::Serialize;
use tracing::warn;

/// Indented tree with tier, group and personal volume per participant
///
/// ```text
/// ├─ [25%] Group PV/BV: 7650.00/25704.00, Personal PV/BV: 150.00/504.00
/// │    ├─ [3%] Group PV/BV: 150.00/504.00, Personal PV/BV: 150.00/504.00
/// │    └─ [6%] Group PV/BV: 300.00/1008.00, Personal PV/BV: 150.00/504.00
/// ```
pub fn render_tree(tree: &SponsorTree, root: ParticipantId) -> CliResult<String> {
    let mut lines = Vec::new();

    for (id, depth) in tree.walk(root)? {
        let participant = tree.participant(id)?;
        let last_in_frontline = id != root
            && participant
                .sponsor()
                .and_then(|sponsor| sponsor.frontline().last())
                .map(|last| last.id() == id)
                .unwrap_or(false);

        let indent = "│    ".repeat(depth);
        let branch = if last_in_frontline { "└─ " } else { "├─ " };
        lines.push(format!(
            "{}{}[{}%] Group PV/BV: {:.2}/{:.2}, Personal PV/BV: {:.2}/{:.2}",
            indent,
            branch,
            (participant.calculate_bonus_percentage()? * 100.0).round() as u32,
            participant.calculate_group_pv()?,
            participant.calculate_group_bv()?,
            participant.personal_pv(),
            participant.calculate_personal_bv(),
        ));
    }

    Ok(lines.join("\n"))
}

/// Earnings outcome for one participant
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EarningsStatus {
    Paid(EarningsBreakdown),
    Unqualified { reason: String },
}

/// One row of a downline report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantReport {
    pub participant: ParticipantId,
    pub depth: usize,
    pub level: IboLevel,
    pub group_pv: f64,
    pub bonus_percentage: f64,
    pub earnings: EarningsStatus,
}

/// Earnings of every participant in a subtree, in tree order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DownlineReport {
    pub root: ParticipantId,
    pub participants: Vec<ParticipantReport>,
}

impl DownlineReport {
    pub fn build(tree: &SponsorTree, root: ParticipantId) -> CliResult<Self> {
        let mut participants = Vec::new();

        for (id, depth) in tree.walk(root)? {
            let participant = tree.participant(id)?;
            let earnings = match participant.calculate_earnings_breakdown() {
                Ok(breakdown) => EarningsStatus::Paid(breakdown),
                Err(err) if err.is_qualification() => {
                    warn!(participant = %id, error = %err, "reporting zero earnings");
                    EarningsStatus::Unqualified {
                        reason: err.to_string(),
                    }
                }
                Err(err) => return Err(err.into()),
            };

            participants.push(ParticipantReport {
                participant: id,
                depth,
                level: participant.level(),
                group_pv: participant.calculate_group_pv()?,
                bonus_percentage: participant.calculate_bonus_percentage()?,
                earnings,
            });
        }

        Ok(Self { root, participants })
    }

    /// Sum of total earnings over paid participants
    pub fn total_paid(&self) -> f64 {
        self.participants
            .iter()
            .filter_map(|row| match &row.earnings {
                EarningsStatus::Paid(breakdown) => Some(breakdown.total_earnings),
                EarningsStatus::Unqualified { .. } => None,
            })
            .sum()
    }

    pub fn unqualified_count(&self) -> usize {
        self.participants
            .iter()
            .filter(|row| matches!(row.earnings, EarningsStatus::Unqualified { .. }))
            .count()
    }

    /// Fixed-width table, one participant per line
    pub fn to_table(&self) -> String {
        let mut lines = vec![format!(
            "{:<10} {:>5} {:<16} {:>10} {:>5} {:>12}",
            "IBO", "Depth", "Level", "Group PV", "Bonus", "Total ($)"
        )];
        lines.push("-".repeat(63));

        for row in &self.participants {
            let total = match &row.earnings {
                EarningsStatus::Paid(breakdown) => format!("{:.2}", breakdown.total_earnings),
                EarningsStatus::Unqualified { .. } => "unqualified".to_string(),
            };
            lines.push(format!(
                "{:<10} {:>5} {:<16} {:>10.2} {:>4}% {:>12}",
                row.participant.to_string(),
                row.depth,
                row.level.display_name(),
                row.group_pv,
                (row.bonus_percentage * 100.0).round() as u32,
                total
            ));
        }

        lines.push("-".repeat(63));
        lines.push(format!(
            "{:<50} {:>12.2}",
            format!("Total paid ({} unqualified)", self.unqualified_count()),
            self.total_paid()
        ));
        lines.join("\n")
    }
}
