//! Earnings breakdown
//!
//! Accounting record of every earnings category for one participant at one
//! evaluation snapshot. Produced by
//! [`Participant::calculate_earnings_breakdown`](crate::Participant::calculate_earnings_breakdown).
//!
//! # Invariants
//!
//! - `total_earnings = personal_bonus + differential_bonus + csi_bonus + retail_profit`
//! - every amount is finite and non-negative
//! - `csi_bonus` never exceeds the plan's CSI cap

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::tree::ParticipantId;

/// Earnings of one participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsBreakdown {
    pub participant: ParticipantId,
    pub group_pv: f64,
    pub group_bv: f64,
    pub bonus_percentage: f64,
    pub personal_bonus: f64,
    pub differential_bonus: f64,
    pub csi_bonus: f64,
    pub retail_profit: f64,
    pub total_earnings: f64,
}

impl EarningsBreakdown {
    /// Labelled amounts in reporting order, total last
    pub fn rows(&self) -> [(&'static str, f64); 5] {
        [
            ("Personal Bonus", self.personal_bonus),
            ("Differential Bonus", self.differential_bonus),
            ("CSI Bonus", self.csi_bonus),
            ("Retail Profit", self.retail_profit),
            ("Total Earnings", self.total_earnings),
        ]
    }
}

impl fmt::Display for EarningsBreakdown {
    /// Two-column "Earnings Type | Amount ($)" table
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();
        let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        let rule = "-".repeat(width + 13);

        writeln!(f, "Detailed Earnings Breakdown")?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "{:<width$} | {:>10}", "Earnings Type", "Amount ($)", width = width)?;
        writeln!(f, "{}", rule)?;
        for (index, (label, amount)) in rows.iter().enumerate() {
            if index == rows.len() - 1 {
                writeln!(f, "{}", rule)?;
            }
            writeln!(f, "{:<width$} | {:>10.2}", label, amount, width = width)?;
        }
        Ok(())
    }
}
