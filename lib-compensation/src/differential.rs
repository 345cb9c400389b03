//! Differential bonus
//!
//! An upline is paid the gap between its own bonus rate and the rate a
//! frontline participant already earns on its own group volume, so the same
//! volume is never paid twice at the same rate.
//!
//! ```text
//! multiplier = max(0, upline_percentage - downline_percentage)
//! amount     = multiplier * downline_group_bv
//! ```
//!
//! The amount is applied to the downline's group BV while tier thresholds are
//! set on PV. This matches the personal bonus (percentage × BV) and is kept
//! as published.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{CompensationError, CompensationResult};
use crate::participant::Participant;
use crate::tree::ParticipantId;

/// Differential evaluator for one (upline, frontline participant) edge
#[derive(Debug, Clone, Copy)]
pub struct DifferentialBonus<'a> {
    upline: Participant<'a>,
    downline: Participant<'a>,
}

impl<'a> DifferentialBonus<'a> {
    /// Evaluator for a pair that must be a direct sponsorship edge
    pub fn new(upline: Participant<'a>, downline: Participant<'a>) -> CompensationResult<Self> {
        let same_tree = std::ptr::eq(upline.tree(), downline.tree());
        if !same_tree || !upline.sponsors(downline.id()) {
            return Err(CompensationError::NotFrontline {
                upline: upline.id(),
                downline: downline.id(),
            });
        }
        Ok(Self::for_edge(upline, downline))
    }

    /// Caller guarantees `downline` was read from `upline`'s frontline
    pub(crate) fn for_edge(upline: Participant<'a>, downline: Participant<'a>) -> Self {
        Self { upline, downline }
    }

    pub fn upline(&self) -> Participant<'a> {
        self.upline
    }

    pub fn downline(&self) -> Participant<'a> {
        self.downline
    }

    /// Rate gap, floored at zero when the downline matches or outranks the upline
    pub fn calculate_multiplier(&self) -> CompensationResult<f64> {
        let upline = self.upline.calculate_bonus_percentage()?;
        let downline = self.downline.calculate_bonus_percentage()?;
        Ok((upline - downline).max(0.0))
    }

    /// Amount paid to the upline on this leg
    pub fn calculate_amount(&self) -> CompensationResult<f64> {
        Ok(self.calculate_multiplier()? * self.downline.calculate_group_bv()?)
    }

    /// Flattened view of this leg for reports
    pub fn line(&self) -> CompensationResult<DifferentialLine> {
        Ok(DifferentialLine {
            upline: self.upline.id(),
            downline: self.downline.id(),
            upline_percentage: self.upline.calculate_bonus_percentage()?,
            downline_percentage: self.downline.calculate_bonus_percentage()?,
            downline_group_pv: self.downline.calculate_group_pv()?,
            downline_group_bv: self.downline.calculate_group_bv()?,
            multiplier: self.calculate_multiplier()?,
            amount: self.calculate_amount()?,
        })
    }
}

impl fmt::Display for DifferentialBonus<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line() {
            Ok(line) => write!(f, "{}", line),
            Err(err) => write!(f, "{} -> {}: {}", self.upline.id(), self.downline.id(), err),
        }
    }
}

/// Evaluated differential for one leg
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifferentialLine {
    pub upline: ParticipantId,
    pub downline: ParticipantId,
    pub upline_percentage: f64,
    pub downline_percentage: f64,
    pub downline_group_pv: f64,
    pub downline_group_bv: f64,
    pub multiplier: f64,
    pub amount: f64,
}

impl fmt::Display for DifferentialLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pv_bv = format!("{:.2}/{:.2}", self.downline_group_pv, self.downline_group_bv);
        let multiplier = format!(
            "{:.0}% ({:.0}% - {:.0}%)",
            self.multiplier * 100.0,
            self.upline_percentage * 100.0,
            self.downline_percentage * 100.0
        );
        let amount = format!("{:.2}", self.amount);

        let labels = ["PV/BV:", "Differential Multiplier:", "Differential Bonus:"];
        let width = labels.iter().map(|label| label.len()).max().unwrap_or(0) + 1;

        writeln!(f, "{:<width$}{}", labels[0], pv_bv, width = width)?;
        writeln!(f, "{:<width$}{}", labels[1], multiplier, width = width)?;
        write!(f, "{:<width$}{}", labels[2], amount, width = width)
    }
}
