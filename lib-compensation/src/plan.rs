//! Compensation Plan Parameters
//!
//! Fixed conversion rates, qualification gates and caps used by every
//! earnings calculation. The defaults reproduce the published plan; a
//! deployment may load overrides from configuration, but the bonus
//! schedule itself lives in [`crate::schedule`] and is never configurable.

use serde::{Deserialize, Serialize};

use crate::errors::{CompensationError, CompensationResult};

/// Conversion from point value to business volume (currency units per PV)
pub const BV_TO_PV_RATIO: f64 = 3.36;

/// Minimum VCS PV as a fraction of personal PV to earn a personal bonus
pub const VCS_QUALIFICATION_RATIO: f64 = 0.6;

/// CSI percentage is `max(0, CSI_CEILING_RATE - bonus_percentage)`
pub const CSI_CEILING_RATE: f64 = 0.10;

/// Hard cap on the CSI bonus per evaluation period (USD)
pub const CSI_BONUS_CAP: f64 = 75.0;

/// Retail profit rate applied to VCS business volume
pub const RETAIL_PROFIT_RATE: f64 = 0.10;

/// Starting personal PV for a newly enrolled participant
pub const DEFAULT_PERSONAL_PV: f64 = 150.0;

/// Starting VCS PV for a newly enrolled participant
pub const DEFAULT_VCS_PV: f64 = 90.0;

/// Deepest sponsorship chain a traversal will follow before failing
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Plan parameters shared by every participant of a tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompensationPlan {
    /// BV per PV
    pub bv_to_pv_ratio: f64,
    /// Required `vcs_pv / personal_pv` for the personal bonus
    pub vcs_qualification_ratio: f64,
    /// Rate the CSI percentage is measured against
    pub csi_ceiling_rate: f64,
    /// Clamp applied to the CSI bonus
    pub csi_cap: f64,
    /// Retail profit rate on VCS BV
    pub retail_profit_rate: f64,
    /// Personal PV assigned by `SponsorTree::enroll`
    pub default_personal_pv: f64,
    /// VCS PV assigned by `SponsorTree::enroll`
    pub default_vcs_pv: f64,
    /// Depth ceiling for volume aggregation
    pub max_depth: usize,
}

impl Default for CompensationPlan {
    fn default() -> Self {
        Self {
            bv_to_pv_ratio: BV_TO_PV_RATIO,
            vcs_qualification_ratio: VCS_QUALIFICATION_RATIO,
            csi_ceiling_rate: CSI_CEILING_RATE,
            csi_cap: CSI_BONUS_CAP,
            retail_profit_rate: RETAIL_PROFIT_RATE,
            default_personal_pv: DEFAULT_PERSONAL_PV,
            default_vcs_pv: DEFAULT_VCS_PV,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CompensationPlan {
    /// Reject parameters that would make earnings meaningless
    pub fn validate(&self) -> CompensationResult<()> {
        let rates = [
            ("bv_to_pv_ratio", self.bv_to_pv_ratio),
            ("csi_cap", self.csi_cap),
            ("default_personal_pv", self.default_personal_pv),
            ("default_vcs_pv", self.default_vcs_pv),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(CompensationError::InvalidPlan(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }

        let fractions = [
            ("vcs_qualification_ratio", self.vcs_qualification_ratio),
            ("csi_ceiling_rate", self.csi_ceiling_rate),
            ("retail_profit_rate", self.retail_profit_rate),
        ];
        for (name, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(CompensationError::InvalidPlan(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }

        if self.max_depth == 0 {
            return Err(CompensationError::InvalidPlan(
                "max_depth must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Convert a PV amount into BV
    pub fn to_bv(&self, pv: f64) -> f64 {
        pv * self.bv_to_pv_ratio
    }

    /// Minimum VCS PV required for the given personal PV
    pub fn required_vcs_pv(&self, personal_pv: f64) -> f64 {
        self.vcs_qualification_ratio * personal_pv
    }
}
