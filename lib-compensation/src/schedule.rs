//! Performance Bonus Schedule
//!
//! Ordered, contiguous tiers mapping monthly group PV to a bonus percentage.
//!
//! | Group PV        | Bonus |
//! |-----------------|-------|
//! | 100 – 299.99    | 3%    |
//! | 300 – 599.99    | 6%    |
//! | 600 – 999.99    | 9%    |
//! | 1000 – 1499.99  | 12%   |
//! | 1500 – 2499.99  | 15%   |
//! | 2500 – 3999.99  | 18%   |
//! | 4000 – 5999.99  | 21%   |
//! | 6000 – 7499.99  | 23%   |
//! | 7500 and above  | 25%   |
//!
//! Volume below the first tier earns 0%.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of the bonus schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BonusTier {
    /// Bonus rate as a fraction (0.03 = 3%)
    pub percentage: f64,
    /// Lowest group PV in this tier (inclusive)
    pub min_pv: f64,
    /// Highest group PV in this tier (inclusive), `None` for the top tier
    pub max_pv: Option<f64>,
}

impl BonusTier {
    const fn new(percentage: f64, min_pv: f64, max_pv: Option<f64>) -> Self {
        Self {
            percentage,
            min_pv,
            max_pv,
        }
    }

    /// Inclusive containment check against the published bounds
    pub fn contains(&self, group_pv: f64) -> bool {
        self.min_pv <= group_pv && self.max_pv.map_or(true, |max| group_pv <= max)
    }

    /// Percentage rounded to a whole number for display
    pub fn whole_percent(&self) -> u32 {
        (self.percentage * 100.0).round() as u32
    }
}

impl fmt::Display for BonusTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max_pv {
            Some(max) => write!(f, "{:>3}%  {:>8.2} - {:.2}", self.whole_percent(), self.min_pv, max),
            None => write!(f, "{:>3}%  {:>8.2} and above", self.whole_percent(), self.min_pv),
        }
    }
}

/// The fixed bonus schedule, lowest tier first
pub static BONUS_SCHEDULE: [BonusTier; 9] = [
    BonusTier::new(0.03, 100.0, Some(299.99)),
    BonusTier::new(0.06, 300.0, Some(599.99)),
    BonusTier::new(0.09, 600.0, Some(999.99)),
    BonusTier::new(0.12, 1_000.0, Some(1_499.99)),
    BonusTier::new(0.15, 1_500.0, Some(2_499.99)),
    BonusTier::new(0.18, 2_500.0, Some(3_999.99)),
    BonusTier::new(0.21, 4_000.0, Some(5_999.99)),
    BonusTier::new(0.23, 6_000.0, Some(7_499.99)),
    BonusTier::new(0.25, 7_500.0, None),
];

/// Highest rate the schedule can pay
pub const MAX_BONUS_PERCENTAGE: f64 = 0.25;

/// Find the tier a group PV falls into
///
/// Picks the highest tier whose minimum is at or below `group_pv`. Every
/// value inside a tier's published `[min, max]` range resolves to that tier,
/// and fractional volume between one tier's max and the next tier's min
/// (e.g. 299.995) stays in the lower tier, which keeps the lookup a
/// non-decreasing step function.
pub fn tier_for(group_pv: f64) -> Option<&'static BonusTier> {
    BONUS_SCHEDULE
        .iter()
        .rev()
        .find(|tier| tier.min_pv <= group_pv)
}

/// Bonus percentage for a group PV, 0.0 below the first tier
pub fn bonus_percentage_for(group_pv: f64) -> f64 {
    tier_for(group_pv).map_or(0.0, |tier| tier.percentage)
}
