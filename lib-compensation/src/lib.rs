//! Multi-Level Compensation Engine
//!
//! Pure, snapshot-based earnings calculation for participants ("IBOs") in a
//! sponsorship tree.
//!
//! # Design Principles
//!
//! 1. **Pure queries** - Every calculation is derived from the tree at query time; nothing is cached or written back
//! 2. **Arena ownership** - [`SponsorTree`] owns every participant; sponsors and frontlines are ids, not pointers
//! 3. **Fail fast** - Structural problems and plan ineligibility surface as [`CompensationError`], never as panics
//! 4. **Fixed schedule** - The bonus schedule is a static table; only the surrounding plan parameters are configurable
//!
//! # Earnings
//!
//! ```text
//! group_pv       = personal_pv + Σ frontline group_pv
//! bonus_%        = schedule(group_pv)
//! personal_bonus = bonus_% * personal_pv * 3.36        (requires vcs_pv ≥ 0.6 * personal_pv)
//! differential   = Σ max(0, bonus_% - child_bonus_%) * child_group_pv * 3.36
//! csi_bonus      = min(max(0, 0.10 - bonus_%) * vcs_pv * 3.36, 75)
//! retail_profit  = 0.10 * vcs_pv * 3.36
//! total          = personal_bonus + differential + csi_bonus + retail_profit
//! ```
//!
//! # Usage
//!
//! ```
//! use lib_compensation::SponsorTree;
//!
//! let mut tree = SponsorTree::new();
//! let root = tree.enroll(None, 1).unwrap();
//! let total = tree.participant(root).unwrap().calculate_total_earnings().unwrap();
//! assert!((total - 66.528).abs() < 1e-9);
//! ```

pub mod differential;
pub mod earnings;
pub mod errors;
pub mod generator;
pub mod level;
pub mod participant;
pub mod plan;
pub mod schedule;
pub mod tree;

#[cfg(test)]
mod golden_vectors;

pub use differential::{DifferentialBonus, DifferentialLine};
pub use earnings::EarningsBreakdown;
pub use errors::{CompensationError, CompensationResult};
pub use generator::{create_random_downline, DownlineShape};
pub use level::IboLevel;
pub use participant::Participant;
pub use plan::{CompensationPlan, BV_TO_PV_RATIO, CSI_BONUS_CAP};
pub use schedule::{bonus_percentage_for, tier_for, BonusTier, BONUS_SCHEDULE, MAX_BONUS_PERCENTAGE};
pub use tree::{ParticipantId, ParticipantRecord, SponsorTree};
