//! Participant queries
//!
//! [`Participant`] is a borrowed view of one node of a [`SponsorTree`]. Every
//! query is a pure derivation over the current tree: nothing is cached and
//! nothing is written back, so two calls on an unchanged tree always agree.

use std::fmt;
use tracing::warn;

use crate::differential::DifferentialBonus;
use crate::earnings::EarningsBreakdown;
use crate::errors::{CompensationError, CompensationResult};
use crate::level::IboLevel;
use crate::plan::CompensationPlan;
use crate::schedule::bonus_percentage_for;
use crate::tree::{ParticipantId, ParticipantRecord, SponsorTree};

/// Read-only view of a participant inside its tree
#[derive(Clone, Copy)]
pub struct Participant<'a> {
    tree: &'a SponsorTree,
    id: ParticipantId,
}

impl<'a> Participant<'a> {
    /// Callers go through `SponsorTree::participant`, which checks the id
    pub(crate) fn new(tree: &'a SponsorTree, id: ParticipantId) -> Self {
        Self { tree, id }
    }

    pub fn id(&self) -> ParticipantId {
        self.id
    }

    pub fn tree(&self) -> &'a SponsorTree {
        self.tree
    }

    fn record(&self) -> &'a ParticipantRecord {
        // Views are only built for ids the tree issued, and the arena never shrinks
        &self.tree.records()[self.id.index()]
    }

    fn plan(&self) -> &'a CompensationPlan {
        self.tree.plan()
    }

    pub fn sponsor(&self) -> Option<Participant<'a>> {
        self.record()
            .sponsor()
            .map(|sponsor| Participant::new(self.tree, sponsor))
    }

    /// Directly sponsored participants, in enrollment order
    pub fn frontline(&self) -> impl Iterator<Item = Participant<'a>> + 'a {
        let tree = self.tree;
        self.record()
            .frontline()
            .iter()
            .map(move |&child| Participant::new(tree, child))
    }

    /// True when `other` is directly sponsored by this participant
    pub fn sponsors(&self, other: ParticipantId) -> bool {
        self.record().frontline().contains(&other)
    }

    pub fn personal_pv(&self) -> f64 {
        self.record().personal_pv()
    }

    pub fn vcs_pv(&self) -> f64 {
        self.record().vcs_pv()
    }

    pub fn level(&self) -> IboLevel {
        self.record().level()
    }

    pub fn registration_month(&self) -> u32 {
        self.record().registration_month()
    }

    // =========================================================================
    // VOLUME
    // =========================================================================

    /// Personal PV plus the group PV of every frontline participant
    pub fn calculate_group_pv(&self) -> CompensationResult<f64> {
        self.tree.group_pv(self.id)
    }

    /// Group PV converted to business volume
    pub fn calculate_group_bv(&self) -> CompensationResult<f64> {
        Ok(self.plan().to_bv(self.calculate_group_pv()?))
    }

    /// Personal PV converted to business volume
    pub fn calculate_personal_bv(&self) -> f64 {
        self.plan().to_bv(self.personal_pv())
    }

    // =========================================================================
    // BONUSES
    // =========================================================================

    /// Schedule rate earned by this participant's group PV
    pub fn calculate_bonus_percentage(&self) -> CompensationResult<f64> {
        Ok(bonus_percentage_for(self.calculate_group_pv()?))
    }

    /// Whether VCS volume meets the plan's share of personal volume
    pub fn is_qualified(&self) -> bool {
        self.vcs_pv() >= self.plan().required_vcs_pv(self.personal_pv())
    }

    /// Performance bonus on personal volume
    ///
    /// Fails with [`CompensationError::Qualification`] when VCS PV is below
    /// the plan's required share of personal PV. The gate does not look at
    /// group volume.
    pub fn calculate_personal_bonus(&self) -> CompensationResult<f64> {
        if !self.is_qualified() {
            let err = CompensationError::Qualification {
                personal_pv: self.personal_pv(),
                vcs_pv: self.vcs_pv(),
                required_vcs_pv: self.plan().required_vcs_pv(self.personal_pv()),
            };
            warn!(participant = %self.id, error = %err, "personal bonus not payable");
            return Err(err);
        }

        Ok(self.calculate_bonus_percentage()? * self.calculate_personal_bv())
    }

    /// One differential evaluator per frontline participant, in frontline order
    pub fn differential_bonus_list(&self) -> Vec<DifferentialBonus<'a>> {
        self.frontline()
            .map(|child| DifferentialBonus::for_edge(*self, child))
            .collect()
    }

    /// Sum of the differential amounts over the frontline (one level only)
    pub fn calculate_differential_bonus(&self) -> CompensationResult<f64> {
        self.differential_bonus_list()
            .iter()
            .try_fold(0.0, |total, differential| {
                Ok(total + differential.calculate_amount()?)
            })
    }

    /// Customer Sales Incentive rate, zero once the bonus tier reaches the ceiling
    pub fn calculate_csi_percentage(&self) -> CompensationResult<f64> {
        let ceiling = self.plan().csi_ceiling_rate;
        Ok((ceiling - self.calculate_bonus_percentage()?).max(0.0))
    }

    /// CSI bonus on VCS business volume, hard-capped
    pub fn calculate_csi_bonus(&self) -> CompensationResult<f64> {
        let uncapped = self.calculate_csi_percentage()? * self.plan().to_bv(self.vcs_pv());
        Ok(uncapped.min(self.plan().csi_cap))
    }

    /// Retail profit on VCS business volume
    pub fn calculate_retail_profit(&self) -> f64 {
        self.plan().retail_profit_rate * self.plan().to_bv(self.vcs_pv())
    }

    /// Personal + differential + CSI + retail
    ///
    /// A failed qualification check propagates rather than counting as zero.
    pub fn calculate_total_earnings(&self) -> CompensationResult<f64> {
        Ok(self.calculate_earnings_breakdown()?.total_earnings)
    }

    /// Every earnings category for this participant
    pub fn calculate_earnings_breakdown(&self) -> CompensationResult<EarningsBreakdown> {
        let group_pv = self.calculate_group_pv()?;
        let personal_bonus = self.calculate_personal_bonus()?;
        let differential_bonus = self.calculate_differential_bonus()?;
        let csi_bonus = self.calculate_csi_bonus()?;
        let retail_profit = self.calculate_retail_profit();

        Ok(EarningsBreakdown {
            participant: self.id,
            group_pv,
            group_bv: self.plan().to_bv(group_pv),
            bonus_percentage: bonus_percentage_for(group_pv),
            personal_bonus,
            differential_bonus,
            csi_bonus,
            retail_profit,
            total_earnings: personal_bonus + differential_bonus + csi_bonus + retail_profit,
        })
    }
}

impl fmt::Debug for Participant<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Participant")
            .field("id", &self.id)
            .field("record", self.record())
            .finish()
    }
}
