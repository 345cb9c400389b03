//! Sponsorship tree
//!
//! Participants live in a single arena owned by [`SponsorTree`]. A sponsor
//! refers to its frontline by [`ParticipantId`] and each participant refers
//! back to its sponsor the same way, so there is no ownership cycle between
//! parent and child.
//!
//! # Invariants
//!
//! - A participant can only be sponsored by an id the tree already issued,
//!   so the sponsorship graph is a forest by construction.
//! - Frontline order is insertion order and never changes.
//! - Volumes are fixed at enrollment; queries never mutate the tree.
//!
//! Aggregation walks the subtree with an explicit stack rather than the call
//! stack, and fails with [`CompensationError::StructuralViolation`] when the
//! plan's depth ceiling is exceeded or a participant is reached twice.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

use crate::errors::{CompensationError, CompensationResult};
use crate::level::IboLevel;
use crate::participant::Participant;
use crate::plan::CompensationPlan;

/// Arena index of a participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParticipantId(usize);

impl ParticipantId {
    /// Position in the arena (enrollment order)
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IBO#{}", self.0)
    }
}

/// Stored state of one participant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantRecord {
    sponsor: Option<ParticipantId>,
    frontline: Vec<ParticipantId>,
    personal_pv: f64,
    vcs_pv: f64,
    level: IboLevel,
    registration_month: u32,
}

impl ParticipantRecord {
    pub fn sponsor(&self) -> Option<ParticipantId> {
        self.sponsor
    }

    /// Directly sponsored participants, in enrollment order
    pub fn frontline(&self) -> &[ParticipantId] {
        &self.frontline
    }

    pub fn personal_pv(&self) -> f64 {
        self.personal_pv
    }

    pub fn vcs_pv(&self) -> f64 {
        self.vcs_pv
    }

    pub fn level(&self) -> IboLevel {
        self.level
    }

    pub fn registration_month(&self) -> u32 {
        self.registration_month
    }
}

/// Arena of participants plus the plan they are paid under
#[derive(Debug, Clone, Default)]
pub struct SponsorTree {
    plan: CompensationPlan,
    participants: Vec<ParticipantRecord>,
}

/// One pending node of the post-order walk
struct Frame {
    id: ParticipantId,
    depth: usize,
    next_child: usize,
    children_pv: f64,
}

impl SponsorTree {
    /// Empty tree under the default plan
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty tree under a custom plan
    pub fn with_plan(plan: CompensationPlan) -> CompensationResult<Self> {
        plan.validate()?;
        Ok(Self {
            plan,
            participants: Vec::new(),
        })
    }

    pub fn plan(&self) -> &CompensationPlan {
        &self.plan
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Enroll a participant with the plan's starting volumes
    ///
    /// With a sponsor, the new participant is appended to the sponsor's
    /// frontline. Without one, it becomes a new root.
    pub fn enroll(
        &mut self,
        sponsor: Option<ParticipantId>,
        registration_month: u32,
    ) -> CompensationResult<ParticipantId> {
        let personal_pv = self.plan.default_personal_pv;
        let vcs_pv = self.plan.default_vcs_pv;
        self.enroll_with_volume(sponsor, registration_month, personal_pv, vcs_pv)
    }

    /// Enroll a participant with explicit volumes
    pub fn enroll_with_volume(
        &mut self,
        sponsor: Option<ParticipantId>,
        registration_month: u32,
        personal_pv: f64,
        vcs_pv: f64,
    ) -> CompensationResult<ParticipantId> {
        check_volume("personal_pv", personal_pv)?;
        check_volume("vcs_pv", vcs_pv)?;
        if let Some(sponsor) = sponsor {
            self.record(sponsor)?;
        }

        let id = ParticipantId(self.participants.len());
        self.participants.push(ParticipantRecord {
            sponsor,
            frontline: Vec::new(),
            personal_pv,
            vcs_pv,
            level: IboLevel::default(),
            registration_month,
        });
        if let Some(sponsor) = sponsor {
            self.participants[sponsor.0].frontline.push(id);
        }

        debug!(
            participant = %id,
            sponsor = ?sponsor,
            personal_pv,
            vcs_pv,
            registration_month,
            "enrolled participant"
        );
        Ok(id)
    }

    /// Record a recognition level (informational only)
    pub fn set_level(&mut self, id: ParticipantId, level: IboLevel) -> CompensationResult<()> {
        let record = self
            .participants
            .get_mut(id.0)
            .ok_or(CompensationError::UnknownParticipant(id))?;
        record.level = level;
        Ok(())
    }

    pub(crate) fn records(&self) -> &[ParticipantRecord] {
        &self.participants
    }

    pub fn record(&self, id: ParticipantId) -> CompensationResult<&ParticipantRecord> {
        self.participants
            .get(id.0)
            .ok_or(CompensationError::UnknownParticipant(id))
    }

    /// Query view of a participant
    pub fn participant(&self, id: ParticipantId) -> CompensationResult<Participant<'_>> {
        self.record(id)?;
        Ok(Participant::new(self, id))
    }

    /// Every issued id, in enrollment order
    pub fn ids(&self) -> impl Iterator<Item = ParticipantId> + '_ {
        (0..self.participants.len()).map(ParticipantId)
    }

    /// Participants without a sponsor
    pub fn roots(&self) -> impl Iterator<Item = ParticipantId> + '_ {
        self.ids().filter(|id| self.participants[id.0].sponsor.is_none())
    }

    /// Number of sponsors between `id` and its root
    pub fn depth_of(&self, id: ParticipantId) -> CompensationResult<usize> {
        let mut depth = 0;
        let mut current = self.record(id)?.sponsor;
        while let Some(sponsor) = current {
            depth += 1;
            if depth > self.participants.len() {
                return Err(CompensationError::StructuralViolation {
                    at: id,
                    reason: "sponsor chain does not reach a root".to_string(),
                });
            }
            current = self.record(sponsor)?.sponsor;
        }
        Ok(depth)
    }

    /// Group PV of the subtree rooted at `root`
    ///
    /// Children are folded into their sponsor only after their own subtree
    /// is complete, giving `personal_pv + Σ child_group_pv` for every node.
    pub(crate) fn group_pv(&self, root: ParticipantId) -> CompensationResult<f64> {
        let root_record = self.record(root)?;
        if root_record.frontline.is_empty() {
            return Ok(root_record.personal_pv);
        }

        let mut visited = 1usize;
        let mut stack = vec![Frame {
            id: root,
            depth: 0,
            next_child: 0,
            children_pv: 0.0,
        }];

        loop {
            let top = stack.len() - 1;
            let (id, depth, next_child) = {
                let frame = &stack[top];
                (frame.id, frame.depth, frame.next_child)
            };
            let record = &self.participants[id.0];

            if let Some(&child) = record.frontline.get(next_child) {
                stack[top].next_child += 1;

                let child_depth = depth + 1;
                if child_depth > self.plan.max_depth {
                    return Err(CompensationError::StructuralViolation {
                        at: child,
                        reason: format!("depth ceiling of {} exceeded", self.plan.max_depth),
                    });
                }
                visited += 1;
                if visited > self.participants.len() {
                    return Err(CompensationError::StructuralViolation {
                        at: child,
                        reason: "participant reached more than once".to_string(),
                    });
                }
                self.record(child)?;

                stack.push(Frame {
                    id: child,
                    depth: child_depth,
                    next_child: 0,
                    children_pv: 0.0,
                });
                continue;
            }

            let finished = stack.pop().map(|frame| record.personal_pv + frame.children_pv);
            let total = finished.unwrap_or(record.personal_pv);
            match stack.last_mut() {
                Some(parent) => parent.children_pv += total,
                None => {
                    trace!(participant = %root, visited, group_pv = total, "aggregated group volume");
                    return Ok(total);
                }
            }
        }
    }

    /// Pre-order walk of a subtree as `(id, depth relative to start)`
    pub fn walk(&self, start: ParticipantId) -> CompensationResult<Vec<(ParticipantId, usize)>> {
        self.record(start)?;
        let mut order = Vec::new();
        let mut stack = vec![(start, 0usize)];

        while let Some((id, depth)) = stack.pop() {
            if depth > self.plan.max_depth {
                return Err(CompensationError::StructuralViolation {
                    at: id,
                    reason: format!("depth ceiling of {} exceeded", self.plan.max_depth),
                });
            }
            if order.len() >= self.participants.len() {
                return Err(CompensationError::StructuralViolation {
                    at: id,
                    reason: "participant reached more than once".to_string(),
                });
            }
            order.push((id, depth));
            let record = self.record(id)?;
            for &child in record.frontline.iter().rev() {
                stack.push((child, depth + 1));
            }
        }

        Ok(order)
    }
}

fn check_volume(field: &'static str, value: f64) -> CompensationResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CompensationError::InvalidVolume { field, value })
    }
}
