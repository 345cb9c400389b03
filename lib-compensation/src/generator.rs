//! Random downline generation
//!
//! Builds reproducible test and demo trees. The engine never calls into this
//! module; it only uses the public construction API of [`SponsorTree`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::CompensationResult;
use crate::tree::{ParticipantId, SponsorTree};

/// Shape of a generated downline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownlineShape {
    /// Registration month of every generated participant, also the RNG seed
    pub month: u32,
    /// Participants sponsored directly by the root
    pub frontline_count: usize,
    /// Participants placed under randomly chosen downline members
    pub downline_count: usize,
}

impl Default for DownlineShape {
    fn default() -> Self {
        Self {
            month: 12,
            frontline_count: 20,
            downline_count: 30,
        }
    }
}

/// Grow a random downline under `root`
///
/// First enrolls `frontline_count` participants directly under `root`, then
/// enrolls `downline_count` more, each sponsored by a participant picked
/// uniformly from the root's frontline and everything generated beneath it so
/// far. The RNG is seeded from the month, so the same shape on the same tree
/// always produces the same structure. Returns the new ids in enrollment order.
pub fn create_random_downline(
    tree: &mut SponsorTree,
    root: ParticipantId,
    shape: &DownlineShape,
) -> CompensationResult<Vec<ParticipantId>> {
    let mut rng = StdRng::seed_from_u64(u64::from(shape.month));
    let mut created = Vec::with_capacity(shape.frontline_count + shape.downline_count);

    for _ in 0..shape.frontline_count {
        created.push(tree.enroll(Some(root), shape.month)?);
    }

    let mut candidates = tree.record(root)?.frontline().to_vec();
    for _ in 0..shape.downline_count {
        if candidates.is_empty() {
            break;
        }
        let sponsor = candidates[rng.gen_range(0..candidates.len())];
        let id = tree.enroll(Some(sponsor), shape.month)?;
        created.push(id);
        candidates.push(id);
    }

    debug!(
        root = %root,
        created = created.len(),
        month = shape.month,
        "generated random downline"
    );
    Ok(created)
}
