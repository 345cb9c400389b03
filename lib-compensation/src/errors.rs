//! Compensation Errors

use thiserror::Error;

use crate::tree::ParticipantId;

/// Error during compensation queries or tree construction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompensationError {
    /// Personal bonus requested for a participant below the VCS threshold
    #[error(
        "VCS PV of {vcs_pv} does not qualify for the bonus: \
         need at least {required_vcs_pv} on personal PV of {personal_pv}"
    )]
    Qualification {
        personal_pv: f64,
        vcs_pv: f64,
        required_vcs_pv: f64,
    },

    #[error("Sponsorship structure violated at {at}: {reason}")]
    StructuralViolation { at: ParticipantId, reason: String },

    #[error("Unknown participant: {0}")]
    UnknownParticipant(ParticipantId),

    #[error("{downline} is not in the frontline of {upline}")]
    NotFrontline {
        upline: ParticipantId,
        downline: ParticipantId,
    },

    #[error("Invalid {field}: {value} (must be finite and non-negative)")]
    InvalidVolume { field: &'static str, value: f64 },

    #[error("Invalid compensation plan: {0}")]
    InvalidPlan(String),
}

impl CompensationError {
    /// True for the plan-eligibility failure callers usually report as zero earnings
    pub fn is_qualification(&self) -> bool {
        matches!(self, CompensationError::Qualification { .. })
    }
}

/// Result type for compensation operations
pub type CompensationResult<T> = Result<T, CompensationError>;
