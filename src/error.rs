use thiserror::Error;

use crate::gemini::GeminiError;
use crate::market::{JobId, JobStatus, Rupiah, UserRole};

/// Validation and collaborator errors for marketplace transitions.
///
/// Validation variants are rejected before any mutation; none of these are
/// fatal to the session.
#[derive(Debug, Error)]
pub enum MarketError {
    #[error("insufficient balance: requires Rp {required}, available Rp {available}")]
    InsufficientBalance { required: Rupiah, available: Rupiah },

    #[error("minimum deposit is Rp {minimum}, got Rp {amount}")]
    DepositBelowMinimum { minimum: Rupiah, amount: Rupiah },

    #[error("submission text must not be empty")]
    EmptySubmission,

    #[error("job not found: {0}")]
    JobNotFound(JobId),

    #[error("job is {found}, expected {expected}")]
    InvalidStatus {
        found: JobStatus,
        expected: JobStatus,
    },

    #[error("another job is already active")]
    ActiveJobExists,

    #[error("no active job to act on")]
    NoActiveJob,

    #[error("action requires the {0} role")]
    RoleRequired(UserRole),

    #[error("job was posted by a different employer")]
    NotJobOwner,

    #[error("Gemini API error: {0}")]
    Gemini(#[from] GeminiError),
}
