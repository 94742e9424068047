//! Error types for the draft state machine.

use thiserror::Error;

/// Rejected inputs to the booking draft.
///
/// These are caller errors, not user-facing failures: the UI is expected
/// to only offer transitions the current state defines. Recovery is a
/// `reset()` back to idle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("No {0} transition from the current state")]
    InvalidTransition(&'static str),

    #[error("Selection spans no time")]
    EmptySelection,

    #[error("Selection cannot leave its day column")]
    ColumnMismatch,

    #[error("Draft is not ready for submission")]
    NotSubmittable,
}

/// Result type alias for draft transitions.
pub type DraftResult<T> = Result<T, DraftError>;
