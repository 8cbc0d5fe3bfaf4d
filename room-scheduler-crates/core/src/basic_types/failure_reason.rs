use thiserror::Error;

use super::InvalidStateError;

/// Why a search ended without assigning a room to every job.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// No assignment was found: a dead-end could not be resolved, or the attempt threshold was
    /// used up.
    #[error("the jobs cannot be scheduled in the available rooms within the attempt threshold")]
    Unsatisfiable,
    /// The engine violated one of its own contracts; this indicates a bug, not an infeasible
    /// instance.
    #[error("the search reached an invalid state: {0}")]
    InvalidState(#[from] InvalidStateError),
    /// A termination condition other than the attempt threshold stopped the search before it
    /// reached a conclusion.
    #[error("the search was stopped before reaching a conclusion")]
    Unknown,
}
