use thiserror::Error;

use crate::engine::variables::JobId;
use crate::engine::variables::RoomId;

/// Violations of the contracts between the components of the search engine.
///
/// These can only be triggered by a bug in the engine; they are reported separately from the
/// problem being unsatisfiable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidStateError {
    /// A job which already holds a room was assigned again.
    #[error("job {0} is already assigned")]
    AlreadyAssigned(JobId),
    /// A job identity was used which does not belong to the problem.
    #[error("job {0} does not exist")]
    UnknownJob(JobId),
    /// A room was chosen for a job which no longer contains it in its domain.
    #[error("room {room} is not in the domain of job {job}")]
    RoomNotInDomain { job: JobId, room: RoomId },
    /// A job was expected to hold a room but does not.
    #[error("job {0} is not assigned")]
    NotAssigned(JobId),
    /// A room was requested for a job whose domain is empty.
    #[error("job {0} has an empty domain")]
    EmptyDomain(JobId),
}
