//! Contains the propagators which prune the domains of the unassigned jobs after a decision.
mod forward_checking;

pub(crate) use forward_checking::ForwardChecking;

use crate::basic_types::InvalidStateError;
use crate::engine::variables::JobId;
use crate::engine::Assignments;

/// The outcome of a single propagation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PropagationStatus {
    /// The number of rooms which were removed from domains.
    pub(crate) num_removed: usize,
    /// The jobs whose domain became empty during this pass.
    pub(crate) wiped_out: Vec<JobId>,
}

/// A propagator removes rooms which can no longer be part of a solution from the domains of the
/// unassigned jobs, in reaction to `assigned_job` receiving its room.
///
/// A propagator never reacts to the domains it empties itself; a wiped-out domain is picked up by
/// the solver when it selects the next job.
pub(crate) trait Propagator {
    fn name(&self) -> &str;

    fn propagate(
        &mut self,
        assignments: &mut Assignments,
        assigned_job: JobId,
    ) -> Result<PropagationStatus, InvalidStateError>;
}
