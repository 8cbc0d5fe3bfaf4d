use log::debug;

use super::refute_decision;
use crate::engine::conflict_analysis::Backjump;
use crate::engine::conflict_analysis::ConflictResolver;
use crate::engine::variables::JobId;
use crate::engine::Assignments;

/// Jumps back to the conflict source of a dead-end: the most recent decision whose propagation
/// removed a room from the domain of the dead-ended job.
///
/// Every decision made after the conflict source is undone together with the domain removals it
/// caused; then the conflict source itself is undone and its room is removed from its own domain.
/// Decisions in between did not touch the dead-ended job, so revisiting them could not have
/// helped.
#[derive(Default, Debug, Clone, Copy)]
pub(crate) struct ConflictDirectedBackjumping;

impl ConflictResolver for ConflictDirectedBackjumping {
    fn resolve_conflict(
        &mut self,
        assignments: &mut Assignments,
        dead_end: JobId,
    ) -> Option<Backjump> {
        let Some(conflict_level) = assignments.last_level_pruning(dead_end) else {
            debug!("No decision pruned the domain of {dead_end}, the dead-end is unconditional");
            return None;
        };

        refute_decision(assignments, conflict_level)
    }
}
