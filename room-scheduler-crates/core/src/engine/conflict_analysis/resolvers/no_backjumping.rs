use crate::engine::conflict_analysis::Backjump;
use crate::engine::conflict_analysis::ConflictResolver;
use crate::engine::variables::JobId;
use crate::engine::Assignments;

/// Treats every dead-end as the end of the search.
#[derive(Default, Debug, Clone, Copy)]
pub(crate) struct NoBackjumping;

impl ConflictResolver for NoBackjumping {
    fn resolve_conflict(
        &mut self,
        _assignments: &mut Assignments,
        _dead_end: JobId,
    ) -> Option<Backjump> {
        None
    }
}
