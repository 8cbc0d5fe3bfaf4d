use super::refute_decision;
use crate::engine::conflict_analysis::Backjump;
use crate::engine::conflict_analysis::ConflictResolver;
use crate::engine::variables::JobId;
use crate::engine::Assignments;

/// Undoes the most recent decision, whatever caused the dead-end.
#[derive(Default, Debug, Clone, Copy)]
pub(crate) struct ChronologicalBacktracking;

impl ConflictResolver for ChronologicalBacktracking {
    fn resolve_conflict(
        &mut self,
        assignments: &mut Assignments,
        _dead_end: JobId,
    ) -> Option<Backjump> {
        let decision_level = assignments.get_decision_level();
        if decision_level == 0 {
            return None;
        }

        refute_decision(assignments, decision_level)
    }
}
