mod chronological_backtracking;
mod conflict_directed_backjumping;
mod no_backjumping;

pub(crate) use chronological_backtracking::ChronologicalBacktracking;
pub(crate) use conflict_directed_backjumping::ConflictDirectedBackjumping;
pub(crate) use no_backjumping::NoBackjumping;

use super::Backjump;
use crate::engine::Assignments;
use crate::scheduler_assert_eq_simple;

/// Undoes the decision which opened `decision_level` together with everything after it, then
/// removes the room of that decision from the domain of its job.
///
/// The removal is recorded on the level the search resumes from; unwinding past that level
/// makes the room available again.
fn refute_decision(assignments: &mut Assignments, decision_level: usize) -> Option<Backjump> {
    let (refuted_job, refuted_room) = assignments.decision_at_level(decision_level)?;
    let from_level = assignments.get_decision_level();

    let unwound = assignments.backtrack(decision_level - 1);
    scheduler_assert_eq_simple!(unwound.decisions.last(), Some(&(refuted_job, refuted_room)));

    let _ = assignments.remove_room(refuted_job, refuted_room);

    Some(Backjump {
        from_level,
        to_level: decision_level - 1,
        refuted_job,
        refuted_room,
        num_restored_values: unwound.num_restored_values,
    })
}
