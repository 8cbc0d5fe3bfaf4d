use std::fmt::Debug;

use super::resolvers::ChronologicalBacktracking;
use super::resolvers::ConflictDirectedBackjumping;
use super::resolvers::NoBackjumping;
use crate::engine::variables::JobId;
use crate::engine::variables::RoomId;
use crate::engine::Assignments;

/// The strategy used by the solver when the search reaches a dead-end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ConflictResolverType {
    /// Every dead-end ends the search.
    #[default]
    NoBackjumping,
    /// Jump back to the most recent decision which pruned the dead-ended job and forbid the room
    /// that decision chose.
    ConflictDirectedBackjumping,
    /// Undo the most recent decision and forbid the room it chose.
    ChronologicalBacktracking,
}

impl ConflictResolverType {
    pub(crate) fn create_resolver(self) -> Box<dyn ConflictResolver> {
        match self {
            ConflictResolverType::NoBackjumping => Box::new(NoBackjumping),
            ConflictResolverType::ConflictDirectedBackjumping => {
                Box::new(ConflictDirectedBackjumping)
            }
            ConflictResolverType::ChronologicalBacktracking => Box::new(ChronologicalBacktracking),
        }
    }
}

/// Describes how the search was unwound after a dead-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Backjump {
    /// The decision level the dead-end was found on.
    pub(crate) from_level: usize,
    /// The decision level the search resumes from.
    pub(crate) to_level: usize,
    /// The job whose decision was undone and whose room is now forbidden.
    pub(crate) refuted_job: JobId,
    /// The room which was removed from the domain of `refuted_job`.
    pub(crate) refuted_room: RoomId,
    /// The number of domain values which were put back while unwinding.
    pub(crate) num_restored_values: usize,
}

impl Backjump {
    pub(crate) fn num_levels_unwound(&self) -> usize {
        self.from_level - self.to_level
    }
}

pub(crate) trait ConflictResolver: Debug {
    /// Restores the search to a state from which it can continue after `dead_end` ran out of
    /// rooms.
    ///
    /// Returns [`None`] if no decision can be blamed for the dead-end, in which case the search
    /// is over.
    fn resolve_conflict(
        &mut self,
        assignments: &mut Assignments,
        dead_end: JobId,
    ) -> Option<Backjump>;
}
