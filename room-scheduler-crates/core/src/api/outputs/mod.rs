use std::fmt::Display;
use std::fmt::Formatter;

use crate::basic_types::FailureReason;
use crate::containers::KeyedVec;
use crate::engine::variables::JobId;
use crate::engine::variables::RoomId;
#[cfg(doc)]
use crate::Solver;

/// The result of a call to [`Solver::satisfy`], [`solve`](crate::solve) or
/// [`solve_with_backjumping`](crate::solve_with_backjumping).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every job received a room and no two overlapping jobs share one.
    Success(RoomAssignment),
    /// The search ended without a complete assignment.
    Failure(FailureReason),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// The assignment, if the search succeeded.
    pub fn assignment(&self) -> Option<&RoomAssignment> {
        match self {
            Outcome::Success(assignment) => Some(assignment),
            Outcome::Failure(_) => None,
        }
    }

    /// The reason of the failure, if the search failed.
    pub fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(reason) => Some(*reason),
        }
    }
}

/// The room of every job, in the order in which the jobs were given to the solver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomAssignment {
    rooms: KeyedVec<JobId, RoomId>,
}

impl RoomAssignment {
    pub fn room_of(&self, job: JobId) -> Option<RoomId> {
        self.rooms.get(job).copied()
    }

    /// The jobs with their rooms, in input order.
    pub fn iter(&self) -> impl Iterator<Item = (JobId, RoomId)> + '_ {
        self.rooms.iter_with_keys().map(|(job, &room)| (job, room))
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl FromIterator<RoomId> for RoomAssignment {
    fn from_iter<T: IntoIterator<Item = RoomId>>(iter: T) -> Self {
        RoomAssignment {
            rooms: iter.into_iter().collect(),
        }
    }
}

impl Display for RoomAssignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (index, (job, room)) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{job} -> {room}")?;
        }
        write!(f, "]")
    }
}
