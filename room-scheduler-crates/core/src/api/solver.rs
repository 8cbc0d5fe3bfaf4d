use super::outputs::Outcome;
use super::outputs::RoomAssignment;
use crate::basic_types::FailureReason;
use crate::basic_types::InvalidStateError;
use crate::basic_types::JobInterval;
use crate::engine::termination::Indefinite;
use crate::engine::termination::TerminationCondition;
use crate::engine::ConstraintSolver;
use crate::engine::SolverState;
use crate::engine::SolverStatistics;
use crate::options::ConflictResolverType;
use crate::options::SolverOptions;

/// The main interaction point: it owns the jobs of a single problem and searches for a room for
/// each of them.
///
/// ```rust
/// # use room_scheduler_core::Solver;
/// # use room_scheduler_core::options::SolverOptions;
/// # use room_scheduler_core::results::Outcome;
/// # use room_scheduler_core::termination::Indefinite;
/// # use room_scheduler_core::variables::JobInterval;
/// # use room_scheduler_core::variables::JobId;
/// let jobs = [
///     JobInterval::new(1, 3).unwrap(),
///     JobInterval::new(2, 4).unwrap(),
///     JobInterval::new(4, 6).unwrap(),
/// ];
///
/// let mut solver = Solver::new(&jobs, 2, SolverOptions::default());
///
/// let Outcome::Success(assignment) = solver.satisfy(&mut Indefinite) else {
///     panic!("two rooms suffice for these jobs");
/// };
///
/// assert_ne!(
///     assignment.room_of(JobId::new(0)),
///     assignment.room_of(JobId::new(1))
/// );
/// assert_eq!(solver.statistics().num_attempts, 3);
/// ```
#[derive(Debug)]
pub struct Solver {
    /// The internal [`ConstraintSolver`] which performs the search.
    constraint_solver: ConstraintSolver,
}

impl Solver {
    /// Creates a solver for `jobs` (identified by their position) and `num_rooms` rooms.
    pub fn new(jobs: &[JobInterval], num_rooms: u32, options: SolverOptions) -> Self {
        Solver {
            constraint_solver: ConstraintSolver::new(jobs, num_rooms, options),
        }
    }

    /// Searches for a room assignment until one is found, the search fails, or `termination`
    /// stops it.
    ///
    /// Calling this again after the search ended returns the same outcome.
    pub fn satisfy(&mut self, termination: &mut impl TerminationCondition) -> Outcome {
        match self.constraint_solver.solve(termination) {
            SolverState::Goal => match self.extract_assignment() {
                Ok(assignment) => Outcome::Success(assignment),
                Err(error) => Outcome::Failure(FailureReason::InvalidState(error)),
            },
            SolverState::Failed(reason) => Outcome::Failure(reason),
            SolverState::Searching => Outcome::Failure(FailureReason::Unknown),
        }
    }

    /// The counters collected during the search so far.
    pub fn statistics(&self) -> SolverStatistics {
        self.constraint_solver.statistics()
    }

    /// Logs the statistics currently present in the solver.
    pub fn log_statistics(&self) {
        self.constraint_solver.log_statistics();
    }

    fn extract_assignment(&self) -> Result<RoomAssignment, InvalidStateError> {
        self.constraint_solver
            .assignments()
            .jobs()
            .map(|(job_id, job)| job.room().ok_or(InvalidStateError::NotAssigned(job_id)))
            .collect()
    }
}

/// Assigns a room to every job such that overlapping jobs use different rooms; a dead-end ends
/// the search.
///
/// When no `threshold` is given the search gives up after `2^(jobs.len() + num_rooms)`
/// assignments.
pub fn solve(jobs: &[JobInterval], num_rooms: u32, threshold: Option<u64>) -> Outcome {
    solve_with_resolver(jobs, num_rooms, threshold, ConflictResolverType::NoBackjumping)
}

/// Like [`solve`], but on a dead-end the search jumps back to the most recent decision which
/// pruned the dead-ended job and continues without the room of that decision.
pub fn solve_with_backjumping(
    jobs: &[JobInterval],
    num_rooms: u32,
    threshold: Option<u64>,
) -> Outcome {
    solve_with_resolver(
        jobs,
        num_rooms,
        threshold,
        ConflictResolverType::ConflictDirectedBackjumping,
    )
}

fn solve_with_resolver(
    jobs: &[JobInterval],
    num_rooms: u32,
    threshold: Option<u64>,
    conflict_resolver: ConflictResolverType,
) -> Outcome {
    let options = SolverOptions {
        conflict_resolver,
        threshold,
    };

    Solver::new(jobs, num_rooms, options).satisfy(&mut Indefinite)
}
