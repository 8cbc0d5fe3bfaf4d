//! # Room scheduler
//! A constraint satisfaction solver which assigns rooms to jobs. Every job occupies a fixed
//! half-open time interval `[start, finish)`; two jobs whose intervals overlap may not use the same
//! room, while jobs which merely touch (one finishes when the other starts) may.
//!
//! The search is a deterministic depth-first search:
//! * the next job is the one with the fewest rooms left (minimum remaining values), ties are
//!   broken by the earliest finish time and then by the position of the job in the input;
//! * its room is the one which the fewest other unassigned jobs still consider (least
//!   constraining value), ties are broken by the smallest room;
//! * after every assignment, forward checking removes the room from the domains of the unassigned
//!   jobs which overlap the assigned job.
//!
//! A job without rooms left is a dead-end. By default a dead-end ends the search; the search can
//! instead jump back to the decision which caused the dead-end (see
//! [`options::ConflictResolverType`]).
//!
//! # Solving
//! The simplest way to use the solver is through [`solve`]:
//! ```rust
//! # use room_scheduler_core::solve;
//! # use room_scheduler_core::results::Outcome;
//! # use room_scheduler_core::variables::JobInterval;
//! # use room_scheduler_core::variables::RoomId;
//! let jobs = [JobInterval::new(1, 3).unwrap(), JobInterval::new(3, 5).unwrap()];
//!
//! let outcome = solve(&jobs, 1, None);
//!
//! let Outcome::Success(assignment) = outcome else {
//!     panic!("touching jobs can share a room");
//! };
//! assert!(assignment.iter().all(|(_, room)| room == RoomId::new(0)));
//! ```
//!
//! Jobs which cannot be scheduled lead to a failure:
//! ```rust
//! # use room_scheduler_core::solve_with_backjumping;
//! # use room_scheduler_core::results::FailureReason;
//! # use room_scheduler_core::results::Outcome;
//! # use room_scheduler_core::variables::JobInterval;
//! let jobs = [
//!     JobInterval::new(1, 4).unwrap(),
//!     JobInterval::new(2, 5).unwrap(),
//!     JobInterval::new(3, 6).unwrap(),
//! ];
//!
//! let outcome = solve_with_backjumping(&jobs, 2, None);
//!
//! assert_eq!(outcome, Outcome::Failure(FailureReason::Unsatisfiable));
//! ```
//!
//! For more control, such as a wall-clock limit or statistics, create a [`Solver`] and pass a
//! [`termination::TerminationCondition`] to [`Solver::satisfy`].
pub mod asserts;
pub(crate) mod basic_types;
pub mod containers;
pub(crate) mod engine;
pub(crate) mod propagators;

pub mod branching;
pub mod statistics;

pub use convert_case;

// We declare a private module with public use, so that all exports from API are exports directly
// from the crate.
//
// Example:
// `use room_scheduler_core::Solver;`
// vs.
// `use room_scheduler_core::api::Solver;`
mod api;

pub use api::*;

pub use crate::api::solver::solve;
pub use crate::api::solver::solve_with_backjumping;
pub use crate::api::solver::Solver;
pub use crate::engine::SolverStatistics;
