mod outputs;
pub(crate) mod solver;

pub mod results {
    //! Contains the outputs of solving using the [`Solver`].
    //!
    //! A search either ends in an [`Outcome::Success`] holding a [`RoomAssignment`], or in an
    //! [`Outcome::Failure`] which tells with a [`FailureReason`] whether the jobs could not be
    //! scheduled, the engine reached an invalid state, or the search was stopped early.
    pub use crate::api::outputs::Outcome;
    pub use crate::api::outputs::RoomAssignment;
    pub use crate::basic_types::FailureReason;
    pub use crate::basic_types::InvalidStateError;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod variables {
    //! Contains the entities which are used by the [`Solver`].
    //!
    //! Jobs are the variables of the problem and are referred to by their [`JobId`], which is
    //! their position in the input. Rooms are the values, referred to by their [`RoomId`]. The
    //! set of rooms a job may still use is its [`RoomDomain`].
    pub use crate::basic_types::InvalidIntervalError;
    pub use crate::basic_types::JobInterval;
    pub use crate::engine::variables::JobId;
    pub use crate::engine::variables::RoomId;
    pub use crate::engine::Job;
    pub use crate::engine::RoomDomain;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod options {
    //! Contains the options which can be passed to the [`Solver`].
    //!
    //! These influence the following aspects:
    //! - The handling of dead-ends ([`ConflictResolverType`])
    //! - The number of assignments after which the search gives up
    pub use crate::engine::ConflictResolverType;
    pub use crate::engine::ConstraintSolverOptions as SolverOptions;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod termination {
    //! Contains the conditions which are used to determine when the [`Solver`] should terminate
    //! even when it has not found an assignment or proven that none exists.
    //!
    //! The attempt threshold from the [`SolverOptions`](crate::options::SolverOptions) is always
    //! enforced; the conditions in this module are layered on top of it by passing them to
    //! [`Solver::satisfy`].
    pub use crate::engine::termination::*;
    #[cfg(doc)]
    use crate::Solver;
}
