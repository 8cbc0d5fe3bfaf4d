pub(crate) mod assignments;
pub(crate) mod conflict_analysis;
pub(crate) mod constraint_solver;
pub(crate) mod job;
pub(crate) mod room_domain;
pub(crate) mod solver_statistics;
pub(crate) mod termination;
pub(crate) mod variables;

pub(crate) use assignments::Assignments;
pub use conflict_analysis::ConflictResolverType;
pub(crate) use constraint_solver::ConstraintSolver;
pub use constraint_solver::ConstraintSolverOptions;
pub(crate) use constraint_solver::SolverState;
pub use job::Job;
pub use room_domain::RoomDomain;
pub use solver_statistics::SolverStatistics;
