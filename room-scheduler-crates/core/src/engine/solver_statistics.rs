use crate::create_statistics_struct;

create_statistics_struct!(
    /// Counters describing the course of a single solve.
    SolverStatistics {
        /// The number of rooms which were assigned to jobs
        num_attempts: u64,
        /// The number of times a job was selected whose domain was empty
        num_dead_ends: u64,
        /// The number of dead-ends after which the search could continue
        num_backjumps: u64,
        /// The total number of decision levels which were undone by backjumps
        num_levels_unwound: u64,
        /// The number of rooms removed from domains by propagation
        num_prunings: u64,
        /// The number of rooms which were put back into domains while unwinding
        num_restored_values: u64,
        /// The wall-clock time spent searching, in milliseconds
        time_spent_in_solver_ms: u128,
});
