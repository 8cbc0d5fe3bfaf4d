use std::time::Instant;

use itertools::Itertools;
use log::debug;
use log::info;
use log::warn;

use super::conflict_analysis::ConflictResolver;
use super::conflict_analysis::ConflictResolverType;
use super::solver_statistics::SolverStatistics;
use super::termination::AttemptBudget;
use super::termination::TerminationCondition;
use super::variables::JobId;
use super::Assignments;
use crate::basic_types::FailureReason;
use crate::basic_types::InvalidStateError;
use crate::basic_types::JobInterval;
use crate::branching::value_selection::LeastConstrainingValue;
use crate::branching::value_selection::ValueSelector;
use crate::branching::variable_selection::MinimumRemainingValues;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::propagators::ForwardChecking;
use crate::propagators::Propagator;
use crate::scheduler_assert_advanced;
use crate::statistics::should_log_statistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// The state of a [`ConstraintSolver`]; `Goal` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum SolverState {
    #[default]
    Searching,
    Goal,
    Failed(FailureReason),
}

/// Options which influence how the [`ConstraintSolver`] searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstraintSolverOptions {
    /// What to do when the search reaches a dead-end.
    pub conflict_resolver: ConflictResolverType,
    /// The number of assignments after which the search gives up; when [`None`] this is
    /// `2^(num_jobs + num_rooms)`.
    pub threshold: Option<u64>,
}

/// The search engine: a depth-first search which repeatedly selects a job (minimum remaining
/// values, then earliest finish time, then smallest identity), gives it the least constraining
/// room and applies forward checking, until every job holds a room or the search fails.
#[derive(Debug)]
pub(crate) struct ConstraintSolver {
    assignments: Assignments,
    state: SolverState,
    variable_selector: MinimumRemainingValues,
    value_selector: LeastConstrainingValue,
    propagator: ForwardChecking,
    conflict_resolver: Box<dyn ConflictResolver>,
    attempt_budget: AttemptBudget,
    statistics: SolverStatistics,
}

impl ConstraintSolver {
    pub(crate) fn new(
        jobs: &[JobInterval],
        num_rooms: u32,
        options: ConstraintSolverOptions,
    ) -> ConstraintSolver {
        if num_rooms == 0 && !jobs.is_empty() {
            warn!("No rooms are available for {} jobs", jobs.len());
        }

        let attempt_budget = options.threshold.map_or_else(
            || AttemptBudget::default_for(jobs.len(), num_rooms),
            AttemptBudget::new,
        );
        debug!(
            "Created solver for {} jobs and {num_rooms} rooms with an attempt threshold of {} ({:?})",
            jobs.len(),
            attempt_budget.budget(),
            options.conflict_resolver
        );

        ConstraintSolver {
            assignments: Assignments::new(jobs, num_rooms),
            state: SolverState::default(),
            variable_selector: MinimumRemainingValues::default(),
            value_selector: LeastConstrainingValue::default(),
            propagator: ForwardChecking,
            conflict_resolver: options.conflict_resolver.create_resolver(),
            attempt_budget,
            statistics: SolverStatistics::default(),
        }
    }

    pub(crate) fn assignments(&self) -> &Assignments {
        &self.assignments
    }

    pub(crate) fn statistics(&self) -> SolverStatistics {
        self.statistics
    }

    pub(crate) fn log_statistics(&self) {
        if !should_log_statistics() {
            return;
        }

        self.statistics.log(StatisticLogger::default());
    }

    /// Runs the search until it reaches a terminal state, or until `termination` or the attempt
    /// threshold stops it.
    pub(crate) fn solve(&mut self, termination: &mut impl TerminationCondition) -> SolverState {
        let start_time = Instant::now();

        while self.state == SolverState::Searching {
            if let Err(error) = self.step(termination) {
                warn!("Aborting the search: {error}");
                self.state = SolverState::Failed(FailureReason::InvalidState(error));
            }
        }

        self.statistics.time_spent_in_solver_ms += start_time.elapsed().as_millis();

        info!(
            "Search ended in state {:?} after {} attempts with {} of {} jobs assigned",
            self.state,
            self.statistics.num_attempts,
            self.assignments.num_assigned(),
            self.assignments.num_jobs()
        );

        self.state
    }

    /// Performs a single transition of the search.
    fn step(
        &mut self,
        termination: &mut impl TerminationCondition,
    ) -> Result<(), InvalidStateError> {
        if self.assignments.all_assigned() {
            self.state = SolverState::Goal;
            return Ok(());
        }

        if self.attempt_budget.should_stop() {
            debug!(
                "The attempt threshold of {} has been reached",
                self.attempt_budget.budget()
            );
            self.state = SolverState::Failed(FailureReason::Unsatisfiable);
            return Ok(());
        }

        if termination.should_stop() {
            self.state = SolverState::Failed(FailureReason::Unknown);
            return Ok(());
        }

        let context = SelectionContext::new(&self.assignments);

        let Some(job) = self.variable_selector.select_variable(&context) else {
            // Without an unassigned job left every job holds a room.
            self.state = SolverState::Goal;
            return Ok(());
        };

        if context.get_job(job)?.domain().is_empty() {
            self.resolve_dead_end(job);
            return Ok(());
        }

        let room = self.value_selector.select_value(&context, job)?;

        self.assignments.assign(job, room)?;
        self.attempt_budget.decision_has_been_made();
        termination.decision_has_been_made();
        self.statistics.num_attempts += 1;

        debug!(
            "Assigned room {room} to {job} on decision level {}",
            self.assignments.get_decision_level()
        );

        let status = self.propagator.propagate(&mut self.assignments, job)?;
        self.statistics.num_prunings += status.num_removed as u64;

        if !status.wiped_out.is_empty() {
            debug!(
                "{} emptied the domains of {}",
                self.propagator.name(),
                status.wiped_out.iter().join(", ")
            );
        }

        scheduler_assert_advanced!(self.assignments.assigned_rooms_are_disjoint());

        Ok(())
    }

    fn resolve_dead_end(&mut self, dead_end: JobId) {
        self.statistics.num_dead_ends += 1;
        debug!(
            "{dead_end} has no rooms left on decision level {}",
            self.assignments.get_decision_level()
        );

        let Some(backjump) = self
            .conflict_resolver
            .resolve_conflict(&mut self.assignments, dead_end)
        else {
            self.state = SolverState::Failed(FailureReason::Unsatisfiable);
            return;
        };

        self.statistics.num_backjumps += 1;
        self.statistics.num_levels_unwound += backjump.num_levels_unwound() as u64;
        self.statistics.num_restored_values += backjump.num_restored_values as u64;

        debug!(
            "Backjumped from decision level {} to {}, {} may no longer use room {}",
            backjump.from_level, backjump.to_level, backjump.refuted_job, backjump.refuted_room
        );
    }
}
