use crate::basic_types::InvalidStateError;
use crate::engine::Assignments;
use crate::engine::Job;
use crate::engine::variables::JobId;

/// A read-only view on the state of the search which is handed to the
/// [`VariableSelector`](crate::branching::variable_selection::VariableSelector) and the
/// [`ValueSelector`](crate::branching::value_selection::ValueSelector).
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    assignments: &'a Assignments,
}

impl<'a> SelectionContext<'a> {
    pub(crate) fn new(assignments: &'a Assignments) -> Self {
        SelectionContext { assignments }
    }

    /// Looks up a job by its identity.
    pub fn get_job(&self, job: JobId) -> Result<&'a Job, InvalidStateError> {
        self.assignments.get_job(job)
    }

    /// The jobs which have not been given a room yet, in input order.
    pub fn unassigned_jobs(&self) -> impl Iterator<Item = (JobId, &'a Job)> + 'a {
        self.assignments.unassigned_jobs()
    }
}

#[cfg(test)]
impl SelectionContext<'_> {
    /// Creates the state of a search in which no decision has been made yet.
    pub(crate) fn create_for_testing(jobs: &[(i64, i64)], num_rooms: u32) -> Assignments {
        let intervals = jobs
            .iter()
            .map(|&job| crate::basic_types::JobInterval::try_from(job).expect("valid interval"))
            .collect::<Vec<_>>();
        Assignments::new(&intervals, num_rooms)
    }
}
