use log::trace;

use super::PropagationStatus;
use super::Propagator;
use crate::basic_types::InvalidStateError;
use crate::engine::variables::JobId;
use crate::engine::Assignments;

/// Removes the room of a freshly assigned job from the domain of every unassigned job whose
/// interval overlaps it.
///
/// Only the neighbours of the assigned job are revised; there is no propagation queue, so a
/// removal never triggers further removals.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct ForwardChecking;

impl Propagator for ForwardChecking {
    fn name(&self) -> &str {
        "ForwardChecking"
    }

    fn propagate(
        &mut self,
        assignments: &mut Assignments,
        assigned_job: JobId,
    ) -> Result<PropagationStatus, InvalidStateError> {
        let assigned = assignments.get_job(assigned_job)?;
        let interval = assigned.interval();
        let room = assigned
            .room()
            .ok_or(InvalidStateError::NotAssigned(assigned_job))?;

        let mut status = PropagationStatus::default();

        // The identities are snapshotted up front; the pass below mutates the store.
        for job in assignments.job_ids() {
            let candidate = assignments.get_job(job)?;
            if job == assigned_job
                || candidate.is_assigned()
                || !candidate.interval().overlaps(&interval)
            {
                continue;
            }

            if assignments.remove_room(job, room) {
                status.num_removed += 1;

                if assignments.get_job(job)?.domain().is_empty() {
                    trace!("{} wiped out the domain of {job}", self.name());
                    status.wiped_out.push(job);
                }
            }
        }

        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::SelectionContext;
    use crate::engine::variables::RoomId;

    fn rooms_of(assignments: &Assignments, job: u32) -> Vec<RoomId> {
        assignments
            .get_job(JobId::new(job))
            .expect("existing job")
            .domain()
            .iter()
            .collect()
    }

    #[test]
    fn overlapping_jobs_lose_the_assigned_room() {
        let mut assignments = SelectionContext::create_for_testing(&[(1, 3), (2, 4), (5, 6)], 2);
        assignments
            .assign(JobId::new(0), RoomId::new(0))
            .expect("valid assignment");

        let status = ForwardChecking
            .propagate(&mut assignments, JobId::new(0))
            .expect("no invalid state");

        assert_eq!(status.num_removed, 1);
        assert!(status.wiped_out.is_empty());
        assert_eq!(rooms_of(&assignments, 1), vec![RoomId::new(1)]);
        assert_eq!(rooms_of(&assignments, 2), vec![RoomId::new(0), RoomId::new(1)]);
    }

    #[test]
    fn touching_jobs_keep_the_assigned_room() {
        let mut assignments = SelectionContext::create_for_testing(&[(1, 3), (3, 5)], 1);
        assignments
            .assign(JobId::new(0), RoomId::new(0))
            .expect("valid assignment");

        let status = ForwardChecking
            .propagate(&mut assignments, JobId::new(0))
            .expect("no invalid state");

        assert_eq!(status, PropagationStatus::default());
        assert_eq!(rooms_of(&assignments, 1), vec![RoomId::new(0)]);
    }

    #[test]
    fn removing_an_absent_room_is_a_no_op() {
        let mut assignments = SelectionContext::create_for_testing(&[(1, 3), (2, 4)], 2);
        let _ = assignments.remove_room(JobId::new(1), RoomId::new(0));
        assignments
            .assign(JobId::new(0), RoomId::new(0))
            .expect("valid assignment");

        let status = ForwardChecking
            .propagate(&mut assignments, JobId::new(0))
            .expect("no invalid state");

        assert_eq!(status.num_removed, 0);
        assert_eq!(rooms_of(&assignments, 1), vec![RoomId::new(1)]);
    }

    #[test]
    fn wiped_out_domains_are_reported_not_acted_upon() {
        let mut assignments = SelectionContext::create_for_testing(&[(1, 4), (2, 5)], 1);
        assignments
            .assign(JobId::new(0), RoomId::new(0))
            .expect("valid assignment");

        let status = ForwardChecking
            .propagate(&mut assignments, JobId::new(0))
            .expect("no invalid state");

        assert_eq!(status.wiped_out, vec![JobId::new(1)]);
        assert!(rooms_of(&assignments, 1).is_empty());
        assert!(!assignments.get_job(JobId::new(1)).unwrap().is_assigned());
    }

    #[test]
    fn assigned_jobs_are_left_alone() {
        let mut assignments = SelectionContext::create_for_testing(&[(1, 4), (2, 5)], 2);
        assignments
            .assign(JobId::new(1), RoomId::new(1))
            .expect("valid assignment");
        assignments
            .assign(JobId::new(0), RoomId::new(1))
            .expect("valid assignment");

        let status = ForwardChecking
            .propagate(&mut assignments, JobId::new(0))
            .expect("no invalid state");

        assert_eq!(status.num_removed, 0);
        assert_eq!(rooms_of(&assignments, 1), vec![RoomId::new(1)]);
    }

    #[test]
    fn propagating_an_unassigned_job_is_an_invalid_state() {
        let mut assignments = SelectionContext::create_for_testing(&[(1, 4)], 2);

        assert_eq!(
            ForwardChecking.propagate(&mut assignments, JobId::new(0)),
            Err(InvalidStateError::NotAssigned(JobId::new(0)))
        );
    }
}
