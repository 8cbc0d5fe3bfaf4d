use log::trace;

use crate::basic_types::InvalidStateError;
use crate::basic_types::JobInterval;
use crate::basic_types::Trail;
use crate::containers::KeyedVec;
use crate::engine::job::Job;
use crate::engine::variables::JobId;
use crate::engine::variables::RoomId;
use crate::scheduler_assert_moderate;
use crate::scheduler_assert_simple;

/// An event recorded on the trail, undone in reverse order when the search unwinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrailEntry {
    /// `job` was assigned `room`; this is always the first entry of a decision level.
    Decision { job: JobId, room: RoomId },
    /// `room` was removed from the domain of `job`.
    Removal { job: JobId, room: RoomId },
}

/// The decisions which were undone by [`Assignments::backtrack`].
#[derive(Debug, Clone, Default)]
pub(crate) struct Unwound {
    /// The undone decisions, most recent first; the last one is the decision directly above the
    /// level which was backtracked to.
    pub(crate) decisions: Vec<(JobId, RoomId)>,
    /// The number of domain values which were put back.
    pub(crate) num_restored_values: usize,
}

/// The state of a single solve: every job with its domain and room, and the trail of changes
/// which allows unwinding them.
///
/// Jobs are stored by [`JobId`] and mutated in place. Each decision opens a new decision level;
/// every domain removal is recorded on the level which is current when it happens, so that the
/// only way for a removed value to come back is through [`Assignments::backtrack`].
#[derive(Debug, Clone)]
pub(crate) struct Assignments {
    jobs: KeyedVec<JobId, Job>,
    num_assigned: usize,
    trail: Trail<TrailEntry>,
}

impl Assignments {
    pub(crate) fn new(intervals: &[JobInterval], num_rooms: u32) -> Assignments {
        Assignments {
            jobs: intervals
                .iter()
                .map(|&interval| Job::new(interval, num_rooms))
                .collect(),
            num_assigned: 0,
            trail: Trail::default(),
        }
    }

    pub(crate) fn num_jobs(&self) -> usize {
        self.jobs.len()
    }

    pub(crate) fn num_assigned(&self) -> usize {
        self.num_assigned
    }

    pub(crate) fn all_assigned(&self) -> bool {
        self.num_assigned == self.jobs.len()
    }

    pub(crate) fn get_job(&self, job: JobId) -> Result<&Job, InvalidStateError> {
        self.jobs.get(job).ok_or(InvalidStateError::UnknownJob(job))
    }

    pub(crate) fn jobs(&self) -> impl Iterator<Item = (JobId, &Job)> {
        self.jobs.iter_with_keys()
    }

    /// The identities of all jobs, in input order.
    ///
    /// The identities are collected before returning so that callers can mutate the store while
    /// walking over them.
    pub(crate) fn job_ids(&self) -> Vec<JobId> {
        self.jobs.keys().collect()
    }

    pub(crate) fn unassigned_jobs(&self) -> impl Iterator<Item = (JobId, &Job)> {
        self.jobs().filter(|(_, job)| !job.is_assigned())
    }

    pub(crate) fn get_decision_level(&self) -> usize {
        self.trail.get_decision_level()
    }

    /// Assigns `room` to `job` on a new decision level and collapses the domain of `job` to
    /// `{room}`.
    pub(crate) fn assign(&mut self, job: JobId, room: RoomId) -> Result<(), InvalidStateError> {
        let entry = self
            .jobs
            .get_mut(job)
            .ok_or(InvalidStateError::UnknownJob(job))?;

        if entry.is_assigned() {
            return Err(InvalidStateError::AlreadyAssigned(job));
        }
        if !entry.domain.contains(room) {
            return Err(InvalidStateError::RoomNotInDomain { job, room });
        }

        let other_rooms = entry
            .domain
            .iter()
            .filter(|&other| other != room)
            .collect::<Vec<_>>();

        entry.room = Some(room);
        self.num_assigned += 1;

        self.trail.increase_decision_level();
        self.trail.push(TrailEntry::Decision { job, room });

        for other in other_rooms {
            let _ = self.remove_room(job, other);
        }

        Ok(())
    }

    /// Removes `room` from the domain of `job`, recording the removal on the current decision
    /// level. Removing a room which is not in the domain does nothing.
    ///
    /// Returns whether the domain changed.
    pub(crate) fn remove_room(&mut self, job: JobId, room: RoomId) -> bool {
        let removed = self
            .jobs
            .get_mut(job)
            .is_some_and(|entry| entry.domain.remove(room));

        if removed {
            trace!("Removed room {room} from the domain of {job}");
            self.trail.push(TrailEntry::Removal { job, room });
        }

        removed
    }

    /// The decision which opened `decision_level`, if that level exists and is not the root.
    pub(crate) fn decision_at_level(&self, decision_level: usize) -> Option<(JobId, RoomId)> {
        if decision_level == 0 || decision_level > self.get_decision_level() {
            return None;
        }

        match self.trail.values_on_decision_level(decision_level).first() {
            Some(&TrailEntry::Decision { job, room }) => Some((job, room)),
            _ => None,
        }
    }

    /// The highest decision level (above the root) on which a room was removed from the domain
    /// of `job`.
    pub(crate) fn last_level_pruning(&self, job: JobId) -> Option<usize> {
        (1..=self.get_decision_level()).rev().find(|&decision_level| {
            self.trail
                .values_on_decision_level(decision_level)
                .iter()
                .any(|entry| matches!(entry, TrailEntry::Removal { job: pruned, .. } if *pruned == job))
        })
    }

    /// Undoes every decision and removal above `decision_level`.
    pub(crate) fn backtrack(&mut self, decision_level: usize) -> Unwound {
        scheduler_assert_simple!(decision_level < self.get_decision_level());

        let mut unwound = Unwound::default();

        for entry in self.trail.synchronise(decision_level) {
            match entry {
                TrailEntry::Removal { job, room } => {
                    let restored = self.jobs[job].domain.insert(room);
                    scheduler_assert_moderate!(restored, "a removal was recorded twice");
                    unwound.num_restored_values += 1;
                }
                TrailEntry::Decision { job, room } => {
                    let assigned = self.jobs[job].room.take();
                    scheduler_assert_simple!(assigned == Some(room));
                    self.num_assigned -= 1;
                    unwound.decisions.push((job, room));
                }
            }
        }

        unwound
    }

    /// Checks that no two overlapping jobs hold the same room.
    pub(crate) fn assigned_rooms_are_disjoint(&self) -> bool {
        let assigned = self
            .jobs()
            .filter(|(_, job)| job.is_assigned())
            .collect::<Vec<_>>();

        assigned.iter().enumerate().all(|(index, (_, job))| {
            assigned[index + 1..]
                .iter()
                .all(|(_, other)| !job.overlaps(other) || job.room() != other.room())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignments(jobs: &[(i64, i64)], num_rooms: u32) -> Assignments {
        let intervals = jobs
            .iter()
            .map(|&job| JobInterval::try_from(job).expect("valid interval"))
            .collect::<Vec<_>>();
        Assignments::new(&intervals, num_rooms)
    }

    fn domain_of(assignments: &Assignments, job: u32) -> Vec<u32> {
        assignments
            .get_job(JobId::new(job))
            .expect("existing job")
            .domain()
            .iter()
            .map(|room| room.id)
            .collect()
    }

    #[test]
    fn jobs_start_with_the_full_domain() {
        let assignments = assignments(&[(1, 3), (2, 4)], 3);

        assert_eq!(domain_of(&assignments, 0), vec![0, 1, 2]);
        assert_eq!(domain_of(&assignments, 1), vec![0, 1, 2]);
        assert!(!assignments.all_assigned());
    }

    #[test]
    fn assigning_collapses_the_domain() {
        let mut assignments = assignments(&[(1, 3)], 3);

        assignments
            .assign(JobId::new(0), RoomId::new(1))
            .expect("valid assignment");

        assert_eq!(domain_of(&assignments, 0), vec![1]);
        assert_eq!(
            assignments.get_job(JobId::new(0)).unwrap().room(),
            Some(RoomId::new(1))
        );
        assert!(assignments.all_assigned());
        assert_eq!(assignments.get_decision_level(), 1);
    }

    #[test]
    fn assigning_twice_is_an_invalid_state() {
        let mut assignments = assignments(&[(1, 3)], 2);
        assignments
            .assign(JobId::new(0), RoomId::new(0))
            .expect("valid assignment");

        assert_eq!(
            assignments.assign(JobId::new(0), RoomId::new(0)),
            Err(InvalidStateError::AlreadyAssigned(JobId::new(0)))
        );
    }

    #[test]
    fn assigning_an_unknown_job_is_an_invalid_state() {
        let mut assignments = assignments(&[(1, 3)], 2);

        assert_eq!(
            assignments.assign(JobId::new(4), RoomId::new(0)),
            Err(InvalidStateError::UnknownJob(JobId::new(4)))
        );
    }

    #[test]
    fn assigning_a_pruned_room_is_an_invalid_state() {
        let mut assignments = assignments(&[(1, 3)], 2);
        let _ = assignments.remove_room(JobId::new(0), RoomId::new(1));

        assert_eq!(
            assignments.assign(JobId::new(0), RoomId::new(1)),
            Err(InvalidStateError::RoomNotInDomain {
                job: JobId::new(0),
                room: RoomId::new(1)
            })
        );
    }

    #[test]
    fn backtracking_restores_domains_and_unassigns() {
        let mut assignments = assignments(&[(1, 3), (2, 4)], 2);

        assignments
            .assign(JobId::new(0), RoomId::new(0))
            .expect("valid assignment");
        assert!(assignments.remove_room(JobId::new(1), RoomId::new(0)));

        let unwound = assignments.backtrack(0);

        assert_eq!(unwound.decisions, vec![(JobId::new(0), RoomId::new(0))]);
        assert_eq!(unwound.num_restored_values, 2);
        assert_eq!(domain_of(&assignments, 0), vec![0, 1]);
        assert_eq!(domain_of(&assignments, 1), vec![0, 1]);
        assert_eq!(assignments.num_assigned(), 0);
    }

    #[test]
    fn root_level_removals_survive_backtracking() {
        let mut assignments = assignments(&[(1, 3), (2, 4)], 2);
        assert!(assignments.remove_room(JobId::new(1), RoomId::new(1)));

        assignments
            .assign(JobId::new(0), RoomId::new(0))
            .expect("valid assignment");
        let _ = assignments.backtrack(0);

        assert_eq!(domain_of(&assignments, 1), vec![0]);
    }

    #[test]
    fn last_level_pruning_finds_the_most_recent_pruning_level() {
        let mut assignments = assignments(&[(1, 4), (2, 5), (3, 6)], 3);

        assignments
            .assign(JobId::new(0), RoomId::new(0))
            .expect("valid assignment");
        let _ = assignments.remove_room(JobId::new(2), RoomId::new(0));
        assert_eq!(assignments.last_level_pruning(JobId::new(2)), Some(1));

        assignments
            .assign(JobId::new(1), RoomId::new(1))
            .expect("valid assignment");
        let _ = assignments.remove_room(JobId::new(2), RoomId::new(1));

        assert_eq!(assignments.last_level_pruning(JobId::new(2)), Some(2));
        assert_eq!(
            assignments.decision_at_level(2),
            Some((JobId::new(1), RoomId::new(1)))
        );
        assert_eq!(assignments.decision_at_level(0), None);
        assert_eq!(assignments.decision_at_level(3), None);
    }

    #[test]
    fn disjointness_check_detects_shared_rooms() {
        let mut assignments = assignments(&[(1, 3), (2, 4), (3, 5)], 2);
        assignments
            .assign(JobId::new(0), RoomId::new(0))
            .expect("valid assignment");
        assignments
            .assign(JobId::new(2), RoomId::new(0))
            .expect("valid assignment");
        assert!(assignments.assigned_rooms_are_disjoint());

        assignments
            .assign(JobId::new(1), RoomId::new(0))
            .expect("valid assignment");
        assert!(!assignments.assigned_rooms_are_disjoint());
    }
}
