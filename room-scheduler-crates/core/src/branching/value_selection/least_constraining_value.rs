use super::ValueSelector;
use crate::basic_types::InvalidStateError;
use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::SelectionContext;
use crate::engine::variables::JobId;
use crate::engine::variables::RoomId;

/// [`ValueSelector`] which chooses the room that rules out the fewest options for the other jobs.
///
/// For every room in the domain of the selected job it counts the other unassigned jobs which
/// still have that room in their domain (its dependency count), and picks the room with the
/// lowest count. Ties are broken by the smallest room.
#[derive(Debug)]
pub struct LeastConstrainingValue {
    tie_breaker: InOrderTieBreaker<RoomId, usize>,
}

impl Default for LeastConstrainingValue {
    fn default() -> Self {
        LeastConstrainingValue {
            tie_breaker: InOrderTieBreaker::new(Direction::Minimum),
        }
    }
}

impl LeastConstrainingValue {
    fn dependency_count(
        context: &SelectionContext<'_>,
        decision_variable: JobId,
        room: RoomId,
    ) -> usize {
        context
            .unassigned_jobs()
            .filter(|(other, job)| *other != decision_variable && job.domain().contains(room))
            .count()
    }
}

impl ValueSelector for LeastConstrainingValue {
    fn select_value(
        &mut self,
        context: &SelectionContext<'_>,
        decision_variable: JobId,
    ) -> Result<RoomId, InvalidStateError> {
        let job = context.get_job(decision_variable)?;
        if job.is_assigned() {
            return Err(InvalidStateError::AlreadyAssigned(decision_variable));
        }

        // The domain is iterated in ascending order, so the in-order tie-breaker keeps the
        // smallest room among equal counts.
        for room in job.domain().iter() {
            self.tie_breaker.consider(
                room,
                Self::dependency_count(context, decision_variable, room),
            );
        }

        self.tie_breaker
            .select()
            .ok_or(InvalidStateError::EmptyDomain(decision_variable))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_shared_room_is_selected() {
        let mut assignments =
            SelectionContext::create_for_testing(&[(0, 4), (1, 3), (2, 5)], 3);
        let _ = assignments.remove_room(JobId::new(1), RoomId::new(1));
        let _ = assignments.remove_room(JobId::new(2), RoomId::new(1));
        let _ = assignments.remove_room(JobId::new(2), RoomId::new(0));

        let mut selector = LeastConstrainingValue::default();
        let selected =
            selector.select_value(&SelectionContext::new(&assignments), JobId::new(0));

        assert_eq!(selected, Ok(RoomId::new(1)));
    }

    #[test]
    fn smallest_room_breaks_ties() {
        let assignments = SelectionContext::create_for_testing(&[(0, 4), (1, 3)], 3);

        let mut selector = LeastConstrainingValue::default();
        let selected =
            selector.select_value(&SelectionContext::new(&assignments), JobId::new(0));

        assert_eq!(selected, Ok(RoomId::new(0)));
    }

    #[test]
    fn assigned_jobs_do_not_count_as_dependencies() {
        let mut assignments =
            SelectionContext::create_for_testing(&[(0, 4), (1, 3), (2, 5)], 2);
        assignments
            .assign(JobId::new(2), RoomId::new(0))
            .expect("valid assignment");
        let _ = assignments.remove_room(JobId::new(1), RoomId::new(1));

        // Room 0 is only wanted by job 1; room 1 by nobody.
        let mut selector = LeastConstrainingValue::default();
        let selected =
            selector.select_value(&SelectionContext::new(&assignments), JobId::new(0));

        assert_eq!(selected, Ok(RoomId::new(1)));
    }

    #[test]
    fn selecting_for_an_assigned_job_is_an_invalid_state() {
        let mut assignments = SelectionContext::create_for_testing(&[(0, 4)], 2);
        assignments
            .assign(JobId::new(0), RoomId::new(0))
            .expect("valid assignment");

        let mut selector = LeastConstrainingValue::default();
        assert_eq!(
            selector.select_value(&SelectionContext::new(&assignments), JobId::new(0)),
            Err(InvalidStateError::AlreadyAssigned(JobId::new(0)))
        );
    }

    #[test]
    fn selecting_for_an_unknown_job_is_an_invalid_state() {
        let assignments = SelectionContext::create_for_testing(&[(0, 4)], 2);

        let mut selector = LeastConstrainingValue::default();
        assert_eq!(
            selector.select_value(&SelectionContext::new(&assignments), JobId::new(7)),
            Err(InvalidStateError::UnknownJob(JobId::new(7)))
        );
    }

    #[test]
    fn empty_domain_is_an_invalid_state() {
        let mut assignments = SelectionContext::create_for_testing(&[(0, 4)], 1);
        let _ = assignments.remove_room(JobId::new(0), RoomId::new(0));

        let mut selector = LeastConstrainingValue::default();
        assert_eq!(
            selector.select_value(&SelectionContext::new(&assignments), JobId::new(0)),
            Err(InvalidStateError::EmptyDomain(JobId::new(0)))
        );
    }
}
