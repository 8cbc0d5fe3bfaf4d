use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers once a number of assignment attempts has been made.
///
/// This is what bounds the search on unsatisfiable instances.
#[derive(Debug, Copy, Clone)]
pub struct AttemptBudget {
    budget: u64,
    num_attempts: u64,
}

impl AttemptBudget {
    pub fn new(budget: u64) -> Self {
        Self {
            budget,
            num_attempts: 0,
        }
    }

    /// The budget used when the caller does not provide one: `2^(num_jobs + num_rooms)`,
    /// saturating at [`u64::MAX`].
    pub fn default_for(num_jobs: usize, num_rooms: u32) -> Self {
        let exponent = u32::try_from(num_jobs)
            .ok()
            .and_then(|num_jobs| num_jobs.checked_add(num_rooms));

        let budget = exponent
            .and_then(|exponent| 1_u64.checked_shl(exponent))
            .unwrap_or(u64::MAX);

        Self::new(budget)
    }

    pub fn budget(&self) -> u64 {
        self.budget
    }

    pub fn num_attempts(&self) -> u64 {
        self.num_attempts
    }
}

impl TerminationCondition for AttemptBudget {
    fn should_stop(&mut self) -> bool {
        self.num_attempts >= self.budget
    }

    fn decision_has_been_made(&mut self) {
        self.num_attempts += 1;
    }
}
