use log::warn;

use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::variables::JobId;

/// A [`VariableSelector`] which selects the unassigned job with the fewest rooms left in its
/// domain (Minimum Remaining Values).
///
/// Ties are broken by the earliest finish time, and remaining ties by the smallest [`JobId`];
/// the selection is therefore unique and deterministic.
#[derive(Debug)]
pub struct MinimumRemainingValues {
    tie_breaker: InOrderTieBreaker<JobId, MinimumRemainingValuesValue>,
}

/// Compared lexicographically: first the domain size, then the finish time.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub(crate) struct MinimumRemainingValuesValue {
    domain_size: usize,
    finish_time: i64,
}

impl Default for MinimumRemainingValues {
    fn default() -> Self {
        MinimumRemainingValues {
            tie_breaker: InOrderTieBreaker::new(Direction::Minimum),
        }
    }
}

impl VariableSelector for MinimumRemainingValues {
    fn select_variable(&mut self, context: &SelectionContext<'_>) -> Option<JobId> {
        // Unassigned jobs are visited in identity order, the in-order tie-breaker then keeps the
        // smallest identity among the best candidates.
        context.unassigned_jobs().for_each(|(job_id, job)| {
            self.tie_breaker.consider(
                job_id,
                MinimumRemainingValuesValue {
                    domain_size: job.domain().size(),
                    finish_time: job.finish_time(),
                },
            );
        });

        let selected = self.tie_breaker.select();
        if selected.is_none() {
            warn!("Minimum remaining values was asked for a job while every job is assigned");
        }
        selected
    }
}
