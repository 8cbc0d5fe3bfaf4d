//! Provides the [`VariableSelector`] trait which decides which unassigned job is decided next.
mod minimum_remaining_values;

pub use minimum_remaining_values::MinimumRemainingValues;

use crate::branching::SelectionContext;
use crate::engine::variables::JobId;

/// A trait containing the interface for [`VariableSelector`]s, which determine the job that the
/// solver decides on next.
pub trait VariableSelector {
    /// Determines which unassigned job to branch on next; returns [`None`] if every job is
    /// assigned.
    ///
    /// The selected job may have an empty domain, in which case the solver has reached a
    /// dead-end.
    fn select_variable(&mut self, context: &SelectionContext<'_>) -> Option<JobId>;
}
