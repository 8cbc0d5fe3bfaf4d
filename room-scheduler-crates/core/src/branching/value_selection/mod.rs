//! Provides the [`ValueSelector`] trait which decides which room a selected job receives.
mod least_constraining_value;

pub use least_constraining_value::LeastConstrainingValue;

use crate::basic_types::InvalidStateError;
use crate::branching::SelectionContext;
use crate::engine::variables::JobId;
use crate::engine::variables::RoomId;

/// A trait containing the interface for [`ValueSelector`]s, which determine the room that the
/// solver assigns to the job chosen by the
/// [`VariableSelector`](crate::branching::variable_selection::VariableSelector).
pub trait ValueSelector {
    /// Determines which room in the domain of `decision_variable` to assign next.
    ///
    /// The solver only calls this for an unassigned job with a non-empty domain; any other call
    /// is reported as an [`InvalidStateError`].
    fn select_value(
        &mut self,
        context: &SelectionContext<'_>,
        decision_variable: JobId,
    ) -> Result<RoomId, InvalidStateError>;
}
