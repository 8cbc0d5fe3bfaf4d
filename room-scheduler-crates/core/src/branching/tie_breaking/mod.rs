//! Tie-breakers decide between candidates which are equally good according to a heuristic.
mod in_order_tie_breaker;

pub use in_order_tie_breaker::InOrderTieBreaker;

/// Whether a [`TieBreaker`] looks for the candidate with the smallest or the largest value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Maximum,
    Minimum,
}

/// A trait for selecting a single candidate out of a stream of `(candidate, value)` pairs.
pub trait TieBreaker<Var, Value> {
    /// Offers a candidate together with the value the heuristic assigned to it.
    fn consider(&mut self, variable: Var, value: Value);

    /// Returns the selected candidate and resets the tie-breaker so that it can be reused.
    fn select(&mut self) -> Option<Var>;
}
