use super::TerminationCondition;

/// A [`TerminationCondition`] which never triggers; the attempt budget of the solver is then the
/// only bound on the search.
#[derive(Clone, Copy, Debug)]
pub struct Indefinite;

impl TerminationCondition for Indefinite {
    fn should_stop(&mut self) -> bool {
        false
    }
}
