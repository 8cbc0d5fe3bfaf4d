use super::Direction;
use super::TieBreaker;

/// A tie-breaker which simply selects the first candidate that it receives with the "best" value
/// according to the provided [`Direction`].
///
/// For example, if the provided direction is [`Direction::Minimum`] and there are two jobs `j1`
/// with value 5 and `j2` with value 5, if the tie-breaker first receives `j2` and then `j1` then it
/// will return `j2` because it was the first candidate with the minimum value (of 5 in this
/// example) which was provided. Feeding candidates in identity order therefore breaks the
/// remaining ties by smallest identity.
#[derive(Debug)]
pub struct InOrderTieBreaker<Var, Value> {
    /// The selected candidate, could be [None] if no candidate has been considered yet
    selected_variable: Option<Var>,
    /// The selected value, could be [None] if no candidate has been considered yet
    selected_value: Option<Value>,
    /// Whether the tie-breaker should find the candidate with the maximum or minimum value
    direction: Direction,
}

impl<Var, Value> InOrderTieBreaker<Var, Value> {
    pub fn new(direction: Direction) -> Self {
        Self {
            selected_variable: None,
            selected_value: None,
            direction,
        }
    }

    fn reset(&mut self) {
        self.selected_variable = None;
        self.selected_value = None;
    }
}

impl<Var: Copy, Value: PartialOrd> TieBreaker<Var, Value> for InOrderTieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value) {
        if let Some(selected_value) = self.selected_value.as_ref() {
            let is_better = match self.direction {
                Direction::Maximum => value > *selected_value,
                Direction::Minimum => value < *selected_value,
            };

            if is_better {
                self.selected_variable = Some(variable);
                self.selected_value = Some(value);
            }
        } else {
            self.selected_variable = Some(variable);
            self.selected_value = Some(value);
        }
    }

    fn select(&mut self) -> Option<Var> {
        let selected = self.selected_variable;
        self.reset();
        selected
    }
}
