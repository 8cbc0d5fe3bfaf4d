//! Contains the heuristics which decide the order of the search: which job to decide next
//! ([`variable_selection`]) and which room to give it ([`value_selection`]).
//!
//! Both kinds of heuristics only get read access to the state of the search through a
//! [`SelectionContext`]; the solver applies the decision they return.
mod selection_context;
pub mod tie_breaking;
pub mod value_selection;
pub mod variable_selection;

pub use selection_context::SelectionContext;
