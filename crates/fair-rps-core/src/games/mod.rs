//! Move sets and the cyclic win/lose/draw rule.

mod moveset;
mod rules;
mod table;

pub use moveset::{MoveIndex, MoveSet, MoveSetError, MIN_MOVES};
pub use rules::{evaluate, evaluate_by_name, Outcome};
pub use table::OutcomeTable;
