//! Full win/lose/draw matrix for a move set.

use super::moveset::{MoveIndex, MoveSet};
use super::rules::{evaluate, Outcome};
use serde::Serialize;

/// N×N outcomes, row = challenger, column = opponent.
///
/// Every cell comes from [`evaluate`], so the table can never disagree with
/// the rule used to score a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutcomeTable {
    moves: MoveSet,
    cells: Vec<Vec<Outcome>>,
}

impl OutcomeTable {
    pub fn build(move_set: &MoveSet) -> Self {
        let cells = move_set
            .indices()
            .map(|row| {
                move_set
                    .indices()
                    .map(|col| evaluate(move_set, row, col))
                    .collect()
            })
            .collect();

        Self {
            moves: move_set.clone(),
            cells,
        }
    }

    pub fn move_set(&self) -> &MoveSet {
        &self.moves
    }

    /// Number of rows (and columns)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, challenger: MoveIndex, opponent: MoveIndex) -> Outcome {
        self.cells[challenger.get()][opponent.get()]
    }

    /// Rows paired with the challenger's name
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Outcome])> {
        self.moves
            .names()
            .iter()
            .map(String::as_str)
            .zip(self.cells.iter().map(Vec::as_slice))
    }
}
