//! Generalized rock-paper-scissors rule for any odd number of moves.

use super::moveset::{MoveIndex, MoveSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Round outcome, always from the challenger's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        }
    }

    /// Outcome seen from the other side of the same pairing
    pub fn inverse(&self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Score `challenger` against `opponent`.
///
/// With `d = (opponent - challenger) mod N` and `half = N / 2`: equal indices
/// draw, `1 <= d <= half` loses (the opponent is one of the moves that follow
/// the challenger), and `half < d < N` wins.
pub fn evaluate(move_set: &MoveSet, challenger: MoveIndex, opponent: MoveIndex) -> Outcome {
    if challenger == opponent {
        Outcome::Draw
    } else if move_set.beats(challenger, opponent) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

/// Same as [`evaluate`] but by move name; `None` if either name is unknown
pub fn evaluate_by_name(move_set: &MoveSet, challenger: &str, opponent: &str) -> Option<Outcome> {
    let challenger = move_set.index_of(challenger)?;
    let opponent = move_set.index_of(opponent)?;
    Some(evaluate(move_set, challenger, opponent))
}
