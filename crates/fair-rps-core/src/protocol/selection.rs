//! Parsing the player's move selection.

use crate::games::{MoveIndex, MoveSet};
use serde::Serialize;
use thiserror::Error;

/// Token that abandons the round
pub const EXIT_SENTINEL: &str = "0";

/// Selections that end the round without a reveal
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
pub enum SelectionError {
    #[error("player chose to exit")]
    Exit,

    #[error("malformed player input {input:?}: expected a number from 1 to {max}, or 0 to exit")]
    Malformed { input: String, max: usize },
}

/// Parse a 1-based selection over `move_set`.
///
/// Surrounding whitespace is ignored. `0` is [`SelectionError::Exit`]; any
/// other non-integer or out-of-range token is [`SelectionError::Malformed`].
pub fn parse_selection(move_set: &MoveSet, input: &str) -> Result<MoveIndex, SelectionError> {
    let token = input.trim();
    let malformed = || SelectionError::Malformed {
        input: token.to_string(),
        max: move_set.len(),
    };

    match token.parse::<usize>() {
        Ok(0) => Err(SelectionError::Exit),
        Ok(n) => move_set.index(n - 1).ok_or_else(malformed),
        Err(_) => Err(malformed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> MoveSet {
        MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap()
    }

    #[test]
    fn test_valid_selections() {
        let set = classic();

        assert_eq!(parse_selection(&set, "1").map(|i| i.get()), Ok(0));
        assert_eq!(parse_selection(&set, " 3\n").map(|i| i.get()), Ok(2));
    }

    #[test]
    fn test_exit_sentinel() {
        assert_eq!(parse_selection(&classic(), EXIT_SENTINEL), Err(SelectionError::Exit));
        assert_eq!(parse_selection(&classic(), "0\n"), Err(SelectionError::Exit));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            parse_selection(&classic(), "4"),
            Err(SelectionError::Malformed {
                input: "4".to_string(),
                max: 3
            })
        );
    }

    #[test]
    fn test_non_numeric() {
        for token in ["", "rock", "-1", "1.5", "2abc", "?"] {
            assert!(
                matches!(
                    parse_selection(&classic(), token),
                    Err(SelectionError::Malformed { .. })
                ),
                "{:?} should be malformed",
                token
            );
        }
    }
}
