//! Validated, ordered set of move names.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Smallest playable move set
pub const MIN_MOVES: usize = 3;

/// Reasons a candidate move list is rejected
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveSetError {
    #[error("there must be at least {MIN_MOVES} moves, got {0}")]
    TooFew(usize),

    #[error("the number of moves must be odd, got {0}")]
    EvenCount(usize),

    #[error("moves must be unique, {0:?} appears more than once")]
    Duplicate(String),
}

/// Position of a move within its MoveSet.
///
/// Only produced by a MoveSet (or the session drawing from one), so an index
/// is always in range for the set it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MoveIndex(usize);

impl MoveIndex {
    pub(crate) fn from_raw(index: usize) -> Self {
        Self(index)
    }

    /// Zero-based position
    pub fn get(&self) -> usize {
        self.0
    }

    /// One-based position, as shown in the move legend
    pub fn one_based(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for MoveIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered move names arranged on a cycle.
///
/// Odd length, at least three entries, no duplicates (exact,
/// case-sensitive comparison).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct MoveSet {
    names: Vec<String>,
}

impl MoveSet {
    /// Validate and build a move set
    pub fn new<I, S>(names: I) -> Result<Self, MoveSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.len() < MIN_MOVES {
            return Err(MoveSetError::TooFew(names.len()));
        }
        if names.len() % 2 == 0 {
            return Err(MoveSetError::EvenCount(names.len()));
        }
        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(MoveSetError::Duplicate(name.clone()));
            }
        }

        Ok(Self { names })
    }

    /// Number of moves (N)
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a validated set
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Moves each move beats, and loses to: (N - 1) / 2
    pub fn half(&self) -> usize {
        self.names.len() / 2
    }

    /// All names in order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Name at `index`
    pub fn name(&self, index: MoveIndex) -> &str {
        &self.names[index.0]
    }

    /// Index for a zero-based position, if in range
    pub fn index(&self, position: usize) -> Option<MoveIndex> {
        (position < self.names.len()).then_some(MoveIndex(position))
    }

    /// Index of the move called `name`
    pub fn index_of(&self, name: &str) -> Option<MoveIndex> {
        self.names.iter().position(|n| n == name).map(MoveIndex)
    }

    /// Every index in order
    pub fn indices(&self) -> impl Iterator<Item = MoveIndex> {
        (0..self.names.len()).map(MoveIndex)
    }

    /// Check if `challenger` beats `opponent`.
    ///
    /// A move beats the `half` moves that precede it on the cycle and loses
    /// to the `half` moves that follow it.
    pub fn beats(&self, challenger: MoveIndex, opponent: MoveIndex) -> bool {
        let n = self.names.len();
        debug_assert!(challenger.0 < n && opponent.0 < n, "index out of range");
        let forward = (opponent.0 + n - challenger.0) % n;
        forward > self.half()
    }
}

impl TryFrom<Vec<String>> for MoveSet {
    type Error = MoveSetError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}

impl From<MoveSet> for Vec<String> {
    fn from(set: MoveSet) -> Self {
        set.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(MoveSet::new(empty), Err(MoveSetError::TooFew(0)));
    }

    #[test]
    fn test_rejects_single_move() {
        assert_eq!(MoveSet::new(["Rock"]), Err(MoveSetError::TooFew(1)));
    }

    #[test]
    fn test_rejects_two_moves() {
        // Too few is reported before parity
        assert_eq!(MoveSet::new(["Rock", "Paper"]), Err(MoveSetError::TooFew(2)));
    }

    #[test]
    fn test_rejects_even_count() {
        assert_eq!(
            MoveSet::new(["Rock", "Paper", "Scissors", "Lizard"]),
            Err(MoveSetError::EvenCount(4))
        );
    }

    #[test]
    fn test_rejects_duplicates() {
        assert_eq!(
            MoveSet::new(["Rock", "Rock", "Scissors"]),
            Err(MoveSetError::Duplicate("Rock".to_string()))
        );
    }

    #[test]
    fn test_duplicates_are_case_sensitive() {
        assert!(MoveSet::new(["Rock", "rock", "ROCK"]).is_ok());
    }

    #[test]
    fn test_accepts_classic() {
        let set = MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(set.half(), 1);
        assert_eq!(set.names(), ["Rock", "Paper", "Scissors"]);
    }

    #[test]
    fn test_index_lookup() {
        let set = MoveSet::new(["a", "b", "c", "d", "e"]).unwrap();

        assert_eq!(set.index(4).map(|i| set.name(i)), Some("e"));
        assert_eq!(set.index(5), None);
        assert_eq!(set.index_of("c").map(|i| i.get()), Some(2));
        assert_eq!(set.index_of("z"), None);
        assert_eq!(set.indices().count(), 5);
        assert_eq!(set.index(0).unwrap().one_based(), 1);
    }

    #[test]
    fn test_classic_beats() {
        let set = MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap();
        let rock = set.index_of("Rock").unwrap();
        let paper = set.index_of("Paper").unwrap();
        let scissors = set.index_of("Scissors").unwrap();

        assert!(set.beats(rock, scissors));
        assert!(set.beats(scissors, paper));
        assert!(set.beats(paper, rock));
        assert!(!set.beats(rock, paper));
        assert!(!set.beats(rock, rock));
    }

    #[test]
    fn test_deserialize_validates() {
        let set: MoveSet = serde_json::from_str(r#"["Rock","Paper","Scissors"]"#).unwrap();
        assert_eq!(set.len(), 3);

        assert!(serde_json::from_str::<MoveSet>(r#"["Rock","Paper"]"#).is_err());
        assert!(serde_json::from_str::<MoveSet>(r#"["a","a","b"]"#).is_err());
    }
}
