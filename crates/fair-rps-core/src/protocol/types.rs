//! Protocol types.

use crate::crypto::EntropyError;
use crate::games::MoveSetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Unique session identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a new random session ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a session is in its single round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    MoveSetValidated,
    SecretGenerated,
    Committed,
    AwaitingPlayerMove,
    Evaluated,
    Revealed,
    Abandoned,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "Idle",
            Phase::MoveSetValidated => "MoveSetValidated",
            Phase::SecretGenerated => "SecretGenerated",
            Phase::Committed => "Committed",
            Phase::AwaitingPlayerMove => "AwaitingPlayerMove",
            Phase::Evaluated => "Evaluated",
            Phase::Revealed => "Revealed",
            Phase::Abandoned => "Abandoned",
        }
    }

    /// Is `next` a legal successor of this phase?
    pub fn can_advance_to(&self, next: Phase) -> bool {
        matches!(
            (self, next),
            (Phase::Idle, Phase::MoveSetValidated)
                | (Phase::MoveSetValidated, Phase::SecretGenerated)
                | (Phase::SecretGenerated, Phase::Committed)
                | (Phase::Committed, Phase::AwaitingPlayerMove)
                | (Phase::AwaitingPlayerMove, Phase::Evaluated)
                | (Phase::AwaitingPlayerMove, Phase::Abandoned)
                | (Phase::Evaluated, Phase::Revealed)
        )
    }

    /// Guarded transition
    pub fn advance(self, next: Phase) -> Result<Phase, SessionError> {
        if self.can_advance_to(next) {
            Ok(next)
        } else {
            Err(SessionError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Revealed | Phase::Abandoned)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that stop a session before anything is revealed
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid move set: {0}")]
    InvalidMoveSet(#[from] MoveSetError),

    #[error("entropy unavailable: {0}")]
    EntropyUnavailable(#[from] EntropyError),

    #[error("move index {index} is outside this round's {moves} moves")]
    ForeignMove { index: usize, moves: usize },

    #[error("invalid session transition from {from} to {to}")]
    InvalidTransition { from: Phase, to: Phase },
}
