//! Fair RPS Core Library
//!
//! This crate provides the rule evaluator for cyclic rock-paper-scissors
//! games of any odd size, the HMAC commit-reveal primitives, and the round
//! state machine that ties them together.

pub mod crypto;
pub mod games;
pub mod protocol;

pub use crypto::{Commitment, CryptoProvider, EntropyError, ScriptedCrypto, Secret, SystemCrypto};
pub use games::{evaluate, MoveIndex, MoveSet, MoveSetError, Outcome, OutcomeTable};
pub use protocol::{
    GameSession, PendingRound, Phase, RoundAbandoned, RoundEnd, RoundResult, SelectionError,
    SessionError, SessionId,
};
