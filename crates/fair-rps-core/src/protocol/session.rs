//! One round against the computer, from move set to reveal.
//!
//! The round is a chain of owned values: a [`GameSession`] commits and becomes
//! a [`PendingRound`], which is resolved exactly once into a [`RoundEnd`].
//! Only the revealed [`RoundResult`] can hand out the secret key or the
//! computer's move.

use super::selection::{parse_selection, SelectionError};
use super::types::{Phase, SessionError, SessionId};
use crate::crypto::{Commitment, CryptoProvider, Secret};
use crate::games::{evaluate, MoveIndex, MoveSet, Outcome};
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::{debug, info, warn};

/// A session with a validated move set, before anything random is drawn.
///
/// Not `Clone`: one session id commits exactly once. Start another session
/// from a cloned `MoveSet` instead.
///
/// ```compile_fail
/// use fair_rps_core::GameSession;
///
/// let session = GameSession::from_names(["Rock", "Paper", "Scissors"]).unwrap();
/// let twin = session.clone();
/// ```
#[derive(Debug)]
pub struct GameSession {
    id: SessionId,
    moves: MoveSet,
    phase: Phase,
}

impl GameSession {
    /// Start a session over an already validated move set
    pub fn new(moves: MoveSet) -> Self {
        let id = SessionId::new();
        debug!(session = %id, moves = moves.len(), "move set validated");
        Self {
            id,
            moves,
            phase: Phase::MoveSetValidated,
        }
    }

    /// Validate raw move names and start a session
    pub fn from_names<I, S>(names: I) -> Result<Self, SessionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Phase::Idle.advance(Phase::MoveSetValidated)?;
        let moves = MoveSet::new(names).inspect_err(|err| {
            warn!(error = %err, "rejected move set");
        })?;
        Ok(Self::new(moves))
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn move_set(&self) -> &MoveSet {
        &self.moves
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Draw the secret, then the computer's move, and publish the commitment.
    ///
    /// On an entropy failure nothing is returned, so no commitment is ever
    /// published for a round that could not be completed.
    pub fn commit<P: CryptoProvider + ?Sized>(
        self,
        provider: &mut P,
    ) -> Result<PendingRound, SessionError> {
        let GameSession { id, moves, phase } = self;

        let secret = Secret::generate(provider).inspect_err(|err| {
            warn!(session = %id, error = %err, "could not generate secret");
        })?;
        let phase = phase.advance(Phase::SecretGenerated)?;

        let opponent = provider
            .random_index(moves.len())
            .map(MoveIndex::from_raw)
            .inspect_err(|err| {
                warn!(session = %id, error = %err, "could not draw computer move");
            })?;
        let commitment = Commitment::compute(&*provider, &secret, moves.name(opponent));
        let phase = phase.advance(Phase::Committed)?;
        info!(session = %id, commitment = %commitment, "commitment published");

        let phase = phase.advance(Phase::AwaitingPlayerMove)?;
        Ok(PendingRound {
            id,
            moves,
            phase,
            secret,
            opponent,
            commitment,
        })
    }
}

/// Round waiting on the player's move.
///
/// Holds the secret and the computer's move but exposes neither.
/// [`PendingRound::resolve`], `play` and `abandon` all consume the round.
pub struct PendingRound {
    id: SessionId,
    moves: MoveSet,
    phase: Phase,
    secret: Secret,
    opponent: MoveIndex,
    commitment: Commitment,
}

impl PendingRound {
    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn move_set(&self) -> &MoveSet {
        &self.moves
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The published commitment
    pub fn commitment(&self) -> Commitment {
        self.commitment
    }

    /// Resume the round with the player's raw selection token
    pub fn resolve(self, input: &str) -> Result<RoundEnd, SessionError> {
        match parse_selection(&self.moves, input) {
            Ok(choice) => self.play(choice).map(RoundEnd::Revealed),
            Err(reason) => self.abandon(reason).map(RoundEnd::Abandoned),
        }
    }

    /// Score the player's move and reveal the secret.
    ///
    /// `choice` must come from this round's move set; an index past its end
    /// is rejected and the round is dropped without a reveal.
    pub fn play(self, choice: MoveIndex) -> Result<RoundResult, SessionError> {
        if choice.get() >= self.moves.len() {
            warn!(session = %self.id, index = choice.get(), "move index outside this round's move set");
            return Err(SessionError::ForeignMove {
                index: choice.get(),
                moves: self.moves.len(),
            });
        }

        let PendingRound {
            id,
            moves,
            phase,
            secret,
            opponent,
            commitment,
        } = self;

        let outcome = evaluate(&moves, choice, opponent);
        let phase = phase.advance(Phase::Evaluated)?;
        debug!(session = %id, outcome = %outcome, "round evaluated");

        phase.advance(Phase::Revealed)?;
        info!(
            session = %id,
            player = moves.name(choice),
            computer = moves.name(opponent),
            outcome = %outcome,
            "secret revealed"
        );

        Ok(RoundResult {
            session_id: id,
            player_move: moves.name(choice).to_string(),
            computer_move: moves.name(opponent).to_string(),
            outcome,
            commitment,
            secret,
        })
    }

    /// End the round without evaluating or revealing
    pub fn abandon(self, reason: SelectionError) -> Result<RoundAbandoned, SessionError> {
        self.phase.advance(Phase::Abandoned)?;
        info!(session = %self.id, reason = %reason, "round abandoned, secret discarded");

        Ok(RoundAbandoned {
            session_id: self.id,
            commitment: self.commitment,
            reason,
        })
    }
}

impl fmt::Debug for PendingRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingRound")
            .field("id", &self.id)
            .field("moves", &self.moves)
            .field("phase", &self.phase)
            .field("commitment", &self.commitment)
            .finish_non_exhaustive()
    }
}

/// How a pending round ended
#[derive(Debug)]
pub enum RoundEnd {
    Revealed(RoundResult),
    Abandoned(RoundAbandoned),
}

/// Completed round with the proof disclosed
#[derive(Clone, Debug, Serialize)]
pub struct RoundResult {
    session_id: SessionId,
    player_move: String,
    computer_move: String,
    outcome: Outcome,
    commitment: Commitment,
    #[serde(rename = "key", serialize_with = "serialize_secret")]
    secret: Secret,
}

impl RoundResult {
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn player_move(&self) -> &str {
        &self.player_move
    }

    pub fn computer_move(&self) -> &str {
        &self.computer_move
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The commitment published before the player chose
    pub fn commitment(&self) -> Commitment {
        self.commitment
    }

    /// The revealed HMAC key
    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    /// Recompute the commitment from the revealed key and computer move
    pub fn verify<P: CryptoProvider + ?Sized>(&self, provider: &P) -> bool {
        self.commitment
            .verify(provider, &self.secret, &self.computer_move)
    }
}

fn serialize_secret<S: Serializer>(secret: &Secret, s: S) -> Result<S::Ok, S::Error> {
    secret.to_hex().serialize(s)
}

/// Round ended by exit or malformed input; the secret was dropped unrevealed
#[derive(Clone, Debug, Serialize)]
pub struct RoundAbandoned {
    session_id: SessionId,
    commitment: Commitment,
    reason: SelectionError,
}

impl RoundAbandoned {
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn commitment(&self) -> Commitment {
        self.commitment
    }

    pub fn reason(&self) -> &SelectionError {
        &self.reason
    }

    /// Did the player ask to exit, as opposed to typing something invalid?
    pub fn is_exit(&self) -> bool {
        self.reason == SelectionError::Exit
    }
}
