//! Round protocol: session state machine and player selection.

mod selection;
mod session;
mod types;

pub use selection::{parse_selection, SelectionError, EXIT_SENTINEL};
pub use session::{GameSession, PendingRound, RoundAbandoned, RoundEnd, RoundResult};
pub use types::{Phase, SessionError, SessionId};
