//! Interactive round: publish, prompt, reveal.

use crate::render::{self, HELP_TOKEN};
use anyhow::{Context, Result};
use fair_rps_core::protocol::EXIT_SENTINEL;
use fair_rps_core::{CryptoProvider, GameSession, MoveSet, OutcomeTable, RoundEnd};
use serde_json::json;
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

/// Where prompts and results go.
///
/// In JSON mode `out` carries only the two JSON documents (commitment, then
/// result) and everything meant for a human goes to `err`.
#[derive(Debug)]
pub struct Console<O, E> {
    out: O,
    err: E,
    json: bool,
}

impl<O: Write, E: Write> Console<O, E> {
    pub fn new(out: O, err: E, json: bool) -> Self {
        Self { out, err, json }
    }

    /// Text for the person at the terminal: legend, prompts, help table
    fn human(&mut self, text: &str) -> io::Result<()> {
        let sink: &mut dyn Write = if self.json { &mut self.err } else { &mut self.out };
        sink.write_all(text.as_bytes())?;
        sink.flush()
    }

    /// One line of the round record
    fn record(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}", line)?;
        self.out.flush()
    }
}

/// Play one round, reading the player's selection from `input`
pub async fn play_round<P, R, O, E>(
    moves: MoveSet,
    provider: &mut P,
    console: &mut Console<O, E>,
    input: R,
) -> Result<()>
where
    P: CryptoProvider + ?Sized,
    R: AsyncBufRead + Unpin,
    O: Write,
    E: Write,
{
    let round = GameSession::new(moves)
        .commit(provider)
        .context("could not start a round")?;

    if console.json {
        let published = json!({ "session_id": round.id(), "hmac": round.commitment() });
        console.record(&published.to_string())?;
    } else {
        console.record(&format!("HMAC: {}", round.commitment()))?;
    }

    console.human(&render::legend(round.move_set()))?;
    let table = OutcomeTable::build(round.move_set());

    let mut lines = input.lines();
    let selection = loop {
        console.human("Enter your move: ")?;
        match lines.next_line().await.context("failed to read player move")? {
            Some(line) if line.trim() == HELP_TOKEN => {
                console.human(&format!("{}\n", render::table(&table)))?;
            }
            Some(line) => break line,
            None => {
                debug!("stdin closed before a move was entered");
                break EXIT_SENTINEL.to_string();
            }
        }
    };

    match round.resolve(&selection)? {
        RoundEnd::Revealed(result) => {
            if console.json {
                console.record(&serde_json::to_string(&result)?)?;
            } else {
                console.record(&render::result(&result))?;
            }
        }
        RoundEnd::Abandoned(abandoned) => {
            if console.json {
                console.record(&serde_json::to_string(&abandoned)?)?;
            } else {
                console.record(&render::abandoned(&abandoned))?;
            }
        }
    }

    Ok(())
}
