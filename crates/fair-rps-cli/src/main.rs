//! Fair RPS
//!
//! Terminal front end: plays one round against the computer, prints the
//! outcome table, or verifies a past round's reveal.

mod cli;
mod play;
mod render;

use anyhow::{anyhow, Result};
use clap::Parser;
use cli::{Cli, Command, USAGE_EXAMPLE};
use fair_rps_core::crypto::verify_reveal;
use fair_rps_core::{MoveSet, OutcomeTable, SystemCrypto};
use play::Console;
use std::process::ExitCode;
use tokio::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn move_set(moves: Vec<String>) -> Result<MoveSet> {
    MoveSet::new(moves).map_err(|err| anyhow!("{}\n{}", err, USAGE_EXAMPLE))
}

async fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Play { moves, json } => {
            let moves = move_set(moves)?;
            info!(moves = moves.len(), "starting round");
            let stdin = BufReader::new(tokio::io::stdin());
            let mut console = Console::new(std::io::stdout(), std::io::stderr(), json);
            play::play_round(moves, &mut SystemCrypto, &mut console, stdin).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Table { moves } => {
            let moves = move_set(moves)?;
            print!("{}", render::legend(&moves));
            println!();
            println!("{}", render::table(&OutcomeTable::build(&moves)));
            Ok(ExitCode::SUCCESS)
        }
        Command::Verify {
            hmac,
            key,
            move_name,
        } => {
            if verify_reveal(&hmac, &key, &move_name)? {
                println!("OK: HMAC matches key and move {:?}", move_name);
                Ok(ExitCode::SUCCESS)
            } else {
                warn!(move_name = %move_name, "reveal does not match commitment");
                println!("MISMATCH: HMAC does not match key and move {:?}", move_name);
                Ok(ExitCode::from(2))
            }
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout is the game
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
