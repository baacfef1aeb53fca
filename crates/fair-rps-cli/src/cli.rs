//! Command-line interface for fair-rps.

use clap::{Parser, Subcommand};

/// Shown after a rejected move list
pub const USAGE_EXAMPLE: &str = "Example: fair-rps play Rock Paper Scissors";

/// Fair RPS - rock-paper-scissors for any odd number of moves, with a
/// verifiable computer move
#[derive(Parser, Debug)]
#[command(name = "fair-rps")]
#[command(about = "Generalized rock-paper-scissors with an HMAC-committed computer move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one round against the computer
    Play {
        /// Move names in cycle order; each move beats the (N-1)/2 moves before it
        #[arg(value_name = "MOVE")]
        moves: Vec<String>,

        /// Print the commitment and the round result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the win/lose/draw table for a move list
    Table {
        /// Move names in cycle order
        #[arg(value_name = "MOVE")]
        moves: Vec<String>,
    },

    /// Check a revealed key and computer move against a published HMAC
    Verify {
        /// HMAC published before the round (64 hex characters)
        #[arg(long)]
        hmac: String,

        /// Key revealed after the round (64 hex characters)
        #[arg(long)]
        key: String,

        /// Computer move revealed after the round
        #[arg(long = "move", value_name = "MOVE")]
        move_name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_play() {
        let cli = Cli::parse_from(["fair-rps", "play", "--json", "Rock", "Paper", "Scissors"]);
        match cli.command {
            Command::Play { moves, json } => {
                assert_eq!(moves, ["Rock", "Paper", "Scissors"]);
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_verify() {
        let cli = Cli::parse_from([
            "fair-rps", "verify", "--hmac", "aa", "--key", "bb", "--move", "Rock",
        ]);
        match cli.command {
            Command::Verify { hmac, key, move_name } => {
                assert_eq!(hmac, "aa");
                assert_eq!(key, "bb");
                assert_eq!(move_name, "Rock");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
