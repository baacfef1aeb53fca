//! Text rendering for the terminal.

use fair_rps_core::{MoveSet, OutcomeTable, RoundAbandoned, RoundResult, SelectionError};

/// Prompt token that prints the outcome table
pub const HELP_TOKEN: &str = "?";

/// Numbered move list with the exit and help entries
pub fn legend(moves: &MoveSet) -> String {
    let mut out = String::from("Available moves:\n");
    for (i, name) in moves.names().iter().enumerate() {
        out.push_str(&format!("{} - {}\n", i + 1, name));
    }
    out.push_str("0 - Exit\n");
    out.push_str(&format!("{} - Help\n", HELP_TOKEN));
    out
}

/// Outcome table with a header row and column of move names.
///
/// Cells read as the result for the row's move played against the column's.
pub fn table(table: &OutcomeTable) -> String {
    let names = table.move_set().names();
    let width = names
        .iter()
        .map(|n| n.chars().count())
        .chain(["Draw".len(), "v User / PC >".len()])
        .max()
        .unwrap_or(0);

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(table.len() + 1);
    let mut header = vec!["v User / PC >".to_string()];
    header.extend(names.iter().cloned());
    rows.push(header);
    for (name, cells) in table.rows() {
        let mut row = vec![name.to_string()];
        row.extend(cells.iter().map(|c| c.to_string()));
        rows.push(row);
    }

    rows.iter()
        .map(|row| {
            row.iter()
                .map(|cell| format!("{:<width$}", cell, width = width))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result lines shown after the reveal
pub fn result(result: &RoundResult) -> String {
    format!(
        "Your move: {}\nComputer move: {}\nResult: {}\nKey: {}",
        result.player_move(),
        result.computer_move(),
        result.outcome(),
        result.secret().to_hex()
    )
}

/// Message for a round that ended without a reveal
pub fn abandoned(abandoned: &RoundAbandoned) -> String {
    match abandoned.reason() {
        SelectionError::Exit => "Exiting without a reveal.".to_string(),
        SelectionError::Malformed { .. } => {
            format!("Invalid move: {}. The round is abandoned.", abandoned.reason())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fair_rps_core::{GameSession, RoundEnd, ScriptedCrypto};

    fn classic() -> MoveSet {
        MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap()
    }

    #[test]
    fn test_legend() {
        assert_eq!(
            legend(&classic()),
            "Available moves:\n1 - Rock\n2 - Paper\n3 - Scissors\n0 - Exit\n? - Help\n"
        );
    }

    #[test]
    fn test_table_layout() {
        let rendered = table(&OutcomeTable::build(&classic()));
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("v User / PC >"));
        assert!(lines[1].starts_with("Rock"));
        let cells: Vec<&str> = lines[1].split(" | ").map(str::trim).collect();
        assert_eq!(cells, ["Rock", "Draw", "Lose", "Win"]);
    }

    #[test]
    fn test_result_lines() {
        let round = GameSession::new(classic())
            .commit(&mut ScriptedCrypto::for_round([0xcd; 32], 2))
            .unwrap();
        let shown = match round.resolve("1").unwrap() {
            RoundEnd::Revealed(r) => result(&r),
            RoundEnd::Abandoned(a) => panic!("unexpected abandon: {:?}", a),
        };

        assert!(shown.contains("Your move: Rock"));
        assert!(shown.contains("Computer move: Scissors"));
        assert!(shown.contains("Result: Win"));
        assert!(shown.contains(&format!("Key: {}", "cd".repeat(32))));
    }

    #[test]
    fn test_abandoned_messages() {
        let round = GameSession::new(classic())
            .commit(&mut ScriptedCrypto::for_round([0; 32], 0))
            .unwrap();
        let shown = match round.resolve("9").unwrap() {
            RoundEnd::Abandoned(a) => abandoned(&a),
            RoundEnd::Revealed(r) => panic!("unexpected reveal: {:?}", r),
        };

        assert!(shown.starts_with("Invalid move"));
    }
}
