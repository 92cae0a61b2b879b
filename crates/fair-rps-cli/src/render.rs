//! Text output for the help table and round results.

use fair_rps_core::{Outcome, OutcomeTable, RoundReport};

const CORNER: &str = "v PC\\User >";

/// Result line from the player's side
pub fn result_line(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::FirstWins => "You win!",
        Outcome::SecondWins => "Computer wins!",
        Outcome::Draw => "It's a draw!",
    }
}

pub fn render_report(report: &RoundReport) -> String {
    format!(
        "Your move: {}\nComputer move: {}\n{}\nHMAC key: {}\n",
        report.player_move,
        report.computer_move,
        result_line(report.outcome),
        report.reveal.key()
    )
}

/// ASCII grid with one row per computer move, read from the computer's side
pub fn render_help_table(table: &OutcomeTable) -> String {
    let mut rows: Vec<Vec<&str>> = Vec::with_capacity(table.len() + 1);
    rows.push(
        std::iter::once(CORNER)
            .chain(table.labels().iter().map(String::as_str))
            .collect(),
    );
    for (label, outcomes) in table.rows() {
        rows.push(
            std::iter::once(label)
                .chain(outcomes.iter().map(|o| cell(*o)))
                .collect(),
        );
    }

    let widths: Vec<usize> = (0..rows[0].len())
        .map(|column| {
            rows.iter()
                .map(|row| row[column].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let separator = format!(
        "+{}+\n",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    );

    let mut out = separator.clone();
    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(text, &width)| format!(" {:<width$} ", text, width = width))
            .collect();
        out.push_str(&format!("|{}|\n", cells.join("|")));
        out.push_str(&separator);
    }
    out
}

fn cell(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::FirstWins => "Win",
        Outcome::SecondWins => "Lose",
        Outcome::Draw => "Draw",
    }
}
