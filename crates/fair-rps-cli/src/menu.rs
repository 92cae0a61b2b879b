//! Interactive menu: listing moves and reading the player's choice.

use fair_rps_core::MoveSet;

/// What the player typed at the prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    Help,
    /// 0-based move position
    Play(usize),
    Invalid,
}

/// Parse a prompt answer: `0` exits, `?` shows help, `1..=N` picks a move
pub fn parse_choice(input: &str, move_count: usize) -> MenuChoice {
    let input = input.trim();
    if input == "?" {
        return MenuChoice::Help;
    }

    match input.parse::<usize>() {
        Ok(0) => MenuChoice::Exit,
        Ok(n) if n <= move_count => MenuChoice::Play(n - 1),
        _ => MenuChoice::Invalid,
    }
}

pub fn render_menu(moves: &MoveSet) -> String {
    let entries: String = moves
        .iter()
        .map(|m| format!("{} - {}\n", m.index() + 1, m))
        .collect();
    format!("Available moves:\n{}0 - exit\n? - help\n", entries)
}
