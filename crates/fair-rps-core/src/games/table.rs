//! Precomputed outcome grid for help screens.

use super::Outcome;

/// Outcome of every ordered pair of moves.
///
/// `get(row, column)` is the result of resolving the row move against the
/// column move, so `Outcome::FirstWins` means the row move wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeTable {
    labels: Vec<String>,
    cells: Vec<Vec<Outcome>>,
}

impl OutcomeTable {
    pub(crate) fn new(labels: Vec<String>, cells: Vec<Vec<Outcome>>) -> Self {
        Self { labels, cells }
    }

    /// Move labels, used for both rows and columns
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of rows (and columns)
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<Outcome> {
        self.cells.get(row)?.get(column).copied()
    }

    /// Rows as `(row label, outcomes by column)`
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Outcome])> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.cells.iter().map(Vec::as_slice))
    }
}

#[cfg(test)]
mod tests {
    use crate::games::{Outcome, WinnerResolver};

    #[test]
    fn test_classic_table() {
        let game = WinnerResolver::new(["rock", "paper", "scissors"]).unwrap();
        let table = game.build_outcome_table();

        assert_eq!(table.len(), 3);
        assert_eq!(table.labels(), ["rock", "paper", "scissors"]);

        // rock row
        assert_eq!(table.get(0, 0), Some(Outcome::Draw));
        assert_eq!(table.get(0, 1), Some(Outcome::SecondWins));
        assert_eq!(table.get(0, 2), Some(Outcome::FirstWins));
        // paper row
        assert_eq!(table.get(1, 0), Some(Outcome::FirstWins));
        // out of range
        assert_eq!(table.get(3, 0), None);
        assert_eq!(table.get(0, 3), None);
    }

    #[test]
    fn test_table_matches_resolve() {
        let game = WinnerResolver::new(["a", "b", "c", "d", "e", "f", "g"]).unwrap();
        let table = game.build_outcome_table();
        let labels = game.moves().labels();

        for (row, (row_label, outcomes)) in table.rows().enumerate() {
            assert_eq!(row_label, labels[row]);
            for (column, outcome) in outcomes.iter().enumerate() {
                assert_eq!(*outcome, game.resolve(row_label, &labels[column]).unwrap());
            }
        }
    }

    #[test]
    fn test_table_diagonal_is_draw() {
        let game = WinnerResolver::new(["a", "b", "c", "d", "e"]).unwrap();
        let table = game.build_outcome_table();

        for i in 0..table.len() {
            assert_eq!(table.get(i, i), Some(Outcome::Draw));
        }
    }
}
