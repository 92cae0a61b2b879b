//! Cyclic winner resolution.

use super::{Move, MoveSet, Outcome, OutcomeTable};
use crate::error::{GameError, Result};

/// Decides pairings for a [`MoveSet`] arranged on a circle.
///
/// Each move loses to the `(N - 1) / 2` moves that follow it clockwise and
/// beats the `(N - 1) / 2` moves that precede it. With
/// `[rock, paper, scissors]` this is the classic game: paper follows rock,
/// scissors follows paper, and rock follows scissors.
#[derive(Clone, Debug)]
pub struct WinnerResolver {
    moves: MoveSet,
}

impl WinnerResolver {
    /// Validate labels and build a resolver over them
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::from_move_set(MoveSet::new(labels)?))
    }

    pub fn from_move_set(moves: MoveSet) -> Self {
        Self { moves }
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Resolve `first` against `second`
    pub fn resolve(&self, first: &str, second: &str) -> Result<Outcome> {
        let first = self.index_of(first)?;
        let second = self.index_of(second)?;
        Ok(self.judge(first, second))
    }

    /// Resolve two moves taken from this resolver's move set
    pub fn resolve_moves(&self, first: &Move, second: &Move) -> Result<Outcome> {
        self.resolve(first.label(), second.label())
    }

    /// Outcome of every ordered pair, from the row move's perspective
    pub fn build_outcome_table(&self) -> OutcomeTable {
        let size = self.moves.len();
        let cells = (0..size)
            .map(|row| (0..size).map(|column| self.judge(row, column)).collect())
            .collect();
        OutcomeTable::new(self.moves.labels().to_vec(), cells)
    }

    /// Resolve two moves already taken from this resolver's own move set
    pub(crate) fn judge_members(&self, first: &Move, second: &Move) -> Outcome {
        self.judge(first.index(), second.index())
    }

    fn index_of(&self, label: &str) -> Result<usize> {
        self.moves
            .position(label)
            .ok_or_else(|| GameError::UnknownMove(label.to_string()))
    }

    fn judge(&self, first: usize, second: usize) -> Outcome {
        if first == second {
            return Outcome::Draw;
        }

        let size = self.moves.len();
        let half = size.div_ceil(2);
        let distance = (second + size - first) % size;

        // `second` sits in the arc right after `first`
        if distance < half {
            Outcome::SecondWins
        } else {
            Outcome::FirstWins
        }
    }
}
