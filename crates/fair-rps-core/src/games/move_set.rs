//! Validated, ordered move labels.

use crate::error::{GameError, Result};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Minimum number of moves in a game
pub const MIN_MOVES: usize = 3;

/// Ordered set of unique move labels.
///
/// The order defines the circle used by [`WinnerResolver`](super::WinnerResolver),
/// so `[rock, paper, scissors]` and `[rock, scissors, paper]` are different
/// games. The count is always odd and at least [`MIN_MOVES`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveSet {
    labels: Vec<String>,
    positions: HashMap<String, usize>,
}

impl MoveSet {
    /// Validate and build a move set from labels in circle order
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();

        if labels.len() < MIN_MOVES {
            return Err(GameError::InvalidMoveSet(format!(
                "at least {} moves required, got {}",
                MIN_MOVES,
                labels.len()
            )));
        }
        if labels.len() % 2 == 0 {
            return Err(GameError::InvalidMoveSet(format!(
                "an odd number of moves is required, got {}",
                labels.len()
            )));
        }

        let mut positions = HashMap::with_capacity(labels.len());
        for (index, label) in labels.iter().enumerate() {
            if positions.insert(label.clone(), index).is_some() {
                return Err(GameError::InvalidMoveSet(format!(
                    "duplicate move '{}'",
                    label
                )));
            }
        }

        Ok(Self { labels, positions })
    }

    /// Number of moves
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false for a validated set
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in circle order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Position of a label on the circle
    pub fn position(&self, label: &str) -> Option<usize> {
        self.positions.get(label).copied()
    }

    /// Look up a move by label
    pub fn get(&self, label: &str) -> Result<Move> {
        self.position(label)
            .map(|index| self.move_at(index))
            .ok_or_else(|| GameError::UnknownMove(label.to_string()))
    }

    /// Move at a 0-based position, if in range
    pub fn by_index(&self, index: usize) -> Option<Move> {
        (index < self.labels.len()).then(|| self.move_at(index))
    }

    /// Iterate over all moves in circle order
    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        (0..self.labels.len()).map(|index| self.move_at(index))
    }

    fn move_at(&self, index: usize) -> Move {
        Move {
            index,
            label: self.labels[index].clone(),
        }
    }
}

/// A move known to belong to a [`MoveSet`]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    index: usize,
    label: String,
}

impl Move {
    /// Position on the circle
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Bytes fed to the MAC: the exact UTF-8 label, no normalization
    pub fn to_bytes(&self) -> &[u8] {
        self.label.as_bytes()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

impl Serialize for Move {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_str(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_set_classic() {
        let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();

        assert_eq!(moves.len(), 3);
        assert_eq!(moves.position("paper"), Some(1));
        assert_eq!(moves.get("scissors").unwrap().index(), 2);
        assert_eq!(moves.labels(), ["rock", "paper", "scissors"]);
    }

    #[test]
    fn test_move_set_rejects_even_count() {
        let err = MoveSet::new(["a", "b", "c", "d"]).unwrap_err();
        assert!(matches!(err, GameError::InvalidMoveSet(_)));
    }

    #[test]
    fn test_move_set_rejects_too_few() {
        assert!(matches!(
            MoveSet::new(Vec::<String>::new()),
            Err(GameError::InvalidMoveSet(_))
        ));
        assert!(matches!(
            MoveSet::new(["rock"]),
            Err(GameError::InvalidMoveSet(_))
        ));
        assert!(matches!(
            MoveSet::new(["rock", "paper"]),
            Err(GameError::InvalidMoveSet(_))
        ));
    }

    #[test]
    fn test_move_set_rejects_duplicates() {
        let err = MoveSet::new(["rock", "paper", "rock"]).unwrap_err();
        assert!(err.to_string().contains("duplicate move 'rock'"));
    }

    #[test]
    fn test_move_set_labels_are_case_sensitive() {
        // No normalization: "Rock" and "rock" are different labels
        assert!(MoveSet::new(["Rock", "rock", "ROCK"]).is_ok());
    }

    #[test]
    fn test_unknown_move() {
        let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
        let err = moves.get("lizard").unwrap_err();

        assert!(matches!(err, GameError::UnknownMove(ref label) if label == "lizard"));
    }

    #[test]
    fn test_by_index_and_iter() {
        let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();

        assert_eq!(moves.by_index(0).unwrap().label(), "rock");
        assert!(moves.by_index(3).is_none());

        let labels: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
        assert_eq!(labels, ["rock", "paper", "scissors"]);
    }

    #[test]
    fn test_move_bytes_are_exact_label() {
        let moves = MoveSet::new(["Rock", "papér", "scissors"]).unwrap();
        assert_eq!(moves.get("papér").unwrap().to_bytes(), "papér".as_bytes());
    }
}
