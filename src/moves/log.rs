//! Append-only move log.
//!
//! The log is the single source of truth for a round. Every other fact is
//! derived from a prefix of it, which is why there is no way to edit or
//! remove an entry. Backed by `im::Vector` so a round can be cloned for a
//! preview without copying its history.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::play::Move;
use crate::core::RoundError;

/// Ordered, append-only sequence of moves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLog {
    moves: Vector<Move>,
}

impl MoveLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of moves played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Append a move, returning its index.
    pub fn append(&mut self, mv: Move) -> usize {
        self.moves.push_back(mv);
        self.moves.len() - 1
    }

    /// Get the move at `index`.
    pub fn get(&self, index: usize) -> Result<&Move, RoundError> {
        self.moves.get(index).ok_or(RoundError::OutOfRange {
            index,
            len: self.moves.len(),
        })
    }

    /// The most recent move, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Move> {
        self.moves.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }
}

/// Panics if `index` is out of range; use [`MoveLog::get`] for untrusted indices.
impl Index<usize> for MoveLog {
    type Output = Move;

    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl FromIterator<Move> for MoveLog {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let log = MoveLog::new();

        assert_eq!(log.len(), 0);
        assert!(log.last().is_none());
        assert_eq!(log.get(0), Err(RoundError::OutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn test_append_returns_index() {
        let mut log = MoveLog::new();

        assert_eq!(log.append(Move::Surrender), 0);
        assert_eq!(log.append(Move::Surrender), 1);
        assert_eq!(log.len(), 2);
        assert_eq!(log.get(1), Ok(&Move::Surrender));
        assert!(log.get(2).is_err());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut log = MoveLog::new();
        log.append(Move::Surrender);

        let mut trial = log.clone();
        trial.append(Move::Surrender);

        assert_eq!(log.len(), 1);
        assert_eq!(trial.len(), 2);
    }
}
