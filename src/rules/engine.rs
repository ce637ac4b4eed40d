//! Rules engine trait.
//!
//! Drivers (an interactive client, an AI agent, randomized tests) talk to
//! a round through `RulesEngine`:
//! - Which moves are legal now
//! - Applying a move
//! - Whether the round is over, and who won

use crate::core::{Player, RoundError};
use crate::moves::Move;

use super::arbiter::GameResult;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `candidate_moves`: may over-approximate; `legal_moves` filters it
/// - `apply`: must be deterministic so logs replay exactly
/// - `result`: return `None` while the round continues
pub trait RulesEngine {
    /// Player due to act next.
    fn active_player(&self) -> Player;

    /// Every move worth checking in the current state.
    fn candidate_moves(&self) -> Vec<Move>;

    /// Check a move without applying it.
    fn check(&self, mv: &Move) -> Result<(), RoundError>;

    /// Validate and apply a move, returning its log index.
    fn apply(&mut self, mv: Move) -> Result<usize, RoundError>;

    /// Outcome, once the round is complete.
    fn result(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Enumerate all legal moves.
    ///
    /// Default implementation filters `candidate_moves` through `check`.
    fn legal_moves(&self) -> Vec<Move> {
        self.candidate_moves()
            .into_iter()
            .filter(|mv| self.check(mv).is_ok())
            .collect()
    }

    fn is_terminal(&self) -> bool {
        self.result().is_some()
    }
}
