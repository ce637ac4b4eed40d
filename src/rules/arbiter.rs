//! Round completion and victory.

use serde::{Deserialize, Serialize};

use crate::core::{Player, TheaterMap};
use crate::round::Round;

/// Outcome of a completed round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameResult {
    /// The other player surrendered.
    Surrender { victor: Player },
    /// Both hands ran out; `victor` controls at least two theaters.
    TheaterControl {
        victor: Player,
        theaters: TheaterMap<Player>,
    },
}

impl GameResult {
    #[must_use]
    pub fn victor(&self) -> Player {
        match self {
            GameResult::Surrender { victor } | GameResult::TheaterControl { victor, .. } => *victor,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.victor() == player
    }
}

impl Round {
    /// A round ends on surrender, or once both hands are empty. Decisions
    /// still pending at that point are never resolved.
    pub(crate) fn is_complete(&self, n: usize) -> bool {
        if self.surrendered(n).is_some() {
            return true;
        }
        Player::ALL.iter().all(|&p| self.hand(n, p).is_empty())
    }

    /// Player who made move `n - 1`, if that move was a surrender.
    fn surrendered(&self, n: usize) -> Option<Player> {
        let index = n.checked_sub(1)?;
        self.log[index].is_surrender().then(|| self.active_player(index))
    }

    pub(crate) fn result(&self, n: usize) -> Option<GameResult> {
        if !self.is_complete(n) {
            return None;
        }
        if let Some(loser) = self.surrendered(n) {
            return Some(GameResult::Surrender { victor: loser.other() });
        }

        let strength = self.theater_strength(n);
        let victor = if strength.controlled_by(Player::One) >= 2 {
            Player::One
        } else {
            Player::Two
        };
        Some(GameResult::TheaterControl {
            victor,
            theaters: TheaterMap::new(|theater| strength.controller(theater)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Theater;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Surrender { victor: Player::Two };
        assert!(result.is_winner(Player::Two));
        assert!(!result.is_winner(Player::One));

        let control = GameResult::TheaterControl {
            victor: Player::One,
            theaters: TheaterMap::new(|t| if t == Theater::Sea { Player::Two } else { Player::One }),
        };
        assert_eq!(control.victor(), Player::One);
    }

    #[test]
    fn test_result_serialization() {
        let result = GameResult::Surrender { victor: Player::One };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["SURRENDER"]["victor"], "ONE");
    }
}
