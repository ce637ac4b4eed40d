//! Round configuration.
//!
//! A `RoundConfig` fixes everything about a round that is not a move:
//! the theater permutation, how many cards each player is dealt, and
//! whether card plays are checked against the acting player's hand.
//! Test setups disable the hand check to place arbitrary cards.

use serde::{Deserialize, Serialize};

use super::error::RoundError;
use super::theater::TheaterPermutation;

/// Cards dealt to each player in a standard round.
pub const STANDARD_HAND_SIZE: usize = 6;

/// Configuration for a single round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Left-to-right order of the theaters; defines adjacency.
    pub permutation: TheaterPermutation,

    /// Cards dealt to each player before the first move.
    pub hand_size: usize,

    /// Reject card plays for cards outside the active player's hand.
    pub check_hand: bool,
}

impl RoundConfig {
    /// Create a standard configuration for the given permutation.
    #[must_use]
    pub fn new(permutation: TheaterPermutation) -> Self {
        Self {
            permutation,
            hand_size: STANDARD_HAND_SIZE,
            check_hand: true,
        }
    }

    /// Set the number of cards dealt to each player.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Allow card plays regardless of which hand holds the card.
    #[must_use]
    pub fn without_hand_check(mut self) -> Self {
        self.check_hand = false;
        self
    }

    /// Check the configuration against the size of the deck it will deal from.
    pub fn validate(&self, deck_size: usize) -> Result<(), RoundError> {
        if self.hand_size == 0 {
            return Err(RoundError::InvalidConfig(
                "hand size must be at least 1".to_string(),
            ));
        }
        if self.hand_size * 2 > deck_size {
            return Err(RoundError::InvalidConfig(format!(
                "cannot deal two hands of {} from a deck of {}",
                self.hand_size, deck_size
            )));
        }
        Ok(())
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::new(TheaterPermutation::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RoundConfig::default();
        assert_eq!(config.hand_size, 6);
        assert!(config.check_hand);
        assert!(config.validate(18).is_ok());
    }

    #[test]
    fn test_rejects_oversized_hands() {
        let config = RoundConfig::default().with_hand_size(10);
        assert!(matches!(config.validate(18), Err(RoundError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_empty_hands() {
        let config = RoundConfig::default().with_hand_size(0);
        assert!(config.validate(18).is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = RoundConfig::default().with_hand_size(1).without_hand_check();
        let json = serde_json::to_string(&config).unwrap();
        let back: RoundConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
