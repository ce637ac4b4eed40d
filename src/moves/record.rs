//! Round interchange record.
//!
//! A `RoundRecord` is everything needed to reconstruct a round exactly:
//! its configuration (permutation included), the dealt deck and the move
//! log. It is serde-serializable for any format; `to_bytes`/`from_bytes`
//! provide a compact `bincode` encoding.

use serde::{Deserialize, Serialize};

use super::play::Move;
use crate::cards::Deck;
use crate::core::{RecordError, RoundConfig, TheaterPermutation};

/// Serializable snapshot of a round's inputs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub config: RoundConfig,
    pub deck: Deck,
    pub moves: Vec<Move>,
}

impl RoundRecord {
    #[must_use]
    pub fn new(config: RoundConfig, deck: Deck, moves: Vec<Move>) -> Self {
        Self { config, deck, moves }
    }

    #[must_use]
    pub fn permutation(&self) -> TheaterPermutation {
        self.config.permutation
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RecordError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a record produced by [`RoundRecord::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::core::{GameRng, Player, Theater};
    use crate::moves::Decision;

    fn sample() -> RoundRecord {
        let perm = TheaterPermutation::new([Theater::Sea, Theater::Land, Theater::Air]).unwrap();
        RoundRecord::new(
            RoundConfig::new(perm).with_hand_size(4),
            Deck::standard(&mut GameRng::new(5)),
            vec![
                Move::card(CardId::new(8), Theater::Land, true),
                Move::from(Decision::flip(Player::One, Theater::Land)),
                Move::from(Decision::Reinforce { made: None }),
                Move::Surrender,
            ],
        )
    }

    #[test]
    fn test_bincode_encoding() {
        let record = sample();
        let bytes = record.to_bytes().unwrap();
        let back = RoundRecord::from_bytes(&bytes).unwrap();

        assert_eq!(back, record);
        assert_eq!(back.permutation().order()[0], Theater::Sea);
    }

    #[test]
    fn test_truncated_bytes_rejected() {
        let bytes = sample().to_bytes().unwrap();
        let err = RoundRecord::from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, RecordError::Codec(_)));
    }

    #[test]
    fn test_json_encoding() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let back: RoundRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
