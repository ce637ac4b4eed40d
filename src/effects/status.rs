//! Ongoing status effects.
//!
//! Statuses are read off the face-up cards on the board (and, for Air
//! Drop, the owner's last play). They are scoped to the whole round, one
//! theater, or one player.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardTypeKey, Deck};
use crate::core::{Player, Theater, TheaterPermutation};
use crate::derive::BoardState;
use crate::round::Round;

/// Cards a theater must already hold for Blockade to apply.
pub const BLOCKADE_THRESHOLD: usize = 3;

/// Highest rank Aerodrome lets a player play out of theater.
pub const AERODROME_MAX_RANK: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GlobalEffect {
    /// Face-down plays are discarded.
    Containment,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TheaterEffect {
    /// Cards played here are discarded.
    Blockade,
    /// `player` gains the Support bonus here.
    Support { player: Player },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerEffect {
    /// The next card may be played face-up to any theater.
    AirDrop,
    /// Cards of rank 3 or less may be played face-up to any theater.
    Aerodrome,
    /// Face-down cards are strength 4.
    Escalation,
}

pub type GlobalEffects = SmallVec<[GlobalEffect; 1]>;
pub type TheaterEffects = SmallVec<[TheaterEffect; 3]>;
pub type PlayerEffects = SmallVec<[PlayerEffect; 3]>;

#[must_use]
pub fn global_effects(board: &BoardState, deck: &Deck) -> GlobalEffects {
    let mut effects = GlobalEffects::new();
    if board.face_up_of_type(deck, CardTypeKey::Containment).next().is_some() {
        effects.push(GlobalEffect::Containment);
    }
    effects
}

#[must_use]
pub fn theater_effects(
    board: &BoardState,
    deck: &Deck,
    permutation: &TheaterPermutation,
    theater: Theater,
) -> TheaterEffects {
    let mut effects = TheaterEffects::new();

    let blockaded = board
        .face_up_of_type(deck, CardTypeKey::Blockade)
        .any(|(source, _, _)| permutation.is_adjacent(source, theater));
    if blockaded && board.theater_len(theater) >= BLOCKADE_THRESHOLD {
        effects.push(TheaterEffect::Blockade);
    }

    for player in Player::ALL {
        let supported = board
            .face_up_of_type(deck, CardTypeKey::Support)
            .any(|(source, owner, _)| owner == player && permutation.is_adjacent(source, theater));
        if supported {
            effects.push(TheaterEffect::Support { player });
        }
    }
    effects
}

impl Round {
    pub(crate) fn global_effects(&self, n: usize) -> GlobalEffects {
        self.memoized(|c| &mut c.global_effects, n, (), || {
            global_effects(&self.board(n), &self.deck)
        })
    }

    pub(crate) fn theater_effects(&self, n: usize, theater: Theater) -> TheaterEffects {
        self.memoized(|c| &mut c.theater_effects, n, theater, || {
            theater_effects(&self.board(n), &self.deck, &self.config.permutation, theater)
        })
    }

    pub(crate) fn player_effects(&self, n: usize, player: Player) -> PlayerEffects {
        self.memoized(|c| &mut c.player_effects, n, player, || {
            let board = self.board(n);
            let owns = |card_type| {
                board
                    .face_up_of_type(&self.deck, card_type)
                    .any(|(_, owner, _)| owner == player)
            };

            let mut effects = PlayerEffects::new();
            let air_drop = self.last_card_played(n, player).is_some_and(|card| {
                self.deck.get(card).is_some_and(|c| c.is(CardTypeKey::AirDrop)) && self.card_face_up(n, card)
            });
            if air_drop {
                effects.push(PlayerEffect::AirDrop);
            }
            if owns(CardTypeKey::Aerodrome) {
                effects.push(PlayerEffect::Aerodrome);
            }
            if owns(CardTypeKey::Escalation) {
                effects.push(PlayerEffect::Escalation);
            }
            effects
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDescriptor, CardId};

    fn id_of(deck: &Deck, key: CardTypeKey, theater: Theater) -> CardId {
        deck.find(&CardDescriptor::of_type(key).in_theater(theater))
            .unwrap()
            .id
    }

    #[test]
    fn test_containment_only_face_up() {
        let deck = Deck::unshuffled();
        let containment = id_of(&deck, CardTypeKey::Containment, Theater::Air);
        let mut board = BoardState::default();
        board.place(Theater::Air, Player::Two, containment, false);

        assert!(global_effects(&board, &deck).is_empty());

        board.flip_top(Theater::Air, Player::Two);
        assert_eq!(global_effects(&board, &deck).as_slice(), &[GlobalEffect::Containment]);
    }

    #[test]
    fn test_blockade_threshold() {
        let deck = Deck::unshuffled();
        let perm = TheaterPermutation::default();
        let blockade = id_of(&deck, CardTypeKey::Blockade, Theater::Sea);
        let mut board = BoardState::default();
        board.place(Theater::Sea, Player::One, blockade, true);
        board.place(Theater::Land, Player::One, CardId::new(7), false);
        board.place(Theater::Land, Player::Two, CardId::new(8), false);

        assert!(!theater_effects(&board, &deck, &perm, Theater::Land).contains(&TheaterEffect::Blockade));

        board.place(Theater::Land, Player::Two, CardId::new(9), false);
        assert!(theater_effects(&board, &deck, &perm, Theater::Land).contains(&TheaterEffect::Blockade));
        // AIR is not adjacent to SEA in the default order.
        assert!(theater_effects(&board, &deck, &perm, Theater::Air).is_empty());
    }

    #[test]
    fn test_support_status_per_player() {
        let deck = Deck::unshuffled();
        let perm = TheaterPermutation::default();
        let support = id_of(&deck, CardTypeKey::Support, Theater::Air);
        let mut board = BoardState::default();
        board.place(Theater::Air, Player::Two, support, true);

        assert_eq!(
            theater_effects(&board, &deck, &perm, Theater::Land).as_slice(),
            &[TheaterEffect::Support { player: Player::Two }]
        );
        assert!(theater_effects(&board, &deck, &perm, Theater::Air).is_empty());
    }
}
