//! Human-legible board projection.
//!
//! Theaters are listed left to right in permutation order. Each card is
//! labelled `THEATER-Name-rank`, with ` (flipped)` appended when it is
//! face-down. Stacks list the top card first.

use serde::Serialize;

use crate::cards::Deck;
use crate::core::{Player, PlayerMap, Theater, TheaterPermutation};
use crate::derive::BoardState;
use crate::effects::TheaterStrength;

/// One theater column of the board view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TheaterView {
    pub theater: Theater,
    pub cards: PlayerMap<Vec<String>>,
    pub strength: PlayerMap<i64>,
    pub controller: Player,
}

/// The board laid out in permutation order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub theaters: Vec<TheaterView>,
}

impl BoardView {
    pub(crate) fn new(
        board: &BoardState,
        strength: &TheaterStrength,
        deck: &Deck,
        permutation: &TheaterPermutation,
    ) -> Self {
        let theaters = permutation
            .order()
            .into_iter()
            .map(|theater| TheaterView {
                theater,
                cards: PlayerMap::new(|player| {
                    board
                        .stack(theater, player)
                        .iter()
                        .filter_map(|placed| {
                            let card = deck.get(placed.card)?;
                            let suffix = if placed.face_up { "" } else { " (flipped)" };
                            Some(format!("{}{}", card.label(), suffix))
                        })
                        .collect()
                }),
                strength: PlayerMap::new(|player| strength.get(theater, player)),
                controller: strength.controller(theater),
            })
            .collect();
        Self { theaters }
    }

    /// Card labels for one theater and player, top first.
    #[must_use]
    pub fn cards(&self, theater: Theater, player: Player) -> &[String] {
        self.theaters
            .iter()
            .find(|view| view.theater == theater)
            .map(|view| view.cards[player].as_slice())
            .unwrap_or_default()
    }

    /// Strengths in permutation order.
    #[must_use]
    pub fn ordered_strengths(&self) -> Vec<(Theater, PlayerMap<i64>)> {
        self.theaters
            .iter()
            .map(|view| (view.theater, view.strength.clone()))
            .collect()
    }
}

impl std::fmt::Display for BoardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for view in &self.theaters {
            writeln!(
                f,
                "{} ({} {} / {} {}) held by {}",
                view.theater,
                Player::One,
                view.strength[Player::One],
                Player::Two,
                view.strength[Player::Two],
                view.controller
            )?;
            for player in Player::ALL {
                writeln!(f, "  {}: {}", player, view.cards[player].join(", "))?;
            }
        }
        Ok(())
    }
}
