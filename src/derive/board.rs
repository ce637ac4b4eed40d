//! Board, remaining deck, discard pile and card locations.
//!
//! The board holds one stack per theater and player. Index 0 of a stack is
//! the most recently placed card, so "top" and "covered" read naturally.
//! A card id is always in exactly one place: a hand, the remaining deck,
//! a board slot or the discard pile.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, CardTypeKey, Deck};
use crate::core::{Player, PlayerMap, Theater, TheaterMap};
use crate::effects::{GlobalEffect, TheaterEffect};
use crate::moves::{Decision, Move};
use crate::round::Round;

/// A card on the board and its face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedCard {
    pub card: CardId,
    pub face_up: bool,
}

/// Where a card is after some prefix of the log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardLocation {
    Hand(Player),
    Deck,
    Board {
        theater: Theater,
        player: Player,
        index_from_top: usize,
    },
    Discarded,
}

/// Every card stack on the board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    stacks: TheaterMap<PlayerMap<Vector<PlacedCard>>>,
}

impl BoardState {
    /// One player's stack in a theater, top first.
    #[must_use]
    pub fn stack(&self, theater: Theater, player: Player) -> &Vector<PlacedCard> {
        &self.stacks[theater][player]
    }

    #[must_use]
    pub fn card_at(&self, theater: Theater, player: Player, index_from_top: usize) -> Option<&PlacedCard> {
        self.stack(theater, player).get(index_from_top)
    }

    #[must_use]
    pub fn top(&self, theater: Theater, player: Player) -> Option<&PlacedCard> {
        self.stack(theater, player).front()
    }

    /// Cards in a theater, counting both players.
    #[must_use]
    pub fn theater_len(&self, theater: Theater) -> usize {
        self.stacks[theater].iter().map(|(_, stack)| stack.len()).sum()
    }

    /// Whether `player` has any card on the board.
    #[must_use]
    pub fn has_cards(&self, player: Player) -> bool {
        Theater::ALL.iter().any(|&t| !self.stack(t, player).is_empty())
    }

    #[must_use]
    pub fn face_down_count(&self, player: Player) -> usize {
        Theater::ALL
            .iter()
            .flat_map(|&t| self.stack(t, player).iter())
            .filter(|placed| !placed.face_up)
            .count()
    }

    /// Every placed card as `(theater, owner, index_from_top, card)`.
    pub fn iter(&self) -> impl Iterator<Item = (Theater, Player, usize, &PlacedCard)> {
        self.stacks.iter().flat_map(|(theater, players)| {
            players.iter().flat_map(move |(player, stack)| {
                stack
                    .iter()
                    .enumerate()
                    .map(move |(index, placed)| (theater, player, index, placed))
            })
        })
    }

    /// Face-up cards of one type, with their theater and owner.
    pub fn face_up_of_type<'a>(
        &'a self,
        deck: &'a Deck,
        card_type: CardTypeKey,
    ) -> impl Iterator<Item = (Theater, Player, &'a Card)> + 'a {
        self.iter().filter_map(move |(theater, player, _, placed)| {
            if !placed.face_up {
                return None;
            }
            deck.get(placed.card)
                .filter(|card| card.is(card_type))
                .map(|card| (theater, player, card))
        })
    }

    #[must_use]
    pub fn locate(&self, card: CardId) -> Option<(Theater, Player, usize, PlacedCard)> {
        self.iter()
            .find(|(_, _, _, placed)| placed.card == card)
            .map(|(theater, player, index, placed)| (theater, player, index, *placed))
    }

    pub(crate) fn place(&mut self, theater: Theater, player: Player, card: CardId, face_up: bool) {
        self.stacks[theater][player].push_front(PlacedCard { card, face_up });
    }

    /// Toggle the top card of a stack, returning it as it was before.
    pub(crate) fn flip_top(&mut self, theater: Theater, player: Player) -> Option<PlacedCard> {
        let top = self.stacks[theater][player].front_mut()?;
        let before = *top;
        top.face_up = !top.face_up;
        Some(before)
    }

    pub(crate) fn remove(&mut self, theater: Theater, player: Player, index_from_top: usize) -> Option<PlacedCard> {
        let stack = &mut self.stacks[theater][player];
        (index_from_top < stack.len()).then(|| stack.remove(index_from_top))
    }
}

impl Round {
    /// Board after the first `n` moves.
    pub(crate) fn board(&self, n: usize) -> BoardState {
        self.memoized(|c| &mut c.board, n, (), || {
            let Some(index) = n.checked_sub(1) else {
                return BoardState::default();
            };
            let mut board = self.board(index);
            let actor = self.active_player(index);

            match &self.log[index] {
                Move::Card {
                    card,
                    theater,
                    face_up,
                } => {
                    if !self.placement_discarded(index, *theater, *face_up) {
                        board.place(*theater, actor, *card, *face_up);
                    }
                }
                Move::Decision { decision } => match decision {
                    Decision::Flip {
                        targeted_player,
                        theater,
                    } => {
                        board.flip_top(*theater, *targeted_player);
                    }
                    Decision::Redeploy { made } => {
                        board.remove(made.theater, actor, made.index_from_top);
                    }
                    Decision::Reinforce { made: Some(choice) } => {
                        if let Some(&head) = self.remaining_deck(index).front() {
                            if !self.placement_discarded(index, choice.theater, false) {
                                board.place(choice.theater, actor, head, false);
                            }
                        }
                    }
                    Decision::Transport { made: Some(choice) } => {
                        if let Some(moved) = board.remove(choice.origin_theater, actor, choice.origin_index_from_top) {
                            board.place(choice.destination_theater, actor, moved.card, moved.face_up);
                        }
                    }
                    Decision::Reinforce { made: None } | Decision::Transport { made: None } => {}
                },
                Move::Surrender => {}
            }
            board
        })
    }

    /// Undealt cards after the first `n` moves, next card first.
    pub(crate) fn remaining_deck(&self, n: usize) -> Vector<CardId> {
        self.memoized(|c| &mut c.deck, n, (), || {
            let Some(index) = n.checked_sub(1) else {
                let dealt = 2 * self.config.hand_size;
                return self.deck.cards().iter().skip(dealt).map(|card| card.id).collect();
            };
            let mut deck = self.remaining_deck(index);

            match &self.log[index] {
                Move::Card { card, .. } => {
                    if let Some(position) = deck.index_of(card) {
                        deck.remove(position);
                    }
                }
                Move::Decision {
                    decision: Decision::Reinforce { made: Some(_) },
                } => {
                    deck.pop_front();
                }
                Move::Decision { .. } | Move::Surrender => {}
            }
            deck
        })
    }

    /// Cards removed from play after the first `n` moves, oldest first.
    pub(crate) fn discard_pile(&self, n: usize) -> Vector<CardId> {
        self.memoized(|c| &mut c.discard, n, (), || {
            let Some(index) = n.checked_sub(1) else {
                return Vector::new();
            };
            let mut discard = self.discard_pile(index);

            match &self.log[index] {
                Move::Card {
                    card,
                    theater,
                    face_up,
                } => {
                    if self.placement_discarded(index, *theater, *face_up) {
                        discard.push_back(*card);
                    }
                }
                Move::Decision {
                    decision: Decision::Reinforce { made: Some(choice) },
                } => {
                    if let Some(&head) = self.remaining_deck(index).front() {
                        if self.placement_discarded(index, choice.theater, false) {
                            discard.push_back(head);
                        }
                    }
                }
                Move::Decision { .. } | Move::Surrender => {}
            }
            discard
        })
    }

    /// Whether a card placed after `n` moves is discarded instead.
    ///
    /// Containment discards face-down placements anywhere; Blockade discards
    /// every placement into the theater it covers.
    pub(crate) fn placement_discarded(&self, n: usize, theater: Theater, face_up: bool) -> bool {
        (!face_up && self.global_effects(n).contains(&GlobalEffect::Containment))
            || self.theater_effects(n, theater).contains(&TheaterEffect::Blockade)
    }

    /// Location of a card after the first `n` moves; `None` for ids not in the deck.
    pub(crate) fn card_location(&self, n: usize, card: CardId) -> Option<CardLocation> {
        self.memoized(|c| &mut c.card_location, n, card, || {
            self.deck.get(card)?;
            if let Some((theater, player, index_from_top, _)) = self.board(n).locate(card) {
                return Some(CardLocation::Board {
                    theater,
                    player,
                    index_from_top,
                });
            }
            if let Some(player) = Player::ALL.into_iter().find(|&p| self.hand(n, p).contains(&card)) {
                return Some(CardLocation::Hand(player));
            }
            if self.remaining_deck(n).contains(&card) {
                return Some(CardLocation::Deck);
            }
            Some(CardLocation::Discarded)
        })
    }

    /// Whether a card is on the board face-up after the first `n` moves.
    pub(crate) fn card_face_up(&self, n: usize, card: CardId) -> bool {
        self.memoized(|c| &mut c.card_face_up, n, card, || {
            self.board(n)
                .locate(card)
                .is_some_and(|(_, _, _, placed)| placed.face_up)
        })
    }
}
