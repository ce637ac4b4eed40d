//! Hands and each player's most recent card play.

use im::Vector;

use crate::cards::CardId;
use crate::core::Player;
use crate::moves::{Decision, Move};
use crate::round::Round;

impl Round {
    /// Cards in `player`'s hand after the first `n` moves.
    ///
    /// Hands are dealt alternately from the top of the deck: player One
    /// takes positions 0, 2, 4.., player Two 1, 3, 5..
    pub(crate) fn hand(&self, n: usize, player: Player) -> Vector<CardId> {
        self.memoized(|c| &mut c.hand, n, player, || {
            let Some(index) = n.checked_sub(1) else {
                return self
                    .deck
                    .cards()
                    .iter()
                    .take(2 * self.config.hand_size)
                    .skip(player.index())
                    .step_by(2)
                    .map(|card| card.id)
                    .collect();
            };
            let mut hand = self.hand(index, player);

            match &self.log[index] {
                Move::Card { card, .. } => {
                    if let Some(position) = hand.index_of(card) {
                        hand.remove(position);
                    }
                }
                Move::Decision {
                    decision: Decision::Redeploy { made },
                } => {
                    if self.active_player(index) == player {
                        let returned = self
                            .board(index)
                            .card_at(made.theater, player, made.index_from_top)
                            .filter(|placed| !placed.face_up)
                            .map(|placed| placed.card);
                        if let Some(card) = returned {
                            hand.push_back(card);
                        }
                    }
                }
                Move::Decision { .. } | Move::Surrender => {}
            }
            hand
        })
    }

    /// The card `player` most recently played from hand, before move `n`.
    pub(crate) fn last_card_played(&self, n: usize, player: Player) -> Option<CardId> {
        self.memoized(|c| &mut c.last_card_played, n, player, || {
            let index = n.checked_sub(1)?;
            match &self.log[index] {
                Move::Card { card, .. } if self.active_player(index) == player => Some(*card),
                _ => self.last_card_played(index, player),
            }
        })
    }
}
