//! Decision stack derivation.
//!
//! A face-up card play pushes the decisions its card prompts. A decision
//! move pops the top entry; if it was a Flip that revealed a face-down
//! card, the revealed card's decisions are pushed for its owner, so
//! reveals chain until the stack drains.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::anticipated::{anticipated_for, AnticipatedDecision};
use crate::moves::{Decision, Move};
use crate::round::Round;

/// LIFO stack of pending decisions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecisionStack {
    // Bottom first; the top is the back.
    entries: Vector<AnticipatedDecision>,
}

impl DecisionStack {
    /// The decision that must be resolved next.
    #[must_use]
    pub fn top(&self) -> Option<&AnticipatedDecision> {
        self.entries.back()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries from the top down, in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = &AnticipatedDecision> {
        self.entries.iter().rev()
    }

    pub(crate) fn push(&mut self, decision: AnticipatedDecision) {
        self.entries.push_back(decision);
    }

    pub(crate) fn pop(&mut self) -> Option<AnticipatedDecision> {
        self.entries.pop_back()
    }
}

impl Round {
    /// Pending decisions after the first `n` moves.
    pub(crate) fn decision_stack(&self, n: usize) -> DecisionStack {
        self.memoized(|c| &mut c.stack, n, (), || {
            let Some(index) = n.checked_sub(1) else {
                return DecisionStack::default();
            };
            let mut stack = self.decision_stack(index);

            match &self.log[index] {
                Move::Card {
                    card,
                    theater,
                    face_up: true,
                } => {
                    if self.placement_discarded(index, *theater, true) {
                        return stack;
                    }
                    if let Some(card) = self.deck.get(*card) {
                        let actor = self.active_player(index);
                        let pushed = anticipated_for(
                            card,
                            actor,
                            *theater,
                            index,
                            &self.board(n),
                            &self.config.permutation,
                        );
                        pushed.into_iter().for_each(|d| stack.push(d));
                    }
                }
                Move::Decision { decision } => {
                    stack.pop();
                    if let Decision::Flip {
                        targeted_player,
                        theater,
                    } = decision
                    {
                        let revealed = self
                            .board(index)
                            .top(*theater, *targeted_player)
                            .filter(|placed| !placed.face_up)
                            .and_then(|placed| self.deck.get(placed.card));
                        if let Some(card) = revealed {
                            let pushed = anticipated_for(
                                card,
                                *targeted_player,
                                *theater,
                                index,
                                &self.board(n),
                                &self.config.permutation,
                            );
                            pushed.into_iter().for_each(|d| stack.push(d));
                        }
                    }
                }
                Move::Card { face_up: false, .. } | Move::Surrender => {}
            }
            stack
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::core::Player;
    use crate::stack::{DecisionKind, Targeting};

    fn flip(player: Player, prompting_move: usize) -> AnticipatedDecision {
        AnticipatedDecision {
            kind: DecisionKind::Flip,
            player,
            prompting_move,
            source_card: CardId::new(11),
            targeting: Targeting::OwnCards,
        }
    }

    #[test]
    fn test_lifo_order() {
        let mut stack = DecisionStack::default();
        stack.push(flip(Player::One, 0));
        stack.push(flip(Player::Two, 0));

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top().map(|d| d.player), Some(Player::Two));
        assert_eq!(
            stack.iter().map(|d| d.player).collect::<Vec<_>>(),
            vec![Player::Two, Player::One]
        );

        stack.pop();
        assert_eq!(stack.top().map(|d| d.player), Some(Player::One));
        stack.pop();
        assert!(stack.is_empty());
        assert!(stack.pop().is_none());
    }
}
