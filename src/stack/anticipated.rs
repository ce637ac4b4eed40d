//! Anticipated decisions and what each card type prompts.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardId, CardTypeKey};
use crate::core::{Player, Theater, TheaterPermutation};
use crate::derive::BoardState;

/// The kind of follow-up choice a card prompts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionKind {
    Flip,
    Reinforce,
    Transport,
    Redeploy,
}

impl std::fmt::Display for DecisionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DecisionKind::Flip => "FLIP",
            DecisionKind::Reinforce => "REINFORCE",
            DecisionKind::Transport => "TRANSPORT",
            DecisionKind::Redeploy => "REDEPLOY",
        };
        f.write_str(name)
    }
}

/// Which targets a pending decision accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Targeting {
    /// Any stack in any theater.
    Any,
    /// Theaters adjacent to the given one.
    AdjacentTo(Theater),
    /// Only the deciding player's own cards.
    OwnCards,
}

/// A pending choice on the decision stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnticipatedDecision {
    pub kind: DecisionKind,
    /// Player who must resolve it.
    pub player: Player,
    /// Log index of the move that pushed it.
    pub prompting_move: usize,
    pub source_card: CardId,
    pub targeting: Targeting,
}

/// Decisions a card prompts when it becomes face-up, in push order.
///
/// The last element ends up on top of the stack and resolves first.
/// `board` is the board with the card already face-up in `theater`.
///
/// Disrupt pushes its owner's flip first so the opponent's flip resolves
/// before it; the opponent's flip is omitted if they have no cards.
#[must_use]
pub fn anticipated_for(
    card: &Card,
    owner: Player,
    theater: Theater,
    prompting_move: usize,
    board: &BoardState,
    permutation: &TheaterPermutation,
) -> SmallVec<[AnticipatedDecision; 2]> {
    let decision = |kind, player, targeting| AnticipatedDecision {
        kind,
        player,
        prompting_move,
        source_card: card.id,
        targeting,
    };

    let mut pushed = SmallVec::new();
    match card.card_type {
        CardTypeKey::Reinforce => {
            pushed.push(decision(DecisionKind::Reinforce, owner, Targeting::AdjacentTo(theater)));
        }
        CardTypeKey::Ambush => {
            pushed.push(decision(DecisionKind::Flip, owner, Targeting::Any));
        }
        CardTypeKey::Maneuver => {
            let has_target = permutation
                .adjacent(theater)
                .iter()
                .any(|&t| board.theater_len(t) > 0);
            if has_target {
                pushed.push(decision(DecisionKind::Flip, owner, Targeting::AdjacentTo(theater)));
            }
        }
        CardTypeKey::Disrupt => {
            pushed.push(decision(DecisionKind::Flip, owner, Targeting::OwnCards));
            if board.has_cards(owner.other()) {
                pushed.push(decision(DecisionKind::Flip, owner.other(), Targeting::OwnCards));
            }
        }
        CardTypeKey::Redeploy => {
            if board.face_down_count(owner) > 0 {
                pushed.push(decision(DecisionKind::Redeploy, owner, Targeting::OwnCards));
            }
        }
        CardTypeKey::Transport => {
            pushed.push(decision(DecisionKind::Transport, owner, Targeting::OwnCards));
        }
        CardTypeKey::Support
        | CardTypeKey::AirDrop
        | CardTypeKey::Aerodrome
        | CardTypeKey::Containment
        | CardTypeKey::Heavy
        | CardTypeKey::CoverFire
        | CardTypeKey::Escalation
        | CardTypeKey::Blockade => {}
    }
    pushed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDescriptor, Deck};

    fn card(deck: &Deck, key: CardTypeKey, theater: Theater) -> Card {
        deck.find(&CardDescriptor::of_type(key).in_theater(theater))
            .unwrap()
            .clone()
    }

    #[test]
    fn test_disrupt_opponent_flip_on_top() {
        let deck = Deck::unshuffled();
        let disrupt = card(&deck, CardTypeKey::Disrupt, Theater::Land);
        let mut board = BoardState::default();
        board.place(Theater::Land, Player::One, disrupt.id, true);
        board.place(Theater::Sea, Player::Two, CardId::new(13), false);

        let pushed = anticipated_for(&disrupt, Player::One, Theater::Land, 4, &board, &TheaterPermutation::default());

        assert_eq!(pushed.len(), 2);
        assert_eq!(pushed[0].player, Player::One);
        assert_eq!(pushed[1].player, Player::Two);
        assert!(pushed.iter().all(|d| d.kind == DecisionKind::Flip && d.prompting_move == 4));
    }

    #[test]
    fn test_disrupt_skips_empty_opponent() {
        let deck = Deck::unshuffled();
        let disrupt = card(&deck, CardTypeKey::Disrupt, Theater::Land);
        let mut board = BoardState::default();
        board.place(Theater::Land, Player::One, disrupt.id, true);

        let pushed = anticipated_for(&disrupt, Player::One, Theater::Land, 0, &board, &TheaterPermutation::default());

        assert_eq!(pushed.len(), 1);
        assert_eq!(pushed[0].player, Player::One);
    }

    #[test]
    fn test_maneuver_needs_adjacent_card() {
        let deck = Deck::unshuffled();
        let maneuver = card(&deck, CardTypeKey::Maneuver, Theater::Air);
        let perm = TheaterPermutation::default();
        let mut board = BoardState::default();
        board.place(Theater::Air, Player::Two, maneuver.id, true);
        board.place(Theater::Sea, Player::One, CardId::new(18), true);

        // SEA is not adjacent to AIR in the default order.
        assert!(anticipated_for(&maneuver, Player::Two, Theater::Air, 0, &board, &perm).is_empty());

        board.place(Theater::Land, Player::One, CardId::new(12), false);
        let pushed = anticipated_for(&maneuver, Player::Two, Theater::Air, 0, &board, &perm);
        assert_eq!(pushed[0].targeting, Targeting::AdjacentTo(Theater::Air));
    }

    #[test]
    fn test_redeploy_needs_face_down_card() {
        let deck = Deck::unshuffled();
        let redeploy = card(&deck, CardTypeKey::Redeploy, Theater::Sea);
        let perm = TheaterPermutation::default();
        let mut board = BoardState::default();
        board.place(Theater::Sea, Player::One, redeploy.id, true);

        assert!(anticipated_for(&redeploy, Player::One, Theater::Sea, 0, &board, &perm).is_empty());

        board.place(Theater::Air, Player::One, CardId::new(6), false);
        let pushed = anticipated_for(&redeploy, Player::One, Theater::Sea, 0, &board, &perm);
        assert_eq!(pushed[0].kind, DecisionKind::Redeploy);
    }

    #[test]
    fn test_ongoing_cards_prompt_nothing() {
        let deck = Deck::unshuffled();
        let board = BoardState::default();
        let perm = TheaterPermutation::default();

        for key in [CardTypeKey::Support, CardTypeKey::CoverFire, CardTypeKey::Blockade] {
            let theater = key.card_type().theater.unwrap();
            let c = card(&deck, key, theater);
            assert!(anticipated_for(&c, Player::One, theater, 0, &board, &perm).is_empty());
        }
    }

    #[test]
    fn test_decision_kind_display() {
        assert_eq!(DecisionKind::Transport.to_string(), "TRANSPORT");
    }
}
