//! Move representation.
//!
//! A move is one of three things: placing a card, resolving the
//! anticipated decision at the top of the stack, or surrendering.
//! Moves carry no player; the acting player is derived from the log.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::{Player, Theater};
use crate::stack::DecisionKind;

/// Destination chosen for a Reinforce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReinforceChoice {
    pub theater: Theater,
}

/// Card moved by a Transport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransportChoice {
    pub origin_theater: Theater,
    pub origin_index_from_top: usize,
    pub destination_theater: Theater,
}

/// Face-down card returned by a Redeploy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RedeployChoice {
    pub theater: Theater,
    pub index_from_top: usize,
}

/// Resolution of an anticipated decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    /// Flip the top card of `targeted_player`'s stack in `theater`.
    Flip {
        targeted_player: Player,
        theater: Theater,
    },
    /// Optionally place the top card of the deck face-down.
    Reinforce { made: Option<ReinforceChoice> },
    /// Optionally move one of the acting player's cards.
    Transport { made: Option<TransportChoice> },
    /// Return a face-down card to the acting player's hand.
    Redeploy { made: RedeployChoice },
}

impl Decision {
    #[must_use]
    pub fn kind(&self) -> DecisionKind {
        match self {
            Decision::Flip { .. } => DecisionKind::Flip,
            Decision::Reinforce { .. } => DecisionKind::Reinforce,
            Decision::Transport { .. } => DecisionKind::Transport,
            Decision::Redeploy { .. } => DecisionKind::Redeploy,
        }
    }

    #[must_use]
    pub fn flip(targeted_player: Player, theater: Theater) -> Self {
        Decision::Flip {
            targeted_player,
            theater,
        }
    }

    #[must_use]
    pub fn reinforce(theater: Option<Theater>) -> Self {
        Decision::Reinforce {
            made: theater.map(|theater| ReinforceChoice { theater }),
        }
    }

    #[must_use]
    pub fn transport(origin_theater: Theater, origin_index_from_top: usize, destination_theater: Theater) -> Self {
        Decision::Transport {
            made: Some(TransportChoice {
                origin_theater,
                origin_index_from_top,
                destination_theater,
            }),
        }
    }

    #[must_use]
    pub fn redeploy(theater: Theater, index_from_top: usize) -> Self {
        Decision::Redeploy {
            made: RedeployChoice {
                theater,
                index_from_top,
            },
        }
    }
}

/// One entry of the move log.
///
/// ```
/// use theater_engine::cards::CardId;
/// use theater_engine::core::Theater;
/// use theater_engine::moves::Move;
///
/// let play = Move::card(CardId::new(4), Theater::Air, true);
/// assert!(play.is_card());
/// assert!(Move::Surrender.is_surrender());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Move {
    Card {
        card: CardId,
        theater: Theater,
        face_up: bool,
    },
    Decision {
        decision: Decision,
    },
    Surrender,
}

impl Move {
    #[must_use]
    pub fn card(card: CardId, theater: Theater, face_up: bool) -> Self {
        Move::Card {
            card,
            theater,
            face_up,
        }
    }

    #[must_use]
    pub fn decision(decision: Decision) -> Self {
        Move::Decision { decision }
    }

    #[must_use]
    pub fn is_card(&self) -> bool {
        matches!(self, Move::Card { .. })
    }

    #[must_use]
    pub fn is_surrender(&self) -> bool {
        matches!(self, Move::Surrender)
    }
}

impl From<Decision> for Move {
    fn from(decision: Decision) -> Self {
        Move::Decision { decision }
    }
}
