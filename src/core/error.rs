//! Error types for round construction, move validation and interchange.
//!
//! Every rejection is synchronous and leaves the round untouched: validation
//! always runs before the move log is mutated.

use thiserror::Error;

use super::player::Player;
use super::theater::Theater;
use crate::cards::{CardDescriptor, CardId, CardTypeKey};
use crate::moves::Move;
use crate::stack::DecisionKind;

/// Errors raised by the card catalog and deck.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No card with this id exists in the deck.
    #[error("{0} does not exist in this deck")]
    UnknownCard(CardId),

    /// A descriptor matched no card.
    #[error("no card matches {0}")]
    NotFound(CardDescriptor),

    /// A descriptor that must identify exactly one card matched several.
    #[error("{descriptor} matches {matches} cards")]
    Ambiguous {
        descriptor: CardDescriptor,
        matches: usize,
    },

    /// Two cards in one deck share an id.
    #[error("{0} appears more than once in the deck")]
    DuplicateCard(CardId),

    /// A theater-bound card type was instantiated in another theater.
    #[error("card type {card_type:?} cannot be instantiated in theater {theater}")]
    TheaterMismatch {
        card_type: CardTypeKey,
        theater: Theater,
    },
}

/// Why a decision's target was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TargetViolation {
    #[error("{player} has no card in {theater}")]
    EmptyStack { theater: Theater, player: Player },

    #[error("{theater} is not adjacent to {source_theater}")]
    NotAdjacent {
        theater: Theater,
        source_theater: Theater,
    },

    #[error("{player} must target their own cards, not {targeted}'s")]
    NotOwnCard { player: Player, targeted: Player },

    #[error("no card at index {index} of {player}'s {theater} stack")]
    NoSuchCard {
        theater: Theater,
        player: Player,
        index: usize,
    },

    #[error("card at index {index} of {theater} is face-up")]
    FaceUp { theater: Theater, index: usize },

    #[error("origin and destination are both {theater}")]
    SameTheater { theater: Theater },

    #[error("the battle deck is empty")]
    DeckEmpty,
}

/// Errors raised while building a round or submitting moves.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RoundError {
    /// A move index or move count beyond the log was requested.
    #[error("move index {index} is out of range (log holds {len} moves)")]
    OutOfRange { index: usize, len: usize },

    /// A move was submitted after the round ended.
    #[error("round is complete; {attempted:?} rejected")]
    GameComplete { attempted: Move },

    /// The played card is not in the acting player's hand.
    #[error("{card} is not in {player}'s hand")]
    HandMismatch { card: CardId, player: Player },

    /// A card was played while a decision is still anticipated.
    #[error("{pending} decision is pending for {player}")]
    DecisionPending { pending: DecisionKind, player: Player },

    /// A face-up card was played outside its theater without an exception.
    #[error("{card} belongs to {expected} and cannot be played face-up to {actual}")]
    TheaterMismatch {
        card: CardId,
        expected: Theater,
        actual: Theater,
    },

    /// A decision was submitted while the decision stack is empty.
    #[error("no decision is anticipated; {attempted} rejected")]
    NoDecisionAnticipated { attempted: DecisionKind },

    /// The move was claimed by a player who is not due to act.
    #[error("{expected} is due to act, not {actual}")]
    WrongPlayer { expected: Player, actual: Player },

    /// The decision variant does not match the top of the stack.
    #[error("expected a {expected} decision, got {actual}")]
    WrongType {
        expected: DecisionKind,
        actual: DecisionKind,
    },

    /// The decision names a target its prompting card does not allow.
    #[error("invalid {kind} target: {violation}")]
    InvalidTarget {
        kind: DecisionKind,
        violation: TargetViolation,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("theater permutation {order:?} must name each theater exactly once")]
    InvalidPermutation { order: [Theater; 3] },

    #[error("invalid round configuration: {0}")]
    InvalidConfig(String),
}

impl RoundError {
    pub(crate) fn invalid_target(kind: DecisionKind, violation: TargetViolation) -> Self {
        RoundError::InvalidTarget { kind, violation }
    }
}

/// Errors raised while encoding, decoding or replaying a round record.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("record encoding failed: {0}")]
    Codec(#[from] bincode::Error),

    #[error("move {index} could not be replayed: {source}")]
    Replay {
        index: usize,
        #[source]
        source: RoundError,
    },

    #[error(transparent)]
    Round(#[from] RoundError),
}
