//! # theater-engine
//!
//! Adjudication engine for a two-player card battle fought across three
//! theaters (AIR, LAND, SEA).
//!
//! ## Design Principles
//!
//! 1. **The Log Is the State**: A round is an append-only log of moves.
//!    Board, hands, decisions, strengths and statuses are all derived
//!    from a prefix of it and never stored separately.
//!
//! 2. **Validate, Then Append**: Every move is checked against derived
//!    state first. A rejected move leaves the round untouched.
//!
//! 3. **Any Prefix Is Queryable**: `Round::at(n)` answers every question
//!    about the round as it stood after `n` moves.
//!
//! ## Architecture
//!
//! - **Memoized Derivation**: One memo table per derived quantity, keyed by
//!   move count. The log only grows, so entries are never invalidated and
//!   each appended move costs one step per quantity.
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`. Previews
//!   clone the whole round, caches included, and throw the trial away.
//!
//! - **Decision Stack**: Cards that prompt a choice push anticipated
//!   decisions; the owner of the top entry acts until the stack drains.
//!
//! ## Modules
//!
//! - `core`: Players, theaters, permutation, RNG, configuration, errors
//! - `cards`: Card catalog, card instances and the deck
//! - `moves`: Moves, the move log and the interchange record
//! - `derive`: Memoized move-indexed derivations and snapshots
//! - `stack`: Anticipated decisions
//! - `effects`: Strength and status effects
//! - `rules`: Validation, completion and victory; the `RulesEngine` trait
//! - `round`: The round itself, its builder and board view

pub mod core;
pub mod cards;
pub mod moves;
pub mod derive;
pub mod stack;
pub mod effects;
pub mod rules;
pub mod round;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerMap,
    Theater, TheaterMap, TheaterPermutation,
    GameRng, RoundConfig,
    CatalogError, RecordError, RoundError, TargetViolation,
};

pub use crate::cards::{Card, CardDescriptor, CardId, CardType, CardTypeKey, Deck, EffectKind};

pub use crate::moves::{Decision, Move, MoveLog, RoundRecord};

pub use crate::derive::{BoardState, CardLocation, MemoStats, PlacedCard, Snapshot};

pub use crate::stack::{AnticipatedDecision, DecisionKind, DecisionStack, Targeting};

pub use crate::effects::{GlobalEffect, PlayerEffect, TheaterEffect, TheaterStrength};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::round::{BoardView, Round, RoundBuilder};
