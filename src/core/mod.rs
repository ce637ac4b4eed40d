//! Core engine types: players, theaters, RNG, configuration, errors.
//!
//! These are the fundamental building blocks every other module uses.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod theater;

pub use config::{RoundConfig, STANDARD_HAND_SIZE};
pub use error::{CatalogError, RecordError, RoundError, TargetViolation};
pub use player::{Player, PlayerMap};
pub use rng::GameRng;
pub use theater::{Theater, TheaterMap, TheaterPermutation};
