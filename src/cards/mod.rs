//! Card system: catalog, instances and the deck.
//!
//! ## Key Types
//!
//! - `CardTypeKey` / `CardType`: the static catalog (rank, theater, effect)
//! - `CardId`: stable identifier of one physical card
//! - `Card`: an immutable card instance
//! - `Deck`: every card of a round, in dealing order
//! - `CardDescriptor`: partial description used to search a deck

pub mod card;
pub mod card_type;
pub mod deck;

pub use card::{Card, CardId};
pub use card_type::{CardType, CardTypeKey, EffectKind};
pub use deck::{CardDescriptor, Deck};
