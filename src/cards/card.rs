//! Concrete card instances.
//!
//! A `Card` is one physical card in a round's deck: a catalog type placed
//! in a theater, with a stable id. Everything outside the deck refers to
//! cards by `CardId` only.

use serde::{Deserialize, Serialize};

use super::card_type::{CardType, CardTypeKey, EffectKind};
use crate::core::{CatalogError, Theater};

/// Unique identifier for a card within a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// An immutable card instance.
///
/// ```
/// use theater_engine::cards::{Card, CardId, CardTypeKey};
/// use theater_engine::core::Theater;
///
/// let bombers = Card::new(CardId::new(6), CardTypeKey::Heavy, Theater::Air)
///     .unwrap()
///     .with_name("Heavy Bombers");
///
/// assert_eq!(bombers.rank(), 6);
/// assert_eq!(bombers.name(), "Heavy Bombers");
/// assert_eq!(bombers.label(), "AIR-Heavy Bombers-6");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub card_type: CardTypeKey,
    pub theater: Theater,
    #[serde(default)]
    pub(super) custom_name: Option<String>,
}

impl Card {
    /// Instantiate a catalog type in a theater.
    ///
    /// Fails if the type is bound to a different theater.
    pub fn new(id: CardId, card_type: CardTypeKey, theater: Theater) -> Result<Self, CatalogError> {
        if let Some(bound) = card_type.card_type().theater {
            if bound != theater {
                return Err(CatalogError::TheaterMismatch { card_type, theater });
            }
        }
        Ok(Self {
            id,
            card_type,
            theater,
            custom_name: None,
        })
    }

    /// Override the catalog's display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.custom_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn catalog_entry(&self) -> &'static CardType {
        self.card_type.card_type()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.custom_name
            .as_deref()
            .unwrap_or(self.catalog_entry().default_name)
    }

    #[must_use]
    pub fn rank(&self) -> u8 {
        self.catalog_entry().rank
    }

    #[must_use]
    pub fn effect_kind(&self) -> EffectKind {
        self.catalog_entry().effect_kind
    }

    #[must_use]
    pub fn description(&self) -> Option<&'static str> {
        self.catalog_entry().description
    }

    #[must_use]
    pub fn is(&self, card_type: CardTypeKey) -> bool {
        self.card_type == card_type
    }

    /// Human-legible `THEATER-Name-rank` label.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}-{}-{}", self.theater, self.name(), self.rank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_rejects_wrong_theater() {
        let err = Card::new(CardId::new(1), CardTypeKey::Support, Theater::Land).unwrap_err();
        assert_eq!(
            err,
            CatalogError::TheaterMismatch {
                card_type: CardTypeKey::Support,
                theater: Theater::Land,
            }
        );
    }

    #[test]
    fn test_unbound_type_in_any_theater() {
        for theater in Theater::ALL {
            let card = Card::new(CardId::new(3), CardTypeKey::Maneuver, theater).unwrap();
            assert_eq!(card.rank(), 3);
            assert_eq!(card.theater, theater);
        }
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(CardId::new(1), CardTypeKey::Support, Theater::Air).unwrap();
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["card_type"], "SUPPORT");
        assert_eq!(json["theater"], "AIR");
        assert!(json["custom_name"].is_null());

        let back: Card = serde_json::from_value(json).unwrap();
        assert_eq!(back, card);
        assert_eq!(back.description(), Some("You gain +3 strength in each adjacent theater."));
    }
}
