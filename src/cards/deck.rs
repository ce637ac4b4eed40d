//! The round's deck: every card instance, in shuffled order.
//!
//! The standard deck holds 18 cards, six per theater with ranks 1–6.
//! Ids are assigned 1..=18 in catalog order before shuffling, so an id
//! always names the same card regardless of the seed.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};
use super::card_type::CardTypeKey;
use crate::core::{CatalogError, GameRng, Theater};

const STANDARD_DECK: [(CardTypeKey, Theater, Option<&str>); 18] = [
    (CardTypeKey::Support, Theater::Air, None),
    (CardTypeKey::AirDrop, Theater::Air, None),
    (CardTypeKey::Maneuver, Theater::Air, None),
    (CardTypeKey::Aerodrome, Theater::Air, None),
    (CardTypeKey::Containment, Theater::Air, None),
    (CardTypeKey::Heavy, Theater::Air, Some("Heavy Bombers")),
    (CardTypeKey::Reinforce, Theater::Land, None),
    (CardTypeKey::Ambush, Theater::Land, None),
    (CardTypeKey::Maneuver, Theater::Land, None),
    (CardTypeKey::CoverFire, Theater::Land, None),
    (CardTypeKey::Disrupt, Theater::Land, None),
    (CardTypeKey::Heavy, Theater::Land, Some("Heavy Tanks")),
    (CardTypeKey::Transport, Theater::Sea, None),
    (CardTypeKey::Escalation, Theater::Sea, None),
    (CardTypeKey::Maneuver, Theater::Sea, None),
    (CardTypeKey::Redeploy, Theater::Sea, None),
    (CardTypeKey::Blockade, Theater::Sea, None),
    (CardTypeKey::Heavy, Theater::Sea, Some("Super Battleship")),
];

/// Partial description of a card, used to search a deck.
///
/// ```
/// use theater_engine::cards::{CardDescriptor, CardTypeKey, Deck};
/// use theater_engine::core::Theater;
///
/// let deck = Deck::unshuffled();
/// let tanks = deck.find(&CardDescriptor::of_type(CardTypeKey::Heavy).in_theater(Theater::Land)).unwrap();
/// assert_eq!(tanks.name(), "Heavy Tanks");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDescriptor {
    pub theater: Option<Theater>,
    pub rank: Option<u8>,
    pub card_type: Option<CardTypeKey>,
}

impl CardDescriptor {
    #[must_use]
    pub fn of_type(card_type: CardTypeKey) -> Self {
        Self {
            card_type: Some(card_type),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn in_theater(mut self, theater: Theater) -> Self {
        self.theater = Some(theater);
        self
    }

    #[must_use]
    pub fn with_rank(mut self, rank: u8) -> Self {
        self.rank = Some(rank);
        self
    }

    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        self.theater.map_or(true, |t| card.theater == t)
            && self.rank.map_or(true, |r| card.rank() == r)
            && self.card_type.map_or(true, |k| card.card_type == k)
    }
}

impl std::fmt::Display for CardDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        let mut sep = "";
        if let Some(theater) = self.theater {
            write!(f, "theater: {theater}")?;
            sep = ", ";
        }
        if let Some(rank) = self.rank {
            write!(f, "{sep}rank: {rank}")?;
            sep = ", ";
        }
        if let Some(card_type) = self.card_type {
            write!(f, "{sep}type: {card_type:?}")?;
        }
        write!(f, "}}")
    }
}

/// All card instances of a round, in dealing order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Deck {
    cards: Vec<Card>,
    by_id: FxHashMap<CardId, usize>,
}

impl Deck {
    /// Build a deck from cards in dealing order.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, CatalogError> {
        let mut by_id = FxHashMap::default();
        for (index, card) in cards.iter().enumerate() {
            if by_id.insert(card.id, index).is_some() {
                return Err(CatalogError::DuplicateCard(card.id));
            }
        }
        Ok(Self { cards, by_id })
    }

    /// The standard 18-card deck in catalog order.
    #[must_use]
    pub fn unshuffled() -> Self {
        let cards: Vec<Card> = STANDARD_DECK
            .iter()
            .zip(1u32..)
            .map(|(&(card_type, theater, name), id)| {
                let card = Card {
                    id: CardId::new(id),
                    card_type,
                    theater,
                    custom_name: None,
                };
                match name {
                    Some(name) => card.with_name(name),
                    None => card,
                }
            })
            .collect();
        let by_id = cards.iter().enumerate().map(|(i, c)| (c.id, i)).collect();
        Self { cards, by_id }
    }

    /// The standard deck, shuffled.
    #[must_use]
    pub fn standard(rng: &mut GameRng) -> Self {
        let mut cards = Self::unshuffled().cards;
        rng.shuffle(&mut cards);
        let by_id = cards.iter().enumerate().map(|(i, c)| (c.id, i)).collect();
        Self { cards, by_id }
    }

    /// Cards in dealing order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.by_id.get(&id).map(|&i| &self.cards[i])
    }

    /// Look up a card by id.
    pub fn lookup(&self, id: CardId) -> Result<&Card, CatalogError> {
        self.get(id).ok_or(CatalogError::UnknownCard(id))
    }

    /// Iterate over the cards matching a descriptor.
    pub fn find_all(&self, descriptor: &CardDescriptor) -> impl Iterator<Item = &Card> + '_ {
        let descriptor = *descriptor;
        self.cards.iter().filter(move |card| descriptor.matches(card))
    }

    /// Find the single card matching a descriptor.
    pub fn find(&self, descriptor: &CardDescriptor) -> Result<&Card, CatalogError> {
        let mut matches = self.find_all(descriptor);
        let first = matches
            .next()
            .ok_or(CatalogError::NotFound(*descriptor))?;
        let extra = matches.count();
        if extra > 0 {
            return Err(CatalogError::Ambiguous {
                descriptor: *descriptor,
                matches: extra + 1,
            });
        }
        Ok(first)
    }
}

impl TryFrom<Vec<Card>> for Deck {
    type Error = CatalogError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::from_cards(cards)
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_deck_shape() {
        let deck = Deck::unshuffled();
        assert_eq!(deck.len(), 18);

        for theater in Theater::ALL {
            for rank in 1..=6 {
                let descriptor = CardDescriptor::default().in_theater(theater).with_rank(rank);
                assert!(deck.find(&descriptor).is_ok(), "{descriptor}");
            }
        }
    }

    #[test]
    fn test_cannot_find_missing_rank() {
        let deck = Deck::unshuffled();
        let descriptor = CardDescriptor::default().in_theater(Theater::Air).with_rank(7);

        assert_eq!(deck.find(&descriptor), Err(CatalogError::NotFound(descriptor)));
    }

    #[test]
    fn test_ambiguous_descriptor() {
        let deck = Deck::unshuffled();
        let descriptor = CardDescriptor::of_type(CardTypeKey::Heavy);

        assert_eq!(
            deck.find(&descriptor),
            Err(CatalogError::Ambiguous { descriptor, matches: 3 })
        );
        assert_eq!(deck.find_all(&descriptor).count(), 3);
    }

    #[test]
    fn test_found_card_outlives_descriptor() {
        let deck = Deck::unshuffled();
        let bombers = {
            let descriptor = CardDescriptor::of_type(CardTypeKey::Heavy).in_theater(Theater::Air);
            deck.find(&descriptor).unwrap()
        };
        let mut support = deck.find_all(&CardDescriptor::of_type(CardTypeKey::Support));

        assert_eq!(bombers.id, CardId::new(6));
        assert_eq!(support.next().map(|card| card.id), Some(CardId::new(1)));
        assert!(support.next().is_none());
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let a = Deck::standard(&mut GameRng::new(7));
        let b = Deck::standard(&mut GameRng::new(7));
        let c = Deck::standard(&mut GameRng::new(8));

        assert_eq!(a, b);
        assert_ne!(a.cards(), c.cards());

        let mut ids: Vec<_> = a.cards().iter().map(|c| c.id.raw()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=18).collect::<Vec<_>>());
    }

    #[test]
    fn test_lookup_survives_shuffle() {
        let deck = Deck::standard(&mut GameRng::new(3));
        let support = deck.lookup(CardId::new(1)).unwrap();

        assert!(support.is(CardTypeKey::Support));
        assert_eq!(deck.lookup(CardId::new(99)), Err(CatalogError::UnknownCard(CardId::new(99))));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let card = Card::new(CardId::new(1), CardTypeKey::Heavy, Theater::Sea).unwrap();
        let err = Deck::from_cards(vec![card.clone(), card]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateCard(CardId::new(1)));
    }

    #[test]
    fn test_deck_serializes_as_card_list() {
        let deck = Deck::standard(&mut GameRng::new(11));
        let json = serde_json::to_string(&deck).unwrap();
        let back: Deck = serde_json::from_str(&json).unwrap();

        assert_eq!(back, deck);
    }
}
