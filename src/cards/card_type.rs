//! The static card catalog.
//!
//! Fourteen card types exist. Most are bound to one theater; Maneuver and
//! Heavy appear once per theater. Rank doubles as base strength.

use serde::{Deserialize, Serialize};

use crate::core::Theater;

/// How a card's printed effect behaves once face-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectKind {
    /// Resolves once, when the card is revealed.
    Instant,
    /// Applies for as long as the card stays face-up.
    Ongoing,
    /// No effect beyond strength.
    Regular,
}

/// Key identifying a card type in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardTypeKey {
    Support,
    AirDrop,
    Maneuver,
    Aerodrome,
    Containment,
    Heavy,
    Reinforce,
    Ambush,
    CoverFire,
    Disrupt,
    Transport,
    Escalation,
    Redeploy,
    Blockade,
}

/// Static data for one card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardType {
    pub key: CardTypeKey,
    /// Theater the type is bound to, if any.
    pub theater: Option<Theater>,
    pub rank: u8,
    pub default_name: &'static str,
    pub effect_kind: EffectKind,
    pub description: Option<&'static str>,
}

const fn card_type(
    key: CardTypeKey,
    theater: Option<Theater>,
    rank: u8,
    default_name: &'static str,
    effect_kind: EffectKind,
    description: Option<&'static str>,
) -> CardType {
    CardType {
        key,
        theater,
        rank,
        default_name,
        effect_kind,
        description,
    }
}

const CATALOG: [CardType; 14] = [
    card_type(
        CardTypeKey::Support,
        Some(Theater::Air),
        1,
        "Support",
        EffectKind::Ongoing,
        Some("You gain +3 strength in each adjacent theater."),
    ),
    card_type(
        CardTypeKey::AirDrop,
        Some(Theater::Air),
        2,
        "Air Drop",
        EffectKind::Instant,
        Some("On your next turn, you may play a battle card to a non-matching theater."),
    ),
    card_type(
        CardTypeKey::Maneuver,
        None,
        3,
        "Maneuver",
        EffectKind::Instant,
        Some("FLIP a Battle Card in an adjacent theater."),
    ),
    card_type(
        CardTypeKey::Aerodrome,
        Some(Theater::Air),
        4,
        "Aerodrome",
        EffectKind::Ongoing,
        Some("You may play Battle Cards of strength 3 or less to non-matching theaters."),
    ),
    card_type(
        CardTypeKey::Containment,
        Some(Theater::Air),
        5,
        "Containment",
        EffectKind::Ongoing,
        Some("If either player plays a Battle Card face-down, immediately discard that card."),
    ),
    card_type(
        CardTypeKey::Heavy,
        None,
        6,
        "Heavy",
        EffectKind::Regular,
        None,
    ),
    card_type(
        CardTypeKey::Reinforce,
        Some(Theater::Land),
        1,
        "Reinforce",
        EffectKind::Instant,
        Some("Look at the top card of the Battle Deck. You may play it face down to an adjacent theater."),
    ),
    card_type(
        CardTypeKey::Ambush,
        Some(Theater::Land),
        2,
        "Ambush",
        EffectKind::Instant,
        Some("FLIP a Battle Card in any theater."),
    ),
    card_type(
        CardTypeKey::CoverFire,
        Some(Theater::Land),
        4,
        "Cover Fire",
        EffectKind::Ongoing,
        Some("All Battle Cards covered by this card are now strength 4."),
    ),
    card_type(
        CardTypeKey::Disrupt,
        Some(Theater::Land),
        5,
        "Disrupt",
        EffectKind::Instant,
        Some("Your opponent chooses and FLIPS 1 of their Battle Cards and then you FLIP 1 of yours."),
    ),
    card_type(
        CardTypeKey::Transport,
        Some(Theater::Sea),
        1,
        "Transport",
        EffectKind::Instant,
        Some("You may MOVE 1 of your Battle Cards to a different theater."),
    ),
    card_type(
        CardTypeKey::Escalation,
        Some(Theater::Sea),
        2,
        "Escalation",
        EffectKind::Ongoing,
        Some("All of your face-down cards are now Strength 4."),
    ),
    card_type(
        CardTypeKey::Redeploy,
        Some(Theater::Sea),
        4,
        "Redeploy",
        EffectKind::Instant,
        Some("Return 1 of your face-down cards to your hand. If you do, gain an extra turn."),
    ),
    card_type(
        CardTypeKey::Blockade,
        Some(Theater::Sea),
        5,
        "Blockade",
        EffectKind::Ongoing,
        Some("If a Battle Card is played in an adjacent theater with 3 or more cards already in it (counting both players' cards), discard that card with no effect."),
    ),
];

impl CardTypeKey {
    /// Every card type, in catalog order.
    pub const ALL: [CardTypeKey; 14] = [
        CardTypeKey::Support,
        CardTypeKey::AirDrop,
        CardTypeKey::Maneuver,
        CardTypeKey::Aerodrome,
        CardTypeKey::Containment,
        CardTypeKey::Heavy,
        CardTypeKey::Reinforce,
        CardTypeKey::Ambush,
        CardTypeKey::CoverFire,
        CardTypeKey::Disrupt,
        CardTypeKey::Transport,
        CardTypeKey::Escalation,
        CardTypeKey::Redeploy,
        CardTypeKey::Blockade,
    ];

    /// Look up the static data for this type.
    #[must_use]
    pub fn card_type(self) -> &'static CardType {
        // CATALOG is laid out in declaration order.
        &CATALOG[self as usize]
    }
}
