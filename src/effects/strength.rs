//! Card and theater strength.
//!
//! A face-up card is worth its rank and a face-down card is worth 2, or 4
//! while its owner has a face-up Escalation. Every card covered by a
//! face-up Cover Fire in the same stack is worth exactly 4, whatever its
//! face. A theater's total for a player is the sum of that player's cards
//! there, plus 3 for each face-up Support the player has in an adjacent
//! theater.

use im::HashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardTypeKey, Deck};
use crate::core::{Player, PlayerMap, Theater, TheaterMap, TheaterPermutation};
use crate::derive::BoardState;
use crate::round::Round;

pub const FACE_DOWN_STRENGTH: i64 = 2;
pub const ESCALATED_STRENGTH: i64 = 4;
pub const COVERED_STRENGTH: i64 = 4;
pub const SUPPORT_BONUS: i64 = 3;

/// Effective strength of every card on the board.
pub type CardStrengths = HashMap<CardId, i64>;

/// Total strength per theater and player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TheaterStrength {
    totals: TheaterMap<PlayerMap<i64>>,
}

impl TheaterStrength {
    #[must_use]
    pub fn get(&self, theater: Theater, player: Player) -> i64 {
        self.totals[theater][player]
    }

    /// Player controlling a theater. Ties go to player One.
    #[must_use]
    pub fn controller(&self, theater: Theater) -> Player {
        if self.get(theater, Player::One) >= self.get(theater, Player::Two) {
            Player::One
        } else {
            Player::Two
        }
    }

    /// Number of theaters `player` controls.
    #[must_use]
    pub fn controlled_by(&self, player: Player) -> usize {
        Theater::ALL.iter().filter(|&&t| self.controller(t) == player).count()
    }
}

/// Compute every card's effective strength.
#[must_use]
pub fn card_strengths(board: &BoardState, deck: &Deck) -> CardStrengths {
    let escalated = PlayerMap::new(|player| {
        board
            .face_up_of_type(deck, CardTypeKey::Escalation)
            .any(|(_, owner, _)| owner == player)
    });

    let mut strengths = HashMap::new();
    for theater in Theater::ALL {
        for player in Player::ALL {
            let mut covered = false;
            for placed in board.stack(theater, player) {
                let Some(card) = deck.get(placed.card) else {
                    continue;
                };
                let strength = if covered {
                    COVERED_STRENGTH
                } else if !placed.face_up {
                    if escalated[player] {
                        ESCALATED_STRENGTH
                    } else {
                        FACE_DOWN_STRENGTH
                    }
                } else {
                    i64::from(card.rank())
                };
                strengths.insert(placed.card, strength);
                // Stacks iterate top first, so everything after this is covered.
                if placed.face_up && card.is(CardTypeKey::CoverFire) {
                    covered = true;
                }
            }
        }
    }
    strengths
}

/// Sum card strengths per theater and apply Support bonuses.
#[must_use]
pub fn theater_strength(
    board: &BoardState,
    strengths: &CardStrengths,
    deck: &Deck,
    permutation: &TheaterPermutation,
) -> TheaterStrength {
    let mut totals: TheaterMap<PlayerMap<i64>> = TheaterMap::default();

    for (theater, player, _, placed) in board.iter() {
        totals[theater][player] += strengths.get(&placed.card).copied().unwrap_or(0);
    }
    for (theater, player, _) in board.face_up_of_type(deck, CardTypeKey::Support) {
        for adjacent in permutation.adjacent(theater) {
            totals[adjacent][player] += SUPPORT_BONUS;
        }
    }

    TheaterStrength { totals }
}

impl Round {
    pub(crate) fn card_strengths(&self, n: usize) -> CardStrengths {
        self.memoized(|c| &mut c.card_strength, n, (), || {
            card_strengths(&self.board(n), &self.deck)
        })
    }

    pub(crate) fn theater_strength(&self, n: usize) -> TheaterStrength {
        self.memoized(|c| &mut c.theater_strength, n, (), || {
            theater_strength(
                &self.board(n),
                &self.card_strengths(n),
                &self.deck,
                &self.config.permutation,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardDescriptor;

    fn id_of(deck: &Deck, key: CardTypeKey, theater: Theater) -> CardId {
        deck.find(&CardDescriptor::of_type(key).in_theater(theater))
            .unwrap()
            .id
    }

    #[test]
    fn test_face_up_rank_and_face_down_two() {
        let deck = Deck::unshuffled();
        let tanks = id_of(&deck, CardTypeKey::Heavy, Theater::Land);
        let bombers = id_of(&deck, CardTypeKey::Heavy, Theater::Air);
        let mut board = BoardState::default();
        board.place(Theater::Land, Player::One, tanks, true);
        board.place(Theater::Air, Player::Two, bombers, false);

        let strengths = card_strengths(&board, &deck);
        assert_eq!(strengths.get(&tanks), Some(&6));
        assert_eq!(strengths.get(&bombers), Some(&2));
    }

    #[test]
    fn test_escalation_boosts_only_owner() {
        let deck = Deck::unshuffled();
        let escalation = id_of(&deck, CardTypeKey::Escalation, Theater::Sea);
        let mine = id_of(&deck, CardTypeKey::Heavy, Theater::Air);
        let theirs = id_of(&deck, CardTypeKey::Heavy, Theater::Land);
        let mut board = BoardState::default();
        board.place(Theater::Sea, Player::One, escalation, true);
        board.place(Theater::Air, Player::One, mine, false);
        board.place(Theater::Land, Player::Two, theirs, false);

        let strengths = card_strengths(&board, &deck);
        assert_eq!(strengths.get(&mine), Some(&ESCALATED_STRENGTH));
        assert_eq!(strengths.get(&theirs), Some(&FACE_DOWN_STRENGTH));
    }

    #[test]
    fn test_cover_fire_overrides_covered_cards() {
        let deck = Deck::unshuffled();
        let heavy = id_of(&deck, CardTypeKey::Heavy, Theater::Land);
        let ambush = id_of(&deck, CardTypeKey::Ambush, Theater::Land);
        let cover = id_of(&deck, CardTypeKey::CoverFire, Theater::Land);
        let mut board = BoardState::default();
        board.place(Theater::Land, Player::One, heavy, true);
        board.place(Theater::Land, Player::One, ambush, false);
        board.place(Theater::Land, Player::One, cover, true);

        let strengths = card_strengths(&board, &deck);
        assert_eq!(strengths.get(&cover), Some(&4));
        assert_eq!(strengths.get(&ambush), Some(&COVERED_STRENGTH));
        assert_eq!(strengths.get(&heavy), Some(&COVERED_STRENGTH));

        let totals = theater_strength(&board, &strengths, &deck, &TheaterPermutation::default());
        assert_eq!(totals.get(Theater::Land, Player::One), 12);
    }

    #[test]
    fn test_face_down_cover_fire_covers_nothing() {
        let deck = Deck::unshuffled();
        let heavy = id_of(&deck, CardTypeKey::Heavy, Theater::Land);
        let cover = id_of(&deck, CardTypeKey::CoverFire, Theater::Land);
        let mut board = BoardState::default();
        board.place(Theater::Land, Player::Two, heavy, true);
        board.place(Theater::Land, Player::Two, cover, false);

        let strengths = card_strengths(&board, &deck);
        assert_eq!(strengths.get(&heavy), Some(&6));
    }

    #[test]
    fn test_support_reaches_adjacent_theaters() {
        let deck = Deck::unshuffled();
        let support = id_of(&deck, CardTypeKey::Support, Theater::Air);
        let perm = TheaterPermutation::new([Theater::Land, Theater::Air, Theater::Sea]).unwrap();
        let mut board = BoardState::default();
        board.place(Theater::Air, Player::Two, support, true);

        let strengths = card_strengths(&board, &deck);
        let totals = theater_strength(&board, &strengths, &deck, &perm);

        assert_eq!(totals.get(Theater::Air, Player::Two), 1);
        assert_eq!(totals.get(Theater::Land, Player::Two), SUPPORT_BONUS);
        assert_eq!(totals.get(Theater::Sea, Player::Two), SUPPORT_BONUS);
        assert_eq!(totals.controlled_by(Player::Two), 3);
    }

    #[test]
    fn test_ties_go_to_player_one() {
        let totals = TheaterStrength::default();
        assert_eq!(totals.controller(Theater::Sea), Player::One);
        assert_eq!(totals.controlled_by(Player::One), 3);
    }
}
