//! Read-only view of a round after a prefix of its log.

use im::Vector;

use super::board::{BoardState, CardLocation};
use crate::cards::{Card, CardId};
use crate::core::{CatalogError, Player, RoundError, Theater};
use crate::effects::{CardStrengths, GlobalEffects, PlayerEffects, TheaterEffects, TheaterStrength};
use crate::round::{BoardView, Round};
use crate::rules::GameResult;
use crate::stack::{AnticipatedDecision, DecisionStack};

/// Every derived quantity of a round as of `move_count` moves.
///
/// Obtained from [`Round::at`] or [`Round::current`]. Queries are answered
/// from the round's memo tables and return persistent values, so holding
/// on to them is cheap.
///
/// ```
/// use theater_engine::core::Player;
/// use theater_engine::round::RoundBuilder;
///
/// let round = RoundBuilder::new().build(42).unwrap();
/// let start = round.current();
///
/// assert_eq!(start.move_count(), 0);
/// assert_eq!(start.active_player(), Player::One);
/// assert_eq!(start.hand(Player::Two).len(), 6);
/// assert!(start.result().is_none());
/// ```
#[derive(Clone, Copy)]
pub struct Snapshot<'a> {
    round: &'a Round,
    n: usize,
}

impl<'a> Snapshot<'a> {
    pub(crate) fn new(round: &'a Round, n: usize) -> Self {
        Self { round, n }
    }

    /// Number of moves this snapshot covers.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.n
    }

    #[must_use]
    pub fn board(&self) -> BoardState {
        self.round.board(self.n)
    }

    #[must_use]
    pub fn hand(&self, player: Player) -> Vector<CardId> {
        self.round.hand(self.n, player)
    }

    /// A hand resolved to card instances.
    #[must_use]
    pub fn hand_cards(&self, player: Player) -> Vec<&'a Card> {
        let deck = self.round.deck();
        self.hand(player).iter().filter_map(|&id| deck.get(id)).collect()
    }

    /// Undealt cards, next card first.
    #[must_use]
    pub fn remaining_deck(&self) -> Vector<CardId> {
        self.round.remaining_deck(self.n)
    }

    #[must_use]
    pub fn discard_pile(&self) -> Vector<CardId> {
        self.round.discard_pile(self.n)
    }

    #[must_use]
    pub fn decision_stack(&self) -> DecisionStack {
        self.round.decision_stack(self.n)
    }

    /// The decision that must be resolved before anything else.
    #[must_use]
    pub fn pending_decision(&self) -> Option<AnticipatedDecision> {
        self.decision_stack().top().copied()
    }

    #[must_use]
    pub fn active_player(&self) -> Player {
        self.round.active_player(self.n)
    }

    /// Move count at which the current turn began.
    #[must_use]
    pub fn turn_start(&self) -> usize {
        self.round.turn_start(self.n)
    }

    #[must_use]
    pub fn turn_order_toggled(&self) -> bool {
        self.round.turn_order_toggled(self.n)
    }

    /// Redeploys by `player` that returned a card to hand.
    #[must_use]
    pub fn redeployments(&self, player: Player) -> u32 {
        self.round.redeployments(self.n, player)
    }

    #[must_use]
    pub fn card_strengths(&self) -> CardStrengths {
        self.round.card_strengths(self.n)
    }

    /// Effective strength of a card, if it is on the board.
    #[must_use]
    pub fn card_strength(&self, card: CardId) -> Option<i64> {
        self.card_strengths().get(&card).copied()
    }

    #[must_use]
    pub fn theater_strength(&self) -> TheaterStrength {
        self.round.theater_strength(self.n)
    }

    pub fn card_location(&self, card: CardId) -> Result<CardLocation, RoundError> {
        self.round
            .card_location(self.n, card)
            .ok_or(RoundError::Catalog(CatalogError::UnknownCard(card)))
    }

    /// Whether the card is on the board face-up.
    #[must_use]
    pub fn card_face_up(&self, card: CardId) -> bool {
        self.round.card_face_up(self.n, card)
    }

    #[must_use]
    pub fn last_card_played(&self, player: Player) -> Option<CardId> {
        self.round.last_card_played(self.n, player)
    }

    #[must_use]
    pub fn global_effects(&self) -> GlobalEffects {
        self.round.global_effects(self.n)
    }

    #[must_use]
    pub fn theater_effects(&self, theater: Theater) -> TheaterEffects {
        self.round.theater_effects(self.n, theater)
    }

    #[must_use]
    pub fn player_effects(&self, player: Player) -> PlayerEffects {
        self.round.player_effects(self.n, player)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.round.is_complete(self.n)
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.round.result(self.n)
    }

    #[must_use]
    pub fn victor(&self) -> Option<Player> {
        self.result().map(|result| result.victor())
    }

    /// Board and strengths laid out in permutation order.
    #[must_use]
    pub fn board_view(&self) -> BoardView {
        BoardView::new(
            &self.board(),
            &self.theater_strength(),
            self.round.deck(),
            &self.round.config().permutation,
        )
    }
}

impl std::fmt::Debug for Snapshot<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot").field("move_count", &self.n).finish_non_exhaustive()
    }
}
