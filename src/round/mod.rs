//! A single round: deck, configuration, move log and memo caches.
//!
//! `Round` is the owner of all per-round state and the only place moves
//! enter the log. Every submission is validated first; a rejected move
//! leaves the round exactly as it was.
//!
//! ## Submitting Moves
//!
//! - `play_card`, `play_decision`, `surrender`, `play_move`: validate and append
//! - `play_move_as`: as `play_move`, additionally checking who is submitting
//! - `check_move`: validate only
//! - `preview_*`: validate and return a disposable trial round with the move
//!   appended; the original round is never touched
//!
//! ## Querying
//!
//! `at(n)` and `current()` return a [`Snapshot`] exposing every derived
//! quantity as of `n` moves.
//!
//! ## Example
//!
//! ```
//! use theater_engine::core::{Player, Theater};
//! use theater_engine::round::RoundBuilder;
//!
//! let mut round = RoundBuilder::new().build(7).unwrap();
//! let card = round.current().hand(Player::One)[0];
//!
//! round.play_card(card, Theater::Air, false).unwrap();
//!
//! assert_eq!(round.current().active_player(), Player::Two);
//! assert_eq!(round.at(0).unwrap().hand(Player::One).len(), 6);
//! assert_eq!(round.current().hand(Player::One).len(), 5);
//! ```

mod view;

pub use view::{BoardView, TheaterView};

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use tracing::debug;

use crate::cards::{CardId, Deck};
use crate::core::{
    CatalogError, GameRng, Player, RecordError, RoundConfig, RoundError, Theater, TheaterPermutation,
};
use crate::derive::{Caches, MemoStats, Snapshot};
use crate::moves::{Decision, Move, MoveLog, RoundRecord};
use crate::rules::{GameResult, RulesEngine};
use crate::stack::DecisionKind;

/// Builder for creating a Round.
#[derive(Clone, Debug, Default)]
pub struct RoundBuilder {
    config: RoundConfig,
    deck: Option<Deck>,
}

impl RoundBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn permutation(mut self, permutation: TheaterPermutation) -> Self {
        self.config.permutation = permutation;
        self
    }

    pub fn hand_size(mut self, hand_size: usize) -> Self {
        self.config.hand_size = hand_size;
        self
    }

    /// Whether card plays must come from the acting player's hand.
    pub fn check_hand(mut self, check_hand: bool) -> Self {
        self.config.check_hand = check_hand;
        self
    }

    pub fn config(mut self, config: RoundConfig) -> Self {
        self.config = config;
        self
    }

    /// Deal from this deck, in its order, instead of shuffling the standard deck.
    pub fn deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Build the round. The seed shuffles the standard deck and is unused
    /// when an explicit deck was given.
    pub fn build(self, seed: u64) -> Result<Round, RoundError> {
        let deck = match self.deck {
            Some(deck) => deck,
            None => Deck::standard(&mut GameRng::new(seed)),
        };
        self.config.validate(deck.len())?;

        debug!(
            seed,
            permutation = ?self.config.permutation.order(),
            hand_size = self.config.hand_size,
            check_hand = self.config.check_hand,
            "round created"
        );
        Ok(Round::from_parts(self.config, deck, MoveLog::new()))
    }
}

/// A round of play.
#[derive(Clone)]
pub struct Round {
    pub(crate) config: RoundConfig,
    pub(crate) deck: Rc<Deck>,
    pub(crate) log: MoveLog,
    pub(crate) caches: RefCell<Caches>,
}

impl Round {
    fn from_parts(config: RoundConfig, deck: Deck, log: MoveLog) -> Self {
        Self {
            config,
            deck: Rc::new(deck),
            log,
            caches: RefCell::new(Caches::default()),
        }
    }

    #[must_use]
    pub fn builder() -> RoundBuilder {
        RoundBuilder::new()
    }

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[must_use]
    pub fn permutation(&self) -> TheaterPermutation {
        self.config.permutation
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    /// Number of moves played.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.log.len()
    }

    // === Queries ===

    /// State after the first `n` moves.
    pub fn at(&self, n: usize) -> Result<Snapshot<'_>, RoundError> {
        if n > self.log.len() {
            return Err(RoundError::OutOfRange {
                index: n,
                len: self.log.len(),
            });
        }
        Ok(Snapshot::new(self, n))
    }

    /// State after every move played so far.
    #[must_use]
    pub fn current(&self) -> Snapshot<'_> {
        Snapshot::new(self, self.log.len())
    }

    /// Hit and miss counters of every memo table.
    #[must_use]
    pub fn memo_stats(&self) -> BTreeMap<&'static str, MemoStats> {
        self.caches.borrow().stats()
    }

    // === Move Submission ===

    /// Validate and append a move, returning its log index.
    pub fn play_move(&mut self, mv: Move) -> Result<usize, RoundError> {
        self.submit(mv, None)
    }

    /// As [`Round::play_move`], rejecting the move with `WrongPlayer` unless
    /// `player` is due to act.
    pub fn play_move_as(&mut self, player: Player, mv: Move) -> Result<usize, RoundError> {
        self.submit(mv, Some(player))
    }

    pub fn play_card(&mut self, card: CardId, theater: Theater, face_up: bool) -> Result<usize, RoundError> {
        self.play_move(Move::card(card, theater, face_up))
    }

    pub fn play_decision(&mut self, decision: Decision) -> Result<usize, RoundError> {
        self.play_move(Move::decision(decision))
    }

    /// Concede the round on behalf of the player due to act.
    pub fn surrender(&mut self) -> Result<usize, RoundError> {
        self.play_move(Move::Surrender)
    }

    /// Validate a move without appending it.
    pub fn check_move(&self, mv: &Move) -> Result<(), RoundError> {
        self.validate_move(mv, None)
    }

    /// Validate a move and return a trial round with it appended.
    ///
    /// The trial shares this round's deck, log and memo entries; anything
    /// it computes stays with the trial.
    pub fn preview_move(&self, mv: Move) -> Result<Round, RoundError> {
        let mut trial = self.clone();
        trial.submit(mv, None)?;
        Ok(trial)
    }

    pub fn preview_card(&self, card: CardId, theater: Theater, face_up: bool) -> Result<Round, RoundError> {
        self.preview_move(Move::card(card, theater, face_up))
    }

    pub fn preview_decision(&self, decision: Decision) -> Result<Round, RoundError> {
        self.preview_move(Move::decision(decision))
    }

    pub fn preview_surrender(&self) -> Result<Round, RoundError> {
        self.preview_move(Move::Surrender)
    }

    fn submit(&mut self, mv: Move, claimed: Option<Player>) -> Result<usize, RoundError> {
        if let Err(error) = self.validate_move(&mv, claimed) {
            debug!(index = self.log.len(), mv = ?mv, %error, "move rejected");
            return Err(error);
        }

        let actor = self.active_player(self.log.len());
        let index = self.log.append(mv);
        debug!(index, %actor, mv = ?self.log[index], "move appended");
        Ok(index)
    }

    // === Interchange ===

    /// Configuration, deck and moves of this round.
    #[must_use]
    pub fn record(&self) -> RoundRecord {
        RoundRecord::new(
            self.config.clone(),
            Deck::clone(&self.deck),
            self.log.iter().cloned().collect(),
        )
    }

    /// Rebuild a round by submitting every recorded move through validation.
    pub fn replay(record: RoundRecord) -> Result<Round, RecordError> {
        record.config.validate(record.deck.len())?;
        let mut round = Round::from_parts(record.config, record.deck, MoveLog::new());

        for (index, mv) in record.moves.into_iter().enumerate() {
            round
                .play_move(mv)
                .map_err(|source| RecordError::Replay { index, source })?;
        }
        debug!(moves = round.log.len(), "round replayed");
        Ok(round)
    }

    /// Rebuild a round from a trusted record, skipping move validation.
    ///
    /// Only the configuration and the card ids are checked.
    pub fn restore(record: RoundRecord) -> Result<Round, RecordError> {
        record.config.validate(record.deck.len())?;
        for mv in &record.moves {
            if let Move::Card { card, .. } = mv {
                if record.deck.get(*card).is_none() {
                    return Err(RoundError::from(CatalogError::UnknownCard(*card)).into());
                }
            }
        }

        let log = record.moves.into_iter().collect();
        let round = Round::from_parts(record.config, record.deck, log);
        debug!(moves = round.log.len(), "round restored");
        Ok(round)
    }
}

impl std::fmt::Debug for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Round")
            .field("config", &self.config)
            .field("moves", &self.log.len())
            .finish_non_exhaustive()
    }
}

impl RulesEngine for Round {
    fn active_player(&self) -> Player {
        self.current().active_player()
    }

    fn candidate_moves(&self) -> Vec<Move> {
        let now = self.current();
        if now.is_complete() {
            return Vec::new();
        }

        let mut moves = Vec::new();
        match now.pending_decision() {
            Some(pending) => {
                let board = now.board();
                match pending.kind {
                    DecisionKind::Flip => {
                        for theater in Theater::ALL {
                            for player in Player::ALL {
                                moves.push(Decision::flip(player, theater).into());
                            }
                        }
                    }
                    DecisionKind::Reinforce => {
                        moves.push(Decision::reinforce(None).into());
                        for theater in Theater::ALL {
                            moves.push(Decision::reinforce(Some(theater)).into());
                        }
                    }
                    DecisionKind::Transport => {
                        moves.push(Decision::Transport { made: None }.into());
                        for (origin, owner, index, _) in board.iter() {
                            if owner != pending.player {
                                continue;
                            }
                            for destination in Theater::ALL {
                                moves.push(Decision::transport(origin, index, destination).into());
                            }
                        }
                    }
                    DecisionKind::Redeploy => {
                        for (theater, owner, index, placed) in board.iter() {
                            if owner == pending.player && !placed.face_up {
                                moves.push(Decision::redeploy(theater, index).into());
                            }
                        }
                    }
                }
            }
            None => {
                for &card in &now.hand(now.active_player()) {
                    for theater in Theater::ALL {
                        for face_up in [true, false] {
                            moves.push(Move::card(card, theater, face_up));
                        }
                    }
                }
            }
        }
        moves.push(Move::Surrender);
        moves
    }

    fn check(&self, mv: &Move) -> Result<(), RoundError> {
        self.check_move(mv)
    }

    fn apply(&mut self, mv: Move) -> Result<usize, RoundError> {
        self.play_move(mv)
    }

    fn result(&self) -> Option<GameResult> {
        self.current().result()
    }
}
