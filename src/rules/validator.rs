//! Move legality.
//!
//! Every submitted move is checked against the state derived from the
//! current log before anything is appended. Checks run in a fixed order so
//! that a move breaking several rules always reports the same error.
//!
//! Card play: `GameComplete`, `WrongPlayer`, unknown card, `HandMismatch`,
//! `DecisionPending`, `TheaterMismatch`.
//!
//! Decision: `GameComplete`, `NoDecisionAnticipated`, `WrongPlayer`,
//! `WrongType`, `InvalidTarget`.
//!
//! Surrender: `GameComplete`, then `WrongPlayer` if a player was claimed.

use crate::cards::{Card, CardId};
use crate::core::{Player, RoundError, TargetViolation, Theater};
use crate::derive::CardLocation;
use crate::effects::{PlayerEffect, AERODROME_MAX_RANK};
use crate::moves::{Decision, Move};
use crate::round::Round;
use crate::stack::{AnticipatedDecision, Targeting};

impl Round {
    /// Validate `mv` as the next move. `claimed` is the player submitting
    /// it, when known.
    pub(crate) fn validate_move(&self, mv: &Move, claimed: Option<Player>) -> Result<(), RoundError> {
        let n = self.log.len();
        if self.is_complete(n) {
            return Err(RoundError::GameComplete { attempted: mv.clone() });
        }

        match mv {
            Move::Card {
                card,
                theater,
                face_up,
            } => self.validate_card_play(n, *card, *theater, *face_up, claimed),
            Move::Decision { decision } => self.validate_decision(n, decision, claimed),
            Move::Surrender => check_claim(self.active_player(n), claimed),
        }
    }

    fn validate_card_play(
        &self,
        n: usize,
        card_id: CardId,
        theater: Theater,
        face_up: bool,
        claimed: Option<Player>,
    ) -> Result<(), RoundError> {
        let actor = self.active_player(n);
        check_claim(actor, claimed)?;

        let card = self.deck.lookup(card_id)?;
        let playable = if self.config.check_hand {
            self.hand(n, actor).contains(&card_id)
        } else {
            matches!(
                self.card_location(n, card_id),
                Some(CardLocation::Hand(_) | CardLocation::Deck)
            )
        };
        if !playable {
            return Err(RoundError::HandMismatch {
                card: card_id,
                player: actor,
            });
        }

        if let Some(pending) = self.decision_stack(n).top() {
            return Err(RoundError::DecisionPending {
                pending: pending.kind,
                player: pending.player,
            });
        }

        if face_up && card.theater != theater && !self.may_play_anywhere(n, actor, card) {
            return Err(RoundError::TheaterMismatch {
                card: card_id,
                expected: card.theater,
                actual: theater,
            });
        }
        Ok(())
    }

    /// Air Drop and Aerodrome exceptions to the theater rule.
    fn may_play_anywhere(&self, n: usize, player: Player, card: &Card) -> bool {
        let effects = self.player_effects(n, player);
        effects.contains(&PlayerEffect::AirDrop)
            || (effects.contains(&PlayerEffect::Aerodrome) && card.rank() <= AERODROME_MAX_RANK)
    }

    fn validate_decision(&self, n: usize, decision: &Decision, claimed: Option<Player>) -> Result<(), RoundError> {
        let stack = self.decision_stack(n);
        let Some(top) = stack.top() else {
            return Err(RoundError::NoDecisionAnticipated {
                attempted: decision.kind(),
            });
        };
        check_claim(top.player, claimed)?;

        if decision.kind() != top.kind {
            return Err(RoundError::WrongType {
                expected: top.kind,
                actual: decision.kind(),
            });
        }

        self.validate_target(n, top, decision)
            .map_err(|violation| RoundError::invalid_target(top.kind, violation))
    }

    fn validate_target(
        &self,
        n: usize,
        pending: &AnticipatedDecision,
        decision: &Decision,
    ) -> Result<(), TargetViolation> {
        let board = self.board(n);
        let permutation = &self.config.permutation;
        let player = pending.player;

        match *decision {
            Decision::Flip {
                targeted_player,
                theater,
            } => {
                match pending.targeting {
                    Targeting::AdjacentTo(source) if !permutation.is_adjacent(theater, source) => {
                        return Err(TargetViolation::NotAdjacent {
                            theater,
                            source_theater: source,
                        });
                    }
                    Targeting::OwnCards if targeted_player != player => {
                        return Err(TargetViolation::NotOwnCard {
                            player,
                            targeted: targeted_player,
                        });
                    }
                    _ => {}
                }
                if board.stack(theater, targeted_player).is_empty() {
                    return Err(TargetViolation::EmptyStack {
                        theater,
                        player: targeted_player,
                    });
                }
            }
            Decision::Reinforce { made: Some(choice) } => {
                if let Targeting::AdjacentTo(source) = pending.targeting {
                    if !permutation.is_adjacent(choice.theater, source) {
                        return Err(TargetViolation::NotAdjacent {
                            theater: choice.theater,
                            source_theater: source,
                        });
                    }
                }
                if self.remaining_deck(n).is_empty() {
                    return Err(TargetViolation::DeckEmpty);
                }
            }
            Decision::Transport { made: Some(choice) } => {
                if board
                    .card_at(choice.origin_theater, player, choice.origin_index_from_top)
                    .is_none()
                {
                    return Err(TargetViolation::NoSuchCard {
                        theater: choice.origin_theater,
                        player,
                        index: choice.origin_index_from_top,
                    });
                }
                if choice.origin_theater == choice.destination_theater {
                    return Err(TargetViolation::SameTheater {
                        theater: choice.origin_theater,
                    });
                }
            }
            Decision::Redeploy { made } => {
                let placed = board
                    .card_at(made.theater, player, made.index_from_top)
                    .ok_or(TargetViolation::NoSuchCard {
                        theater: made.theater,
                        player,
                        index: made.index_from_top,
                    })?;
                if placed.face_up {
                    return Err(TargetViolation::FaceUp {
                        theater: made.theater,
                        index: made.index_from_top,
                    });
                }
            }
            Decision::Reinforce { made: None } | Decision::Transport { made: None } => {}
        }
        Ok(())
    }
}

fn check_claim(expected: Player, claimed: Option<Player>) -> Result<(), RoundError> {
    match claimed {
        Some(actual) if actual != expected => Err(RoundError::WrongPlayer { expected, actual }),
        _ => Ok(()),
    }
}
