//! Turn order.
//!
//! Outside of decisions the players alternate. While the decision stack is
//! non-empty, the player owning the top decision acts. A successful
//! Redeploy grants an extra turn, which is tracked as a parity flag
//! (`turn_order_toggled`) rather than by rewriting the alternation.
//!
//! `turn_start(n)` is the last move count before `n` at which the stack was
//! empty: the point where the current turn began.

use crate::core::Player;
use crate::moves::{Decision, Move};
use crate::round::Round;

impl Round {
    /// Player due to act after the first `n` moves.
    pub(crate) fn active_player(&self, n: usize) -> Player {
        self.memoized(|c| &mut c.active_player, n, (), || {
            if n == 0 {
                return Player::One;
            }
            if let Some(top) = self.decision_stack(n).top() {
                return top.player;
            }
            let start = self.turn_start(n);
            let starter = self.active_player(start);
            if self.turn_order_toggled(n) != self.turn_order_toggled(start) {
                starter
            } else {
                starter.other()
            }
        })
    }

    /// Largest `k < n` with an empty decision stack. `n` must be positive.
    pub(crate) fn turn_start(&self, n: usize) -> usize {
        self.memoized(|c| &mut c.turn_start, n, (), || {
            let previous = n.saturating_sub(1);
            if previous == 0 || self.decision_stack(previous).is_empty() {
                previous
            } else {
                self.turn_start(previous)
            }
        })
    }

    /// Parity of effective redeployments since play began.
    pub(crate) fn turn_order_toggled(&self, n: usize) -> bool {
        self.memoized(|c| &mut c.toggled, n, (), || {
            if n == 0 {
                return false;
            }
            let start = self.turn_start(n);
            let starter = self.active_player(start);
            let count = self.redeployments(n, starter) + self.redeployments(start, starter.other());
            count % 2 == 1
        })
    }

    /// Redeploy decisions by `player` that returned a face-down card to hand.
    pub(crate) fn redeployments(&self, n: usize, player: Player) -> u32 {
        self.memoized(|c| &mut c.redeployments, n, player, || {
            let Some(index) = n.checked_sub(1) else {
                return 0;
            };
            let previous = self.redeployments(index, player);
            let Move::Decision {
                decision: Decision::Redeploy { made },
            } = &self.log[index]
            else {
                return previous;
            };
            let effective = self.active_player(index) == player
                && self
                    .board(index)
                    .card_at(made.theater, player, made.index_from_top)
                    .is_some_and(|placed| !placed.face_up);
            previous + u32::from(effective)
        })
    }
}
