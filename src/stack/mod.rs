//! Decision-anticipation stack.
//!
//! Some cards prompt a follow-up choice when revealed: a flip, a
//! reinforcement, a transport or a redeploy. Those choices are pushed onto
//! a LIFO stack of [`AnticipatedDecision`]s and must all be resolved, top
//! first, before another card may be played. While the stack is non-empty
//! the player owning its top entry is the one due to act.
//!
//! ## Resolution Order
//!
//! ```text
//! Disrupt played face-up by ONE
//!   push Flip(ONE, own cards)
//!   push Flip(TWO, own cards)     <- top, resolves first
//! TWO flips a face-down Ambush
//!   pop  Flip(TWO)
//!   push Flip(TWO, any)           <- chained reveal, resolves next
//! ```

mod anticipated;
mod resolver;

pub use anticipated::{anticipated_for, AnticipatedDecision, DecisionKind, Targeting};
pub use resolver::DecisionStack;
