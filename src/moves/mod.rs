//! Moves, the move log and the round interchange record.
//!
//! ## Key Types
//!
//! - `Move`: a card play, a decision or a surrender
//! - `Decision`: resolution of the anticipated decision on top of the stack
//! - `MoveLog`: the append-only history every derived fact is computed from
//! - `RoundRecord`: configuration, deck and moves, for storage or transfer

pub mod log;
pub mod play;
pub mod record;

pub use log::MoveLog;
pub use play::{Decision, Move, RedeployChoice, ReinforceChoice, TransportChoice};
pub use record::RoundRecord;
