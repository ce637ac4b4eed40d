//! Rules: move validation, completion and victory.
//!
//! - `validator`: legality of card plays, decisions and surrender
//! - `arbiter`: when a round ends and who wins it
//! - `engine`: the `RulesEngine` trait drivers use to play a round
//!
//! Validation always runs against state derived from the current log and
//! never mutates it.

pub mod arbiter;
pub mod engine;
mod validator;

pub use arbiter::GameResult;
pub use engine::RulesEngine;
