//! Card effects: strength and status.
//!
//! Instant effects are modeled as anticipated decisions (see `stack`).
//! This module covers the effects that hold for as long as their card is
//! face-up:
//!
//! - `strength`: per-card and per-theater strength (Escalation, Cover Fire,
//!   Support)
//! - `status`: global, theater and player statuses (Containment, Blockade,
//!   Air Drop, Aerodrome)
//!
//! Both are pure functions of a board, wrapped in memoized derivations.

mod status;
mod strength;

pub use status::{
    global_effects, theater_effects, GlobalEffect, GlobalEffects, PlayerEffect, PlayerEffects, TheaterEffect,
    TheaterEffects, AERODROME_MAX_RANK, BLOCKADE_THRESHOLD,
};
pub use strength::{
    card_strengths, theater_strength, CardStrengths, TheaterStrength, COVERED_STRENGTH, ESCALATED_STRENGTH,
    FACE_DOWN_STRENGTH, SUPPORT_BONUS,
};
