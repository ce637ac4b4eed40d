//! Move-indexed state derivation.
//!
//! Every observable fact about a round is a function of a prefix of the
//! move log: `D(n, key)` is the value of quantity `D` after the first `n`
//! moves. Each quantity has a base value at `n = 0` and a step that folds
//! move `n - 1` (and the player who made it) into `D(n - 1)`.
//!
//! ## Memoization
//!
//! Each derived quantity owns one `Memo` table keyed by `(n, key)`. The
//! log is append-only, so an entry for `n` can never go stale and tables
//! are never invalidated. Tables are persistent `im` maps: cloning a round
//! for a preview shares every existing entry and the trial's speculative
//! entries are dropped with it.
//!
//! Recursion runs from `n` down to the nearest cached prefix, so appending
//! one move and querying the new state costs one step per quantity.

pub mod board;
pub mod hands;
pub mod snapshot;
pub mod turn;

pub use board::{BoardState, CardLocation, PlacedCard};
pub use snapshot::Snapshot;

use im::HashMap;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::trace;

use crate::cards::CardId;
use crate::core::{Player, Theater};
use crate::effects::{CardStrengths, GlobalEffects, PlayerEffects, TheaterEffects, TheaterStrength};
use crate::round::Round;
use crate::stack::DecisionStack;

/// Hit and miss counters of one memo table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemoStats {
    /// Values currently stored.
    pub entries: usize,
    /// Lookups answered from the table.
    pub hits: u64,
    /// Lookups that had to compute a value.
    pub misses: u64,
}

/// Memo table for one derived quantity.
#[derive(Clone, Debug)]
pub(crate) struct Memo<K, V>
where
    K: Clone + Hash + Eq,
    V: Clone,
{
    name: &'static str,
    entries: HashMap<(usize, K), V>,
    hits: u64,
    misses: u64,
}

impl<K, V> Memo<K, V>
where
    K: Clone + Hash + Eq,
    V: Clone,
{
    fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    fn get(&mut self, n: usize, key: &K) -> Option<V> {
        let found = self.entries.get(&(n, key.clone())).cloned();
        if found.is_some() {
            self.hits += 1;
        }
        found
    }

    fn insert(&mut self, n: usize, key: K, value: V) {
        self.misses += 1;
        self.entries.insert((n, key), value);
    }

    fn stats(&self) -> MemoStats {
        MemoStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

/// All memo tables of a round.
#[derive(Clone, Debug)]
pub(crate) struct Caches {
    pub(crate) board: Memo<(), BoardState>,
    pub(crate) hand: Memo<Player, im::Vector<CardId>>,
    pub(crate) deck: Memo<(), im::Vector<CardId>>,
    pub(crate) discard: Memo<(), im::Vector<CardId>>,
    pub(crate) last_card_played: Memo<Player, Option<CardId>>,
    pub(crate) card_location: Memo<CardId, Option<CardLocation>>,
    pub(crate) card_face_up: Memo<CardId, bool>,
    pub(crate) stack: Memo<(), DecisionStack>,
    pub(crate) active_player: Memo<(), Player>,
    pub(crate) turn_start: Memo<(), usize>,
    pub(crate) toggled: Memo<(), bool>,
    pub(crate) redeployments: Memo<Player, u32>,
    pub(crate) card_strength: Memo<(), CardStrengths>,
    pub(crate) theater_strength: Memo<(), TheaterStrength>,
    pub(crate) global_effects: Memo<(), GlobalEffects>,
    pub(crate) theater_effects: Memo<Theater, TheaterEffects>,
    pub(crate) player_effects: Memo<Player, PlayerEffects>,
}

impl Default for Caches {
    fn default() -> Self {
        Self {
            board: Memo::new("board"),
            hand: Memo::new("hand"),
            deck: Memo::new("deck"),
            discard: Memo::new("discard"),
            last_card_played: Memo::new("last_card_played"),
            card_location: Memo::new("card_location"),
            card_face_up: Memo::new("card_face_up"),
            stack: Memo::new("stack"),
            active_player: Memo::new("active_player"),
            turn_start: Memo::new("turn_start"),
            toggled: Memo::new("toggled"),
            redeployments: Memo::new("redeployments"),
            card_strength: Memo::new("card_strength"),
            theater_strength: Memo::new("theater_strength"),
            global_effects: Memo::new("global_effects"),
            theater_effects: Memo::new("theater_effects"),
            player_effects: Memo::new("player_effects"),
        }
    }
}

impl Caches {
    /// Counters for every table, keyed by table name.
    pub(crate) fn stats(&self) -> BTreeMap<&'static str, MemoStats> {
        [
            (self.board.name, self.board.stats()),
            (self.hand.name, self.hand.stats()),
            (self.deck.name, self.deck.stats()),
            (self.discard.name, self.discard.stats()),
            (self.last_card_played.name, self.last_card_played.stats()),
            (self.card_location.name, self.card_location.stats()),
            (self.card_face_up.name, self.card_face_up.stats()),
            (self.stack.name, self.stack.stats()),
            (self.active_player.name, self.active_player.stats()),
            (self.turn_start.name, self.turn_start.stats()),
            (self.toggled.name, self.toggled.stats()),
            (self.redeployments.name, self.redeployments.stats()),
            (self.card_strength.name, self.card_strength.stats()),
            (self.theater_strength.name, self.theater_strength.stats()),
            (self.global_effects.name, self.global_effects.stats()),
            (self.theater_effects.name, self.theater_effects.stats()),
            (self.player_effects.name, self.player_effects.stats()),
        ]
        .into_iter()
        .collect()
    }
}

impl Round {
    /// Look up `(n, key)` in a memo table, computing and storing it on a miss.
    ///
    /// The cache borrow is released before `compute` runs, so derivations
    /// may recurse into any table, including this one.
    pub(crate) fn memoized<K, V>(
        &self,
        table: fn(&mut Caches) -> &mut Memo<K, V>,
        n: usize,
        key: K,
        compute: impl FnOnce() -> V,
    ) -> V
    where
        K: Clone + Hash + Eq + Debug,
        V: Clone,
    {
        let cached = table(&mut self.caches.borrow_mut()).get(n, &key);
        if let Some(value) = cached {
            return value;
        }

        let value = compute();

        let mut caches = self.caches.borrow_mut();
        let memo = table(&mut caches);
        trace!(table = memo.name, n, key = ?key, "memo miss");
        memo.insert(n, key, value.clone());
        value
    }
}
