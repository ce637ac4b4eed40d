//! Deterministic random number generation.
//!
//! The engine itself is pure; randomness only enters when a deck is
//! shuffled at round construction. Seeding keeps it reproducible.
//!
//! ```
//! use theater_engine::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut xs = vec![1, 2, 3, 4, 5];
//! let mut ys = xs.clone();
//! a.shuffle(&mut xs);
//! b.shuffle(&mut ys);
//! assert_eq!(xs, ys);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data: Vec<u32> = (1..=18).collect();

        rng.shuffle(&mut data);

        assert_ne!(data, (1..=18).collect::<Vec<_>>());
        data.sort_unstable();
        assert_eq!(data, (1..=18).collect::<Vec<_>>());
    }

    #[test]
    fn test_seed_fixes_order() {
        let mut a: Vec<u32> = (1..=18).collect();
        let mut b = a.clone();
        let mut c = a.clone();

        GameRng::new(7).shuffle(&mut a);
        GameRng::new(7).shuffle(&mut b);
        GameRng::new(8).shuffle(&mut c);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
