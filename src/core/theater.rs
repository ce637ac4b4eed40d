//! Theaters, per-theater storage and the round's theater permutation.
//!
//! The permutation fixes the left-to-right order of the three theaters
//! for one round. Adjacency follows from it: the middle theater touches
//! both outer theaters, each outer theater touches only the middle one.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::error::RoundError;

/// One of the three lanes cards are played into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Theater {
    Air,
    Land,
    Sea,
}

impl Theater {
    /// All theaters in catalog order (not permutation order).
    pub const ALL: [Theater; 3] = [Theater::Air, Theater::Land, Theater::Sea];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Theater::Air => 0,
            Theater::Land => 1,
            Theater::Sea => 2,
        }
    }
}

impl std::fmt::Display for Theater {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Theater::Air => "AIR",
            Theater::Land => "LAND",
            Theater::Sea => "SEA",
        };
        f.write_str(name)
    }
}

/// Per-theater data storage, indexed by `Theater`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TheaterMap<T> {
    data: [T; 3],
}

impl<T> TheaterMap<T> {
    /// Create a new TheaterMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(Theater) -> T) -> Self {
        Self {
            data: [
                factory(Theater::Air),
                factory(Theater::Land),
                factory(Theater::Sea),
            ],
        }
    }

    /// Iterate over (Theater, &T) pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Theater, &T)> {
        Theater::ALL.into_iter().zip(self.data.iter())
    }

    /// Transform every entry, keeping the theater association.
    pub fn map<U>(&self, mut f: impl FnMut(Theater, &T) -> U) -> TheaterMap<U> {
        TheaterMap::new(|theater| f(theater, &self[theater]))
    }
}

impl<T> Index<Theater> for TheaterMap<T> {
    type Output = T;

    fn index(&self, theater: Theater) -> &Self::Output {
        &self.data[theater.index()]
    }
}

impl<T> IndexMut<Theater> for TheaterMap<T> {
    fn index_mut(&mut self, theater: Theater) -> &mut Self::Output {
        &mut self.data[theater.index()]
    }
}

/// Left-to-right ordering of the theaters for one round.
///
/// ```
/// use theater_engine::core::{Theater, TheaterPermutation};
///
/// let perm = TheaterPermutation::new([Theater::Air, Theater::Land, Theater::Sea]).unwrap();
/// assert!(perm.is_adjacent(Theater::Air, Theater::Land));
/// assert!(!perm.is_adjacent(Theater::Air, Theater::Sea));
/// assert_eq!(perm.adjacent(Theater::Land).as_slice(), &[Theater::Air, Theater::Sea]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Theater; 3]", into = "[Theater; 3]")]
pub struct TheaterPermutation([Theater; 3]);

impl TheaterPermutation {
    /// Validate that `order` names each theater exactly once.
    pub fn new(order: [Theater; 3]) -> Result<Self, RoundError> {
        let distinct = Theater::ALL.iter().all(|t| order.contains(t));
        if !distinct {
            return Err(RoundError::InvalidPermutation { order });
        }
        Ok(Self(order))
    }

    /// The theaters in permutation order.
    #[must_use]
    pub fn order(&self) -> [Theater; 3] {
        self.0
    }

    /// Position of a theater in the permutation (0, 1 or 2).
    #[must_use]
    pub fn position(&self, theater: Theater) -> usize {
        // Construction guarantees every theater is present.
        self.0.iter().position(|&t| t == theater).unwrap_or(0)
    }

    /// Theaters adjacent to `theater`, in permutation order.
    #[must_use]
    pub fn adjacent(&self, theater: Theater) -> SmallVec<[Theater; 2]> {
        let [left, middle, right] = self.0;
        match self.position(theater) {
            1 => SmallVec::from_slice(&[left, right]),
            _ => SmallVec::from_slice(&[middle]),
        }
    }

    #[must_use]
    pub fn is_adjacent(&self, a: Theater, b: Theater) -> bool {
        self.position(a).abs_diff(self.position(b)) == 1
    }
}

impl Default for TheaterPermutation {
    fn default() -> Self {
        Self([Theater::Air, Theater::Land, Theater::Sea])
    }
}

impl TryFrom<[Theater; 3]> for TheaterPermutation {
    type Error = RoundError;

    fn try_from(order: [Theater; 3]) -> Result<Self, Self::Error> {
        Self::new(order)
    }
}

impl From<TheaterPermutation> for [Theater; 3] {
    fn from(perm: TheaterPermutation) -> Self {
        perm.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_repeated_theater() {
        let err = TheaterPermutation::new([Theater::Air, Theater::Air, Theater::Sea]).unwrap_err();
        assert!(matches!(err, RoundError::InvalidPermutation { .. }));
    }

    #[test]
    fn test_middle_theater_adjacency() {
        let perm = TheaterPermutation::new([Theater::Land, Theater::Air, Theater::Sea]).unwrap();

        assert_eq!(perm.adjacent(Theater::Air).as_slice(), &[Theater::Land, Theater::Sea]);
        assert_eq!(perm.adjacent(Theater::Land).as_slice(), &[Theater::Air]);
        assert_eq!(perm.adjacent(Theater::Sea).as_slice(), &[Theater::Air]);
        assert!(!perm.is_adjacent(Theater::Land, Theater::Sea));
        assert!(!perm.is_adjacent(Theater::Air, Theater::Air));
    }

    #[test]
    fn test_theater_map_indexing() {
        let mut map: TheaterMap<u32> = TheaterMap::default();
        map[Theater::Sea] += 4;

        assert_eq!(map[Theater::Sea], 4);
        assert_eq!(map.iter().map(|(_, v)| *v).sum::<u32>(), 4);
    }

    #[test]
    fn test_permutation_serde_rejects_invalid() {
        let json = "[\"AIR\",\"SEA\",\"SEA\"]";
        assert!(serde_json::from_str::<TheaterPermutation>(json).is_err());

        let ok: TheaterPermutation = serde_json::from_str("[\"SEA\",\"AIR\",\"LAND\"]").unwrap();
        assert_eq!(ok.order(), [Theater::Sea, Theater::Air, Theater::Land]);
    }
}
