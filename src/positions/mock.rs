//! Random position generators for tests and demos.

use rand::{Rng, seq::IndexedRandom};

use crate::positions::{MAX_POSITION, MIN_POSITION, PositionSet};

/// Uniformly random position in `[MIN_POSITION, MAX_POSITION]` (may be zero).
pub fn position<R: Rng>(rng: &mut R) -> f64 {
    rng.random_range(MIN_POSITION..=MAX_POSITION)
}

/// Random whole-step answer that is never "skipped": one of -2, -1, 1, 2.
pub fn answered_position<R: Rng>(rng: &mut R) -> f64 {
    *[-2.0, -1.0, 1.0, 2.0].choose(rng).unwrap_or(&1.0)
}

/// Set over statements `0..n` with values produced by `value(i)`.
pub fn positions_with<F>(n: usize, mut value: F) -> PositionSet where F: FnMut(usize) -> f64 {
    PositionSet::from_pairs((0..n).map(|i| (i, value(i))))
}

/// Set over statements `0..n` with uniformly random values.
pub fn positions<R: Rng>(n: usize, rng: &mut R) -> PositionSet {
    positions_with(n, |_| position(rng))
}

/// Set over statements `0..n` with every statement answered.
pub fn answered_positions<R: Rng>(n: usize, rng: &mut R) -> PositionSet {
    positions_with(n, |_| answered_position(rng))
}
