//! Injectable randomness for tile spawns, mine layout and food placement.
//!
//! Engines never reach for a global generator. Every operation that needs a
//! draw takes a `RandomSource`, so production code can pass
//! `rand::thread_rng()` while tests pass a seeded generator or a
//! [`ScriptedSource`] with a fixed sequence.

use rand::Rng;
use std::collections::VecDeque;

/// Uniform draws needed by the engines.
pub trait RandomSource {
    /// Uniform index in `0..bound`. `bound` is always non-zero.
    fn pick_index(&mut self, bound: usize) -> usize;

    /// True with the given probability (0.0..=1.0).
    fn chance(&mut self, probability: f64) -> bool;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn pick_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.gen_bool(probability.clamp(0.0, 1.0))
    }
}

/// Fixed-sequence source for deterministic tests.
///
/// Indices are reduced modulo the requested bound; once a queue runs dry,
/// `pick_index` returns 0 and `chance` returns true.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    indices: VecDeque<usize>,
    chances: VecDeque<bool>,
}

impl ScriptedSource {
    pub fn new(indices: impl IntoIterator<Item = usize>, chances: impl IntoIterator<Item = bool>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
            chances: chances.into_iter().collect(),
        }
    }

    /// Source that always answers index 0 and `true`.
    pub fn zeros() -> Self {
        Self::default()
    }
}

impl RandomSource for ScriptedSource {
    fn pick_index(&mut self, bound: usize) -> usize {
        self.indices.pop_front().map_or(0, |i| i % bound.max(1))
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.chances.pop_front().unwrap_or(true)
    }
}

/// Choose `count` distinct items uniformly at random (partial Fisher–Yates).
/// Returns fewer items when `items` is shorter than `count`.
pub fn choose_distinct<T, S: RandomSource + ?Sized>(mut items: Vec<T>, count: usize, rng: &mut S) -> Vec<T> {
    let take = count.min(items.len());
    for i in 0..take {
        let j = i + rng.pick_index(items.len() - i);
        items.swap(i, j);
    }
    items.truncate(take);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_scripted_source_replays_sequence() {
        let mut source = ScriptedSource::new([3, 7, 1], [false, true]);
        assert_eq!(source.pick_index(10), 3);
        assert_eq!(source.pick_index(5), 2); // 7 % 5
        assert_eq!(source.pick_index(10), 1);
        assert_eq!(source.pick_index(10), 0); // exhausted
        assert!(!source.chance(0.9));
        assert!(source.chance(0.9));
        assert!(source.chance(0.9)); // exhausted
    }

    #[test]
    fn test_rng_pick_index_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for bound in 1..50 {
            let i = rng.pick_index(bound);
            assert!(i < bound, "index {} out of bound {}", i, bound);
        }
    }

    #[test]
    fn test_choose_distinct() {
        let mut rng = StdRng::seed_from_u64(7);
        let picked = choose_distinct((0..20).collect(), 5, &mut rng);
        assert_eq!(picked.len(), 5);
        let mut sorted = picked.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 5, "picks should be distinct: {:?}", picked);

        let all = choose_distinct(vec![1, 2, 3], 10, &mut rng);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_choose_distinct_deterministic_with_seed() {
        let a = choose_distinct((0..81).collect::<Vec<_>>(), 10, &mut StdRng::seed_from_u64(42));
        let b = choose_distinct((0..81).collect::<Vec<_>>(), 10, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
