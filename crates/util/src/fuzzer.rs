use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use std::cell::RefCell;
use std::collections::BTreeSet;

/// A single map mutation produced by [`Fuzzer::ops`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Insert(i64, i64),
    Remove(i64),
}

/// A fuzzer for generating random keys and operation sequences.
///
/// Uses the xoshiro256** PRNG for reproducible random sequences when seeded.
///
/// # Examples
///
/// ```
/// use avl_forest_util::Fuzzer;
///
/// let fuzzer = Fuzzer::from_u64(7);
///
/// let n = fuzzer.random_int(1, 10);
/// assert!(n >= 1 && n <= 10);
///
/// let keys = fuzzer.shuffled(0, 100);
/// assert_eq!(keys.len(), 100);
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: RefCell<Xoshiro256StarStar>,
}

impl Fuzzer {
    /// Create a new fuzzer with an optional seed.
    ///
    /// If no seed is provided, a random seed will be generated using `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });

        Self {
            seed,
            rng: RefCell::new(Xoshiro256StarStar::from_seed(seed)),
        }
    }

    /// Seed from a single integer; convenient for test matrices.
    pub fn from_u64(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        for chunk in bytes.chunks_mut(8) {
            chunk.copy_from_slice(&seed.to_le_bytes());
        }
        Self::new(Some(bytes))
    }

    /// Generate a random integer in the range [min, max] (inclusive).
    pub fn random_int(&self, min: i64, max: i64) -> i64 {
        self.rng.borrow_mut().gen_range(min..=max)
    }

    /// Pick a random element from a slice.
    pub fn pick<'a, T>(&self, elements: &'a [T]) -> &'a T {
        let idx = self.rng.borrow_mut().gen_range(0..elements.len());
        &elements[idx]
    }

    /// Generate a random boolean with the given probability of being true.
    pub fn random_bool(&self, probability: f64) -> bool {
        self.rng.borrow_mut().gen_bool(probability)
    }

    /// Every integer in `[min, max)` exactly once, in random order.
    pub fn shuffled(&self, min: i64, max: i64) -> Vec<i64> {
        let mut keys: Vec<i64> = (min..max).collect();
        self.shuffle(&mut keys);
        keys
    }

    pub fn shuffle<T>(&self, items: &mut [T]) {
        items.shuffle(&mut *self.rng.borrow_mut());
    }

    /// `n` distinct keys drawn from `[min, max]`, in the order drawn.
    ///
    /// The range must hold at least `n` values.
    pub fn distinct_keys(&self, n: usize, min: i64, max: i64) -> Vec<i64> {
        let mut seen = BTreeSet::new();
        let mut out = Vec::with_capacity(n);
        while out.len() < n {
            let k = self.random_int(min, max);
            if seen.insert(k) {
                out.push(k);
            }
        }
        out
    }

    /// Mixed insert/remove sequence over keys in `[0, key_space)`.
    /// `insert_ratio` is the probability of each step being an insert.
    pub fn ops(&self, n: usize, key_space: i64, insert_ratio: f64) -> Vec<Op> {
        (0..n)
            .map(|_| {
                let k = self.random_int(0, key_space - 1);
                if self.random_bool(insert_ratio) {
                    Op::Insert(k, self.random_int(i64::MIN, i64::MAX))
                } else {
                    Op::Remove(k)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzzer_random_int() {
        let fuzzer = Fuzzer::new(None);

        for _ in 0..100 {
            let n = fuzzer.random_int(1, 10);
            assert!((1..=10).contains(&n));
        }
    }

    #[test]
    fn test_fuzzer_pick() {
        let fuzzer = Fuzzer::new(None);
        let choices = vec!["a", "b", "c"];

        for _ in 0..100 {
            let picked = fuzzer.pick(&choices);
            assert!(choices.contains(picked));
        }
    }

    #[test]
    fn test_fuzzer_reproducible() {
        let fuzzer1 = Fuzzer::from_u64(1);
        let fuzzer2 = Fuzzer::from_u64(1);

        for _ in 0..10 {
            assert_eq!(fuzzer1.random_int(0, 1000), fuzzer2.random_int(0, 1000));
        }
        assert_eq!(fuzzer1.shuffled(0, 50), fuzzer2.shuffled(0, 50));
    }

    #[test]
    fn test_fuzzer_shuffled_is_permutation() {
        let fuzzer = Fuzzer::from_u64(3);
        let mut keys = fuzzer.shuffled(-20, 20);
        keys.sort_unstable();
        assert_eq!(keys, (-20..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_fuzzer_distinct_keys() {
        let fuzzer = Fuzzer::from_u64(5);
        let keys = fuzzer.distinct_keys(100, 0, 150);
        let unique: BTreeSet<_> = keys.iter().copied().collect();
        assert_eq!(unique.len(), 100);
        assert!(keys.iter().all(|k| (0..=150).contains(k)));
    }

    #[test]
    fn test_fuzzer_ops_respect_key_space() {
        let fuzzer = Fuzzer::from_u64(9);
        let ops = fuzzer.ops(500, 16, 0.6);
        assert_eq!(ops.len(), 500);
        let mut has_insert = false;
        let mut has_remove = false;
        for op in ops {
            match op {
                Op::Insert(k, _) => {
                    has_insert = true;
                    assert!((0..16).contains(&k));
                }
                Op::Remove(k) => {
                    has_remove = true;
                    assert!((0..16).contains(&k));
                }
            }
        }
        assert!(has_insert && has_remove);
    }
}
