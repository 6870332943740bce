use rand::prelude::*;

/// Source of randomness for board shuffles.
///
/// Not cryptographic. Two shufflers built from the same seed produce the same sequence of
/// permutations, which keeps sessions reproducible from a `--seed`.
#[derive(Clone, Debug)]
pub struct Shuffler {
    rng: SmallRng,
}

impl Shuffler {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Fisher–Yates: every ordering of `items` is equally likely.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.rng.random_range(0..=i);
            items.swap(i, j);
        }
    }
}
