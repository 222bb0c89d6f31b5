use chess960_core::ChoiceSource;
use rand::{
    rngs::{StdRng, ThreadRng},
    seq::index,
    thread_rng, Rng, SeedableRng,
};

pub mod config;

/// [`ChoiceSource`] backed by a `rand` generator.
pub struct RandomSource<R = ThreadRng> {
    rng: R,
}

impl RandomSource {
    pub fn new() -> Self {
        Self { rng: thread_rng() }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource<StdRng> {
    /// Reproducible source, for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> ChoiceSource for RandomSource<R> {
    fn pick(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }

    fn pick_pair(&mut self, bound: usize) -> (usize, usize) {
        let chosen = index::sample(&mut self.rng, bound, 2);
        (chosen.index(0), chosen.index(1))
    }
}
