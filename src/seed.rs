//! Initial-generation sources. The engine never seeds a board itself.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

/// Fills a freshly created board's state buffer before the first step.
pub trait SeedSource {
    fn fill(&mut self, cells: &mut [u8]);
}

/// Writes all-zero bytes: an empty board.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zeroed;

impl SeedSource for Zeroed {
    fn fill(&mut self, cells: &mut [u8]) {
        cells.fill(0);
    }
}

/// Writes random bytes, so each cell is alive with probability 1/2.
#[derive(Debug, Clone)]
pub struct Randomized<R> {
    rng: R,
}

impl<R: RngCore> Randomized<R> {
    pub fn new(rng: R) -> Self {
        Randomized { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl Randomized<SmallRng> {
    /// Reproducible random fill from a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Randomized::new(SmallRng::seed_from_u64(seed))
    }

    /// Random fill seeded from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        let mut seed_rng = rand::rng();
        Randomized::new(SmallRng::from_rng(&mut seed_rng))
    }
}

impl<R: RngCore> SeedSource for Randomized<R> {
    fn fill(&mut self, cells: &mut [u8]) {
        self.rng.fill_bytes(cells);
    }
}
