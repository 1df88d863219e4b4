// src/character/src/rng.rs
use rand::{
    Rng, SeedableRng,
    distr::uniform,
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Deterministic per-character RNG.
///
/// Wraps a `Pcg32` together with the seed it was built from, so a
/// character's dice can be replayed exactly: same seed, same sequence of
/// rolls. Serialization keeps only the seed.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: Pcg32,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// Get the seed this RNG was built from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Rewind to the start of the current seed's sequence
    pub fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
    }

    /// Replace the seed and rewind
    pub fn reseed(&mut self, new_seed: u64) {
        self.seed = new_seed;
        self.reset();
    }

    /// Roll a boolean with the given probability of `true`
    pub fn random_bool(&mut self, probability: f64) -> bool {
        self.rng.random_bool(probability)
    }

    /// Roll an attack variance in the inclusive range [lo, hi]
    pub fn variance(&mut self, lo: i32, hi: i32) -> i32 {
        self.rng.random_range(lo..=hi)
    }

    /// Roll a value in the given range
    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: uniform::SampleUniform,
        R: uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

// Only the seed crosses a serialization boundary; the stream position is
// intentionally discarded.
impl Serialize for GameRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.seed)
    }
}

impl<'de> Deserialize<'de> for GameRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(Self::new(seed))
    }
}
