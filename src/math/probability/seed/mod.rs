// src/math/probability/seed/mod.rs

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::info;

use super::noise::NoiseConfig;

/// A 64-bit world seed and the 32-bit noise seed derived from it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NoiseSeed {
    seed: u64,
}

impl NoiseSeed {
    pub fn from_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// Hashes arbitrary text (e.g. a world name) into a seed.
    pub fn from_text<S: AsRef<str>>(text: S) -> Self {
        let mut hasher = DefaultHasher::new();
        text.as_ref().hash(&mut hasher);
        let seed = hasher.finish();
        info!("Seed {} aus Text '{}' abgeleitet.", seed, text.as_ref());
        Self::from_seed(seed)
    }

    pub fn random() -> Self {
        Self::from_seed(rand::random::<u64>())
    }

    pub fn raw(&self) -> u64 {
        self.seed
    }

    /// Noise seed: both halves of the 64-bit seed xor-folded into 32 bits.
    pub fn value(&self) -> i32 {
        (self.seed ^ (self.seed >> 32)) as u32 as i32
    }

    /// Default noise settings seeded with [`value`](Self::value).
    pub fn config(&self) -> NoiseConfig {
        NoiseConfig::new().with_seed(self.value())
    }
}

impl Default for NoiseSeed {
    fn default() -> Self {
        Self::random()
    }
}

impl From<u64> for NoiseSeed {
    fn from(seed: u64) -> Self {
        Self::from_seed(seed)
    }
}
