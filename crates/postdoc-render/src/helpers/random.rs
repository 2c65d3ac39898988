//! Pseudorandom element ids for rendered anchors.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Exclusive upper bound of generated ids.
pub const MAX_ID: u32 = 999_999_999;

/// Owned pseudorandom generator behind the `randomID` helper.
///
/// Ids are not unique by contract; templates that need stable anchors should
/// mix in a request id as well.
#[derive(Debug)]
pub struct IdGenerator {
    rng: Mutex<StdRng>,
}

impl IdGenerator {
    /// Seeds from OS entropy, so every process run produces fresh ids.
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Fixed seed, for reproducible output.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Returns a value in `[0, MAX_ID)`.
    pub fn next_id(&self) -> u32 {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..MAX_ID)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}
