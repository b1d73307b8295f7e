//! Per-page seed derivation
//!
//! A configuration carries an optional base seed. When it is absent a random
//! base is drawn once, when the deriver is created, so every page of that
//! configuration is still reproducible relative to the others.
//!
//! # Example
//!
//! ```
//! use fakeuser::generator::seed::SeedDeriver;
//!
//! let deriver = SeedDeriver::new(Some(42));
//! assert_eq!(deriver.derive(1), 43);
//! assert_eq!(deriver.derive(2), 44);
//! ```

use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Upper bound (exclusive) for randomly drawn base seeds
pub const RANDOM_SEED_RANGE: u64 = 10_000;

/// Combines a base seed with a page number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedDeriver {
    base: u64,
}

impl SeedDeriver {
    /// Resolve the base seed, drawing a random one if absent
    pub fn new(base_seed: Option<u64>) -> Self {
        let base = base_seed.unwrap_or_else(Self::random_base);
        Self { base }
    }

    /// Random base seed in `[0, RANDOM_SEED_RANGE)`
    pub fn random_base() -> u64 {
        rand::thread_rng().gen_range(0..RANDOM_SEED_RANGE)
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    /// Seed for `page`
    ///
    /// Computed as `base + page` on `u64`; values past `u64::MAX` wrap
    /// around modulo 2^64.
    pub fn derive(&self, page: u64) -> u64 {
        self.base.wrapping_add(page)
    }

    /// Fresh pseudo-random source for `page`
    pub fn rng_for_page(&self, page: u64) -> Xoshiro256PlusPlus {
        Xoshiro256PlusPlus::seed_from_u64(self.derive(page))
    }
}
