//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Randomness (system CSPRNG in production, seeded or mocked in tests)
//! - Clock (envelope timestamps)

use chrono::{DateTime, Utc};

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of uniformly distributed random values.
///
/// Implementations must be safe to share between concurrent callers without
/// correlating or repeating their output. Bounded draws must be unbiased.
#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Uniform integer in `[min, max]`, both ends inclusive. Requires `min <= max`.
    fn gen_range(&self, min: i64, max: i64) -> i64;

    /// Uniform index in `[0, upper)`. Requires `upper > 0`.
    fn gen_index(&self, upper: usize) -> usize;

    /// 64 uniformly random bits.
    fn next_u64(&self) -> u64;

    fn fill_bytes(&self, dest: &mut [u8]);
}
