//! Clock and random implementations.

use crate::infrastructure::ports::{ClockPort, RandomPort};
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use rand::{Rng, RngCore};

/// System clock - uses real time.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// System random - reads the operating system CSPRNG on every draw.
///
/// `OsRng` holds no user-space state, so one instance can serve any number of
/// concurrent callers. Bounded draws go through `rand`'s uniform sampler,
/// which rejects out-of-zone values instead of reducing modulo the range.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn gen_range(&self, min: i64, max: i64) -> i64 {
        OsRng.gen_range(min..=max)
    }

    fn gen_index(&self, upper: usize) -> usize {
        OsRng.gen_range(0..upper)
    }

    fn next_u64(&self) -> u64 {
        OsRng.next_u64()
    }

    fn fill_bytes(&self, dest: &mut [u8]) {
        OsRng.fill_bytes(dest)
    }
}

/// Fixed clock for testing.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Deterministic random for testing - a seeded `StdRng` behind a mutex.
#[cfg(test)]
pub struct SeededRandom(std::sync::Mutex<rand::rngs::StdRng>);

#[cfg(test)]
impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(std::sync::Mutex::new(rand::rngs::StdRng::seed_from_u64(seed)))
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut rand::rngs::StdRng) -> T) -> T {
        let mut rng = self.0.lock().expect("seeded rng mutex poisoned");
        f(&mut rng)
    }
}

#[cfg(test)]
impl RandomPort for SeededRandom {
    fn gen_range(&self, min: i64, max: i64) -> i64 {
        self.with_rng(|rng| rng.gen_range(min..=max))
    }

    fn gen_index(&self, upper: usize) -> usize {
        self.with_rng(|rng| rng.gen_range(0..upper))
    }

    fn next_u64(&self) -> u64 {
        self.with_rng(|rng| rng.next_u64())
    }

    fn fill_bytes(&self, dest: &mut [u8]) {
        self.with_rng(|rng| rng.fill_bytes(dest))
    }
}
