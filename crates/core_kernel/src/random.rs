//! Injectable pseudo-random source
//!
//! Synthetic response fields are drawn from a [`Random`] handed in by the
//! caller, so tests can swap in a deterministic generator.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed integers
pub trait Random: Send + Sync {
    /// Returns an integer in `low..=high`
    ///
    /// An inverted range yields `low`.
    fn int_in(&self, low: i64, high: i64) -> i64;

    /// Returns one character of `alphabet`, chosen uniformly
    fn char_from(&self, alphabet: &[u8]) -> char {
        if alphabet.is_empty() {
            return '\0';
        }
        let index = self.int_in(0, alphabet.len() as i64 - 1);
        alphabet[index as usize] as char
    }
}

/// Thread-local generator used in production
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl Random for ThreadRandom {
    fn int_in(&self, low: i64, high: i64) -> i64 {
        if high < low {
            return low;
        }
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Seeded generator producing a reproducible sequence
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Random for SeededRandom {
    fn int_in(&self, low: i64, high: i64) -> i64 {
        if high < low {
            return low;
        }
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(low..=high)
    }
}
