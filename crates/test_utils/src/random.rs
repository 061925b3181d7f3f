//! Deterministic random sources

use std::collections::VecDeque;
use std::sync::Mutex;

use core_kernel::Random;

/// Always returns one end of the requested range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedRandom {
    Low,
    High,
}

impl Random for FixedRandom {
    fn int_in(&self, low: i64, high: i64) -> i64 {
        match self {
            FixedRandom::Low => low,
            FixedRandom::High => high.max(low),
        }
    }
}

/// Replays a script of values, clamping each into the requested range
///
/// Once the script runs out every draw returns the low end.
#[derive(Debug)]
pub struct ScriptedRandom {
    script: Mutex<VecDeque<i64>>,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            script: Mutex::new(values.into_iter().collect()),
        }
    }

    /// Number of values not yet drawn
    pub fn remaining(&self) -> usize {
        self.script.lock().map(|s| s.len()).unwrap_or(0)
    }
}

impl Random for ScriptedRandom {
    fn int_in(&self, low: i64, high: i64) -> i64 {
        let next = self.script.lock().ok().and_then(|mut s| s.pop_front());
        match next {
            Some(value) if high >= low => value.clamp(low, high),
            _ => low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_random() {
        assert_eq!(FixedRandom::Low.int_in(3, 9), 3);
        assert_eq!(FixedRandom::High.int_in(3, 9), 9);
    }

    #[test]
    fn test_scripted_random_clamps_and_exhausts() {
        let rng = ScriptedRandom::new([5, 100, -4]);
        assert_eq!(rng.int_in(0, 10), 5);
        assert_eq!(rng.int_in(0, 10), 10);
        assert_eq!(rng.int_in(0, 10), 0);
        assert_eq!(rng.remaining(), 0);
        assert_eq!(rng.int_in(2, 10), 2);
    }
}
