//! Source of independent random draws.
//!
//! The engine does not own a PRNG. Callers hand it a [`RandomSource`]; the
//! runtime backs it with a seedable `StdRng` and tests use [`ScriptedRandom`] to
//! pin exact outcomes (which hit is dodged, whether an artifact drops, ...).

use std::collections::VecDeque;

/// Independent uniform draws used for dodge checks, drops and generation.
pub trait RandomSource {
    /// Uniform draw in `0..upper`. `upper == 0` yields 0.
    fn below(&mut self, upper: u32) -> u32;

    /// Uniform draw in `0..100`.
    fn percent(&mut self) -> u32 {
        self.below(100)
    }

    /// Succeeds with probability `percent`/100.
    fn chance(&mut self, percent: u32) -> bool {
        self.percent() < percent
    }

    /// Uniform draw in `min..=max`.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        min + self.below(max - min + 1)
    }
}

/// Replays a fixed list of draws, then repeats `fallback` forever.
///
/// Each queued value is reduced modulo the requested bound, so a queued `0`
/// always means "lowest outcome": a percent draw of 0 passes every non-zero
/// chance check and dodges every non-zero dodge rate.
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    draws: VecDeque<u32>,
    fallback: u32,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            fallback: 99,
        }
    }

    /// Value returned once the script runs out (default 99: checks fail,
    /// dodges miss).
    #[must_use]
    pub fn with_fallback(mut self, fallback: u32) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn push(&mut self, draw: u32) {
        self.draws.push_back(draw);
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl Default for ScriptedRandom {
    fn default() -> Self {
        Self {
            draws: VecDeque::new(),
            fallback: 99,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn below(&mut self, upper: u32) -> u32 {
        if upper == 0 {
            return 0;
        }
        self.draws.pop_front().unwrap_or(self.fallback) % upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_draws_then_fallback() {
        let mut rng = ScriptedRandom::new([5, 250]).with_fallback(7);
        assert_eq!(rng.percent(), 5);
        assert_eq!(rng.percent(), 50);
        assert_eq!(rng.percent(), 7);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn chance_compares_against_percent() {
        let mut rng = ScriptedRandom::new([9, 10]);
        assert!(rng.chance(10));
        assert!(!rng.chance(10));
    }

    #[test]
    fn range_is_inclusive() {
        let mut rng = ScriptedRandom::new([0, 10]);
        assert_eq!(rng.range(3, 7), 3);
        assert_eq!(rng.range(3, 7), 3 + 10 % 5);
        assert_eq!(rng.range(4, 4), 4);
    }
}
