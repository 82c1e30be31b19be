//! Asynchronous dice used for attack and trap rolls.
//!
//! The worker never waits on dice itself: each roll runs as its own task and
//! reports back through a continuation, so a slow animation cannot block
//! other commands.
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of dice results.
#[async_trait]
pub trait DiceService: Send + Sync {
    /// Rolls once and returns a face in `1..=sides`.
    async fn roll(&self) -> u32;

    /// Face shown by the last roll, if any since the last reset.
    fn last(&self) -> Option<u32>;

    /// Clears the shown face.
    fn reset(&self);
}

/// Fair die with an optional rolling animation delay.
pub struct RandomDice {
    sides: u32,
    animation: Duration,
    rng: Mutex<StdRng>,
    last: Mutex<Option<u32>>,
}

impl RandomDice {
    pub fn new(sides: u32, animation: Duration) -> Self {
        Self::with_rng(sides, animation, StdRng::from_entropy())
    }

    pub fn seeded(sides: u32, animation: Duration, seed: u64) -> Self {
        Self::with_rng(sides, animation, StdRng::seed_from_u64(seed))
    }

    fn with_rng(sides: u32, animation: Duration, rng: StdRng) -> Self {
        Self {
            sides: sides.max(1),
            animation,
            rng: Mutex::new(rng),
            last: Mutex::new(None),
        }
    }
}

#[async_trait]
impl DiceService for RandomDice {
    async fn roll(&self) -> u32 {
        if !self.animation.is_zero() {
            tokio::time::sleep(self.animation).await;
        }
        let value = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_range(1..=self.sides);
        *self.last.lock().unwrap_or_else(PoisonError::into_inner) = Some(value);
        value
    }

    fn last(&self) -> Option<u32> {
        *self.last.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn reset(&self) {
        *self.last.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Replays fixed faces, then repeats `fallback`.
pub struct ScriptedDice {
    faces: Mutex<VecDeque<u32>>,
    fallback: u32,
    last: Mutex<Option<u32>>,
}

impl ScriptedDice {
    pub fn new(faces: impl IntoIterator<Item = u32>, fallback: u32) -> Self {
        Self {
            faces: Mutex::new(faces.into_iter().collect()),
            fallback,
            last: Mutex::new(None),
        }
    }

    pub fn push(&self, face: u32) {
        self.faces
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(face);
    }
}

#[async_trait]
impl DiceService for ScriptedDice {
    async fn roll(&self) -> u32 {
        let value = self
            .faces
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or(self.fallback);
        *self.last.lock().unwrap_or_else(PoisonError::into_inner) = Some(value);
        value
    }

    fn last(&self) -> Option<u32> {
        *self.last.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn reset(&self) {
        *self.last.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn random_dice_stays_in_range() {
        let dice = RandomDice::seeded(6, Duration::ZERO, 7);
        for _ in 0..100 {
            let face = dice.roll().await;
            assert!((1..=6).contains(&face));
            assert_eq!(dice.last(), Some(face));
        }
        dice.reset();
        assert_eq!(dice.last(), None);
    }

    #[tokio::test]
    async fn scripted_dice_replays_then_falls_back() {
        let dice = ScriptedDice::new([2, 5], 6);
        assert_eq!(dice.roll().await, 2);
        assert_eq!(dice.roll().await, 5);
        assert_eq!(dice.roll().await, 6);
        dice.push(1);
        assert_eq!(dice.roll().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn animation_delays_the_result() {
        let dice = RandomDice::seeded(6, Duration::from_millis(600), 1);
        let started = tokio::time::Instant::now();
        dice.roll().await;
        assert!(started.elapsed() >= Duration::from_millis(600));
    }
}
