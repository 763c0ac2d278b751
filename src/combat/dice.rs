//! Randomness capability for combat rolls
//!
//! Every probabilistic outcome in the engine (damage scaling, block, dodge,
//! the Demiurge surge) starts from one uniform draw in `[0, 100)`. The draw
//! is abstracted behind `Dice` so battles can run on a seeded generator or
//! on scripted values in tests.

use std::collections::VecDeque;

use rand::Rng;

/// Source of uniform raw rolls in `[0, 100)`.
pub trait Dice {
    fn roll(&mut self) -> f64;
}

/// Adapter over any `rand` generator. Production battles run on a seeded
/// `ChaCha8Rng` wrapped in this.
#[derive(Debug, Clone)]
pub struct RngDice<R: Rng>(pub R);

impl<R: Rng> Dice for RngDice<R> {
    fn roll(&mut self) -> f64 {
        self.0.gen_range(0.0..100.0)
    }
}

/// Always returns the same raw roll. Test helper.
#[derive(Debug, Clone, Copy)]
pub struct FixedDice(pub f64);

impl Dice for FixedDice {
    fn roll(&mut self) -> f64 {
        self.0
    }
}

/// Plays back a sequence of raw rolls, repeating the last one once the
/// script runs out. Test helper for flows that draw more than once.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    rolls: VecDeque<f64>,
    last: f64,
}

impl ScriptedDice {
    pub fn new(rolls: impl IntoIterator<Item = f64>) -> Self {
        let rolls: VecDeque<f64> = rolls.into_iter().collect();
        let last = rolls.back().copied().unwrap_or(0.0);
        Self { rolls, last }
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self) -> f64 {
        match self.rolls.pop_front() {
            Some(roll) => {
                self.last = roll;
                roll
            }
            None => self.last,
        }
    }
}
