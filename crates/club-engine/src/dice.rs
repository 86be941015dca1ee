//! Random Draw Source
//!
//! The party simulator consumes uniform draws in [0,1) through the `Dice`
//! trait rather than a global generator, so production runs can seed a
//! `SmallRng` while tests replay an exact sequence.
//!
//! # Example
//!
//! ```
//! use club_engine::dice::{Dice, ScriptedDice};
//!
//! let mut dice = ScriptedDice::new(vec![0.1, 0.9]);
//! assert!(dice.roll() < 0.3);
//! assert!(dice.roll() >= 0.3);
//! ```

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A source of uniform draws in [0,1).
pub trait Dice {
    fn roll(&mut self) -> f64;
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn roll(&mut self) -> f64 {
        (**self).roll()
    }
}

/// Seeded pseudo-random draws.
#[derive(Debug)]
pub struct SeededDice(SmallRng);

impl SeededDice {
    /// Reproducible draws from a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }

    /// Non-reproducible draws seeded from system entropy.
    pub fn from_entropy() -> Self {
        Self(SmallRng::from_entropy())
    }
}

impl Dice for SeededDice {
    fn roll(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Replays a fixed sequence of draws.
///
/// # Panics
///
/// `roll` panics once the sequence is exhausted; a harness that under-counts
/// its draws is a bug worth failing loudly on.
#[derive(Debug)]
pub struct ScriptedDice {
    rolls: Vec<f64>,
    next: usize,
}

impl ScriptedDice {
    pub fn new(rolls: Vec<f64>) -> Self {
        Self { rolls, next: 0 }
    }

    /// Draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self) -> f64 {
        let value = *self
            .rolls
            .get(self.next)
            .unwrap_or_else(|| panic!("scripted dice exhausted after {} rolls", self.next));
        self.next += 1;
        value
    }
}
