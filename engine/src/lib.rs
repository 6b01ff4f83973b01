use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub mod api;
pub mod combat;
pub mod damage;
pub mod error;
pub mod expected;
pub mod sim;
pub mod stats;
pub mod strategy;

pub use combat::attack::{attack_roll, resolve_attack, AttackOutcome};
pub use combat::machine::{step, CombatAction, CombatState};
pub use damage::{bolt_damage, sneak_damage, DamageKind};
pub use error::SimError;
pub use sim::{evaluate, Decide, Evaluation};
pub use stats::CombatStats;
pub use strategy::Strategy;

/// Source of every die roll in the engine.
///
/// Each `Dice` owns its generator, so two instances never share a stream.
pub struct Dice {
    source: Source,
}

enum Source {
    Rng(ChaCha8Rng),
    Scripted(VecDeque<i32>),
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self { source: Source::Rng(ChaCha8Rng::seed_from_u64(seed)) }
    }

    pub fn from_entropy() -> Self {
        Self { source: Source::Rng(ChaCha8Rng::from_entropy()) }
    }

    /// Replays `faces` in order; each call to [`Dice::roll`] consumes one.
    pub fn from_scripted(faces: Vec<i32>) -> Self {
        Self { source: Source::Scripted(faces.into()) }
    }

    /// Uniform roll in `1..=sides`.
    pub fn roll(&mut self, sides: i32) -> i32 {
        assert!(sides >= 1, "cannot roll a d{}", sides);
        match &mut self.source {
            Source::Rng(rng) => rng.gen_range(1..=sides),
            Source::Scripted(faces) => {
                let face = faces.pop_front().expect("scripted dice exhausted");
                assert!(
                    (1..=sides).contains(&face),
                    "scripted face {} does not fit a d{}",
                    face,
                    sides
                );
                face
            }
        }
    }

    pub fn d20(&mut self) -> i32 {
        self.roll(stats::D20)
    }
}
