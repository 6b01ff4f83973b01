//! Monte Carlo driver and the baseline estimators printed beside it.

use serde::Serialize;
use tracing::debug;

use crate::{resolve_attack, step, CombatAction, CombatState, CombatStats, DamageKind, Dice, Strategy};

/// Anything that picks an action for a state.
pub trait Decide {
    fn decide(&self, state: CombatState) -> CombatAction;
}

impl Decide for Strategy {
    fn decide(&self, state: CombatState) -> CombatAction {
        Strategy::decide(*self, state)
    }
}

impl<F> Decide for F
where
    F: Fn(CombatState) -> CombatAction,
{
    fn decide(&self, state: CombatState) -> CombatAction {
        self(state)
    }
}

/// Accumulated result of running one strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    pub iterations: u64,
    pub total_damage: i64,
    pub attacks: u64,
    pub final_state: CombatState,
}

impl Evaluation {
    /// Advance the state machine `iterations` times from `Empty`.
    pub fn run(
        dice: &mut Dice,
        stats: &CombatStats,
        strategy: &impl Decide,
        iterations: u64,
    ) -> Self {
        let mut state = CombatState::Empty;
        let mut total_damage = 0i64;
        let mut attacks = 0u64;

        debug!(iterations, "evaluation start");
        for _ in 0..iterations {
            let action = strategy.decide(state);
            if action == CombatAction::Attack {
                attacks += 1;
            }
            let (next, dmg) = step(dice, stats, state, action);
            state = next;
            total_damage += i64::from(dmg);
        }
        debug!(iterations, total_damage, attacks, "evaluation done");

        Self { iterations, total_damage, attacks, final_state: state }
    }

    /// Mean damage per action (not per encounter).
    pub fn per_action(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            self.total_damage as f64 / self.iterations as f64
        }
    }
}

/// Damage per action for `strategy` over `iterations` rounds.
pub fn evaluate(
    dice: &mut Dice,
    stats: &CombatStats,
    strategy: &impl Decide,
    iterations: u64,
) -> f64 {
    Evaluation::run(dice, stats, strategy, iterations).per_action()
}

/// Sample mean of one damage formula, ignoring the attack roll.
pub fn mean_damage(dice: &mut Dice, stats: &CombatStats, kind: DamageKind, iterations: u64) -> f64 {
    let total: i64 = (0..iterations).map(|_| i64::from(kind.roll(dice, stats))).sum();
    mean(total, iterations)
}

/// Fraction of attack rolls that hit or crit.
pub fn hit_rate(dice: &mut Dice, stats: &CombatStats, iterations: u64) -> f64 {
    let hits = (0..iterations)
        .filter(|_| crate::attack_roll(dice, stats).landed())
        .count();
    mean(hits as i64, iterations)
}

/// Mean damage of one full attack (to-hit roll included) with `kind` damage.
pub fn attack_mean(dice: &mut Dice, stats: &CombatStats, kind: DamageKind, iterations: u64) -> f64 {
    let total: i64 = (0..iterations)
        .map(|_| i64::from(resolve_attack(dice, stats, |d, s| kind.roll(d, s))))
        .sum();
    mean(total, iterations)
}

fn mean(total: i64, iterations: u64) -> f64 {
    if iterations == 0 {
        0.0
    } else {
        total as f64 / iterations as f64
    }
}
