use serde::Serialize;
use tracing::trace;

use crate::{CombatStats, Dice};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackOutcome {
    Miss,
    Hit,
    Critical,
}

impl AttackOutcome {
    /// Hit or critical.
    pub fn landed(self) -> bool {
        !matches!(self, AttackOutcome::Miss)
    }
}

/// Classify a natural d20 face. A face at or above `crit_min` always crits,
/// whatever the modified total would have been.
pub fn classify(roll: i32, stats: &CombatStats) -> AttackOutcome {
    if roll >= stats.crit_min {
        return AttackOutcome::Critical;
    }
    if roll + stats.attack_bonus >= stats.enemy_ac {
        AttackOutcome::Hit
    } else {
        AttackOutcome::Miss
    }
}

/// Roll a d20 against the target's AC.
pub fn attack_roll(dice: &mut Dice, stats: &CombatStats) -> AttackOutcome {
    let roll = dice.d20();
    let outcome = classify(roll, stats);
    match outcome {
        AttackOutcome::Critical => trace!("CRITICAL on {}", roll),
        AttackOutcome::Hit => trace!(
            "HIT on {} + {} = {}",
            roll,
            stats.attack_bonus,
            roll + stats.attack_bonus
        ),
        AttackOutcome::Miss => trace!(
            "MISS on {} + {} = {}",
            roll,
            stats.attack_bonus,
            roll + stats.attack_bonus
        ),
    }
    outcome
}

/// Roll to hit, then roll damage with `damage_fn` if the attack landed.
///
/// A critical multiplies the single result of `damage_fn`; the dice are not
/// rolled twice.
pub fn resolve_attack(
    dice: &mut Dice,
    stats: &CombatStats,
    damage_fn: impl FnOnce(&mut Dice, &CombatStats) -> i32,
) -> i32 {
    let dmg = match attack_roll(dice, stats) {
        AttackOutcome::Miss => return 0,
        AttackOutcome::Hit => damage_fn(dice, stats),
        AttackOutcome::Critical => stats.crit_multiplier * damage_fn(dice, stats),
    };
    trace!("{} damage", dmg);
    dmg
}
