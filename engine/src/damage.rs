use serde::Serialize;
use tracing::trace;

use crate::{CombatStats, Dice};

/// Which damage formula an attack uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageKind {
    Bolt,
    Sneak,
}

impl DamageKind {
    pub fn roll(self, dice: &mut Dice, stats: &CombatStats) -> i32 {
        match self {
            DamageKind::Bolt => bolt_damage(dice, stats),
            DamageKind::Sneak => sneak_damage(dice, stats),
        }
    }
}

/// Plain crossbow bolt: modifier + one bolt die.
pub fn bolt_damage(dice: &mut Dice, stats: &CombatStats) -> i32 {
    stats.bolt_modifier + dice.roll(stats.bolt_die)
}

/// A bolt plus the sneak attack dice.
pub fn sneak_damage(dice: &mut Dice, stats: &CombatStats) -> i32 {
    let bolt = bolt_damage(dice, stats);
    let bonus: i32 = (0..stats.sneak_dice).map(|_| dice.roll(stats.sneak_die)).sum();
    trace!(bolt, bonus, "sneak damage");
    bolt + bonus
}
