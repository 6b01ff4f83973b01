//! Closed-form values the Monte Carlo estimates should converge to.

use serde::Serialize;

use crate::stats::D20;
use crate::CombatStats;

/// Chance a natural d20 lands at or above `min`.
fn d20_at_least(min: i32) -> f64 {
    let faces = (D20 - min.clamp(1, D20 + 1) + 1) as f64;
    faces / D20 as f64
}

fn die_mean(sides: i32) -> f64 {
    (sides + 1) as f64 / 2.0
}

pub fn crit_probability(stats: &CombatStats) -> f64 {
    d20_at_least(stats.crit_min)
}

/// Hit or crit. Crits are counted once even when the modified total also hits.
pub fn hit_probability(stats: &CombatStats) -> f64 {
    let needed = (stats.enemy_ac - stats.attack_bonus).max(1);
    if needed >= stats.crit_min {
        return crit_probability(stats);
    }
    d20_at_least(needed)
}

/// Hit but not crit.
pub fn plain_hit_probability(stats: &CombatStats) -> f64 {
    hit_probability(stats) - crit_probability(stats)
}

pub fn hide_probability(stats: &CombatStats) -> f64 {
    d20_at_least(stats.hide_dc)
}

pub fn bolt_mean(stats: &CombatStats) -> f64 {
    stats.bolt_modifier as f64 + die_mean(stats.bolt_die)
}

pub fn sneak_mean(stats: &CombatStats) -> f64 {
    bolt_mean(stats) + stats.sneak_dice as f64 * die_mean(stats.sneak_die)
}

/// Expected damage of one attack whose damage roll averages `damage_mean`.
pub fn attack_mean(stats: &CombatStats, damage_mean: f64) -> f64 {
    let weight = plain_hit_probability(stats)
        + stats.crit_multiplier as f64 * crit_probability(stats);
    damage_mean * weight
}

/// Load then shoot: two actions per attack.
pub fn standard_per_action(stats: &CombatStats) -> f64 {
    attack_mean(stats, bolt_mean(stats)) / 2.0
}

/// Load, hide until it sticks, shoot: 2 + 1/p actions per attack on average.
pub fn sneak_per_action(stats: &CombatStats) -> f64 {
    let p = hide_probability(stats);
    if p == 0.0 {
        return 0.0;
    }
    attack_mean(stats, sneak_mean(stats)) / (2.0 + 1.0 / p)
}

/// Average sneak attack round damage relative to average sneak hit damage.
pub fn sneak_round_ratio(stats: &CombatStats) -> f64 {
    attack_mean(stats, sneak_mean(stats)) / sneak_mean(stats)
}

/// Every closed-form value in one place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Expectations {
    pub bolt_mean: f64,
    pub sneak_mean: f64,
    pub hit_probability: f64,
    pub crit_probability: f64,
    pub hide_probability: f64,
    pub sneak_round_ratio: f64,
    pub standard_per_action: f64,
    pub sneak_per_action: f64,
}

impl Expectations {
    pub fn for_stats(stats: &CombatStats) -> Self {
        Self {
            bolt_mean: bolt_mean(stats),
            sneak_mean: sneak_mean(stats),
            hit_probability: hit_probability(stats),
            crit_probability: crit_probability(stats),
            hide_probability: hide_probability(stats),
            sneak_round_ratio: sneak_round_ratio(stats),
            standard_per_action: standard_per_action(stats),
            sneak_per_action: sneak_per_action(stats),
        }
    }
}
