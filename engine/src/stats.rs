use serde::Serialize;

/// Faces on the die used for attack rolls and hide checks.
pub const D20: i32 = 20;

/// Fixed numbers for one combatant against one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CombatStats {
    pub attack_bonus: i32,
    /// Roll + attack bonus must reach this to hit.
    pub enemy_ac: i32,
    /// Natural d20 needed to hide.
    pub hide_dc: i32,
    /// Lowest natural d20 that crits.
    pub crit_min: i32,
    pub crit_multiplier: i32,
    pub bolt_modifier: i32,
    pub bolt_die: i32,
    pub sneak_dice: i32,
    pub sneak_die: i32,
}

impl CombatStats {
    /// Light crossbow rogue: +8 to hit vs AC 17, 1d8+1 bolts, 2d6 sneak attack.
    pub const CROSSBOW_ROGUE: CombatStats = CombatStats {
        attack_bonus: 8,
        enemy_ac: 17,
        hide_dc: 11,
        crit_min: 19,
        crit_multiplier: 2,
        bolt_modifier: 1,
        bolt_die: 8,
        sneak_dice: 2,
        sneak_die: 6,
    };
}

impl Default for CombatStats {
    fn default() -> Self {
        Self::CROSSBOW_ROGUE
    }
}
