//! Three-state crossbow loop: load, optionally hide, shoot.

use std::fmt;

use serde::Serialize;
use tracing::trace;

use crate::combat::attack::resolve_attack;
use crate::{bolt_damage, sneak_damage, CombatStats, Dice, SimError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatState {
    /// Crossbow not loaded, not hidden. Initial state.
    #[default]
    Empty,
    Loaded,
    LoadedHidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatAction {
    Load,
    Attack,
    Hide,
}

impl CombatState {
    pub const ALL: [CombatState; 3] = [
        CombatState::Empty,
        CombatState::Loaded,
        CombatState::LoadedHidden,
    ];

    /// Actions [`step`] accepts from this state.
    pub fn legal_actions(self) -> &'static [CombatAction] {
        match self {
            CombatState::Empty => &[CombatAction::Load],
            CombatState::Loaded => &[CombatAction::Attack, CombatAction::Hide],
            CombatState::LoadedHidden => &[CombatAction::Attack],
        }
    }

    pub fn check(self, action: CombatAction) -> Result<(), SimError> {
        if self.legal_actions().contains(&action) {
            Ok(())
        } else {
            Err(SimError::IllegalTransition { state: self, action })
        }
    }
}

impl CombatAction {
    pub const ALL: [CombatAction; 3] = [CombatAction::Load, CombatAction::Attack, CombatAction::Hide];
}

impl fmt::Display for CombatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CombatState::Empty => "MT",
            CombatState::Loaded => "L",
            CombatState::LoadedHidden => "LH",
        })
    }
}

impl fmt::Display for CombatAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CombatAction::Load => "LOAD",
            CombatAction::Attack => "ATK",
            CombatAction::Hide => "HIDE",
        })
    }
}

/// Apply one action and return the next state with the damage it dealt.
///
/// Panics on any (state, action) pair outside the transition table; that is
/// a bug in the caller's strategy and the run cannot continue.
pub fn step(
    dice: &mut Dice,
    stats: &CombatStats,
    state: CombatState,
    action: CombatAction,
) -> (CombatState, i32) {
    use CombatAction::*;
    use CombatState::*;

    trace!("On {} / choosing {}", state, action);
    match (state, action) {
        (Empty, Load) => (Loaded, 0),
        (Loaded, Attack) => (Empty, resolve_attack(dice, stats, bolt_damage)),
        (Loaded, Hide) => {
            let roll = dice.d20();
            if roll >= stats.hide_dc {
                trace!("hide check {} succeeds", roll);
                (LoadedHidden, 0)
            } else {
                trace!("hide check {} fails", roll);
                (Loaded, 0)
            }
        }
        (LoadedHidden, Attack) => {
            trace!("SNEAK ATTACK!");
            (Empty, resolve_attack(dice, stats, sneak_damage))
        }
        (Empty, Attack | Hide) | (LoadedHidden, Load | Hide) | (Loaded, Load) => {
            panic!("{}", SimError::IllegalTransition { state, action })
        }
    }
}
