use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CombatAction, CombatState};

/// Fixed decision rules. Neither touches the dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Load, shoot, repeat.
    Standard,
    /// Load, hide until it works, then sneak attack.
    Sneak,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Standard, Strategy::Sneak];

    pub fn decide(self, state: CombatState) -> CombatAction {
        match (self, state) {
            (_, CombatState::Empty) => CombatAction::Load,
            (Strategy::Standard, CombatState::Loaded) => CombatAction::Attack,
            (Strategy::Standard, CombatState::LoadedHidden) => {
                unreachable!("standard strategy never hides")
            }
            (Strategy::Sneak, CombatState::Loaded) => CombatAction::Hide,
            (Strategy::Sneak, CombatState::LoadedHidden) => CombatAction::Attack,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strategy::Standard => "Standard",
            Strategy::Sneak => "Sneak attack",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
