use thiserror::Error;

use crate::{CombatAction, CombatState};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("iteration count must be at least 1")]
    ZeroIterations,
    #[error("illegal transition: {action} is not allowed from {state}")]
    IllegalTransition {
        state: CombatState,
        action: CombatAction,
    },
}
