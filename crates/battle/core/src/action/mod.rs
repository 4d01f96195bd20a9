//! Invertible battle actions.
//!
//! An [`Action`] binds one actor to one target with a magnitude captured at
//! creation time. Executing and then undoing the same action leaves the
//! target's hp unchanged (provided nothing else touched the target in
//! between); the rollback engine depends on that round-trip law holding for
//! every entry in the history stack.

use crate::state::{RosterState, UnitId};

/// Errors surfaced while applying an action to the roster.
///
/// The engine only constructs actions against units it just enumerated, so
/// seeing this error indicates a defect in the caller, not a recoverable
/// battle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("unit {0} is not part of the roster")]
    UnknownUnit(UnitId),
}

/// Kind of effect an action applies to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    Attack,
    Heal,
}

/// One executable, invertible operation in a battle.
///
/// The magnitude is fixed when the action is planned, from the actor's power
/// at that moment, and is never reread. Undo therefore reverses the specific
/// execution exactly even if the actor's power could change later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    pub kind: ActionKind,
    pub actor: UnitId,
    pub target: UnitId,
    pub magnitude: i32,
}

impl Action {
    /// Creates an attack dealing `magnitude` damage to the target.
    pub fn attack(actor: UnitId, target: UnitId, magnitude: i32) -> Self {
        Self {
            kind: ActionKind::Attack,
            actor,
            target,
            magnitude,
        }
    }

    /// Creates a heal restoring `magnitude` hp to the target.
    pub fn heal(actor: UnitId, target: UnitId, magnitude: i32) -> Self {
        Self {
            kind: ActionKind::Heal,
            actor,
            target,
            magnitude,
        }
    }

    /// Applies the effect to the target.
    pub fn execute(&self, roster: &mut RosterState) -> Result<(), ActionError> {
        let target = roster
            .unit_mut(self.target)
            .ok_or(ActionError::UnknownUnit(self.target))?;

        match self.kind {
            ActionKind::Attack => target.decrease_hp_by(self.magnitude),
            ActionKind::Heal => target.increase_hp_by(self.magnitude),
        }

        Ok(())
    }

    /// Applies the exact inverse of [`execute`](Self::execute).
    pub fn undo(&self, roster: &mut RosterState) -> Result<(), ActionError> {
        let target = roster
            .unit_mut(self.target)
            .ok_or(ActionError::UnknownUnit(self.target))?;

        match self.kind {
            ActionKind::Attack => target.increase_hp_by(self.magnitude),
            ActionKind::Heal => target.decrease_hp_by(self.magnitude),
        }

        Ok(())
    }
}
