//! Turn engine and rollback pipeline.
//!
//! The [`BattleEngine`] is the authoritative reducer for [`RosterState`]
//! during a battle. It plans one round at a time against the start-of-round
//! snapshot, executes the planned queue in FIFO order, and appends every
//! executed action to a LIFO history stack that [`rollback`] later drains
//! in strict reverse chronological order.
//!
//! [`rollback`]: BattleEngine::rollback

mod rollback;
mod rounds;

use crate::action::{Action, ActionError};
use crate::state::{Group, RosterState};

/// Resolution state of a battle.
///
/// Healer survival never affects termination; the battle ends as soon as
/// either attacker pool has no living members.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleStatus {
    InProgress,
    /// All side-A attackers are down; the orcs win.
    WarriorsEliminated,
    /// All side-B attackers are down; the warriors win.
    OrcsEliminated,
}

impl BattleStatus {
    /// Returns true once either attacker pool is eliminated.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, BattleStatus::InProgress)
    }
}

/// Drives one battle over a mutably borrowed roster.
///
/// The engine is the sole writer during the battle phase; rollback is the
/// sole writer afterwards. The two phases never overlap.
pub struct BattleEngine<'a> {
    roster: &'a mut RosterState,
    history: Vec<Action>,
}

impl<'a> BattleEngine<'a> {
    pub fn new(roster: &'a mut RosterState) -> Self {
        Self {
            roster,
            history: Vec::new(),
        }
    }

    /// Current resolution state.
    ///
    /// Orc elimination is checked first, so a round that empties both
    /// attacker pools resolves as a warrior win.
    pub fn status(&self) -> BattleStatus {
        if self.roster.all_dead(Group::Orcs) {
            BattleStatus::OrcsEliminated
        } else if self.roster.all_dead(Group::Warriors) {
            BattleStatus::WarriorsEliminated
        } else {
            BattleStatus::InProgress
        }
    }

    /// Read-only view of the roster being driven.
    pub fn roster(&self) -> &RosterState {
        self.roster
    }

    /// Executed actions in chronological order.
    pub fn history(&self) -> &[Action] {
        &self.history
    }

    /// Plans and executes one full round.
    ///
    /// Returns the actions executed this round in execution order. The
    /// returned slice is empty only when no living actor could find a
    /// living target.
    pub fn run_round(&mut self) -> Result<Vec<Action>, ActionError> {
        let queue = self.plan_round();

        for action in &queue {
            action.execute(self.roster)?;
            self.history.push(*action);
        }

        Ok(queue)
    }
}
