//! Post-battle rollback.
//!
//! The history stack is popped to empty, undoing each action in strict
//! reverse chronological order. Later actions may depend on health values
//! produced by earlier ones in the same round, so LIFO order is what makes
//! the per-action round-trip law compose into full-state restoration.

use crate::action::ActionError;

use super::BattleEngine;

impl<'a> BattleEngine<'a> {
    /// Undoes every executed action, most recent first.
    ///
    /// Postcondition: every unit's hp equals its pre-battle value. Returns
    /// the number of actions undone.
    pub fn rollback(&mut self) -> Result<usize, ActionError> {
        let mut undone = 0;

        while let Some(action) = self.history.pop() {
            action.undo(self.roster)?;
            undone += 1;
        }

        Ok(undone)
    }
}
