//! Drives one battle from scenario to rollback.

use battle_core::{
    Action, ActionError, BattleEngine, BattleStatus, RosterState, state_digest,
};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::report::{ActionRecord, BattleReport, RoundRecord, Winner, snapshot};
use crate::scenario::Scenario;

/// Owns the roster for one battle and produces a [`BattleReport`].
///
/// The battle phase and the rollback phase run strictly one after the
/// other inside [`run`](Self::run); the roster is never shared while either
/// is mutating it.
pub struct Simulator {
    roster: RosterState,
}

impl Simulator {
    /// Validates the scenario and builds the initial roster.
    pub fn new(scenario: &Scenario) -> Result<Self> {
        scenario.validate()?;
        Ok(Self {
            roster: scenario.build_roster(),
        })
    }

    pub fn roster(&self) -> &RosterState {
        &self.roster
    }

    /// Runs the battle to resolution, rolls every action back, and verifies
    /// restoration against the pre-battle digest.
    pub fn run(&mut self) -> Result<BattleReport> {
        let pre_digest = state_digest(&self.roster);
        info!(digest = %hex::encode(pre_digest), "battle started");

        let mut engine = BattleEngine::new(&mut self.roster);
        let mut rounds = Vec::new();

        let winner = loop {
            match engine.status() {
                BattleStatus::OrcsEliminated => break Winner::Warriors,
                BattleStatus::WarriorsEliminated => break Winner::Orcs,
                BattleStatus::InProgress => {}
            }

            let number = rounds.len() as u32 + 1;
            let start_status = snapshot(engine.roster());

            let executed = engine.run_round()?;
            let actions = executed
                .iter()
                .map(|action| record(engine.roster(), action))
                .collect::<std::result::Result<Vec<_>, _>>()?;

            for action in &actions {
                debug!(
                    round = number,
                    actor = %action.actor,
                    target = %action.target,
                    magnitude = action.magnitude,
                    kind = ?action.kind,
                    "action executed"
                );
            }
            info!(round = number, actions = actions.len(), "round complete");

            rounds.push(RoundRecord {
                number,
                start_status,
                actions,
            });
        };

        let after_battle = snapshot(engine.roster());

        let undone = engine.rollback()?;
        info!(undone, "rollback complete");

        let after_rollback = snapshot(&self.roster);
        let post_digest = state_digest(&self.roster);
        let restored = post_digest == pre_digest;
        if !restored {
            // The round-trip law guarantees restoration; a mismatch means
            // the history stack was corrupted.
            warn!(
                pre = %hex::encode(pre_digest),
                post = %hex::encode(post_digest),
                "rollback did not restore pre-battle state"
            );
        }

        Ok(BattleReport {
            rounds,
            winner,
            after_battle,
            after_rollback,
            pre_digest: hex::encode(pre_digest),
            post_digest: hex::encode(post_digest),
            restored,
        })
    }
}

fn record(roster: &RosterState, action: &Action) -> std::result::Result<ActionRecord, ActionError> {
    let actor = roster
        .unit(action.actor)
        .ok_or(ActionError::UnknownUnit(action.actor))?;
    Ok(ActionRecord::new(action, actor.class))
}
