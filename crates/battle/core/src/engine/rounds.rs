//! Round planning.
//!
//! All targeting decisions for a round are computed before any action of
//! that round executes, so simultaneous targeting sees the start-of-round
//! health snapshot and never a partial update. Liveness is likewise checked
//! only at planning time: an actor killed mid-round still performs the
//! action planned for it.

use crate::action::Action;
use crate::state::Group;

use super::BattleEngine;

impl<'a> BattleEngine<'a> {
    /// Builds the round's action queue in fixed phase order:
    /// warriors attack, then orcs attack, then clerics heal.
    ///
    /// Actors with no living target are skipped for the round.
    pub(super) fn plan_round(&self) -> Vec<Action> {
        let roster = self.roster();
        let mut queue = Vec::new();

        // Warriors attack the orc with the lowest hp.
        for warrior in roster.group(Group::Warriors) {
            if !warrior.is_alive() {
                continue;
            }
            if let Some(target) = roster.lowest_hp_living(Group::Orcs) {
                queue.push(Action::attack(warrior.id, target, warrior.power));
            }
        }

        // Orcs attack the warrior with the lowest hp.
        for orc in roster.group(Group::Orcs) {
            if !orc.is_alive() {
                continue;
            }
            if let Some(target) = roster.lowest_hp_living(Group::Warriors) {
                queue.push(Action::attack(orc.id, target, orc.power));
            }
        }

        // Clerics heal the warrior with the lowest hp.
        for cleric in roster.group(Group::Clerics) {
            if !cleric.is_alive() {
                continue;
            }
            if let Some(target) = roster.lowest_hp_living(Group::Warriors) {
                queue.push(Action::heal(cleric.id, target, cleric.power));
            }
        }

        queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionKind;
    use crate::state::RosterState;

    #[test]
    fn plans_phases_in_fixed_order() {
        let mut roster = RosterState::new();
        let warrior = roster.add_warrior(100, 20);
        let cleric = roster.add_cleric(80, 10);
        let orc = roster.add_orc(200, 30);

        let engine = BattleEngine::new(&mut roster);
        let queue = engine.plan_round();

        assert_eq!(queue.len(), 3);
        assert_eq!(queue[0], Action::attack(warrior, orc, 20));
        assert_eq!(queue[1], Action::attack(orc, warrior, 30));
        assert_eq!(queue[2], Action::heal(cleric, warrior, 10));
    }

    #[test]
    fn dead_actors_are_skipped() {
        let mut roster = RosterState::new();
        let downed = roster.add_warrior(0, 20);
        let fighter = roster.add_warrior(50, 20);
        roster.add_orc(200, 30);

        let engine = BattleEngine::new(&mut roster);
        let queue = engine.plan_round();

        assert!(queue.iter().all(|action| action.actor != downed));
        assert!(queue.iter().any(|action| action.actor == fighter));
    }

    #[test]
    fn actors_without_living_target_are_skipped() {
        let mut roster = RosterState::new();
        roster.add_warrior(100, 20);
        roster.add_cleric(80, 10);
        // No orcs at all: nobody has a target except the cleric.

        let engine = BattleEngine::new(&mut roster);
        let queue = engine.plan_round();

        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].kind, ActionKind::Heal);
    }

    #[test]
    fn targeting_uses_start_of_round_snapshot() {
        // Both warriors must pick the same orc even though the first attack
        // would change the hp ordering if targeting were re-evaluated.
        let mut roster = RosterState::new();
        roster.add_warrior(100, 60);
        roster.add_warrior(100, 60);
        let weak = roster.add_orc(50, 30);
        roster.add_orc(55, 30);

        let engine = BattleEngine::new(&mut roster);
        let queue = engine.plan_round();

        let warrior_targets: Vec<_> = queue
            .iter()
            .filter(|action| action.kind == ActionKind::Attack && action.magnitude == 60)
            .map(|action| action.target)
            .collect();
        assert_eq!(warrior_targets, vec![weak, weak]);
    }

    #[test]
    fn run_round_executes_fifo_and_records_history() {
        let mut roster = RosterState::new();
        let warrior = roster.add_warrior(100, 20);
        let orc = roster.add_orc(200, 30);

        let mut engine = BattleEngine::new(&mut roster);
        let executed = engine.run_round().unwrap();

        assert_eq!(engine.history(), executed.as_slice());
        assert_eq!(engine.roster().unit(orc).unwrap().hp, 180);
        assert_eq!(engine.roster().unit(warrior).unwrap().hp, 70);
    }
}
