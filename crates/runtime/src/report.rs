//! Structured record of a finished battle.
//!
//! Front ends render these types; the simulator never prints. Everything is
//! serde-derived so a report can also be dumped as JSON for tooling.

use battle_core::{Action, ActionKind, RosterState, UnitClass, UnitId};
use serde::{Deserialize, Serialize};

/// Which side's attacker pool survived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Warriors,
    Orcs,
}

/// Point-in-time view of one unit, in roster enumeration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSnapshot {
    pub id: UnitId,
    pub class: UnitClass,
    pub hp: i32,
}

/// Snapshots every unit in canonical order (warriors, clerics, orcs).
pub fn snapshot(roster: &RosterState) -> Vec<UnitSnapshot> {
    roster
        .units()
        .map(|unit| UnitSnapshot {
            id: unit.id,
            class: unit.class,
            hp: unit.hp,
        })
        .collect()
}

/// One executed action, annotated with the actor's class for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub kind: ActionKind,
    pub actor: UnitId,
    pub actor_class: UnitClass,
    pub target: UnitId,
    pub magnitude: i32,
}

impl ActionRecord {
    pub fn new(action: &Action, actor_class: UnitClass) -> Self {
        Self {
            kind: action.kind,
            actor: action.actor,
            actor_class,
            target: action.target,
            magnitude: action.magnitude,
        }
    }
}

/// One full round: the status snapshot it started from and the actions it
/// executed, in execution order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub number: u32,
    pub start_status: Vec<UnitSnapshot>,
    pub actions: Vec<ActionRecord>,
}

/// Complete account of a battle and its rollback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    pub rounds: Vec<RoundRecord>,
    pub winner: Winner,
    pub after_battle: Vec<UnitSnapshot>,
    pub after_rollback: Vec<UnitSnapshot>,
    /// Hex-encoded pre-battle roster digest.
    pub pre_digest: String,
    /// Hex-encoded digest after rollback.
    pub post_digest: String,
    /// True iff rollback restored the exact pre-battle state.
    pub restored: bool,
}
