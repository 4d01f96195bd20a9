//! Scenario configuration for battle initialization.
//!
//! Scenarios define the initial forces of both sides. Keeping them as plain
//! serde records allows the same battle logic to run the built-in
//! demonstration, a JSON file supplied by the user, or test fixtures.

use std::fs;
use std::path::Path;

use battle_core::{RosterState, UnitClass};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RuntimeError};

/// Initial hp and role-specific power for one unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSpec {
    pub hp: i32,
    /// Damage for warriors and orcs, heal amount for clerics.
    pub power: i32,
}

impl UnitSpec {
    pub fn new(hp: i32, power: i32) -> Self {
        Self { hp, power }
    }
}

/// Initial forces for one battle.
///
/// Empty groups are allowed: an empty attacker pool counts as eliminated
/// and the battle resolves before any round runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub warriors: Vec<UnitSpec>,
    #[serde(default)]
    pub clerics: Vec<UnitSpec>,
    #[serde(default)]
    pub orcs: Vec<UnitSpec>,
}

impl Scenario {
    /// The canonical demonstration battle: two warriors and a cleric
    /// against a single tough orc.
    pub fn skirmish() -> Self {
        Self {
            warriors: vec![UnitSpec::new(100, 20), UnitSpec::new(100, 20)],
            clerics: vec![UnitSpec::new(80, 10)],
            orcs: vec![UnitSpec::new(200, 30)],
        }
    }

    /// Loads a scenario from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Rejects specs that would break battle invariants.
    ///
    /// Non-positive hp would spawn units that are already dead; a
    /// non-positive attack power would stall the battle forever since no
    /// round could reduce anyone's health.
    pub fn validate(&self) -> Result<()> {
        let groups = [
            (UnitClass::Warrior, &self.warriors),
            (UnitClass::Cleric, &self.clerics),
            (UnitClass::Orc, &self.orcs),
        ];

        for (class, specs) in groups {
            for spec in specs {
                if spec.hp <= 0 {
                    return Err(RuntimeError::NonPositiveHp { class, hp: spec.hp });
                }
                if spec.power <= 0 {
                    return Err(RuntimeError::NonPositivePower {
                        class,
                        power: spec.power,
                    });
                }
            }
        }

        Ok(())
    }

    /// Builds the roster, spawning units in group enumeration order.
    pub fn build_roster(&self) -> RosterState {
        let mut roster = RosterState::new();
        for spec in &self.warriors {
            roster.add_warrior(spec.hp, spec.power);
        }
        for spec in &self.clerics {
            roster.add_cleric(spec.hp, spec.power);
        }
        for spec in &self.orcs {
            roster.add_orc(spec.hp, spec.power);
        }
        roster
    }
}
