//! Deterministic roster digest.
//!
//! Provides a cryptographic commitment to the full roster state, used by the
//! runtime to verify that rollback restored the exact pre-battle state and by
//! tests of the execute/undo round-trip law.

use sha2::{Digest, Sha256};

use super::{RosterState, UnitClass};

/// Computes a SHA-256 digest over every unit in canonical enumeration order
/// (warriors, clerics, orcs).
///
/// Each unit contributes its id, class tag, hp, and power as little-endian
/// bytes, so two rosters produce equal digests iff they hold identical units
/// in identical order.
pub fn state_digest(roster: &RosterState) -> [u8; 32] {
    let mut hasher = Sha256::new();

    for unit in roster.units() {
        hasher.update(unit.id.0.to_le_bytes());
        hasher.update([class_tag(unit.class)]);
        hasher.update(unit.hp.to_le_bytes());
        hasher.update(unit.power.to_le_bytes());
    }

    hasher.finalize().into()
}

fn class_tag(class: UnitClass) -> u8 {
    match class {
        UnitClass::Warrior => 0,
        UnitClass::Cleric => 1,
        UnitClass::Orc => 2,
    }
}
