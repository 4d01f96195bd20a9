use std::fmt;

/// Unique identifier for a unit tracked in the roster.
///
/// Assigned monotonically by [`RosterState`](super::RosterState); a unit
/// keeps its id for the lifetime of the roster that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Combat role of a unit.
///
/// Warriors and orcs are the attacker pools of the two sides; clerics are
/// side-A support and are never targeted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitClass {
    Warrior,
    Cleric,
    Orc,
}

/// Mutable ledger entry for one combatant.
///
/// `hp` is signed and unclamped: damage may drive it below zero and healing
/// may push it past the spawn value. There is no max-health invariant;
/// liveness is strictly `hp > 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitState {
    pub id: UnitId,
    pub class: UnitClass,
    pub hp: i32,
    /// Role-specific attribute: damage dealt for warriors and orcs, heal
    /// amount for clerics. Immutable after spawn.
    pub power: i32,
}

impl UnitState {
    pub fn new(id: UnitId, class: UnitClass, hp: i32, power: i32) -> Self {
        Self {
            id,
            class,
            hp,
            power,
        }
    }

    /// Returns true while the unit has positive health.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Unconditional additive heal. No ceiling is applied.
    pub fn increase_hp_by(&mut self, amount: i32) {
        debug_assert!(amount >= 0, "heal magnitudes are non-negative");
        self.hp += amount;
    }

    /// Unconditional additive damage. No floor is applied; hp may go
    /// negative.
    pub fn decrease_hp_by(&mut self, amount: i32) {
        debug_assert!(amount >= 0, "damage magnitudes are non-negative");
        self.hp -= amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alive_requires_positive_hp() {
        let mut unit = UnitState::new(UnitId(0), UnitClass::Warrior, 1, 20);
        assert!(unit.is_alive());

        unit.decrease_hp_by(1);
        assert_eq!(unit.hp, 0);
        assert!(!unit.is_alive());
    }

    #[test]
    fn damage_drives_hp_negative_without_clamp() {
        let mut unit = UnitState::new(UnitId(3), UnitClass::Orc, 5, 30);

        unit.decrease_hp_by(20);
        assert_eq!(unit.hp, -15);
        assert!(!unit.is_alive());
    }

    #[test]
    fn heal_has_no_ceiling() {
        let mut unit = UnitState::new(UnitId(1), UnitClass::Warrior, 100, 20);

        unit.increase_hp_by(50);
        assert_eq!(unit.hp, 150);
    }

    #[test]
    fn unit_id_displays_with_hash_prefix() {
        assert_eq!(UnitId(7).to_string(), "#7");
    }
}
