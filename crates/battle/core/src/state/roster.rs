use super::{UnitClass, UnitId, UnitState};

/// One of the three disjoint unit collections owned by the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Group {
    Warriors,
    Clerics,
    Orcs,
}

/// Owns every combatant for one battle.
///
/// A unit lives in exactly one group for its lifetime. Unit ids are handed
/// out by the roster's own monotonic counter, so they are unique across all
/// groups for as long as the roster exists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterState {
    warriors: Vec<UnitState>,
    clerics: Vec<UnitState>,
    orcs: Vec<UnitState>,
    next_id: u32,
}

impl RosterState {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> UnitId {
        let id = UnitId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Spawns a side-A attacker. Returns the assigned id.
    pub fn add_warrior(&mut self, hp: i32, damage: i32) -> UnitId {
        let id = self.allocate_id();
        self.warriors
            .push(UnitState::new(id, UnitClass::Warrior, hp, damage));
        id
    }

    /// Spawns a side-A healer. Returns the assigned id.
    pub fn add_cleric(&mut self, hp: i32, heal: i32) -> UnitId {
        let id = self.allocate_id();
        self.clerics
            .push(UnitState::new(id, UnitClass::Cleric, hp, heal));
        id
    }

    /// Spawns a side-B attacker. Returns the assigned id.
    pub fn add_orc(&mut self, hp: i32, damage: i32) -> UnitId {
        let id = self.allocate_id();
        self.orcs.push(UnitState::new(id, UnitClass::Orc, hp, damage));
        id
    }

    /// Read-only view of one group in enumeration order.
    pub fn group(&self, group: Group) -> &[UnitState] {
        match group {
            Group::Warriors => &self.warriors,
            Group::Clerics => &self.clerics,
            Group::Orcs => &self.orcs,
        }
    }

    /// Iterates every unit in canonical order (warriors, clerics, orcs).
    pub fn units(&self) -> impl Iterator<Item = &UnitState> {
        self.warriors
            .iter()
            .chain(self.clerics.iter())
            .chain(self.orcs.iter())
    }

    /// Looks up a unit by id across all groups.
    pub fn unit(&self, id: UnitId) -> Option<&UnitState> {
        self.units().find(|unit| unit.id == id)
    }

    pub(crate) fn unit_mut(&mut self, id: UnitId) -> Option<&mut UnitState> {
        self.warriors
            .iter_mut()
            .chain(self.clerics.iter_mut())
            .chain(self.orcs.iter_mut())
            .find(|unit| unit.id == id)
    }

    /// Returns true iff no member of the group is alive.
    ///
    /// Vacuously true for an empty group.
    pub fn all_dead(&self, group: Group) -> bool {
        self.group(group).iter().all(|unit| !unit.is_alive())
    }

    /// Living member of the group with minimum hp, first-encountered on
    /// ties. `None` when no member is alive.
    pub fn lowest_hp_living(&self, group: Group) -> Option<UnitId> {
        self.group(group)
            .iter()
            .filter(|unit| unit.is_alive())
            .min_by_key(|unit| unit.hp)
            .map(|unit| unit.id)
    }
}
