//! Battle state: the unit ledger and the roster that owns it.

mod digest;
mod roster;
mod unit;

pub use digest::state_digest;
pub use roster::{Group, RosterState};
pub use unit::{UnitClass, UnitId, UnitState};
