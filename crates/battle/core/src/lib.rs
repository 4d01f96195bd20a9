//! Deterministic battle logic and data types shared across drivers.
//!
//! `battle-core` defines the canonical rules (units, actions, the turn
//! engine) and exposes pure APIs that can be reused by both the runtime and
//! offline tools. All state mutation flows through [`engine::BattleEngine`],
//! and supporting crates depend on the types re-exported here.
pub mod action;
pub mod engine;
pub mod state;

pub use action::{Action, ActionError, ActionKind};
pub use engine::{BattleEngine, BattleStatus};
pub use state::{Group, RosterState, UnitClass, UnitId, UnitState, state_digest};
