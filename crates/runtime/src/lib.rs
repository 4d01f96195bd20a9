//! Battle driver layer on top of `battle-core`.
//!
//! Owns everything a front end needs besides rendering: scenario loading and
//! validation, the simulator that drives a battle to completion and rolls it
//! back, and the structured [`BattleReport`] describing what happened.
pub mod error;
pub mod report;
pub mod scenario;
pub mod simulator;

pub use error::{Result, RuntimeError};
pub use report::{ActionRecord, BattleReport, RoundRecord, UnitSnapshot, Winner};
pub use scenario::{Scenario, UnitSpec};
pub use simulator::Simulator;
