//! Unified error types surfaced by the runtime.
//!
//! Wraps failures from scenario loading, validation, and the engine so
//! clients can bubble them up with consistent context.
use battle_core::{ActionError, UnitClass};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to read scenario file")]
    ScenarioIo(#[from] std::io::Error),

    #[error("failed to parse scenario file")]
    ScenarioParse(#[from] serde_json::Error),

    #[error("{class} spec has non-positive hp {hp}")]
    NonPositiveHp { class: UnitClass, hp: i32 },

    #[error("{class} spec has non-positive power {power}")]
    NonPositivePower { class: UnitClass, power: i32 },

    #[error("battle action failed")]
    Action(#[from] ActionError),
}
