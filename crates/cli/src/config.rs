//! CLI configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;

/// Configuration for one simulator run.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Path to a scenario JSON file; the built-in skirmish is used when
    /// unset.
    pub scenario: Option<PathBuf>,
    /// Whether to print the per-round status blocks.
    pub show_rounds: bool,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `SKIRMISH_SCENARIO`: path to a scenario JSON file
    /// - `SKIRMISH_SHOW_ROUNDS`: `true`/`false`, defaults to `true`
    pub fn from_env() -> Self {
        let mut config = Self {
            scenario: None,
            show_rounds: true,
        };

        if let Some(path) = read_env::<PathBuf>("SKIRMISH_SCENARIO") {
            config.scenario = Some(path);
        }

        if let Some(show) = read_env::<bool>("SKIRMISH_SHOW_ROUNDS") {
            config.show_rounds = show;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
