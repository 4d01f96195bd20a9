//! Console battle simulator entry point.
mod config;
mod report;

use anyhow::{Context, Result};
use battle_runtime::{Scenario, Simulator};
use config::CliConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_env();

    let scenario = match &config.scenario {
        Some(path) => Scenario::from_path(path)
            .with_context(|| format!("loading scenario from {}", path.display()))?,
        None => Scenario::skirmish(),
    };

    let mut simulator = Simulator::new(&scenario).context("building roster from scenario")?;
    let battle_report = simulator.run().context("running battle")?;

    report::print_transcript(&battle_report, config.show_rounds);

    Ok(())
}
