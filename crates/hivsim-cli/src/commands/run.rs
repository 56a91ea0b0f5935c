use std::sync::Arc;

use anyhow::{Result, anyhow};
use colored::Colorize;
use hivsim_application::{Notice, SimulatorUseCase};
use hivsim_core::config::RootConfig;
use hivsim_interaction::SimulationClient;

use crate::render;

/// Registers `identity`, runs one casual simulation and prints the chart.
pub async fn run(config: &RootConfig, identity: &str, json: bool) -> Result<()> {
    let engine = Arc::new(SimulationClient::from_settings(&config.api));
    let mut usecase = SimulatorUseCase::new(engine);

    usecase
        .register(identity)
        .map_err(|e| anyhow!(Notice::from_error(&e).message))?;
    let report = usecase
        .run_simulation()
        .await
        .map_err(|e| anyhow!(Notice::from_error(&e).message))?;

    let chart = usecase.chart().displayed();
    if json {
        println!("{}", serde_json::to_string_pretty(chart)?);
    } else {
        println!(
            "{}",
            format!(
                "{} simulation: {} days, therapy from day {}, {} at {}",
                report.mode,
                report.points,
                report.params.therapy_start,
                report.params.payload_type,
                report.params.release_rate
            )
            .bright_blue()
        );
        render::print_chart(chart);
    }
    Ok(())
}
