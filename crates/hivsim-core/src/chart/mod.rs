//! Chart rendering boundary.
//!
//! - `sink`: the rendering target trait and an in-memory `LineChart`
//! - `updater`: maps `SimulationResult` onto a sink (`ChartUpdater`)

mod sink;
mod updater;

pub use sink::{ChartData, ChartSink, Dataset, LineChart};
pub use updater::{
    ChartUpdater, HEALTHY_T_CELLS, LATENT_RESERVOIR, SERIES_LABELS, VIRAL_LOAD,
};
