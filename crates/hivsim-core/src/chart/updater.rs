use super::sink::{ChartSink, Dataset};
use crate::simulation::SimulationResult;

pub const HEALTHY_T_CELLS: &str = "Healthy T Cells";
pub const VIRAL_LOAD: &str = "Viral Load";
pub const LATENT_RESERVOIR: &str = "Latent Reservoir";

/// Dataset labels, in display order.
pub const SERIES_LABELS: [&str; 3] = [HEALTHY_T_CELLS, VIRAL_LOAD, LATENT_RESERVOIR];

/// Maps a simulation result onto a chart sink.
pub struct ChartUpdater;

impl ChartUpdater {
    /// Replaces the whole chart with `result` and triggers an update.
    ///
    /// Prior state is discarded; there is no merge with earlier runs.
    pub fn render<S: ChartSink + ?Sized>(sink: &mut S, result: SimulationResult) {
        let SimulationResult { time, t, v, l } = result;
        let points = time.len();

        let datasets = SERIES_LABELS
            .iter()
            .zip([t, v, l])
            .map(|(label, data)| Dataset {
                label: (*label).to_string(),
                data,
            })
            .collect();

        sink.set_data(time, datasets);
        sink.update();
        tracing::debug!("[ChartUpdater] Rendered {} points", points);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::LineChart;

    fn result(offset: f64) -> SimulationResult {
        SimulationResult {
            time: vec![0.0, 1.0, 2.0],
            t: vec![1000.0 + offset, 1001.0, 1002.0],
            v: vec![50.0, 75.0 + offset, 112.5],
            l: vec![300.0, 300.0, 300.0 - offset],
        }
    }

    #[test]
    fn test_render_maps_series_by_label() {
        let mut chart = LineChart::new();
        ChartUpdater::render(&mut chart, result(0.0));

        let data = chart.displayed();
        assert_eq!(data.labels, vec![0.0, 1.0, 2.0]);
        let labels: Vec<_> = data.datasets.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, SERIES_LABELS);
        assert_eq!(data.datasets[0].data, vec![1000.0, 1001.0, 1002.0]);
        assert_eq!(data.datasets[1].data, vec![50.0, 75.0, 112.5]);
        assert_eq!(data.datasets[2].data, vec![300.0, 300.0, 300.0]);
    }

    #[test]
    fn test_render_replaces_previous_state() {
        let mut chart = LineChart::new();
        ChartUpdater::render(&mut chart, result(0.0));
        ChartUpdater::render(
            &mut chart,
            SimulationResult {
                time: vec![0.0],
                t: vec![1.0],
                v: vec![2.0],
                l: vec![3.0],
            },
        );

        let data = chart.displayed();
        assert_eq!(data.labels, vec![0.0]);
        assert!(data.datasets.iter().all(|d| d.data.len() == 1));
        assert_eq!(data.datasets.len(), 3);
        assert_eq!(chart.revision(), 2);
    }
}
