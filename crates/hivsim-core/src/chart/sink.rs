use serde::{Deserialize, Serialize};

/// One labeled series of a line chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
}

/// Full displayable state of a chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    /// Shared x-axis values.
    pub labels: Vec<f64>,
    pub datasets: Vec<Dataset>,
}

/// A rendering target for labeled numeric series.
///
/// Writes to the data are staged until [`ChartSink::update`] is triggered.
pub trait ChartSink {
    /// Replaces the staged axis labels and datasets.
    fn set_data(&mut self, labels: Vec<f64>, datasets: Vec<Dataset>);

    /// Commits the staged data to the display.
    fn update(&mut self);
}

/// In-memory line chart.
///
/// Keeps the staged data and the last committed snapshot apart, so the
/// displayed state only changes when `update` runs.
#[derive(Debug, Clone, Default)]
pub struct LineChart {
    staged: ChartData,
    displayed: ChartData,
    revision: u64,
}

impl LineChart {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last committed state.
    pub fn displayed(&self) -> &ChartData {
        &self.displayed
    }

    /// Number of committed updates.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_blank(&self) -> bool {
        self.displayed.labels.is_empty()
    }
}

impl ChartSink for LineChart {
    fn set_data(&mut self, labels: Vec<f64>, datasets: Vec<Dataset>) {
        self.staged = ChartData { labels, datasets };
    }

    fn update(&mut self) {
        self.displayed = self.staged.clone();
        self.revision += 1;
    }
}
