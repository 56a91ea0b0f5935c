//! Terminal rendering of charts and notices.

use colored::Colorize;
use hivsim_application::{Notice, NoticeLevel};
use hivsim_core::chart::ChartData;

/// Number of rows printed for a chart, including the last day.
const SAMPLE_ROWS: usize = 12;

pub fn print_notice(notice: &Notice) {
    let line = match notice.level {
        NoticeLevel::Info => notice.message.bright_blue(),
        NoticeLevel::Warning => notice.message.yellow(),
        NoticeLevel::Error => notice.message.red(),
    };
    println!("{}", line);
}

/// Prints an evenly sampled table of the displayed series.
pub fn print_chart(data: &ChartData) {
    if data.labels.is_empty() {
        println!("{}", "Chart is empty. Run a simulation first.".bright_black());
        return;
    }

    let mut header = format!("{:>8}", "day");
    for dataset in &data.datasets {
        header.push_str(&format!(" {:>18}", dataset.label));
    }
    println!("{}", header.bold());

    for index in sample_indices(data.labels.len(), SAMPLE_ROWS) {
        let mut row = format!("{:>8}", data.labels[index]);
        for dataset in &data.datasets {
            match dataset.data.get(index) {
                Some(value) => row.push_str(&format!(" {:>18.2}", value)),
                None => row.push_str(&format!(" {:>18}", "-")),
            }
        }
        println!("{}", row);
    }
}

/// Picks up to `rows` indices spread over `0..len`, always keeping the last.
fn sample_indices(len: usize, rows: usize) -> Vec<usize> {
    if len == 0 || rows == 0 {
        return Vec::new();
    }
    if len <= rows {
        return (0..len).collect();
    }
    let step = (len - 1) as f64 / (rows - 1) as f64;
    let mut indices: Vec<usize> = (0..rows).map(|i| (i as f64 * step).round() as usize).collect();
    indices.dedup();
    indices
}
