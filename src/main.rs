mod chart;
mod color;
mod data;
mod speedup;

use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{info, warn};

use chart::{AxisScale, ChartSpec};
use data::model::Factor;

/// Fixed benchmark input, as written by the benchmark harness (or by
/// `generate_sample` for a synthetic run).
const INPUT_PATH: &str = "benchmark_results.csv";

/// Thread count the third chart zooms in on.
const THREAD_FILTER: u64 = 12;

/// The three rendering passes, in output order.
fn chart_passes() -> [ChartSpec; 3] {
    [
        ChartSpec {
            title: "Speedup vs. Number of Threads".to_string(),
            group_by: Some(Factor::ArraySize),
            x_axis: Factor::NumThreads,
            x_scale: AxisScale::Linear,
            filter: None,
            output: PathBuf::from("speedup_vs_threads.png"),
        },
        ChartSpec {
            title: "Speedup vs. Array Size".to_string(),
            group_by: Some(Factor::NumThreads),
            x_axis: Factor::ArraySize,
            x_scale: AxisScale::Logarithmic,
            filter: None,
            output: PathBuf::from("speedup_vs_array_size.png"),
        },
        ChartSpec {
            title: format!("Speedup vs. Array Size for Threads = {THREAD_FILTER}"),
            group_by: None,
            x_axis: Factor::ArraySize,
            x_scale: AxisScale::Logarithmic,
            filter: Some((Factor::NumThreads, THREAD_FILTER)),
            output: PathBuf::from("speedup_vs_array_size_threads_12.png"),
        },
    ]
}

fn main() -> Result<()> {
    env_logger::init();

    let dataset = data::loader::load_csv(Path::new(INPUT_PATH))?;
    info!(
        "loaded {} measurements ({} array sizes, {} thread counts) from {INPUT_PATH}",
        dataset.len(),
        Factor::ArraySize.unique_values(&dataset).len(),
        Factor::NumThreads.unique_values(&dataset).len()
    );
    if dataset.is_empty() {
        warn!("{INPUT_PATH} has no data rows; all charts will be empty");
    }

    for spec in chart_passes() {
        chart::render(&dataset, &spec)?;
    }

    Ok(())
}
