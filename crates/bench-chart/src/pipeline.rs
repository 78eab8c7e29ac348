// File: crates/bench-chart/src/pipeline.rs
// Summary: One pass from result table to chart image: load, order, build, export.

use std::path::PathBuf;

use crate::chart::BarChart;
use crate::config::PlotConfig;
use crate::error::Result;
use crate::export;
use crate::order::ChartSpec;
use crate::series::ChartMode;
use crate::table::Dataset;

/// What a successful run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: usize,
    pub mode: ChartMode,
    pub output_path: PathBuf,
}

/// Run the whole pipeline. Any failing stage aborts the run before the image is written.
pub fn run(config: &PlotConfig) -> Result<RunSummary> {
    let dataset = Dataset::load(&config.input_path)?;
    log::info!("loaded {} rows from {}:\n{dataset}", dataset.len(), config.input_path.display());

    let spec = ChartSpec::for_dataset(&dataset, config.mode)?;
    log::debug!("rendering in {} mode, rank order {:?}", spec.mode, spec.rank_order);

    let chart = BarChart::build(&dataset, &spec, config.title.as_str(), &config.render.theme)?;
    export::render_to_png(&chart, &config.render, &config.output_path)?;
    log::info!("wrote {}", config.output_path.display());

    Ok(RunSummary { rows: dataset.len(), mode: spec.mode, output_path: config.output_path.clone() })
}
