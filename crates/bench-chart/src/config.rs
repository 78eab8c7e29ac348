// File: crates/bench-chart/src/config.rs
// Summary: Run configuration: input table, output image, mode override and render options.

use std::path::PathBuf;

use crate::chart::{RenderOptions, TITLE};
use crate::series::ChartMode;

/// Conventional input file name written by the benchmark harness.
pub const DEFAULT_INPUT: &str = "result.csv";
/// Conventional output image name.
pub const DEFAULT_OUTPUT: &str = "result.png";

#[derive(Clone, Debug)]
pub struct PlotConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Force a mode instead of deriving it from the table shape.
    pub mode: Option<ChartMode>,
    pub title: String,
    pub render: RenderOptions,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            mode: None,
            title: TITLE.to_string(),
            render: RenderOptions::default(),
        }
    }
}

impl PlotConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self { input_path: input_path.into(), output_path: output_path.into(), ..Self::default() }
    }

    pub fn with_mode(mut self, mode: Option<ChartMode>) -> Self {
        self.mode = mode;
        self
    }
}
