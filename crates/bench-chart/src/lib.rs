// File: crates/bench-chart/src/lib.rs
// Summary: Core library entry point; turns a benchmark result table into a horizontal bar chart PNG.

pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod order;
pub mod pipeline;
pub mod scale;
pub mod series;
pub mod table;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::{Axis, AxisSide};
pub use chart::{BarChart, ChartLayout, RenderOptions};
pub use config::PlotConfig;
pub use error::{ChartError, Result};
pub use export::{render_to_png, render_to_png_bytes, tight_layout};
pub use legend::Legend;
pub use order::{rank_order, ChartSpec};
pub use pipeline::{run, RunSummary};
pub use series::{ChartMode, MetricColumns};
pub use table::{BenchmarkRow, Dataset};
pub use text::{ApproxMetrics, TextMetrics, TextShaper};
pub use theme::Theme;
