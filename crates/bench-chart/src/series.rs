// File: crates/bench-chart/src/series.rs
// Summary: Chart modes, per-mode metric columns and horizontal bar series.

use std::fmt;
use std::str::FromStr;

use skia_safe as skia;

use crate::order::ChartSpec;
use crate::table::Dataset;

/// Series name and axis label of the primary metric.
pub const THROUGHPUT_LABEL: &str = "obj per second";
/// Series name of the secondary metric.
pub const PEAK_MEMORY_SERIES: &str = "peak heap usage";
/// Axis label of the secondary metric.
pub const PEAK_MEMORY_AXIS: &str = "byte";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartMode {
    /// Throughput only.
    Single,
    /// Throughput on the primary axis, peak memory on an independent secondary axis.
    Dual,
}

impl fmt::Display for ChartMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChartMode::Single => "single",
            ChartMode::Dual => "dual",
        })
    }
}

impl FromStr for ChartMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(ChartMode::Single),
            "dual" => Ok(ChartMode::Dual),
            other => Err(format!("unknown chart mode {other:?} (expected single or dual)")),
        }
    }
}

/// Metric values in rank order, tagged by mode.
#[derive(Clone, Debug, PartialEq)]
pub enum MetricColumns {
    Single { throughput: Vec<f64> },
    Dual { throughput: Vec<f64>, peak_memory: Vec<f64> },
}

impl MetricColumns {
    /// Pick the columns `spec` asks for, in `spec.rank_order`.
    /// Returns `None` when the order names a missing row, or when dual mode is
    /// requested but a row has no peak memory.
    pub fn select(dataset: &Dataset, spec: &ChartSpec) -> Option<Self> {
        let rows = spec
            .rank_order
            .iter()
            .map(|&i| dataset.rows().get(i))
            .collect::<Option<Vec<_>>>()?;
        let throughput = rows.iter().map(|r| r.throughput).collect();
        match spec.mode {
            ChartMode::Single => Some(Self::Single { throughput }),
            ChartMode::Dual => {
                let peak_memory = rows.iter().map(|r| r.peak_memory).collect::<Option<Vec<_>>>()?;
                Some(Self::Dual { throughput, peak_memory })
            }
        }
    }

    pub fn mode(&self) -> ChartMode {
        match self {
            Self::Single { .. } => ChartMode::Single,
            Self::Dual { .. } => ChartMode::Dual,
        }
    }
}

/// Where a bar sits inside its category slot, in slot units.
/// The bar spans `center - width * position .. center + width * (1 - position)`,
/// measured upward from the slot center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarPlacement {
    pub width: f64,
    pub position: f64,
}

impl BarPlacement {
    /// Centered on the slot.
    pub const CENTERED: Self = Self { width: 0.5, position: 0.5 };
    /// Second-series position: from the slot center upward.
    pub const OFFSET: Self = Self { width: 0.5, position: 0.0 };

    /// Logical (lower, upper) extent for slot `slot`.
    pub fn extent(&self, slot: usize) -> (f64, f64) {
        let c = slot as f64;
        (c - self.width * self.position, c + self.width * (1.0 - self.position))
    }
}

/// One horizontal bar per category slot, all measured against one value axis.
#[derive(Clone, Debug)]
pub struct BarSeries {
    pub name: String,
    /// Bar lengths in rank order; index `i` belongs to slot `i`.
    pub values: Vec<f64>,
    pub color: skia::Color,
    /// Opacity in `0.0..=1.0`.
    pub alpha: f32,
    pub placement: BarPlacement,
}

impl BarSeries {
    pub fn new(name: impl Into<String>, values: Vec<f64>, color: skia::Color) -> Self {
        Self { name: name.into(), values, color, alpha: 1.0, placement: BarPlacement::CENTERED }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn with_placement(mut self, placement: BarPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Fill color with the series opacity applied.
    pub fn fill(&self) -> skia::Color {
        self.color.with_a((self.alpha * 255.0).round() as u8)
    }
}
