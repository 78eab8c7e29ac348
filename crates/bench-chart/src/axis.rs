// File: crates/bench-chart/src/axis.rs
// Summary: Value axis model with label, range, placement and ticks.

use crate::grid::{format_tick, nice_step, nice_ticks, MAX_TICKS};

/// Fraction of the largest value added as headroom past the longest bar.
pub const MARGIN: f64 = 0.05;

/// Which edge of the plot frame a value axis is drawn on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSide {
    /// Primary axis, below the plot.
    Bottom,
    /// Secondary axis, above the plot.
    Top,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub side: AxisSide,
    /// Rotate numeric tick labels 90 degrees so long numbers do not collide.
    pub rotate_ticks: bool,
}

/// One tick: its value and the text drawn for it.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64, side: AxisSide) -> Self {
        Self { label: label.into(), min, max, side, rotate_ticks: false }
    }

    /// Axis from zero to the largest value plus a small margin.
    /// Bars always start at zero, so the lower bound never moves.
    pub fn fit(label: impl Into<String>, values: &[f64], side: AxisSide) -> Self {
        let max = values.iter().copied().fold(0.0_f64, f64::max);
        let max = if max > 0.0 { (max * (1.0 + MARGIN)).min(f64::MAX) } else { 1.0 };
        Self::new(label, 0.0, max, side)
    }

    pub fn with_rotated_ticks(mut self, rotate: bool) -> Self {
        self.rotate_ticks = rotate;
        self
    }

    pub fn ticks(&self) -> Vec<Tick> {
        let step = nice_step(self.max - self.min, MAX_TICKS);
        nice_ticks(self.min, self.max, MAX_TICKS)
            .into_iter()
            .map(|value| Tick { value, label: format_tick(value, step) })
            .collect()
    }
}
