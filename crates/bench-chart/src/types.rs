// File: crates/bench-chart/src/types.rs
// Summary: Shared types and constants (sizes, font sizes, paddings).

/// Default surface width in pixels.
pub const WIDTH: i32 = 640;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 480;
/// Default outer padding kept free around all content.
pub const PAD: f32 = 8.0;

/// Font size of tick labels (both value axes and category labels).
pub const TICK_FONT: f32 = 10.0;
/// Font size of axis labels.
pub const LABEL_FONT: f32 = 10.0;
/// Font size of the chart title.
pub const TITLE_FONT: f32 = 12.0;
/// Font size of legend entries.
pub const LEGEND_FONT: f32 = 10.0;

/// Length of a tick mark outside the plot frame.
pub const TICK_LEN: f32 = 3.5;
/// Gap between a tick mark and its label, or between stacked text blocks.
pub const GAP: f32 = 3.5;

/// Screen margins around the plot frame, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(PAD, PAD, PAD, PAD)
    }
}
