// File: crates/bench-chart/src/theme.rs
// Summary: Color theme for chart rendering.

use skia_safe as skia;

/// Opacity of secondary-axis bars so the primary bars stay readable.
pub const SECONDARY_ALPHA: f32 = 0.5;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub primary_bar: skia::Color,
    pub secondary_bar: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_frame: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            title: skia::Color::from_argb(255, 0, 0, 0),
            primary_bar: skia::Color::from_argb(255, 0x1f, 0x77, 0xb4), // blue
            secondary_bar: skia::Color::from_argb(255, 0xff, 0x7f, 0x0e), // orange
            legend_fill: skia::Color::from_argb(204, 255, 255, 255),
            legend_frame: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}
