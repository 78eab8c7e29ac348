// File: crates/bench-chart/src/legend.rs
// Summary: Legend entries, placement, and merging of per-axis legends into one figure legend.

use std::collections::HashSet;

use skia_safe as skia;

use crate::series::BarSeries;

/// Series name plus the swatch drawn next to it.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub swatch: skia::Color,
}

impl LegendEntry {
    pub fn for_series(series: &BarSeries) -> Self {
        Self { label: series.name.clone(), swatch: series.fill() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendAnchor {
    /// Inside the plot frame, in the upper- or lower-right corner,
    /// whichever hides less of the bars. Upper right on a tie.
    PlotRight,
    /// Upper-right corner of the whole figure.
    FigureUpperRight,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
    pub anchor: LegendAnchor,
}

impl Legend {
    /// Legend an axis builds for its own series.
    pub fn for_axis(series: &[&BarSeries]) -> Self {
        Self {
            entries: series.iter().map(|s| LegendEntry::for_series(s)).collect(),
            anchor: LegendAnchor::PlotRight,
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }
}

/// Take the legends out of `axis_legends` (leaving `None` behind) and combine
/// them into one figure legend: entries in the order given, first occurrence
/// of a label wins, no other sorting.
pub fn merge<'a>(axis_legends: impl IntoIterator<Item = &'a mut Option<Legend>>) -> Legend {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();
    for slot in axis_legends {
        let Some(legend) = slot.take() else { continue };
        for entry in legend.entries {
            if seen.insert(entry.label.clone()) {
                entries.push(entry);
            }
        }
    }
    Legend { entries, anchor: LegendAnchor::FigureUpperRight }
}
