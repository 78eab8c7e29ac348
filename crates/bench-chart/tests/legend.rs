// File: crates/bench-chart/tests/legend.rs
// Purpose: Legend merging order, de-duplication and removal of per-axis legends.

use bench_chart::legend::{merge, Legend, LegendAnchor, LegendEntry};
use skia_safe::Color;

fn legend(labels: &[&str]) -> Option<Legend> {
    Some(Legend {
        entries: labels.iter().map(|l| LegendEntry { label: l.to_string(), swatch: Color::BLACK }).collect(),
        anchor: LegendAnchor::PlotRight,
    })
}

#[test]
fn merge_keeps_primary_before_secondary() {
    let mut primary = legend(&["obj per second"]);
    let mut secondary = legend(&["peak heap usage"]);
    let merged = merge([&mut primary, &mut secondary]);

    assert_eq!(merged.labels(), vec!["obj per second", "peak heap usage"]);
    assert_eq!(merged.anchor, LegendAnchor::FigureUpperRight);
    assert!(primary.is_none() && secondary.is_none(), "axis legends must be removed");
}

#[test]
fn merge_does_not_sort() {
    let mut a = legend(&["zeta"]);
    let mut b = legend(&["alpha"]);
    assert_eq!(merge([&mut a, &mut b]).labels(), vec!["zeta", "alpha"]);
}

#[test]
fn merge_drops_duplicate_labels() {
    let mut a = legend(&["obj per second"]);
    let mut b = legend(&["obj per second", "peak heap usage"]);
    assert_eq!(merge([&mut a, &mut b]).labels(), vec!["obj per second", "peak heap usage"]);
}

#[test]
fn merge_skips_missing_legends() {
    let mut a = None;
    let mut b = legend(&["peak heap usage"]);
    assert_eq!(merge([&mut a, &mut b]).labels(), vec!["peak heap usage"]);
}
