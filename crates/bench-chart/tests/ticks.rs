// File: crates/bench-chart/tests/ticks.rs
// Purpose: Axis autoscale, nice tick steps, tick label formatting and scale transforms.

use bench_chart::grid::{format_tick, nice_step, nice_ticks};
use bench_chart::scale::{BandScale, ValueScale};
use bench_chart::{Axis, AxisSide};

#[test]
fn axis_fits_from_zero_with_margin() {
    let axis = Axis::fit("obj per second", &[50_000.0, 1_000_000.0], AxisSide::Bottom);
    assert_eq!(axis.min, 0.0);
    assert!((axis.max - 1_050_000.0).abs() < 1e-6);
}

#[test]
fn all_zero_values_still_get_a_range() {
    let axis = Axis::fit("byte", &[0.0, 0.0], AxisSide::Top);
    assert_eq!((axis.min, axis.max), (0.0, 1.0));
    let labels: Vec<String> = axis.ticks().into_iter().map(|t| t.label).collect();
    assert_eq!(labels, vec!["0.0", "0.2", "0.4", "0.6", "0.8", "1.0"]);
}

#[test]
fn ticks_land_on_nice_steps() {
    assert_eq!(nice_step(1_050_000.0, 8), 200_000.0);
    assert_eq!(nice_step(21.0, 8), 5.0);
    assert_eq!(nice_step(18.0, 8), 2.5);
    assert_eq!(
        nice_ticks(0.0, 1_050_000.0, 8),
        vec![0.0, 200_000.0, 400_000.0, 600_000.0, 800_000.0, 1_000_000.0]
    );
}

#[test]
fn tick_count_is_bounded() {
    for max in [1.0, 7.3, 99.0, 12_345.0, 9.9e9] {
        let ticks = nice_ticks(0.0, max, 8);
        assert!(ticks.len() >= 2 && ticks.len() <= 9, "{max}: {ticks:?}");
        assert!(*ticks.last().unwrap() <= max * (1.0 + 1e-9));
    }
}

#[test]
fn tick_labels_use_needed_decimals() {
    assert_eq!(format_tick(1_000_000.0, 200_000.0), "1000000");
    assert_eq!(format_tick(7.5, 2.5), "7.5");
    assert_eq!(format_tick(0.25, 0.25), "0.25");
    assert_eq!(format_tick(0.5, 0.5), "0.5");
    assert_eq!(format_tick(0.0, 0.05), "0.00");
}

#[test]
fn value_scale_maps_both_ways() {
    let s = ValueScale::new(100.0, 500.0, 0.0, 2000.0);
    assert_eq!(s.to_px(0.0), 100.0);
    assert_eq!(s.to_px(2000.0), 500.0);
    assert!((s.from_px(300.0) - 1000.0).abs() < 1e-6);
}

#[test]
fn band_scale_counts_slots_from_the_bottom() {
    let b = BandScale::new(0.0, 100.0, 4);
    assert_eq!(b.slot_px(), 25.0);
    assert_eq!(b.center_px(0), 87.5);
    assert_eq!(b.center_px(3), 12.5);
}

#[test]
fn huge_values_keep_a_finite_bounded_axis() {
    let axis = Axis::fit("obj per second", &[1.75e308], AxisSide::Bottom);
    assert!(axis.max.is_finite());
    assert!(axis.max >= 1.75e308);

    let ticks = axis.ticks();
    assert!(ticks.len() >= 2 && ticks.len() <= 9, "{ticks:?}");
    assert!(ticks.iter().all(|t| t.value.is_finite() && t.value <= axis.max));
    assert_eq!(ticks[0].label, "0");
    assert_eq!(ticks[1].label, "2.5e307");
}

#[test]
fn subnormal_values_keep_a_bounded_axis() {
    let axis = Axis::fit("byte", &[5e-324], AxisSide::Top);
    assert!(axis.max > 0.0);

    let ticks = axis.ticks();
    assert!(!ticks.is_empty() && ticks.len() <= 9, "{ticks:?}");
    assert!(ticks.iter().all(|t| t.label.len() < 16), "{ticks:?}");
}

#[test]
fn degenerate_ranges_fall_back_to_end_points() {
    assert_eq!(nice_ticks(0.0, 5e-324, 8), vec![0.0, 5e-324]);
    assert_eq!(nice_step(5e-324, 8), 5e-324);
}
