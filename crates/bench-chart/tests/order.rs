// File: crates/bench-chart/tests/order.rs
// Purpose: Rank order inversion and mode selection, including overrides.

use bench_chart::{rank_order, ChartError, ChartMode, ChartSpec, Dataset, MetricColumns};

fn dual() -> Dataset {
    Dataset::from_reader("fast-gen,1000000,2048\nslow-gen,50000,1024\n".as_bytes()).unwrap()
}

#[test]
fn rank_order_reverses_load_order() {
    let ds = Dataset::from_reader("a,5\nb,1\nc,9\nd,0\n".as_bytes()).unwrap();
    assert_eq!(rank_order(&ds), vec![3, 2, 1, 0]);
}

#[test]
fn rank_order_ignores_values() {
    // Ascending and descending throughput give the same positional order.
    let up = Dataset::from_reader("a,1\nb,2\nc,3\n".as_bytes()).unwrap();
    let down = Dataset::from_reader("a,3\nb,2\nc,1\n".as_bytes()).unwrap();
    assert_eq!(rank_order(&up), rank_order(&down));
}

#[test]
fn rank_order_of_empty_dataset_is_empty() {
    assert!(rank_order(&Dataset::default()).is_empty());
}

#[test]
fn mode_follows_table_shape() {
    let spec = ChartSpec::for_dataset(&dual(), None).unwrap();
    assert_eq!(spec.mode, ChartMode::Dual);

    let single = Dataset::from_reader("a,1\nb,2\n".as_bytes()).unwrap();
    let spec = ChartSpec::for_dataset(&single, None).unwrap();
    assert_eq!(spec.mode, ChartMode::Single);
}

#[test]
fn mixed_table_fails_before_any_spec_exists() {
    let err = Dataset::from_reader("a,1,2\nb,2\n".as_bytes()).unwrap_err();
    assert!(matches!(err, ChartError::SchemaInconsistency { .. }));
}

#[test]
fn single_override_on_dual_table_drops_memory() {
    let ds = dual();
    let spec = ChartSpec::for_dataset(&ds, Some(ChartMode::Single)).unwrap();
    let cols = MetricColumns::select(&ds, &spec).unwrap();
    assert_eq!(cols, MetricColumns::Single { throughput: vec![50_000.0, 1_000_000.0] });
}

#[test]
fn dual_override_needs_memory_column() {
    let single = Dataset::from_reader("a,1\n".as_bytes()).unwrap();
    let err = ChartSpec::for_dataset(&single, Some(ChartMode::Dual)).unwrap_err();
    assert!(matches!(err, ChartError::Render(_)));
}

#[test]
fn dual_columns_follow_rank_order() {
    let ds = dual();
    let spec = ChartSpec::for_dataset(&ds, None).unwrap();
    let cols = MetricColumns::select(&ds, &spec).unwrap();
    assert_eq!(cols.mode(), ChartMode::Dual);
    assert_eq!(
        cols,
        MetricColumns::Dual { throughput: vec![50_000.0, 1_000_000.0], peak_memory: vec![1024.0, 2048.0] }
    );
}

#[test]
fn mode_parses_from_text() {
    assert_eq!("dual".parse::<ChartMode>(), Ok(ChartMode::Dual));
    assert_eq!("Single".parse::<ChartMode>(), Ok(ChartMode::Single));
    assert!("both".parse::<ChartMode>().is_err());
    assert_eq!(ChartMode::Dual.to_string(), "dual");
}

#[test]
fn selecting_a_missing_row_yields_nothing() {
    let ds = dual();
    let spec = ChartSpec { rank_order: vec![1, 0, 7], mode: ChartMode::Single };
    assert_eq!(MetricColumns::select(&ds, &spec), None);
}
