// File: crates/bench-chart/src/order.rs
// Summary: Row ordering and mode selection for one rendering pass.

use crate::error::{ChartError, Result};
use crate::series::ChartMode;
use crate::table::Dataset;

/// Load order reversed: `[n-1, .., 1, 0]`.
///
/// The renderer fills category slots from the bottom of the plot upward in
/// this sequence, so the first row of the table ends up on top. Metric values
/// are never consulted.
pub fn rank_order(dataset: &Dataset) -> Vec<usize> {
    (0..dataset.len()).rev().collect()
}

/// Ordering and axis assignment used for one rendering pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartSpec {
    /// Row indices; position `i` is category slot `i`, counted from the bottom.
    pub rank_order: Vec<usize>,
    pub mode: ChartMode,
}

impl ChartSpec {
    /// Spec for `dataset`, using its shape unless `mode` overrides it.
    /// Dual mode needs peak memory on every row.
    pub fn for_dataset(dataset: &Dataset, mode: Option<ChartMode>) -> Result<Self> {
        let shape = dataset.shape();
        let mode = match mode {
            Some(ChartMode::Dual) if shape == ChartMode::Single && !dataset.is_empty() => {
                return Err(ChartError::render("dual-metric mode requested but the table has no peak memory column"));
            }
            Some(m) => m,
            None => shape,
        };
        Ok(Self { rank_order: rank_order(dataset), mode })
    }
}
