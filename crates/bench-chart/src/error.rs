// File: crates/bench-chart/src/error.rs
// Summary: Error taxonomy for loading, rendering and exporting a benchmark chart.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("line {line}: {column} is not a non-negative number: {value:?}")]
    NumericParse {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("line {line}: expected {expected} fields like the first record, found {found}")]
    SchemaInconsistency {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("render failed: {0}")]
    Render(String),
}

impl ChartError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub(crate) fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
