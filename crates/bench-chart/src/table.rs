// File: crates/bench-chart/src/table.rs
// Summary: Headerless benchmark result table: rows, dataset shape and CSV loading.

use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{ChartError, Result};
use crate::series::ChartMode;

/// One benchmarked implementation.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkRow {
    pub label: String,
    /// Objects produced per second.
    pub throughput: f64,
    /// Peak heap usage in bytes; only present in dual-metric tables.
    pub peak_memory: Option<f64>,
}

impl BenchmarkRow {
    pub fn new(label: impl Into<String>, throughput: f64) -> Self {
        Self { label: label.into(), throughput, peak_memory: None }
    }

    pub fn with_peak_memory(mut self, bytes: f64) -> Self {
        self.peak_memory = Some(bytes);
        self
    }

    fn field_count(&self) -> usize {
        if self.peak_memory.is_some() { 3 } else { 2 }
    }
}

/// Rows in file order. Every row carries a peak memory value, or none does.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<BenchmarkRow>,
}

impl Dataset {
    /// Build from rows already in memory, enforcing the same contract as the loader.
    pub fn from_rows(rows: Vec<BenchmarkRow>) -> Result<Self> {
        for (i, row) in rows.iter().enumerate() {
            let line = i as u64 + 1;
            check_metric(line, "throughput", row.throughput)?;
            if let Some(bytes) = row.peak_memory {
                check_metric(line, "peak memory", bytes)?;
            }
        }
        if let Some(first) = rows.first() {
            let expected = first.field_count();
            if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.field_count() != expected) {
                return Err(ChartError::SchemaInconsistency { line: i as u64 + 1, expected, found: row.field_count() });
            }
        }
        warn_duplicate_labels(&rows);
        Ok(Self { rows })
    }

    /// Load a headerless `label, throughput[, peak_memory]` table from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ChartError::io(path, e))?;
        parse(file, path)
    }

    /// Load from any reader; errors name `<input>` as the source.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        parse(reader, Path::new("<input>"))
    }

    pub fn rows(&self) -> &[BenchmarkRow] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Rendering mode implied by the table shape. An empty table reports `Single`.
    pub fn shape(&self) -> ChartMode {
        match self.rows.first() {
            Some(row) if row.peak_memory.is_some() => ChartMode::Dual,
            _ => ChartMode::Single,
        }
    }
}

fn parse<R: Read>(reader: R, origin: &Path) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut expected: Option<usize> = None;

    for rec in rdr.records() {
        let rec = rec.map_err(|e| csv_error(origin, e))?;
        let line = rec.position().map_or(0, csv::Position::line);

        let found = rec.len();
        if !(2..=3).contains(&found) {
            return Err(ChartError::MalformedRecord {
                line,
                reason: format!("expected 2 or 3 fields, found {found}"),
            });
        }
        match expected {
            None => expected = Some(found),
            Some(expected) if expected != found => {
                return Err(ChartError::SchemaInconsistency { line, expected, found });
            }
            Some(_) => {}
        }

        let throughput = parse_metric(line, "throughput", &rec[1])?;
        let peak_memory = match rec.get(2) {
            Some(raw) => Some(parse_metric(line, "peak memory", raw)?),
            None => None,
        };
        rows.push(BenchmarkRow { label: rec[0].to_string(), throughput, peak_memory });
    }

    warn_duplicate_labels(&rows);
    log::debug!("parsed {} rows from {}", rows.len(), origin.display());
    Ok(Dataset { rows })
}

fn parse_metric(line: u64, column: &'static str, raw: &str) -> Result<f64> {
    let invalid = || ChartError::NumericParse { line, column, value: raw.to_string() };
    let v = raw.parse::<f64>().map_err(|_| invalid())?;
    check_metric(line, column, v).map_err(|_| invalid())?;
    Ok(v)
}

fn check_metric(line: u64, column: &'static str, v: f64) -> Result<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(ChartError::NumericParse { line, column, value: v.to_string() })
    }
}

fn csv_error(origin: &Path, err: csv::Error) -> ChartError {
    let line = err.position().map_or(0, csv::Position::line);
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => ChartError::io(PathBuf::from(origin), source),
        _ => ChartError::MalformedRecord { line, reason },
    }
}

// Duplicate labels render as separate but indistinguishable categories.
fn warn_duplicate_labels(rows: &[BenchmarkRow]) {
    let mut seen = HashSet::new();
    for row in rows {
        if !seen.insert(row.label.as_str()) {
            log::warn!("duplicate label {:?}; both rows will be drawn", row.label);
        }
    }
}

impl fmt::Display for Dataset {
    /// Aligned text table, index column first; used to echo the loaded input.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dual = self.shape() == ChartMode::Dual;
        let mut header = vec!["".to_string(), "label".to_string(), "throughput".to_string()];
        if dual {
            header.push("peak_memory".to_string());
        }
        let mut cells = vec![header];
        for (i, row) in self.rows.iter().enumerate() {
            let mut line = vec![i.to_string(), row.label.clone(), row.throughput.to_string()];
            if let Some(bytes) = row.peak_memory {
                line.push(bytes.to_string());
            }
            cells.push(line);
        }

        let cols = cells[0].len();
        let widths: Vec<usize> = (0..cols)
            .map(|c| cells.iter().filter_map(|r| r.get(c)).map(|s| s.chars().count()).max().unwrap_or(0))
            .collect();
        for (n, line) in cells.iter().enumerate() {
            if n > 0 {
                writeln!(f)?;
            }
            let text = line
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| format!("{cell:<w$}"))
                .collect::<Vec<_>>()
                .join("  ");
            write!(f, "{}", text.trim_end())?;
        }
        Ok(())
    }
}
