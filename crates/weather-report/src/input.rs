// File: crates/weather-report/src/input.rs
// Summary: Load one numeric column (and optional label column) from a headered CSV into a Series.

use anyhow::{Context, Result};
use std::path::Path;
use trend_core::Series;

/// Which columns to read; names are matched case-insensitively after trimming.
#[derive(Clone, Debug, Default)]
pub struct ColumnSelection {
    pub value: Option<String>,
    pub label: Option<String>,
}

/// Load a series from `path`.
/// Without an explicit value column, the first non-label numeric column is used, passing over
/// columns that look like a running index (strictly increasing integers such as years).
/// Rows whose value cell is empty, non-numeric or non-finite (`NaN`, `inf`) are skipped with a warning.
pub fn load_series_csv(path: &Path, columns: &ColumnSelection) -> Result<Series> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!(?headers, "read CSV headers");

    let idx = |name: &str| -> Option<usize> {
        let want = name.trim().to_lowercase();
        headers.iter().position(|h| *h == want)
    };

    let records = rdr.records().collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("reading records from {}", path.display()))?;

    let i_label = match columns.label.as_deref() {
        Some(name) => Some(idx(name).with_context(|| format!("column '{}' not found in {:?}", name, headers))?),
        None => None,
    };
    let i_value = match columns.value.as_deref() {
        Some(name) => idx(name).with_context(|| format!("column '{}' not found in {:?}", name, headers))?,
        None => {
            let i = pick_value_column(&records, headers.len(), i_label)
                .with_context(|| format!("no numeric column in {}", path.display()))?;
            tracing::info!(column = %headers[i], "auto-selected value column (override with --column)");
            i
        }
    };

    let mut values = Vec::with_capacity(records.len());
    let mut categories = Vec::with_capacity(records.len());
    for (row, rec) in records.iter().enumerate() {
        let Some(v) = rec.get(i_value).and_then(parse_finite) else {
            tracing::warn!(row = row + 1, cell = rec.get(i_value).unwrap_or_default(), "skipping row without a finite numeric value");
            continue;
        };
        values.push(v);
        if let Some(il) = i_label {
            categories.push(rec.get(il).unwrap_or_default().to_string());
        }
    }
    tracing::info!(rows = values.len(), column = %headers[i_value], "loaded series");

    let label = headers[i_value].clone();
    if i_label.is_some() {
        Ok(Series::with_categories(label, categories, values)?)
    } else {
        Ok(Series::new(label, values))
    }
}

fn parse_finite(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// First numeric candidate that is not index-like; falls back to the first numeric one.
fn pick_value_column(records: &[csv::StringRecord], width: usize, skip: Option<usize>) -> Option<usize> {
    let first = records.first()?;
    let numeric: Vec<usize> = (0..width)
        .filter(|&i| Some(i) != skip)
        .filter(|&i| first.get(i).and_then(parse_finite).is_some())
        .collect();
    numeric
        .iter()
        .copied()
        .find(|&i| !is_index_like(records, i))
        .or_else(|| numeric.first().copied())
}

/// Every cell an integer and each strictly greater than the previous one.
fn is_index_like(records: &[csv::StringRecord], column: usize) -> bool {
    let mut prev: Option<i64> = None;
    for rec in records {
        let Some(v) = rec.get(column).and_then(|s| s.parse::<i64>().ok()) else {
            return false;
        };
        if prev.is_some_and(|p| v <= p) {
            return false;
        }
        prev = Some(v);
    }
    true
}
