// File: crates/weather-report/src/export.rs
// Summary: Write a series and its fitted trend line as `category,value,fitted` CSV rows.

use anyhow::{Context, Result};
use std::path::Path;
use trend_core::{Indicator, Series, TrendIndicator};

pub fn write_fitted_csv(series: &Series, path: &Path) -> Result<()> {
    let fitted = TrendIndicator.compute(series)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    wtr.write_record(["category", "value", "fitted"])?;
    for ((category, value), line) in series.points().zip(&fitted.values) {
        wtr.write_record([category, value.to_string(), line.to_string()])?;
    }
    wtr.flush().with_context(|| format!("writing {}", path.display()))?;

    tracing::info!(path = %path.display(), rows = series.len(), "wrote fitted line");
    Ok(())
}
