// File: crates/weather-report/src/lib.rs
// Summary: Report library: dashboard datasets, daily weather aggregation, CSV input, text report and fitted-line export.

pub mod aggregate;
pub mod datasets;
pub mod export;
pub mod input;
pub mod logging;
pub mod opts;
pub mod report;

pub use input::{load_series_csv, ColumnSelection};
pub use report::{build_dashboard_report, series_report, Report};
