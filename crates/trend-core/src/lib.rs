// File: crates/trend-core/src/lib.rs
// Summary: Core library entry point; exports the trend estimator, formatting helpers and series model.

pub mod error;
pub mod estimator;
pub mod format;
pub mod series;
pub mod indicator;

pub use error::{TrendError, TrendResult};
pub use estimator::{average, compute_slope, fit, index_sum_of_squares, project_line, Trend};
pub use format::{format_thousands, format_thousands_int, months_out_of_twelve, ordinal};
pub use series::Series;
pub use indicator::{Indicator, MeanIndicator, TrendIndicator};
