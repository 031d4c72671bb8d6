// File: crates/trend-core/src/estimator.rs
// Summary: Ordinary-least-squares trend over an index-ordered sequence, plus mean and fitted line.
// Notes:
// - The independent variable is the position 0..n-1, never a timestamp.
// - Degenerate inputs (n < 2 for the slope, n == 0 for the mean) are errors, not NaN.

use crate::error::{TrendError, TrendResult};

/// Arithmetic mean of `values`.
pub fn average(values: &[f64]) -> TrendResult<f64> {
    if values.is_empty() {
        return Err(TrendError::EmptyData);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Closed-form sum of squared deviations of 0..n-1 from their mean: n(n^2 - 1) / 12.
pub fn index_sum_of_squares(n: usize) -> f64 {
    let n = n as f64;
    n * (n * n - 1.0) / 12.0
}

/// Least-squares slope of value against index.
/// Contract: `values.len() >= 2`.
pub fn compute_slope(values: &[f64]) -> TrendResult<f64> {
    let n = values.len();
    if n < 2 {
        return Err(TrendError::InsufficientData { required: 2, got: n });
    }
    let mean_index = (n as f64 - 1.0) / 2.0;
    let mean_value = average(values)?;

    let mut numerator = 0.0f64;
    let mut denominator = 0.0f64;
    for (i, &v) in values.iter().enumerate() {
        let dx = i as f64 - mean_index;
        numerator += dx * (v - mean_value);
        denominator += dx * dx;
    }
    Ok(numerator / denominator)
}

/// Line anchored at `values[0]` with the given slope; same length as `values`.
/// An empty input has no anchor and yields an empty line.
pub fn project_line(values: &[f64], slope: f64) -> Vec<f64> {
    match values.first() {
        Some(&origin) => (0..values.len()).map(|i| origin + slope * i as f64).collect(),
        None => Vec::new(),
    }
}

/// Fitted trend: slope plus the anchor the reference line starts from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trend {
    pub slope: f64,
    pub origin: f64,
    pub len: usize,
}

impl Trend {
    /// Value of the reference line at position `i`.
    #[inline]
    pub fn value_at(&self, i: usize) -> f64 {
        self.origin + self.slope * i as f64
    }

    /// The full reference line, `len` points long.
    pub fn line(&self) -> Vec<f64> {
        (0..self.len).map(|i| self.value_at(i)).collect()
    }

    /// Change across the whole sequence as implied by the slope.
    pub fn total_change(&self) -> f64 {
        self.slope * self.len.saturating_sub(1) as f64
    }
}

/// Slope and anchor together. Same contract as [`compute_slope`].
pub fn fit(values: &[f64]) -> TrendResult<Trend> {
    let slope = compute_slope(values)?;
    tracing::debug!(n = values.len(), slope, "fitted trend");
    Ok(Trend { slope, origin: values[0], len: values.len() })
}
