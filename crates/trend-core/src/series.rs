// File: crates/trend-core/src/series.rs
// Summary: Labelled observation series (values plus the caller's x-axis categories).
// Notes:
// - Position in `values` is the regression index; `categories` only name the positions.
// - An empty `categories` list means positions are labelled by index.

use crate::error::{TrendError, TrendResult};
use crate::estimator::{self, Trend};

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub categories: Vec<String>,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self { label: label.into(), categories: Vec::new(), values }
    }

    /// Construct a series whose positions carry caller labels (months, years, names).
    pub fn with_categories<S: Into<String>>(
        label: impl Into<String>,
        categories: impl IntoIterator<Item = S>,
        values: Vec<f64>,
    ) -> TrendResult<Self> {
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        if categories.len() != values.len() {
            return Err(TrendError::LengthMismatch { expected: categories.len(), got: values.len() });
        }
        Ok(Self { label: label.into(), categories, values })
    }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Label for position `i`: the caller category when present, otherwise the index.
    pub fn category(&self, i: usize) -> String {
        self.categories.get(i).cloned().unwrap_or_else(|| i.to_string())
    }

    /// Same categories, new label and values. Used by indicators for derived lines.
    pub fn derive(&self, label: impl Into<String>, values: Vec<f64>) -> Self {
        Self { label: label.into(), categories: self.categories.clone(), values }
    }

    pub fn total(&self) -> f64 { self.values.iter().sum() }

    pub fn average(&self) -> TrendResult<f64> { estimator::average(&self.values) }

    pub fn slope(&self) -> TrendResult<f64> { estimator::compute_slope(&self.values) }

    pub fn trend(&self) -> TrendResult<Trend> { estimator::fit(&self.values) }

    /// Reference line anchored at the first observation.
    pub fn fitted(&self) -> TrendResult<Vec<f64>> {
        let slope = self.slope()?;
        Ok(estimator::project_line(&self.values, slope))
    }

    /// Iterate `(category, value)` pairs in order.
    pub fn points(&self) -> impl Iterator<Item = (String, f64)> + '_ {
        self.values.iter().enumerate().map(move |(i, &v)| (self.category(i), v))
    }
}
