// File: crates/trend-core/src/indicator.rs
// Summary: Indicator trait (series -> derived series) with trend and mean reference lines.

use crate::error::TrendResult;
use crate::series::Series;

/// Indicator transforms an input series into a derived reference series.
/// The derived series keeps the input's categories.
pub trait Indicator {
    fn id(&self) -> &'static str;
    fn compute(&self, input: &Series) -> TrendResult<Series>;

    /// Label for the derived series, e.g. `"Extreme Days (trend)"`.
    fn derived_label(&self, input: &Series) -> String {
        format!("{} ({})", input.label, self.id())
    }
}

/// Least-squares trend line anchored at the first observation.
pub struct TrendIndicator;

impl Indicator for TrendIndicator {
    fn id(&self) -> &'static str { "trend" }

    fn compute(&self, input: &Series) -> TrendResult<Series> {
        let line = input.fitted()?;
        Ok(input.derive(self.derived_label(input), line))
    }
}

/// Flat line at the series mean.
pub struct MeanIndicator;

impl Indicator for MeanIndicator {
    fn id(&self) -> &'static str { "mean" }

    fn compute(&self, input: &Series) -> TrendResult<Series> {
        let avg = input.average()?;
        Ok(input.derive(self.derived_label(input), vec![avg; input.len()]))
    }
}

/// Run every indicator over `input`, stopping at the first failure.
pub fn compute_all(indicators: &[&dyn Indicator], input: &Series) -> TrendResult<Vec<Series>> {
    indicators.iter().map(|ind| ind.compute(input)).collect()
}
