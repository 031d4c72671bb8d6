// File: crates/weather-report/src/report.rs
// Summary: Text report over the dashboard datasets: trends, averages and tooltip-style lines.

use std::fmt;

use anyhow::Result;
use trend_core::{format_thousands, format_thousands_int, months_out_of_twelve, Indicator, Series, TrendIndicator};

use crate::aggregate::{self, MonthYearTotal, MonthlySummary};
use crate::datasets::{self, DistrictTotal};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Section {
    pub title: String,
    pub lines: Vec<String>,
}

impl Section {
    fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), lines: Vec::new() }
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    pub sections: Vec<Section>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, s) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "== {}", s.title)?;
            for line in &s.lines {
                writeln!(f, "  {line}")?;
            }
        }
        Ok(())
    }
}

/// Signed slope with a fixed number of decimals, e.g. `+4.27`.
pub fn signed(value: f64, decimals: usize) -> String {
    format!("{:+.*}", decimals, value)
}

/// Report over every built-in dataset.
pub fn build_dashboard_report() -> Result<Report> {
    Ok(Report {
        sections: vec![
            precipitation_section(&datasets::precipitation_series()?)?,
            top_districts_section(&datasets::TOP_DISTRICTS),
            hot_months_section(&datasets::hot_months_series()?)?,
            extreme_days_section(&datasets::extreme_days_series()?)?,
        ],
    })
}

pub fn precipitation_section(districts: &[Series]) -> Result<Section> {
    let mut section = Section::new("Monthly Precipitation Patterns (mm)");
    for s in districts {
        let avg = s.average()?;
        let slope = s.slope()?;
        let peak = s
            .values
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, &v)| format!("{} ({}mm)", s.category(i), v))
            .unwrap_or_default();
        section.push(format!(
            "{}: total {} mm, monthly avg {:.1} mm, trend {} mm/month, peak {}",
            s.label,
            format_thousands(s.total()),
            avg,
            signed(slope, 2),
            peak,
        ));
    }
    Ok(section)
}

pub fn top_districts_section(districts: &[DistrictTotal]) -> Section {
    let mut section = Section::new("Top 5 Districts - Total Precipitation");
    for (rank, d) in districts.iter().enumerate() {
        section.push(format!(
            "{}. {}: Total: {} mm | Annual Avg: {} mm | Rainy Days: {}",
            rank + 1,
            d.name,
            format_thousands_int(d.total),
            format_thousands_int(d.annual),
            format_thousands_int(d.rainy_days),
        ));
    }
    section
}

pub fn hot_months_section(series: &Series) -> Result<Section> {
    let mut section = Section::new("Hot Months Analysis (Mean Temp > 30C)");
    for (year, pct) in series.points() {
        section.push(format!("{year}: {pct}% ({} out of 12 months)", months_out_of_twelve(pct)));
    }
    section.push(format!("Average: {:.1}%", series.average()?));
    section.push(format!("Trend: {} percentage points/year", signed(series.slope()?, 2)));
    Ok(section)
}

pub fn extreme_days_section(series: &Series) -> Result<Section> {
    let mut section = Section::new("Extreme Weather Days (Rain + Wind)");
    let trend = TrendIndicator.compute(series)?;
    for ((year, days), fitted) in series.points().zip(trend.values.iter()) {
        section.push(format!(
            "{year}: Extreme Days: {} | Trend: {}",
            format_thousands(days),
            format_thousands_int(fitted.round() as i64),
        ));
    }
    section.push("Criteria: >=50mm rain AND >=60km/h wind");
    section.push(format!("Average: {:.1} days/year", series.average()?));
    section.push(format!("Trend: {} days/year", signed(series.slope()?, 2)));
    Ok(section)
}

/// Report for a single loaded series.
pub fn series_report(series: &Series) -> Result<Report> {
    let trend = series.trend()?;
    let mut section = Section::new(series.label.clone());
    section.push(format!("Observations: {}", series.len()));
    section.push(format!("Average: {}", format_thousands(round_to(series.average()?, 4))));
    section.push(format!("Slope: {} per step", signed(trend.slope, 4)));
    section.push(format!(
        "Trend line: {} -> {}",
        format_thousands(round_to(trend.origin, 4)),
        format_thousands(round_to(trend.value_at(trend.len - 1), 4)),
    ));
    Ok(Report { sections: vec![section] })
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let m = 10f64.powi(decimals);
    (value * m).round() / m
}

/// One line per district and month, as produced by the monthly aggregation.
pub fn monthly_report(summaries: &[MonthlySummary], min_year: i32) -> Report {
    let mut section = Section::new(format!("Monthly Precipitation and Temperature per District (since {min_year})"));
    for s in summaries {
        section.push(s.describe());
    }
    if summaries.is_empty() {
        section.push("No district records matched");
    }
    Report { sections: vec![section] }
}

/// Wettest month-year plus the trend of monthly totals over time.
pub fn wettest_month_report(totals: &[MonthYearTotal]) -> Result<Report> {
    let mut section = Section::new("Maximum Precipitation Month");
    match aggregate::wettest_month(totals) {
        Some(max) => section.push(max.describe_max()),
        None => section.push("No usable records"),
    }
    section.push(format!("Months: {}", totals.len()));
    if totals.len() >= 2 {
        let series = aggregate::month_year_series(totals)?;
        section.push(format!("Trend: {} hours/month", signed(series.slope()?, 2)));
    }
    Ok(Report { sections: vec![section] })
}
