// File: crates/weather-report/src/aggregate.rs
// Summary: Daily weather records -> per-district monthly totals and the wettest month-year.
// Notes:
// - Dates are `M/D/YYYY`; month and year come from the first and last parts.
// - Rows with a missing or non-finite measurement are skipped, never summed as NaN.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use trend_core::{ordinal, Series};

pub const LOCATION_ID: &str = "location_id";
pub const DATE: &str = "date";
pub const TEMPERATURE_MEAN: &str = "temperature_2m_mean (°C)";
pub const PRECIPITATION_HOURS: &str = "precipitation_hours (h)";

/// One daily observation for one location.
#[derive(Clone, Debug, PartialEq)]
pub struct DailyRecord {
    pub location_id: String,
    pub month: u32,
    pub year: i32,
    pub precipitation_hours: f64,
    /// Absent when the cell is missing or not a finite number.
    pub temperature_mean: Option<f64>,
}

/// Parse `M/D/YYYY` into `(month, year)`.
pub fn parse_month_year(date: &str) -> Option<(u32, i32)> {
    let mut parts = date.trim().split('/');
    let (m, _d, y) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let month = m.trim().parse::<u32>().ok().filter(|m| (1..=12).contains(m))?;
    let year = y.trim().parse::<i32>().ok()?;
    Some((month, year))
}

fn parse_finite(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Load daily weather rows. Headers are matched exactly after trimming.
pub fn load_daily_csv(path: &Path) -> Result<Vec<DailyRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect::<Vec<_>>();
    let idx = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("column '{}' not found in {}", name, path.display()))
    };
    let i_location = idx(LOCATION_ID)?;
    let i_date = idx(DATE)?;
    let i_precip = idx(PRECIPITATION_HOURS)?;
    // The wettest-month job does not need temperature.
    let i_temp = idx(TEMPERATURE_MEAN).ok();

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading {}", path.display()))?;
        let location_id = rec.get(i_location).map(str::trim).unwrap_or_default();
        let date = rec.get(i_date).and_then(parse_month_year);
        let precip = rec.get(i_precip).and_then(parse_finite);
        match (location_id.is_empty(), date, precip) {
            (false, Some((month, year)), Some(precipitation_hours)) => out.push(DailyRecord {
                location_id: location_id.to_string(),
                month,
                year,
                precipitation_hours,
                temperature_mean: i_temp.and_then(|i| rec.get(i)).and_then(parse_finite),
            }),
            _ => tracing::warn!(row = row + 2, "skipping malformed weather row"),
        }
    }
    tracing::info!(rows = out.len(), path = %path.display(), "loaded daily weather");
    Ok(out)
}

/// Load `location_id -> city_name`. Falls back to columns 0 and 7 when the headers differ.
pub fn load_locations_csv(path: &Path) -> Result<HashMap<String, String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    let i_id = headers.iter().position(|h| h == LOCATION_ID).unwrap_or(0);
    let i_name = headers.iter().position(|h| h == "city_name").unwrap_or(7);

    let mut names = HashMap::new();
    for rec in rdr.records() {
        let rec = rec.with_context(|| format!("reading {}", path.display()))?;
        if let (Some(id), Some(name)) = (rec.get(i_id), rec.get(i_name)) {
            names.insert(id.trim().to_string(), name.trim().to_string());
        }
    }
    tracing::info!(locations = names.len(), "loaded location names");
    Ok(names)
}

/// Which daily rows feed the monthly district summary.
#[derive(Clone, Debug)]
pub struct MonthlyFilter {
    pub min_year: i32,
    /// Locations that are towns rather than districts.
    pub excluded: HashSet<String>,
}

impl Default for MonthlyFilter {
    fn default() -> Self {
        Self { min_year: 2014, excluded: ["25", "26"].into_iter().map(String::from).collect() }
    }
}

/// Precipitation total and mean temperature for one district and calendar month, across years.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthlySummary {
    pub city: String,
    pub location_id: String,
    pub month: u32,
    pub total_precipitation_hours: f64,
    pub mean_temperature: f64,
    pub days: usize,
}

impl MonthlySummary {
    pub fn describe(&self) -> String {
        format!(
            "{} had a total precipitation of {:.0} hours with a mean temperature of {:.0} for {} month",
            self.city,
            self.total_precipitation_hours,
            self.mean_temperature,
            ordinal(self.month),
        )
    }
}

/// Group by (location, month), sorted by city name then month.
/// Rows without a temperature are left out so both figures cover the same days.
pub fn monthly_summaries(
    records: &[DailyRecord],
    names: &HashMap<String, String>,
    filter: &MonthlyFilter,
) -> Vec<MonthlySummary> {
    let mut groups: HashMap<(&str, u32), (f64, f64, usize)> = HashMap::new();
    for r in records {
        if r.year < filter.min_year || filter.excluded.contains(&r.location_id) {
            continue;
        }
        let Some(temp) = r.temperature_mean else { continue };
        let acc = groups.entry((r.location_id.as_str(), r.month)).or_insert((0.0, 0.0, 0));
        acc.0 += r.precipitation_hours;
        acc.1 += temp;
        acc.2 += 1;
    }

    let mut out: Vec<MonthlySummary> = groups
        .into_iter()
        .map(|((id, month), (precip, temp, days))| MonthlySummary {
            city: names.get(id).cloned().unwrap_or_else(|| format!("Location_{id}")),
            location_id: id.to_string(),
            month,
            total_precipitation_hours: precip,
            mean_temperature: temp / days as f64,
            days,
        })
        .collect();
    out.sort_by(|a, b| a.city.cmp(&b.city).then(a.month.cmp(&b.month)));
    out
}

/// Total precipitation for one calendar month of one year, across all locations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonthYearTotal {
    pub year: i32,
    pub month: u32,
    pub precipitation_hours: f64,
    pub records: usize,
}

impl MonthYearTotal {
    pub fn describe_max(&self) -> String {
        format!(
            "{} month in {} had the highest total precipitation of {:.0} hours",
            ordinal(self.month),
            self.year,
            self.precipitation_hours,
        )
    }
}

/// Totals for every month-year present, in chronological order.
pub fn month_year_totals(records: &[DailyRecord]) -> Vec<MonthYearTotal> {
    let mut groups: BTreeMap<(i32, u32), (f64, usize)> = BTreeMap::new();
    for r in records {
        let acc = groups.entry((r.year, r.month)).or_insert((0.0, 0));
        acc.0 += r.precipitation_hours;
        acc.1 += 1;
    }
    groups
        .into_iter()
        .map(|((year, month), (precipitation_hours, records))| MonthYearTotal { year, month, precipitation_hours, records })
        .collect()
}

/// The wettest month-year. Ties go to the earliest one.
pub fn wettest_month(totals: &[MonthYearTotal]) -> Option<MonthYearTotal> {
    totals.iter().copied().fold(None, |best, t| match best {
        Some(b) if b.precipitation_hours >= t.precipitation_hours => Some(b),
        _ => Some(t),
    })
}

/// Chronological month-year totals as a series labelled `YYYY-MM`.
pub fn month_year_series(totals: &[MonthYearTotal]) -> Result<Series> {
    let labels = totals.iter().map(|t| format!("{}-{:02}", t.year, t.month));
    let values = totals.iter().map(|t| t.precipitation_hours).collect();
    Ok(Series::with_categories("Total precipitation (hours)", labels, values)?)
}
