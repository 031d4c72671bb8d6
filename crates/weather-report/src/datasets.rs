// File: crates/weather-report/src/datasets.rs
// Summary: Built-in dashboard datasets (monthly precipitation, top districts, hot months, extreme days).

use anyhow::Result;
use trend_core::Series;

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const YEARS: [u16; 15] = [
    2010, 2011, 2012, 2013, 2014, 2015, 2016, 2017, 2018, 2019, 2020, 2021, 2022, 2023, 2024,
];

/// Monthly precipitation (mm) for selected districts, Jan..Dec.
pub const MONTHLY_PRECIPITATION: [(&str, [f64; 12]); 4] = [
    ("Ratnapura", [285.0, 245.0, 312.0, 368.0, 402.0, 285.0, 195.0, 178.0, 245.0, 485.0, 398.0, 362.0]),
    ("Kalutara", [198.0, 165.0, 228.0, 298.0, 342.0, 245.0, 168.0, 152.0, 212.0, 398.0, 342.0, 298.0]),
    ("Galle", [178.0, 145.0, 212.0, 285.0, 328.0, 268.0, 185.0, 168.0, 228.0, 342.0, 387.0, 325.0]),
    ("Batticaloa", [285.0, 245.0, 198.0, 125.0, 98.0, 72.0, 85.0, 112.0, 145.0, 268.0, 342.0, 425.0]),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistrictTotal {
    pub name: &'static str,
    /// Total precipitation over the whole record, mm.
    pub total: i64,
    /// Annual average, mm.
    pub annual: i64,
    pub rainy_days: i64,
}

/// Top five districts by total precipitation, largest first.
pub const TOP_DISTRICTS: [DistrictTotal; 5] = [
    DistrictTotal { name: "Ratnapura", total: 54287, annual: 3747, rainy_days: 1847 },
    DistrictTotal { name: "Kalutara", total: 47823, annual: 3302, rainy_days: 1623 },
    DistrictTotal { name: "Galle", total: 45961, annual: 3173, rainy_days: 1591 },
    DistrictTotal { name: "Matara", total: 44108, annual: 3045, rainy_days: 1542 },
    DistrictTotal { name: "Batticaloa", total: 38592, annual: 2662, rainy_days: 1289 },
];

/// Percentage of months per year with mean temperature above 30 C.
pub const HOT_MONTH_PERCENTAGES: [f64; 15] = [
    25.0, 33.3, 41.7, 33.3, 41.7, 50.0, 58.3, 50.0, 41.7, 50.0, 58.3, 50.0, 58.3, 58.3, 50.0,
];

/// Days per year with both precipitation >= 50 mm and wind >= 60 km/h.
pub const EXTREME_DAYS: [f64; 15] = [
    89.0, 98.0, 112.0, 108.0, 121.0, 128.0, 135.0, 142.0, 118.0, 138.0, 151.0, 145.0, 163.0, 183.0, 116.0,
];

fn year_labels() -> Vec<String> {
    YEARS.iter().map(|y| y.to_string()).collect()
}

pub fn precipitation_series() -> Result<Vec<Series>> {
    MONTHLY_PRECIPITATION
        .iter()
        .map(|(district, mm)| -> Result<Series> {
            Ok(Series::with_categories(*district, MONTHS, mm.to_vec())?)
        })
        .collect()
}

pub fn top_districts_series() -> Result<Series> {
    let names = TOP_DISTRICTS.iter().map(|d| d.name);
    let totals = TOP_DISTRICTS.iter().map(|d| d.total as f64).collect();
    Ok(Series::with_categories("Total Precipitation (mm)", names, totals)?)
}

pub fn hot_months_series() -> Result<Series> {
    Ok(Series::with_categories(
        "% of Months with Mean Temperature > 30C",
        year_labels(),
        HOT_MONTH_PERCENTAGES.to_vec(),
    )?)
}

pub fn extreme_days_series() -> Result<Series> {
    Ok(Series::with_categories(
        "Extreme Days (Precip >=50mm AND Wind >=60km/h)",
        year_labels(),
        EXTREME_DAYS.to_vec(),
    )?)
}
