// File: crates/weather-report/src/main.rs
// Summary: Prints trend reports for the dashboard datasets, a CSV column or aggregated daily weather, optionally exporting the fitted line.

use std::collections::HashMap;

use anyhow::{Context, Result};
use weather_report::aggregate::{self, MonthlyFilter};
use weather_report::opts::{self, Command, MaxMonthOpts, MonthlyOpts, TrendOpts};
use weather_report::{datasets, export, logging, report, ColumnSelection};

fn main() -> Result<()> {
    let opts = opts::parse();
    logging::init(opts.verbosity)?;

    let (text, series) = match opts.command.unwrap_or(Command::Report) {
        Command::Report => {
            let r = report::build_dashboard_report()?;
            (r.to_string(), Some(datasets::extreme_days_series()?))
        }
        Command::Trend(TrendOpts { input, column, label_column }) => {
            let columns = ColumnSelection { value: column, label: label_column };
            let series = weather_report::load_series_csv(&input, &columns)
                .with_context(|| format!("failed to load CSV '{}'", input.display()))?;
            let r = report::series_report(&series)
                .with_context(|| format!("cannot compute a trend for '{}'", input.display()))?;
            (r.to_string(), Some(series))
        }
        Command::Monthly(MonthlyOpts { input, locations, min_year, exclude }) => {
            let records = aggregate::load_daily_csv(&input)?;
            let names = match locations {
                Some(path) => aggregate::load_locations_csv(&path)?,
                None => HashMap::new(),
            };
            let filter = MonthlyFilter { min_year, excluded: exclude.into_iter().collect() };
            let summaries = aggregate::monthly_summaries(&records, &names, &filter);
            (report::monthly_report(&summaries, min_year).to_string(), None)
        }
        Command::MaxMonth(MaxMonthOpts { input }) => {
            let records = aggregate::load_daily_csv(&input)?;
            let totals = aggregate::month_year_totals(&records);
            let r = report::wettest_month_report(&totals)?;
            let series = if totals.len() >= 2 { Some(aggregate::month_year_series(&totals)?) } else { None };
            (r.to_string(), series)
        }
    };
    print!("{text}");

    if let Some(path) = opts.fitted_out {
        match series {
            Some(series) => {
                export::write_fitted_csv(&series, &path)?;
                println!("Wrote {}", path.display());
            }
            None => tracing::warn!("--fitted-out has no single series for this command; nothing written"),
        }
    }
    Ok(())
}
