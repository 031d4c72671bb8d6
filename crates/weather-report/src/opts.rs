// File: crates/weather-report/src/opts.rs
// Summary: Command-line options.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Trend report over weather dashboard datasets")]
pub struct Opts {
    /// Increases log verbosity (-v debug, -vv trace)
    #[arg(short, long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Also write `category,value,fitted` rows of the trend line to this CSV file
    #[arg(long, env = "WEATHER_REPORT_FITTED_OUT", global = true)]
    pub fitted_out: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Prints trends for the built-in dashboard datasets (default)
    Report,
    /// Computes the trend of one column of a CSV file
    Trend(TrendOpts),
    /// Totals precipitation hours and averages temperature per district and month
    Monthly(MonthlyOpts),
    /// Finds the month and year with the highest total precipitation
    MaxMonth(MaxMonthOpts),
}

#[derive(Args, Debug)]
pub struct TrendOpts {
    /// Headered CSV input
    #[arg(short, long)]
    pub input: PathBuf,

    /// Value column name (defaults to the first numeric, non-index-like column)
    #[arg(short, long)]
    pub column: Option<String>,

    /// Column holding the x-axis labels
    #[arg(short, long)]
    pub label_column: Option<String>,
}

pub fn parse() -> Opts {
    Opts::parse()
}

#[derive(Args, Debug)]
pub struct MonthlyOpts {
    /// Daily weather CSV (`location_id`, `date`, `temperature_2m_mean (°C)`, `precipitation_hours (h)`)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Location CSV mapping `location_id` to `city_name`
    #[arg(short, long)]
    pub locations: Option<PathBuf>,

    /// First year to include
    #[arg(long, default_value_t = 2014)]
    pub min_year: i32,

    /// Location ids to leave out
    #[arg(long, value_delimiter = ',', default_value = "25,26")]
    pub exclude: Vec<String>,
}

#[derive(Args, Debug)]
pub struct MaxMonthOpts {
    /// Daily weather CSV (`location_id`, `date`, `precipitation_hours (h)`)
    #[arg(short, long)]
    pub input: PathBuf,
}
