use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

/// Estimate daily water loss from an outdoor hot tub.
#[derive(Debug, Parser)]
#[command(name = "hot-tub-evap")]
#[command(author, version, about = "Hot tub evaporation calculator", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// TOML scenario file providing defaults for every input
    #[arg(short, long, value_name = "FILE")]
    pub scenario: Option<PathBuf>,

    /// Use the scenario and overrides as-is without prompting
    #[arg(short, long)]
    pub batch: bool,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    #[command(flatten)]
    pub overrides: Overrides,
}

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Inputs given on the command line, taking precedence over the scenario file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Args)]
pub struct Overrides {
    /// Hot tub diameter in feet
    #[arg(long, value_name = "FEET", allow_negative_numbers = true)]
    pub diameter: Option<f64>,

    /// Water temperature in °F
    #[arg(long, value_name = "FAHRENHEIT", allow_negative_numbers = true)]
    pub water_temp: Option<f64>,

    /// Hours per day the tub is uncovered
    #[arg(long, value_name = "HOURS", allow_negative_numbers = true)]
    pub exposure_hours: Option<f64>,

    /// Average air temperature in °F
    #[arg(long, value_name = "FAHRENHEIT", allow_negative_numbers = true)]
    pub air_temp: Option<f64>,

    /// Relative humidity in percent
    #[arg(long, value_name = "PERCENT", allow_negative_numbers = true)]
    pub humidity: Option<f64>,

    /// Average wind speed in mph
    #[arg(long, value_name = "MPH", allow_negative_numbers = true)]
    pub wind_speed: Option<f64>,

    /// Percentage of the surface churned by jets
    #[arg(long, value_name = "PERCENT", allow_negative_numbers = true)]
    pub churn: Option<f64>,
}

/// Determine log filter level from verbosity count
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
