//! Command-line hot tub evaporation calculator.
//!
//! Inputs are resolved in layers: built-in defaults, then an optional TOML
//! scenario file, then command-line overrides, then (unless running in batch
//! mode) interactive answers. The resolved scenario is evaluated and rendered
//! as text or JSON.

pub mod args;
pub mod error;
pub mod prompt;
pub mod report;
pub mod scenario;

use std::io::{BufRead, Write};

use tracing::{debug, warn};

pub use args::{Cli, Format, Overrides, log_filter_from_verbosity};
pub use error::CliError;
pub use prompt::Prompter;
pub use report::Report;
pub use scenario::Scenario;

/// Resolves the scenario for `cli` without prompting.
///
/// # Errors
///
/// Returns a [`CliError`] if the scenario file cannot be loaded.
pub fn resolve_scenario(cli: &Cli) -> Result<Scenario, CliError> {
    let base = match &cli.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::default(),
    };

    Ok(base.with_overrides(&cli.overrides))
}

/// Runs the calculator.
///
/// Prompts are read from `input` and written to `prompts`; the report is
/// written to `out`.
///
/// # Errors
///
/// Returns a [`CliError`] if loading, prompting, or writing fails.
pub fn run<R, P, W>(cli: &Cli, input: R, prompts: P, mut out: W) -> Result<Report, CliError>
where
    R: BufRead,
    P: Write,
    W: Write,
{
    let mut scenario = resolve_scenario(cli)?;
    if !cli.batch {
        scenario = Prompter::new(input, prompts).scenario(scenario)?;
    }
    debug!(?scenario, "resolved scenario");

    for warning in scenario.warnings() {
        warn!("{warning}");
    }

    let report = Report::evaluate(scenario);
    if report.vapor_pressure.deficit_mmhg < 0.0 {
        warn!(
            deficit_mmhg = report.vapor_pressure.deficit_mmhg,
            "air holds more moisture than the water surface; evaporation estimate is negative"
        );
    }

    match cli.format {
        Format::Text => report.write_text(&mut out).map_err(CliError::Output)?,
        Format::Json => {
            let json = report.to_json()?;
            writeln!(out, "{json}").map_err(CliError::Output)?;
        }
    }

    Ok(report)
}
