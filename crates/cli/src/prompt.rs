//! Interactive prompts for scenario inputs.

use std::io::{BufRead, Write};

use crate::{error::CliError, report::RULE, scenario::Scenario};

/// Asks for numeric inputs, one line at a time.
///
/// An empty answer or end of input keeps the default. Answers that are not
/// finite numbers are rejected and the question is asked again.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks for a single value.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Prompt`] if reading or writing fails.
    pub fn ask(&mut self, label: &str, default: f64) -> Result<f64, CliError> {
        loop {
            write!(self.output, "{label} [default: {default}]: ").map_err(CliError::Prompt)?;
            self.output.flush().map_err(CliError::Prompt)?;

            let mut line = String::new();
            let read = self.input.read_line(&mut line).map_err(CliError::Prompt)?;
            if read == 0 {
                writeln!(self.output).map_err(CliError::Prompt)?;
                return Ok(default);
            }

            let answer = line.trim();
            if answer.is_empty() {
                return Ok(default);
            }

            match answer.parse::<f64>() {
                Ok(value) if value.is_finite() => return Ok(value),
                _ => writeln!(self.output, "'{answer}' is not a number, please try again.")
                    .map_err(CliError::Prompt)?,
            }
        }
    }

    /// Asks for every scenario input, offering `defaults` as the answers.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Prompt`] if reading or writing fails.
    pub fn scenario(&mut self, defaults: Scenario) -> Result<Scenario, CliError> {
        writeln!(self.output, "{RULE}\nHOT TUB EVAPORATION CALCULATOR\n{RULE}")
            .map_err(CliError::Prompt)?;

        self.section("Hot Tub Specifications")?;
        let diameter_ft = self.ask("Hot tub diameter (feet)", defaults.diameter_ft)?;
        let water_temp_f = self.ask("Water temperature (°F)", defaults.water_temp_f)?;
        let exposure_hours = self.ask("Hours exposed per day", defaults.exposure_hours)?;

        self.section("Environmental Conditions")?;
        let air_temp_f = self.ask("Average air temperature (°F)", defaults.air_temp_f)?;
        let humidity_percent = self.ask("Relative humidity (%)", defaults.humidity_percent)?;
        let wind_speed_mph = self.ask("Average wind speed (mph)", defaults.wind_speed_mph)?;

        self.section("Jets/Agitation")?;
        let churn_percent = self.ask(
            "Percentage of surface area being churned by jets (0-100%)",
            defaults.churn_percent,
        )?;

        Ok(Scenario {
            diameter_ft,
            water_temp_f,
            exposure_hours,
            air_temp_f,
            humidity_percent,
            wind_speed_mph,
            churn_percent,
        })
    }

    fn section(&mut self, title: &str) -> Result<(), CliError> {
        writeln!(self.output, "\n--- {title} ---").map_err(CliError::Prompt)
    }
}
