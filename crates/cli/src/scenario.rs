//! Scenario inputs, in the units people measure them in.

use std::{fs, path::Path};

use evap_components::{EvaporationInput, HotTub};
use evap_thermo::AntoineCoefficients;
use serde::{Deserialize, Serialize};
use tracing::info;
use uom::si::{
    f64::{Length, Ratio, ThermodynamicTemperature, Time, Velocity},
    length::foot,
    ratio::percent,
    thermodynamic_temperature::degree_fahrenheit,
    time::hour,
    velocity::mile_per_hour,
};

use crate::{args::Overrides, error::CliError};

/// A complete set of calculator inputs.
///
/// Every field is optional in a scenario file; missing fields take the
/// [`Default`] values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    pub diameter_ft: f64,
    pub water_temp_f: f64,
    pub exposure_hours: f64,
    pub air_temp_f: f64,
    pub humidity_percent: f64,
    pub wind_speed_mph: f64,
    pub churn_percent: f64,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            diameter_ft: 12.0,
            water_temp_f: 102.0,
            exposure_hours: 14.0,
            air_temp_f: 70.0,
            humidity_percent: 35.0,
            wind_speed_mph: 5.0,
            churn_percent: 25.0,
        }
    }
}

impl Scenario {
    /// Parses a scenario from TOML.
    ///
    /// # Errors
    ///
    /// Returns a TOML error for malformed input or unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Loads a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a [`CliError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let contents = fs::read_to_string(path).map_err(|source| CliError::ReadScenario {
            path: path.to_path_buf(),
            source,
        })?;

        let scenario = Self::from_toml_str(&contents).map_err(|source| {
            CliError::ParseScenario {
                path: path.to_path_buf(),
                source,
            }
        })?;

        info!(path = %path.display(), "loaded scenario");
        Ok(scenario)
    }

    /// Returns this scenario with any command-line overrides applied.
    #[must_use]
    pub fn with_overrides(self, overrides: &Overrides) -> Self {
        let Overrides {
            diameter,
            water_temp,
            exposure_hours,
            air_temp,
            humidity,
            wind_speed,
            churn,
        } = *overrides;

        Self {
            diameter_ft: diameter.unwrap_or(self.diameter_ft),
            water_temp_f: water_temp.unwrap_or(self.water_temp_f),
            exposure_hours: exposure_hours.unwrap_or(self.exposure_hours),
            air_temp_f: air_temp.unwrap_or(self.air_temp_f),
            humidity_percent: humidity.unwrap_or(self.humidity_percent),
            wind_speed_mph: wind_speed.unwrap_or(self.wind_speed_mph),
            churn_percent: churn.unwrap_or(self.churn_percent),
        }
    }

    /// Returns the hot tub described by this scenario.
    #[must_use]
    pub fn hot_tub(&self) -> HotTub {
        HotTub::circular(Length::new::<foot>(self.diameter_ft))
    }

    /// Converts the scenario into model input.
    #[must_use]
    pub fn to_input(&self) -> EvaporationInput {
        EvaporationInput {
            water_temperature: ThermodynamicTemperature::new::<degree_fahrenheit>(
                self.water_temp_f,
            ),
            air_temperature: ThermodynamicTemperature::new::<degree_fahrenheit>(self.air_temp_f),
            relative_humidity: Ratio::new::<percent>(self.humidity_percent),
            wind_speed: Velocity::new::<mile_per_hour>(self.wind_speed_mph),
            surface_area: self.hot_tub().surface_area(),
            churn_area: Ratio::new::<percent>(self.churn_percent),
            exposure: Time::new::<hour>(self.exposure_hours),
        }
    }

    /// Describes inputs that are not finite or fall outside their expected
    /// ranges.
    ///
    /// The model accepts every input as given, so these are advisory only.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        for (name, value) in self.fields() {
            if !value.is_finite() {
                warnings.push(format!("{name} is {value}, not a finite number"));
            }
        }

        if self.diameter_ft <= 0.0 {
            warnings.push(format!("diameter {} ft is not positive", self.diameter_ft));
        }
        if !(0.0..=100.0).contains(&self.humidity_percent) {
            warnings.push(format!(
                "relative humidity {}% is outside 0-100%",
                self.humidity_percent
            ));
        }
        if !(0.0..=100.0).contains(&self.churn_percent) {
            warnings.push(format!(
                "churned area {}% is outside 0-100%",
                self.churn_percent
            ));
        }
        if !(0.0..=24.0).contains(&self.exposure_hours) {
            warnings.push(format!(
                "exposure of {} hours/day is outside 0-24",
                self.exposure_hours
            ));
        }
        if self.wind_speed_mph < 0.0 {
            warnings.push(format!("wind speed {} mph is negative", self.wind_speed_mph));
        }

        let input = self.to_input();
        for (name, value, temperature) in [
            ("water", self.water_temp_f, input.water_temperature),
            ("air", self.air_temp_f, input.air_temperature),
        ] {
            if !AntoineCoefficients::WATER.is_valid_for(temperature) {
                warnings.push(format!(
                    "{name} temperature {value}°F is outside the fitted range of the vapor \
                     pressure correlation"
                ));
            }
        }

        warnings
    }

    fn fields(&self) -> [(&'static str, f64); 7] {
        [
            ("diameter", self.diameter_ft),
            ("water temperature", self.water_temp_f),
            ("exposure", self.exposure_hours),
            ("air temperature", self.air_temp_f),
            ("relative humidity", self.humidity_percent),
            ("wind speed", self.wind_speed_mph),
            ("churned area", self.churn_percent),
        ]
    }
}
