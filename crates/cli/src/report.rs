//! Evaluated results and their text and JSON renderings.

use std::io::Write;

use evap_components::{
    EvaporationOutput, Projection, SensitivityEntry, calculate_evaporation_rate, sensitivity,
};
use evap_thermo::units::to_inches_per_day;
use serde::Serialize;
use uom::si::{area::square_foot, pressure::millimeter_of_mercury, time::day, volume::gallon};

use crate::scenario::Scenario;

/// Horizontal rule framing report sections.
pub const RULE: &str = "============================================================";

/// Everything the calculator reports for a scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub scenario: Scenario,
    pub surface_area_sqft: f64,
    pub vapor_pressure: VaporPressure,
    pub multipliers: Multipliers,
    pub loss: Loss,
    pub projection: ProjectedLoss,
    pub sensitivity: Vec<Sensitivity>,
}

/// Vapor pressures in mmHg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VaporPressure {
    pub water_surface_mmhg: f64,
    pub air_saturated_mmhg: f64,
    pub air_actual_mmhg: f64,
    pub deficit_mmhg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Multipliers {
    pub wind: f64,
    pub agitation: f64,
    pub exposure: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Loss {
    pub base_inches_per_day: f64,
    pub inches_per_day: f64,
    pub gallons_per_day: f64,
    pub industry_gallons_per_day: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectedLoss {
    pub weekly_gallons: f64,
    pub monthly_gallons: f64,

    /// `None` when the level is not dropping.
    pub days_per_inch: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sensitivity {
    pub label: String,
    pub gallons_per_day: f64,
    pub percent_change: Option<f64>,
}

impl From<SensitivityEntry> for Sensitivity {
    fn from(entry: SensitivityEntry) -> Self {
        Self {
            label: entry.label.to_owned(),
            gallons_per_day: entry.gallons_per_day,
            percent_change: entry.percent_change,
        }
    }
}

impl Report {
    /// Runs the model, projections, and sensitivity analysis for `scenario`.
    #[must_use]
    pub fn evaluate(scenario: Scenario) -> Self {
        let input = scenario.to_input();
        let output = calculate_evaporation_rate(&input);
        let projection = Projection::from_output(&output);
        let sensitivity = sensitivity::analyze(input)
            .into_iter()
            .map(Sensitivity::from)
            .collect();

        Self {
            scenario,
            surface_area_sqft: input.surface_area.get::<square_foot>(),
            vapor_pressure: VaporPressure::from(&output),
            multipliers: Multipliers {
                wind: output.wind_multiplier,
                agitation: output.agitation_multiplier,
                exposure: output.exposure_fraction,
            },
            loss: Loss {
                base_inches_per_day: to_inches_per_day(output.base_rate),
                inches_per_day: output.inches_per_day(),
                gallons_per_day: output.gallons_per_day(),
                industry_gallons_per_day: output.industry_gallons_per_day(),
            },
            projection: ProjectedLoss {
                weekly_gallons: projection.weekly_loss.get::<gallon>(),
                monthly_gallons: projection.monthly_loss.get::<gallon>(),
                days_per_inch: projection.time_per_inch.map(|time| time.get::<day>()),
            },
            sensitivity,
        }
    }

    /// Renders the report as pretty-printed JSON.
    ///
    /// Non-finite values serialize as `null`.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json` error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Writes the report as human-readable text.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from `out`.
    pub fn write_text<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        let Self {
            scenario: s,
            surface_area_sqft,
            vapor_pressure: vp,
            multipliers: m,
            loss,
            projection: p,
            sensitivity,
        } = self;

        writeln!(out, "\n--- Calculated Surface Area ---")?;
        writeln!(out, "Surface area: {surface_area_sqft:.1} square feet")?;

        writeln!(out, "\n--- Vapor Pressure Analysis ---")?;
        writeln!(
            out,
            "Saturated VP at water surface ({:.1}°F): {:.1} mmHg",
            s.water_temp_f, vp.water_surface_mmhg
        )?;
        writeln!(
            out,
            "Saturated VP in air ({:.1}°F): {:.1} mmHg",
            s.air_temp_f, vp.air_saturated_mmhg
        )?;
        writeln!(
            out,
            "Actual VP in air ({:.1}% RH): {:.1} mmHg",
            s.humidity_percent, vp.air_actual_mmhg
        )?;
        writeln!(out, "Vapor pressure deficit: {:.1} mmHg", vp.deficit_mmhg)?;

        writeln!(out, "\n{RULE}\nEVAPORATION MODEL RESULTS\n{RULE}")?;

        writeln!(out, "\n--- Multipliers ---")?;
        writeln!(out, "Wind multiplier: {:.2}x", m.wind)?;
        writeln!(out, "Agitation multiplier: {:.2}x", m.agitation)?;
        writeln!(
            out,
            "Exposure time factor: {:.2}x ({:.1} hrs/day)",
            m.exposure, s.exposure_hours
        )?;

        writeln!(out, "\n--- Water Loss Estimates ---")?;
        writeln!(out, "Base evaporation rate: {:.3} inches/day", loss.base_inches_per_day)?;
        writeln!(out, "Actual evaporation rate: {:.3} inches/day", loss.inches_per_day)?;
        writeln!(
            out,
            "\n💧 ESTIMATED DAILY WATER LOSS: {:.1} gallons/day",
            loss.gallons_per_day
        )?;
        writeln!(
            out,
            "   (Industry rule-of-thumb estimate: {:.1} gallons/day)",
            loss.industry_gallons_per_day
        )?;

        writeln!(out, "\n--- Additional Insights ---")?;
        writeln!(out, "Weekly water loss: ~{:.0} gallons", p.weekly_gallons)?;
        writeln!(out, "Monthly water loss: ~{:.0} gallons", p.monthly_gallons)?;
        match p.days_per_inch {
            Some(days) => writeln!(
                out,
                "Water level drops {:.3} inches per day ({days:.1} days per inch)",
                loss.inches_per_day
            )?,
            None => writeln!(
                out,
                "Water level drops {:.3} inches per day (level is not falling)",
                loss.inches_per_day
            )?,
        }

        writeln!(out, "\n{RULE}\nSENSITIVITY (gallons/day vs. baseline):")?;
        for entry in sensitivity {
            match entry.percent_change {
                Some(change) => writeln!(
                    out,
                    "- {}: {:.1} ({change:+.0}%)",
                    entry.label, entry.gallons_per_day
                )?,
                None => writeln!(out, "- {}: {:.1}", entry.label, entry.gallons_per_day)?,
            }
        }
        writeln!(out, "{RULE}")
    }
}

impl From<&EvaporationOutput> for VaporPressure {
    fn from(output: &EvaporationOutput) -> Self {
        Self {
            water_surface_mmhg: output.water_vapor_pressure.get::<millimeter_of_mercury>(),
            air_saturated_mmhg: output
                .air_saturated_vapor_pressure
                .get::<millimeter_of_mercury>(),
            air_actual_mmhg: output.air_vapor_pressure.get::<millimeter_of_mercury>(),
            deficit_mmhg: output.vapor_pressure_deficit.get::<millimeter_of_mercury>(),
        }
    }
}
