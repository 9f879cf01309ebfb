//! One-at-a-time sensitivity of daily water loss.
//!
//! Each variant changes a single input of the baseline scenario and reports
//! the resulting loss alongside its change relative to the baseline.

use evap_core::{
    Model,
    sweep::{SweepError, Variant, sweep},
};
use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::percent,
    thermodynamic_temperature::degree_fahrenheit,
};

use crate::{EvaporationInput, EvaporationModel, EvaporationOutput};

/// The loss for one sensitivity variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensitivityEntry {
    pub label: &'static str,
    pub gallons_per_day: f64,

    /// Change versus the baseline, in percent.
    ///
    /// `None` when the baseline loss is zero.
    pub percent_change: Option<f64>,
}

/// Returns the standard variants of `baseline`.
///
/// - Wind speed doubled
/// - Water 10 °F warmer
/// - Relative humidity 10 points lower, floored at zero
/// - Half the surface churned by jets
#[must_use]
pub fn variants(baseline: &EvaporationInput) -> [Variant<EvaporationInput>; 4] {
    let warmer = baseline.water_temperature.get::<degree_fahrenheit>() + 10.0;
    let drier = (baseline.relative_humidity.get::<percent>() - 10.0).max(0.0);

    [
        Variant::new(
            "Double wind speed",
            EvaporationInput {
                wind_speed: 2.0 * baseline.wind_speed,
                ..*baseline
            },
        ),
        Variant::new(
            "Water temperature +10 °F",
            EvaporationInput {
                water_temperature: ThermodynamicTemperature::new::<degree_fahrenheit>(warmer),
                ..*baseline
            },
        ),
        Variant::new(
            "Relative humidity -10 points",
            EvaporationInput {
                relative_humidity: Ratio::new::<percent>(drier),
                ..*baseline
            },
        ),
        Variant::new(
            "Jets churning 50% of surface",
            EvaporationInput {
                churn_area: Ratio::new::<percent>(50.0),
                ..*baseline
            },
        ),
    ]
}

/// Runs the standard variants through `model`.
///
/// # Errors
///
/// Returns a [`SweepError`] if any model call fails.
pub fn analyze_with<M>(
    model: &M,
    baseline: EvaporationInput,
) -> Result<Vec<SensitivityEntry>, SweepError<M::Error>>
where
    M: Model<Input = EvaporationInput, Output = EvaporationOutput>,
{
    let variants = variants(&baseline);
    let result = sweep(model, baseline, variants)?;

    Ok(result
        .percent_changes(EvaporationOutput::gallons_per_day)
        .into_iter()
        .map(|(label, gallons_per_day, percent_change)| SensitivityEntry {
            label,
            gallons_per_day,
            percent_change,
        })
        .collect())
}

/// Runs the standard variants through the [`EvaporationModel`].
#[must_use]
pub fn analyze(baseline: EvaporationInput) -> Vec<SensitivityEntry> {
    match analyze_with(&EvaporationModel, baseline) {
        Ok(entries) => entries,
        Err(SweepError::Baseline(never) | SweepError::Variant { source: never, .. }) => {
            match never {}
        }
    }
}
