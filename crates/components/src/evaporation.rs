//! Evaporation from an uncovered hot tub.
//!
//! The model follows the empirical pool-evaporation approach: a base rate
//! proportional to the vapor-pressure deficit between the water surface and
//! the air, scaled by multipliers for wind, jet agitation, and the fraction of
//! the day the tub is uncovered.
//!
//! Inputs are trusted as given. Nothing is clamped or validated, so a
//! negative deficit (air warmer and more humid than the water) produces a
//! negative evaporation estimate.

use std::convert::Infallible;

use evap_core::Model;
use evap_thermo::{
    actual_vapor_pressure, saturated_vapor_pressure,
    units::{DepthRate, inches_per_day, to_inches_per_day},
    vapor_pressure_deficit,
};
use tracing::debug;
use uom::si::{
    area::square_foot,
    f64::{Area, Pressure, Ratio, ThermodynamicTemperature, Time, Velocity, VolumeRate},
    pressure::millimeter_of_mercury,
    ratio::ratio,
    time::hour,
    velocity::mile_per_hour,
    volume_rate::gallon_per_day,
};

/// Still-water evaporation per unit deficit, in inches/day per mmHg.
pub const BASE_COEFFICIENT: f64 = 0.0018;

/// Fractional increase in evaporation per mph of wind.
pub const WIND_COEFFICIENT: f64 = 0.04;

/// Relative evaporation rate of undisturbed water.
pub const STILL_MULTIPLIER: f64 = 1.0;

/// Relative evaporation rate of water churned by jets.
pub const CHURN_MULTIPLIER: f64 = 2.0;

/// Rule-of-thumb hot tub evaporation, in inches/day.
pub const INDUSTRY_BASE_RATE: f64 = 0.35;

/// Gallons in one cubic foot, as used by pool evaporation tables.
pub const GALLONS_PER_CUBIC_FOOT: f64 = 7.48;

/// Hot tub evaporation model.
///
/// See the [module documentation](self) for the approach.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaporationModel;

/// Conditions driving evaporation from the tub.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaporationInput {
    /// Temperature of the water surface.
    pub water_temperature: ThermodynamicTemperature,

    /// Ambient air temperature.
    pub air_temperature: ThermodynamicTemperature,

    /// Relative humidity of the ambient air.
    pub relative_humidity: Ratio,

    /// Average wind speed across the surface.
    pub wind_speed: Velocity,

    /// Open water surface area.
    pub surface_area: Area,

    /// Share of the surface churned by jets.
    pub churn_area: Ratio,

    /// Time per day the tub is uncovered.
    pub exposure: Time,
}

/// Derived evaporation quantities, including every intermediate factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaporationOutput {
    /// Saturated vapor pressure at the water surface.
    pub water_vapor_pressure: Pressure,

    /// Saturated vapor pressure at the air temperature.
    pub air_saturated_vapor_pressure: Pressure,

    /// Partial pressure of water vapor in the air.
    pub air_vapor_pressure: Pressure,

    /// Driving force for evaporation; negative when the air is the wetter side.
    pub vapor_pressure_deficit: Pressure,

    /// Evaporation from still water with no wind, uncovered all day.
    pub base_rate: DepthRate,

    pub wind_multiplier: f64,
    pub agitation_multiplier: f64,

    /// Base rate with wind and agitation applied, uncovered all day.
    pub full_day_rate: DepthRate,

    /// Share of the day the tub is uncovered.
    pub exposure_fraction: f64,

    /// Level drop over a day at the given exposure.
    pub rate: DepthRate,

    /// Water lost per day.
    pub volume_rate: VolumeRate,

    /// Water lost per day according to the industry rule of thumb.
    ///
    /// Presented alongside [`Self::volume_rate`], not reconciled with it.
    pub industry_volume_rate: VolumeRate,
}

impl EvaporationOutput {
    /// Returns the level drop in inches per day.
    #[must_use]
    pub fn inches_per_day(&self) -> f64 {
        to_inches_per_day(self.rate)
    }

    /// Returns the water loss in gallons per day.
    #[must_use]
    pub fn gallons_per_day(&self) -> f64 {
        self.volume_rate.get::<gallon_per_day>()
    }

    /// Returns the rule-of-thumb water loss in gallons per day.
    #[must_use]
    pub fn industry_gallons_per_day(&self) -> f64 {
        self.industry_volume_rate.get::<gallon_per_day>()
    }
}

impl Model for EvaporationModel {
    type Input = EvaporationInput;
    type Output = EvaporationOutput;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let EvaporationInput {
            water_temperature,
            air_temperature,
            relative_humidity,
            wind_speed,
            surface_area,
            churn_area,
            exposure,
        } = *input;

        let water_vapor_pressure = saturated_vapor_pressure(water_temperature);
        let air_saturated_vapor_pressure = saturated_vapor_pressure(air_temperature);
        let air_vapor_pressure = actual_vapor_pressure(air_temperature, relative_humidity);
        let deficit = vapor_pressure_deficit(water_vapor_pressure, air_vapor_pressure);

        let base = BASE_COEFFICIENT * deficit.get::<millimeter_of_mercury>();
        let wind = wind_multiplier(wind_speed.get::<mile_per_hour>());
        let agitation = agitation_multiplier(churn_area.get::<ratio>());
        let full_day = base * wind * agitation;

        let exposure_fraction = exposure_fraction(exposure.get::<hour>());
        let actual = full_day * exposure_fraction;

        let area = surface_area.get::<square_foot>();
        let gallons = gallons_per_day(area, actual);
        let industry_gallons = gallons_per_day(
            area,
            INDUSTRY_BASE_RATE * wind * agitation * exposure_fraction,
        );

        debug!(
            deficit_mmhg = deficit.get::<millimeter_of_mercury>(),
            wind_multiplier = wind,
            agitation_multiplier = agitation,
            exposure_fraction,
            gallons_per_day = gallons,
            "evaluated evaporation model"
        );

        Ok(EvaporationOutput {
            water_vapor_pressure,
            air_saturated_vapor_pressure,
            air_vapor_pressure,
            vapor_pressure_deficit: deficit,
            base_rate: inches_per_day(base),
            wind_multiplier: wind,
            agitation_multiplier: agitation,
            full_day_rate: inches_per_day(full_day),
            exposure_fraction,
            rate: inches_per_day(actual),
            volume_rate: VolumeRate::new::<gallon_per_day>(gallons),
            industry_volume_rate: VolumeRate::new::<gallon_per_day>(industry_gallons),
        })
    }
}

/// Evaluates the [`EvaporationModel`] for `input`.
#[must_use]
pub fn calculate_evaporation_rate(input: &EvaporationInput) -> EvaporationOutput {
    match EvaporationModel.call(input) {
        Ok(output) => output,
        Err(never) => match never {},
    }
}

/// Returns the wind multiplier, `1 + 0.04·v` with `v` in mph.
///
/// Linear with no saturation ceiling.
#[must_use]
pub fn wind_multiplier(wind_speed_mph: f64) -> f64 {
    1.0 + WIND_COEFFICIENT * wind_speed_mph
}

/// Returns the agitation multiplier for the churned share of the surface.
///
/// A weighted blend of the still and churned multipliers.
#[must_use]
pub fn agitation_multiplier(churn_fraction: f64) -> f64 {
    (1.0 - churn_fraction) * STILL_MULTIPLIER + churn_fraction * CHURN_MULTIPLIER
}

/// Returns the share of the day spent uncovered.
#[must_use]
pub fn exposure_fraction(exposure_hours_per_day: f64) -> f64 {
    exposure_hours_per_day / 24.0
}

/// Converts a level drop over a surface into gallons per day.
fn gallons_per_day(area_sqft: f64, inches_per_day: f64) -> f64 {
    area_sqft * (inches_per_day / 12.0) * GALLONS_PER_CUBIC_FOOT
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;
    use uom::si::{ratio::percent, thermodynamic_temperature::degree_fahrenheit};

    /// Returns the default scenario: a 12 ft tub at 102 °F on a mild, dry day.
    fn default_input() -> EvaporationInput {
        EvaporationInput {
            water_temperature: ThermodynamicTemperature::new::<degree_fahrenheit>(102.0),
            air_temperature: ThermodynamicTemperature::new::<degree_fahrenheit>(70.0),
            relative_humidity: Ratio::new::<percent>(35.0),
            wind_speed: Velocity::new::<mile_per_hour>(5.0),
            surface_area: Area::new::<square_foot>(PI * 36.0),
            churn_area: Ratio::new::<percent>(25.0),
            exposure: Time::new::<hour>(14.0),
        }
    }

    #[test]
    fn default_scenario() {
        let output = calculate_evaporation_rate(&default_input());

        let mmhg = |p: Pressure| p.get::<millimeter_of_mercury>();
        assert_relative_eq!(mmhg(output.water_vapor_pressure), 52.006, epsilon = 1e-3);
        assert_relative_eq!(
            mmhg(output.air_saturated_vapor_pressure),
            18.715,
            epsilon = 1e-3
        );
        assert_relative_eq!(mmhg(output.air_vapor_pressure), 6.550, epsilon = 1e-3);
        assert_relative_eq!(mmhg(output.vapor_pressure_deficit), 45.456, epsilon = 1e-3);

        assert_relative_eq!(to_inches_per_day(output.base_rate), 0.081_82, epsilon = 1e-5);
        assert_relative_eq!(output.wind_multiplier, 1.2, epsilon = 1e-12);
        assert_relative_eq!(output.agitation_multiplier, 1.25, epsilon = 1e-12);
        assert_relative_eq!(to_inches_per_day(output.full_day_rate), 0.122_73, epsilon = 1e-5);
        assert_relative_eq!(output.exposure_fraction, 14.0 / 24.0, epsilon = 1e-12);
        assert_relative_eq!(output.inches_per_day(), 0.071_59, epsilon = 1e-5);

        assert_relative_eq!(output.gallons_per_day(), 5.047, epsilon = 1e-3);
        assert_relative_eq!(output.industry_gallons_per_day(), 21.590, epsilon = 1e-3);
    }

    #[test]
    fn calm_still_water_has_unit_multipliers() {
        let output = calculate_evaporation_rate(&EvaporationInput {
            wind_speed: Velocity::new::<mile_per_hour>(0.0),
            churn_area: Ratio::new::<percent>(0.0),
            ..default_input()
        });

        assert_eq!(output.wind_multiplier, 1.0);
        assert_eq!(output.agitation_multiplier, 1.0);
        assert_relative_eq!(
            to_inches_per_day(output.full_day_rate),
            to_inches_per_day(output.base_rate),
            epsilon = 1e-12
        );
    }

    #[test]
    fn wind_multiplier_is_linear() {
        assert_eq!(wind_multiplier(0.0), 1.0);
        assert_eq!(wind_multiplier(5.0), 1.2);
        assert_eq!(wind_multiplier(10.0), 1.4);
    }

    #[test]
    fn agitation_multiplier_bounds() {
        assert_eq!(agitation_multiplier(0.0), 1.0);
        assert_eq!(agitation_multiplier(0.25), 1.25);
        assert_eq!(agitation_multiplier(1.0), 2.0);
    }

    #[test]
    fn fully_churned_surface_doubles_evaporation() {
        let still = calculate_evaporation_rate(&EvaporationInput {
            churn_area: Ratio::new::<percent>(0.0),
            ..default_input()
        });
        let churned = calculate_evaporation_rate(&EvaporationInput {
            churn_area: Ratio::new::<percent>(100.0),
            ..default_input()
        });

        assert_relative_eq!(churned.agitation_multiplier, 2.0, epsilon = 1e-12);
        assert_relative_eq!(
            churned.gallons_per_day(),
            2.0 * still.gallons_per_day(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn exposure_scales_loss() {
        let all_day = calculate_evaporation_rate(&EvaporationInput {
            exposure: Time::new::<hour>(24.0),
            ..default_input()
        });
        assert_eq!(all_day.exposure_fraction, 1.0);
        assert_relative_eq!(
            all_day.inches_per_day(),
            to_inches_per_day(all_day.full_day_rate),
            epsilon = 1e-12
        );

        let covered = calculate_evaporation_rate(&EvaporationInput {
            exposure: Time::new::<hour>(0.0),
            ..default_input()
        });
        assert_eq!(covered.exposure_fraction, 0.0);
        assert_eq!(covered.gallons_per_day(), 0.0);
        assert_eq!(covered.industry_gallons_per_day(), 0.0);
    }

    #[test]
    fn loss_scales_with_area() {
        let small = calculate_evaporation_rate(&default_input());
        let large = calculate_evaporation_rate(&EvaporationInput {
            surface_area: 4.0 * default_input().surface_area,
            ..default_input()
        });

        assert_relative_eq!(large.inches_per_day(), small.inches_per_day(), epsilon = 1e-12);
        assert_relative_eq!(
            large.gallons_per_day(),
            4.0 * small.gallons_per_day(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn warm_humid_air_gives_negative_loss() {
        let output = calculate_evaporation_rate(&EvaporationInput {
            water_temperature: ThermodynamicTemperature::new::<degree_fahrenheit>(70.0),
            air_temperature: ThermodynamicTemperature::new::<degree_fahrenheit>(90.0),
            relative_humidity: Ratio::new::<percent>(80.0),
            ..default_input()
        });

        assert!(output.vapor_pressure_deficit.get::<millimeter_of_mercury>() < 0.0);
        assert_relative_eq!(output.gallons_per_day(), -1.1217, epsilon = 1e-4);

        // The rule of thumb ignores the deficit entirely.
        assert_relative_eq!(output.industry_gallons_per_day(), 21.590, epsilon = 1e-3);
    }

    #[test]
    fn model_is_deterministic() {
        let input = default_input();

        assert_eq!(EvaporationModel.call(&input), EvaporationModel.call(&input));
    }
}
