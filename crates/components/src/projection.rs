use uom::si::{
    f64::{Time, Volume},
    time::day,
};

use crate::EvaporationOutput;

/// Water loss extrapolated over longer periods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub weekly_loss: Volume,

    /// Loss over a 30-day month.
    pub monthly_loss: Volume,

    /// Time for the water level to drop one inch.
    ///
    /// `None` when the level is not dropping.
    pub time_per_inch: Option<Time>,
}

impl Projection {
    /// Projects the daily loss in `output` over a week and a month.
    #[must_use]
    pub fn from_output(output: &EvaporationOutput) -> Self {
        let inches_per_day = output.inches_per_day();

        Self {
            weekly_loss: output.volume_rate * Time::new::<day>(7.0),
            monthly_loss: output.volume_rate * Time::new::<day>(30.0),
            time_per_inch: (inches_per_day > 0.0).then(|| Time::new::<day>(1.0 / inches_per_day)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use evap_thermo::units::inches_per_day;
    use uom::{
        ConstZero,
        si::{
            f64::{Pressure, VolumeRate},
            volume::gallon,
            volume_rate::gallon_per_day,
        },
    };

    fn output(gallons: f64, inches: f64) -> EvaporationOutput {
        let rate = inches_per_day(inches);
        EvaporationOutput {
            water_vapor_pressure: Pressure::ZERO,
            air_saturated_vapor_pressure: Pressure::ZERO,
            air_vapor_pressure: Pressure::ZERO,
            vapor_pressure_deficit: Pressure::ZERO,
            base_rate: rate,
            wind_multiplier: 1.0,
            agitation_multiplier: 1.0,
            full_day_rate: rate,
            exposure_fraction: 1.0,
            rate,
            volume_rate: VolumeRate::new::<gallon_per_day>(gallons),
            industry_volume_rate: VolumeRate::new::<gallon_per_day>(gallons),
        }
    }

    #[test]
    fn weekly_and_monthly_totals() {
        let projection = Projection::from_output(&output(5.0, 0.05));

        assert_relative_eq!(projection.weekly_loss.get::<gallon>(), 35.0, epsilon = 1e-9);
        assert_relative_eq!(projection.monthly_loss.get::<gallon>(), 150.0, epsilon = 1e-9);
    }

    #[test]
    fn days_to_drop_one_inch() {
        let projection = Projection::from_output(&output(5.0, 0.05));

        let days = projection.time_per_inch.unwrap().get::<day>();
        assert_relative_eq!(days, 20.0, epsilon = 1e-9);
    }

    #[test]
    fn level_that_never_drops() {
        assert!(Projection::from_output(&output(0.0, 0.0)).time_per_inch.is_none());
        assert!(Projection::from_output(&output(-1.0, -0.01)).time_per_inch.is_none());
    }
}
