//! Saturated and actual vapor pressure of water.

use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    pressure::millimeter_of_mercury,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

/// Coefficients of the Antoine equation, `log10(P) = A − B/(C + T)`.
///
/// `T` is in degrees Celsius and `P` in millimeters of mercury.
/// The correlation is empirical and only fitted over a limited temperature
/// range, available through [`AntoineCoefficients::is_valid_for`].
/// Evaluating outside that range still produces a number; it is just not
/// backed by data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AntoineCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub min_celsius: f64,
    pub max_celsius: f64,
}

impl AntoineCoefficients {
    /// Coefficients for liquid water, fitted between 1 °C and 100 °C.
    pub const WATER: Self = Self {
        a: 8.07131,
        b: 1730.63,
        c: 233.426,
        min_celsius: 1.0,
        max_celsius: 100.0,
    };

    /// Returns the saturated vapor pressure at `temperature`.
    #[must_use]
    pub fn pressure(&self, temperature: ThermodynamicTemperature) -> Pressure {
        let t = temperature.get::<degree_celsius>();
        let log_p = self.a - self.b / (self.c + t);

        Pressure::new::<millimeter_of_mercury>(10_f64.powf(log_p))
    }

    /// Returns `true` if `temperature` lies within the fitted range.
    #[must_use]
    pub fn is_valid_for(&self, temperature: ThermodynamicTemperature) -> bool {
        (self.min_celsius..=self.max_celsius).contains(&temperature.get::<degree_celsius>())
    }
}

/// Returns the saturated vapor pressure of water at `temperature`.
///
/// Uses [`AntoineCoefficients::WATER`] without bounds checking.
#[must_use]
pub fn saturated_vapor_pressure(temperature: ThermodynamicTemperature) -> Pressure {
    AntoineCoefficients::WATER.pressure(temperature)
}

/// Returns the partial pressure of water vapor in air.
///
/// Computed as the saturated pressure at `air_temperature` scaled by
/// `relative_humidity`.
#[must_use]
pub fn actual_vapor_pressure(
    air_temperature: ThermodynamicTemperature,
    relative_humidity: Ratio,
) -> Pressure {
    saturated_vapor_pressure(air_temperature) * relative_humidity.get::<ratio>()
}

/// Returns the difference between the vapor pressure at a water surface and
/// in the surrounding air.
///
/// A negative deficit means the air would condense onto the surface rather
/// than take up moisture from it.
#[inline]
#[must_use]
pub fn vapor_pressure_deficit(surface: Pressure, air: Pressure) -> Pressure {
    surface - air
}
