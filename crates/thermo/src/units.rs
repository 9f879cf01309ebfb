use uom::si::{
    f64::{Length, Time, Velocity},
    length::inch,
    time::day,
};

/// Rate at which a free water surface drops, m/s in SI.
///
/// Evaporation is usually quoted as a depth per day, so use
/// [`inches_per_day`] and [`to_inches_per_day`] to move between the
/// conventional unit and the SI representation.
pub type DepthRate = Velocity;

/// Creates a [`DepthRate`] from a value in inches per day.
#[inline]
#[must_use]
pub fn inches_per_day(value: f64) -> DepthRate {
    Length::new::<inch>(value) / Time::new::<day>(1.0)
}

/// Returns a [`DepthRate`] as inches per day.
#[inline]
#[must_use]
pub fn to_inches_per_day(rate: DepthRate) -> f64 {
    (rate * Time::new::<day>(1.0)).get::<inch>()
}
