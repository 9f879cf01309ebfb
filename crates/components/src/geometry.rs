use std::f64::consts::PI;

use uom::si::f64::{Area, Length};

/// The open water surface of a round hot tub.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HotTub {
    pub diameter: Length,
}

impl HotTub {
    /// Creates a round hot tub with the given diameter.
    #[must_use]
    pub fn circular(diameter: Length) -> Self {
        Self { diameter }
    }

    /// Returns the water surface area, `π·(d/2)²`.
    #[must_use]
    pub fn surface_area(&self) -> Area {
        let radius = 0.5 * self.diameter;
        PI * radius * radius
    }
}
