//! Components for estimating water loss from an outdoor hot tub.

pub mod evaporation;
pub mod geometry;
pub mod projection;
pub mod sensitivity;

pub use evaporation::{
    EvaporationInput, EvaporationModel, EvaporationOutput, calculate_evaporation_rate,
};
pub use geometry::HotTub;
pub use projection::Projection;
pub use sensitivity::SensitivityEntry;
