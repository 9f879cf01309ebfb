//! Vapor pressure and unit helpers for water evaporation modeling.

pub mod units;
pub mod vapor;

pub use vapor::{
    AntoineCoefficients, actual_vapor_pressure, saturated_vapor_pressure,
    vapor_pressure_deficit,
};
