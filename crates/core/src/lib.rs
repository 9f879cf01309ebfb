//! Core traits and types shared by the evaporation workspace.
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`sweep`]: evaluates a model at a baseline and a set of labelled variants

mod model;
pub mod sweep;

pub use model::{Model, Snapshot};
pub use sweep::{Sweep, SweepError, Variant};
