//! CO2 emission estimation from CPU time
//!
//! This module turns a quantity of processor time into an emissions figure
//! using a linear model: energy is power times time, and emissions are
//! energy times the carbon intensity of the grid.

pub mod model;
pub mod types;

#[cfg(test)]
mod estimator_test;

pub use model::{estimate_breakdown, estimate_co2, EstimationError};
pub use types::{
    EstimateBreakdown, EstimationConfig, DEFAULT_CARBON_INTENSITY, DEFAULT_CPU_POWER_KW,
    SECONDS_PER_HOUR,
};
