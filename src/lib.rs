//! carbon-estimate: CO2 emission estimates for compute workloads
//!
//! This crate converts CPU time into an estimated mass of CO2 using a
//! linear power-time model and a grid carbon intensity, with optional
//! per-field overrides of the built-in constants.

pub mod config;
pub mod error;
pub mod estimator;
pub mod report;
pub mod telemetry;

pub use crate::error::{Error, Result};
pub use crate::estimator::{
    estimate_breakdown, estimate_co2, EstimateBreakdown, EstimationConfig, EstimationError,
    DEFAULT_CARBON_INTENSITY, DEFAULT_CPU_POWER_KW,
};
