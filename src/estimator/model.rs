//! Linear power-time emissions model

use thiserror::Error;

use crate::estimator::types::{EstimateBreakdown, EstimationConfig, SECONDS_PER_HOUR};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimationError {
    /// Input failed validation
    #[error("{0}")]
    InvalidInput(String),
}

/// Estimate CO2 emissions in grams for `cpu_seconds` of processor time.
///
/// When `config` is `None`, or one of its fields is absent or not strictly
/// positive, the corresponding default is used.
///
/// # Errors
///
/// Returns [`EstimationError::InvalidInput`] when `cpu_seconds <= 0`.
///
/// # Example
///
/// ```
/// use carbon_estimate::estimator::{estimate_co2, EstimationConfig};
///
/// let grams = estimate_co2(3600.0, None).unwrap();
/// assert!((grams - 23.75).abs() < 1e-9);
///
/// let config = EstimationConfig::new()
///     .with_cpu_power_kw(0.08)
///     .with_carbon_intensity(300.0);
/// let grams = estimate_co2(3600.0, Some(&config)).unwrap();
/// assert!((grams - 24.0).abs() < 1e-9);
/// ```
pub fn estimate_co2(
    cpu_seconds: f64,
    config: Option<&EstimationConfig>,
) -> Result<f64, EstimationError> {
    estimate_breakdown(cpu_seconds, config).map(|b| b.co2_grams)
}

/// Same computation as [`estimate_co2`], keeping every intermediate value.
pub fn estimate_breakdown(
    cpu_seconds: f64,
    config: Option<&EstimationConfig>,
) -> Result<EstimateBreakdown, EstimationError> {
    // NaN is not rejected here; it propagates into the result.
    if cpu_seconds <= 0.0 {
        return Err(EstimationError::InvalidInput(
            "cpuSeconds must be greater than zero".to_string(),
        ));
    }

    let config = config.copied().unwrap_or_default();
    let cpu_power_kw = config.effective_cpu_power_kw();
    let carbon_intensity = config.effective_carbon_intensity();

    let time_hours = cpu_seconds / SECONDS_PER_HOUR;
    let energy_kwh = cpu_power_kw * time_hours;
    let co2_grams = energy_kwh * carbon_intensity;

    Ok(EstimateBreakdown {
        cpu_seconds,
        time_hours,
        cpu_power_kw,
        carbon_intensity,
        energy_kwh,
        co2_grams,
    })
}
