//! Types for CO2 estimation

use serde::{Deserialize, Serialize};

/// CPU power draw used when no override is given, in kW (50 W)
pub const DEFAULT_CPU_POWER_KW: f64 = 0.05;

/// Global average grid carbon intensity in gCO2/kWh
pub const DEFAULT_CARBON_INTENSITY: f64 = 475.0;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Optional overrides for the estimation constants.
///
/// Each field is resolved on its own: a field that is absent, zero or
/// negative falls back to its default, so setting one override never
/// forces the other to be set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EstimationConfig {
    /// Processor power draw in kilowatts
    #[serde(
        rename = "cpuPowerKW",
        alias = "cpu_power_kw",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cpu_power_kw: Option<f64>,
    /// Grid carbon intensity in gCO2/kWh
    #[serde(
        rename = "carbonIntensity",
        alias = "carbon_intensity",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub carbon_intensity: Option<f64>,
}

impl EstimationConfig {
    /// Config with no overrides
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cpu_power_kw(mut self, cpu_power_kw: f64) -> Self {
        self.cpu_power_kw = Some(cpu_power_kw);
        self
    }

    pub fn with_carbon_intensity(mut self, carbon_intensity: f64) -> Self {
        self.carbon_intensity = Some(carbon_intensity);
        self
    }

    /// CPU power that an estimate will use, in kW
    pub fn effective_cpu_power_kw(&self) -> f64 {
        positive_or(self.cpu_power_kw, DEFAULT_CPU_POWER_KW)
    }

    /// Carbon intensity that an estimate will use, in gCO2/kWh
    pub fn effective_carbon_intensity(&self) -> f64 {
        positive_or(self.carbon_intensity, DEFAULT_CARBON_INTENSITY)
    }

    /// Layer `overrides` on top of `self`.
    ///
    /// Fields present in `overrides` win, absent ones fall through. Only
    /// presence is considered here; a non-positive value still resolves to
    /// the default when the estimate is computed.
    pub fn merge(self, overrides: EstimationConfig) -> Self {
        Self {
            cpu_power_kw: overrides.cpu_power_kw.or(self.cpu_power_kw),
            carbon_intensity: overrides.carbon_intensity.or(self.carbon_intensity),
        }
    }
}

fn positive_or(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v > 0.0 => v,
        _ => default,
    }
}

/// Every quantity computed on the way to an emissions figure
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateBreakdown {
    /// CPU time in seconds, as given
    pub cpu_seconds: f64,
    /// CPU time in hours
    pub time_hours: f64,
    /// Effective CPU power in kW
    #[serde(rename = "cpuPowerKW")]
    pub cpu_power_kw: f64,
    /// Effective carbon intensity in gCO2/kWh
    pub carbon_intensity: f64,
    /// Energy consumed in kWh
    #[serde(rename = "energyKWh")]
    pub energy_kwh: f64,
    /// Estimated emissions in grams of CO2
    pub co2_grams: f64,
}
