//! Loading estimation overrides from TOML configuration files
//!
//! A configuration file holds the same two optional fields as
//! [`EstimationConfig`], in either camelCase or snake_case:
//!
//! ```toml
//! cpuPowerKW = 0.08
//! carbon_intensity = 300.0
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::estimator::EstimationConfig;

/// Parse an [`EstimationConfig`] from a TOML document.
pub fn from_toml_str(raw_toml: &str) -> Result<EstimationConfig> {
    toml::from_str(raw_toml)
        .map_err(|e| Error::ConfigError(format!("Failed to parse config TOML: {e}")))
}

/// Read and parse a TOML configuration file.
pub fn load_file(path: impl AsRef<Path>) -> Result<EstimationConfig> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let config = from_toml_str(&raw)?;

    debug!(
        "Loaded config from {}: cpuPowerKW={:?}, carbonIntensity={:?}",
        path.display(),
        config.cpu_power_kw,
        config.carbon_intensity
    );

    Ok(config)
}

/// Build the effective configuration from an optional file and explicit
/// overrides. Overrides take precedence field by field.
pub fn resolve(path: Option<&Path>, overrides: EstimationConfig) -> Result<EstimationConfig> {
    let base = match path {
        Some(path) => load_file(path)?,
        None => EstimationConfig::default(),
    };
    Ok(base.merge(overrides))
}
