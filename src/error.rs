//! Error types for carbon-estimate

use thiserror::Error;

use crate::estimator::EstimationError;

#[derive(Error, Debug)]
pub enum Error {
    /// Estimator rejected its input
    #[error(transparent)]
    Estimation(#[from] EstimationError),

    /// Configuration could not be parsed or is invalid
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Reading a configuration file failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Report serialization failed
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
