//! Error types for the Monte Carlo pricer configuration.
//!
//! `ConfigError` is raised when a [`MonteCarloConfig`](super::MonteCarloConfig)
//! is built; it converts into [`PricingError`] at the library surface.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Configuration error for the Monte Carlo pricer.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Fewer than one simulation path.
    #[error("Invalid path count {0}: at least one path is required")]
    InvalidPathCount(usize),
    /// The builder was finished without a path count.
    #[error("Path count must be specified")]
    MissingPathCount,
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidPathCount(n) => PricingError::InvalidSampleSize(n),
            // No paths requested is a sample of size zero.
            ConfigError::MissingPathCount => PricingError::InvalidSampleSize(0),
        }
    }
}
