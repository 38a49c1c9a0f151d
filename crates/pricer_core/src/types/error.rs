//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Failures raised by the analytical, Monte Carlo and
//!   implied-volatility pricers
//! - `ErrorKind`: Stable category tag for each `PricingError` variant
//! - `SolverError`: Errors from root-finding solvers
//!
//! Monte Carlo noise and solver non-convergence are deliberately absent from
//! this taxonomy: they are reported as result fields, not failures.

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every variant carries enough context to render a distinct, human-readable
/// message at a presentation boundary.
///
/// # Variants
/// - `InvalidMarketParameters`: Non-positive spot, strike, maturity or volatility,
///   negative dividend yield, or any non-finite input
/// - `InvalidOptionSpec`: Unsupported option style/side combination
/// - `InvalidSampleSize`: Monte Carlo path count below one
/// - `DegenerateVega`: Vega vanished during implied-volatility iteration
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidMarketParameters {
///     parameter: "spot",
///     value: -1.0,
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid market parameters: spot = -1 is outside its valid domain"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PricingError {
    /// A market parameter is outside the domain of the BSM formulas.
    #[error("Invalid market parameters: {parameter} = {value} is outside its valid domain")]
    InvalidMarketParameters {
        /// Name of the offending parameter
        parameter: &'static str,
        /// The rejected value
        value: f64,
    },

    /// The option style/side combination is not supported.
    #[error("Invalid option specification: {0}")]
    InvalidOptionSpec(String),

    /// The Monte Carlo path count is zero.
    #[error("Invalid sample size: {0} Monte Carlo paths requested")]
    InvalidSampleSize(usize),

    /// Vega is zero (or indistinguishable from zero) so the Newton step is undefined.
    #[error("Degenerate vega {vega:e} at σ = {sigma}: implied volatility update is undefined")]
    DegenerateVega {
        /// Volatility iterate at which vega vanished
        sigma: f64,
        /// The vega value observed
        vega: f64,
    },
}

/// Category of a [`PricingError`], independent of its payload.
///
/// # Examples
/// ```
/// use pricer_core::types::{ErrorKind, PricingError};
///
/// let err = PricingError::InvalidOptionSpec("straddle".to_string());
/// assert_eq!(err.kind(), ErrorKind::InvalidOptionSpec);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// See [`PricingError::InvalidMarketParameters`]
    InvalidMarketParameters,
    /// See [`PricingError::InvalidOptionSpec`]
    InvalidOptionSpec,
    /// See [`PricingError::InvalidSampleSize`]
    InvalidSampleSize,
    /// See [`PricingError::DegenerateVega`]
    DegenerateVega,
}

impl PricingError {
    /// Returns the category of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            PricingError::InvalidMarketParameters { .. } => ErrorKind::InvalidMarketParameters,
            PricingError::InvalidOptionSpec(_) => ErrorKind::InvalidOptionSpec,
            PricingError::InvalidSampleSize(_) => ErrorKind::InvalidSampleSize,
            PricingError::DegenerateVega { .. } => ErrorKind::DegenerateVega,
        }
    }

    /// Shorthand for an [`InvalidMarketParameters`](PricingError::InvalidMarketParameters) error.
    #[inline]
    pub fn invalid_parameter(parameter: &'static str, value: f64) -> Self {
        PricingError::InvalidMarketParameters { parameter, value }
    }
}

/// Root-finding solver errors.
///
/// # Examples
/// ```
/// use pricer_core::types::SolverError;
///
/// let err = SolverError::DerivativeNearZero { x: 0.1, derivative: 0.0 };
/// assert!(format!("{}", err).contains("x = 0.1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Derivative near zero (division by zero risk in Newton-Raphson).
    #[error("Derivative near zero at x = {x} (f'(x) = {derivative:e})")]
    DerivativeNearZero {
        /// The x value where derivative was near zero
        x: f64,
        /// The derivative value observed
        derivative: f64,
    },

    /// Tolerance is not a positive finite number.
    #[error("Invalid solver tolerance {0}: must be positive and finite")]
    InvalidTolerance(f64),

    /// Iteration budget of zero.
    #[error("Invalid solver iteration limit {0}: must be at least 1")]
    InvalidMaxIterations(usize),
}
