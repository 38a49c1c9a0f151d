//! Solver configuration types.

use num_traits::Float;

use crate::types::SolverError;

/// Configuration for root-finding algorithms.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::SolverConfig;
///
/// // Use default configuration
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert!(config.tolerance < 1e-8);
/// assert_eq!(config.max_iterations, 100);
///
/// // Implied volatility preset
/// let iv: SolverConfig<f64> = SolverConfig::implied_volatility();
/// assert_eq!(iv.tolerance, 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance for root finding.
    ///
    /// The solver stops when `|f(x)| < tolerance`.
    pub tolerance: T,

    /// Maximum number of Newton updates before giving up.
    pub max_iterations: usize,

    /// Derivative magnitude below which the Newton step is considered undefined.
    pub derivative_floor: T,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `tolerance`: 1e-10
    /// - `max_iterations`: 100
    /// - `derivative_floor`: 1e-30
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap(),
            max_iterations: 100,
            derivative_floor: T::from(1e-30).unwrap(),
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified tolerance and iteration cap.
    ///
    /// The derivative floor keeps its default value.
    ///
    /// # Errors
    ///
    /// - `SolverError::InvalidTolerance` if `tolerance` is not positive and finite
    /// - `SolverError::InvalidMaxIterations` if `max_iterations == 0`
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-12, 200).unwrap();
    /// assert_eq!(config.max_iterations, 200);
    ///
    /// assert!(SolverConfig::new(0.0, 10).is_err());
    /// ```
    pub fn new(tolerance: T, max_iterations: usize) -> Result<Self, SolverError> {
        // Written as a negated comparison so NaN is rejected too.
        if !(tolerance > T::zero()) || !tolerance.is_finite() {
            return Err(SolverError::InvalidTolerance(
                tolerance.to_f64().unwrap_or(f64::NAN),
            ));
        }
        if max_iterations == 0 {
            return Err(SolverError::InvalidMaxIterations(max_iterations));
        }
        Ok(Self {
            tolerance,
            max_iterations,
            ..Self::default()
        })
    }

    /// Preset for implied volatility inversion.
    ///
    /// Price tolerance 1e-5, 100 iterations, and a derivative floor of 1e-12
    /// below which vega is treated as vanished.
    pub fn implied_volatility() -> Self {
        Self {
            tolerance: T::from(1e-5).unwrap(),
            max_iterations: 100,
            derivative_floor: T::from(1e-12).unwrap(),
        }
    }

    /// Returns a copy with a different derivative floor.
    #[inline]
    pub fn with_derivative_floor(mut self, derivative_floor: T) -> Self {
        self.derivative_floor = derivative_floor;
        self
    }
}
