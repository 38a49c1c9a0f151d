//! Newton-Raphson root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Outcome of a Newton-Raphson solve.
///
/// `converged = false` means the iteration budget was exhausted, or the next
/// iterate left the admissible domain; `root` then holds the best estimate
/// available rather than a verified root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonResult<T: Float> {
    /// Final iterate.
    pub root: T,
    /// Whether `|f(root)| < tolerance` was observed.
    pub converged: bool,
    /// Number of Newton updates performed.
    pub iterations: usize,
    /// Last evaluated function value.
    pub residual: T,
}

/// Newton-Raphson root finder.
///
/// Uses Newton's method: `x_{n+1} = x_n - f(x_n) / f'(x_n)` for fast
/// quadratic convergence on smooth functions.
///
/// # Convergence
///
/// Newton-Raphson converges quadratically near a root. It may fail if:
/// - The derivative is near zero (reported as `SolverError::DerivativeNearZero`)
/// - The initial guess is far from the root (reported as `converged = false`)
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
///
/// // Solve x³ - x - 2 = 0
/// let f = |x: f64| x * x * x - x - 2.0;
/// let f_prime = |x: f64| 3.0 * x * x - 1.0;
///
/// let result = solver.solve(f, f_prime, 1.5).unwrap();
/// assert!(result.converged);
/// assert!(f(result.root).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Find a root of `f` using explicit derivative `f_prime`.
    ///
    /// Equivalent to [`solve_within`](Self::solve_within) with a domain that
    /// accepts every finite value.
    ///
    /// # Errors
    ///
    /// `SolverError::DerivativeNearZero` if `|f'(x)|` drops below the
    /// configured derivative floor before convergence.
    pub fn solve<F, G>(&self, f: F, f_prime: G, x0: T) -> Result<NewtonResult<T>, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        self.solve_within(f, f_prime, x0, |x: T| x.is_finite())
    }

    /// Find a root of `f`, keeping every iterate inside `domain`.
    ///
    /// The loop evaluates `f(x)`; if `|f(x)| < tolerance` it stops with
    /// `converged = true`. Otherwise it takes one Newton step. A step whose
    /// result fails `domain` stops the solve with `converged = false` and the
    /// last admissible iterate. After `max_iterations` updates the final
    /// iterate is returned with `converged = false`.
    ///
    /// # Arguments
    ///
    /// * `f` - Function to find root of
    /// * `f_prime` - Derivative of f
    /// * `x0` - Initial guess (assumed to lie in `domain`)
    /// * `domain` - Admissibility predicate for iterates
    ///
    /// # Errors
    ///
    /// `SolverError::DerivativeNearZero` if `|f'(x)|` drops below the
    /// configured derivative floor (or is NaN) before convergence.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
    ///
    /// // ln(x) = 0 from a far guess overshoots below zero on the first step
    /// let result = solver
    ///     .solve_within(|x: f64| x.ln(), |x: f64| 1.0 / x, 5.0, |x| x > 0.0)
    ///     .unwrap();
    /// assert!(!result.converged);
    /// assert_eq!(result.root, 5.0);
    /// ```
    pub fn solve_within<F, G, D>(
        &self,
        f: F,
        f_prime: G,
        x0: T,
        domain: D,
    ) -> Result<NewtonResult<T>, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
        D: Fn(T) -> bool,
    {
        let mut x = x0;
        let mut residual = T::nan();

        for iteration in 0..self.config.max_iterations {
            residual = f(x);

            if residual.abs() < self.config.tolerance {
                return Ok(NewtonResult {
                    root: x,
                    converged: true,
                    iterations: iteration,
                    residual,
                });
            }

            let derivative = f_prime(x);

            // Negated so that a NaN derivative is rejected as well.
            if !(derivative.abs() >= self.config.derivative_floor) {
                return Err(SolverError::DerivativeNearZero {
                    x: x.to_f64().unwrap_or(f64::NAN),
                    derivative: derivative.to_f64().unwrap_or(f64::NAN),
                });
            }

            let next = x - residual / derivative;
            if !next.is_finite() || !domain(next) {
                return Ok(NewtonResult {
                    root: x,
                    converged: false,
                    iterations: iteration,
                    residual,
                });
            }
            x = next;
        }

        Ok(NewtonResult {
            root: x,
            converged: false,
            iterations: self.config.max_iterations,
            residual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // Basic Functionality
    // ========================================

    #[test]
    fn test_find_sqrt_2() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        let result = solver
            .solve(|x: f64| x * x - 2.0, |x: f64| 2.0 * x, 1.0)
            .unwrap();
        assert!(result.converged);
        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_find_sin_root() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        // Solve sin(x) = 0 near x = 3 (should find π)
        let result = solver.solve(|x: f64| x.sin(), |x: f64| x.cos(), 3.0).unwrap();
        assert!(result.converged);
        assert_relative_eq!(result.root, std::f64::consts::PI, epsilon = 1e-10);
    }

    #[test]
    fn test_find_exp_root() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        // Solve e^x - 2 = 0 (find ln(2))
        let result = solver
            .solve(|x: f64| x.exp() - 2.0, |x: f64| x.exp(), 0.5)
            .unwrap();
        assert!(result.converged);
        assert_relative_eq!(result.root, 2.0_f64.ln(), epsilon = 1e-10);
    }

    #[test]
    fn test_converged_on_initial_guess_reports_zero_iterations() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        let result = solver.solve(|x: f64| x - 1.0, |_x: f64| 1.0, 1.0).unwrap();
        assert!(result.converged);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.root, 1.0);
    }

    #[test]
    fn test_linear_function_converges_in_one_step() {
        let solver: NewtonRaphsonSolver<f64> = NewtonRaphsonSolver::with_defaults();

        let result = solver.solve(|x: f64| x - 1.0, |_x: f64| 1.0, 0.0).unwrap();
        assert!(result.converged);
        assert_eq!(result.iterations, 1);
        assert_relative_eq!(result.root, 1.0, epsilon = 1e-12);
    }

    // ========================================
    // Error Handling and Best-Effort Results
    // ========================================

    #[test]
    fn test_derivative_near_zero() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        let result = solver.solve(|x: f64| x * x * x + 1.0, |_x: f64| 0.0, 0.5);
        match result {
            Err(SolverError::DerivativeNearZero { x, derivative }) => {
                assert_eq!(x, 0.5);
                assert_eq!(derivative, 0.0);
            }
            other => panic!("Expected DerivativeNearZero error, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_derivative_is_rejected() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        let result = solver.solve(|x: f64| x - 3.0, |_x: f64| f64::NAN, 1.0);
        assert!(matches!(
            result,
            Err(SolverError::DerivativeNearZero { .. })
        ));
    }

    #[test]
    fn test_derivative_floor_is_configurable() {
        let config = SolverConfig::default().with_derivative_floor(1.0);
        let solver = NewtonRaphsonSolver::new(config);

        // f'(x) = 0.5 is below the floor of 1.0
        let result = solver.solve(|x: f64| 0.5 * x - 1.0, |_x: f64| 0.5, 0.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_iteration_budget_exhausted_returns_best_effort() {
        let config = SolverConfig::new(1e-100, 3).unwrap();
        let solver = NewtonRaphsonSolver::new(config);

        let result = solver
            .solve(|x: f64| x * x - 2.0, |x: f64| 2.0 * x, 1.0)
            .unwrap();
        assert!(!result.converged);
        assert_eq!(result.iterations, 3);
        // Three Newton steps from 1.0 are already close to √2
        assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-5);
    }

    #[test]
    fn test_domain_violation_stops_with_last_admissible_iterate() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        // From x = 5, the step for ln(x) is 5 - ln(5)·5 < 0
        let result = solver
            .solve_within(|x: f64| x.ln(), |x: f64| 1.0 / x, 5.0, |x| x > 0.0)
            .unwrap();
        assert!(!result.converged);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.root, 5.0);
    }

    #[test]
    fn test_domain_respected_when_path_stays_inside() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        let result = solver
            .solve_within(|x: f64| x.ln(), |x: f64| 1.0 / x, 1.5, |x| x > 0.0)
            .unwrap();
        assert!(result.converged);
        assert_relative_eq!(result.root, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_config_accessor() {
        let config = SolverConfig::new(1e-8, 50).unwrap();
        let solver = NewtonRaphsonSolver::new(config);

        assert!((solver.config().tolerance - 1e-8).abs() < 1e-15);
        assert_eq!(solver.config().max_iterations, 50);
    }

    #[test]
    fn test_with_f32() {
        let solver: NewtonRaphsonSolver<f32> = NewtonRaphsonSolver::new(
            SolverConfig::new(1e-5_f32, 100).unwrap(),
        );

        let result = solver
            .solve(|x: f32| x * x - 2.0, |x: f32| 2.0 * x, 1.0_f32)
            .unwrap();
        assert!(result.converged);
        assert!((result.root - std::f32::consts::SQRT_2).abs() < 1e-4);
    }
}
