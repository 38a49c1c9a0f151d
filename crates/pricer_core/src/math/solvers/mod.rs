//! Root-finding solvers for numerical computation.
//!
//! This module provides the Newton-Raphson root finder used for implied
//! volatility inversion.
//!
//! ## Available Solvers
//!
//! - [`NewtonRaphsonSolver`]: Quadratic convergence using an explicit derivative
//!
//! ## Configuration
//!
//! [`SolverConfig`] configures:
//! - `tolerance`: Convergence tolerance on `|f(x)|` (default: 1e-10)
//! - `max_iterations`: Maximum number of Newton updates (default: 100)
//! - `derivative_floor`: Derivative magnitude below which a step is undefined
//!
//! ## Best-Effort Results
//!
//! Exhausting the iteration budget is not an error. [`NewtonResult`] reports
//! `converged = false` together with the last iterate, so callers can decide
//! whether an approximate answer is acceptable.
//!
//! ## Examples
//!
//! ```
//! use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//!
//! // Solve x² - 2 = 0 (find √2)
//! let solver = NewtonRaphsonSolver::new(SolverConfig::default());
//!
//! let f = |x: f64| x * x - 2.0;
//! let f_prime = |x: f64| 2.0 * x;
//!
//! let result = solver.solve(f, f_prime, 1.0).unwrap();
//! assert!(result.converged);
//! assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

mod config;
mod newton_raphson;

pub use config::SolverConfig;
pub use newton_raphson::{NewtonRaphsonSolver, NewtonResult};
