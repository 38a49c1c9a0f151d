//! # pricer_core: Foundation Layer for Option Pricing
//!
//! ## Layer 1 Role
//!
//! pricer_core is the bottom layer of the pricing workspace, providing:
//! - The pricing error taxonomy (`types::error`)
//! - Root-finding infrastructure (`math::solvers`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//! use pricer_core::types::{ErrorKind, PricingError};
//!
//! // Solve x² - 2 = 0
//! let solver = NewtonRaphsonSolver::new(SolverConfig::default());
//! let result = solver.solve(|x: f64| x * x - 2.0, |x: f64| 2.0 * x, 1.0).unwrap();
//! assert!(result.converged);
//! # assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
//!
//! let err = PricingError::InvalidSampleSize(0);
//! assert_eq!(err.kind(), ErrorKind::InvalidSampleSize);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
