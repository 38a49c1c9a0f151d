//! # Pricer Models (L2: Business Logic)
//!
//! Option definitions and closed-form Black-Scholes-Merton pricing.
//!
//! This crate provides:
//! - Validated market parameters and option specifications
//! - Standard normal CDF/PDF
//! - Analytical prices and Greeks for vanilla and digital options
//! - Implied volatility recovery
//! - Spot ladders for Greek profiles
//!
//! ## Design Principles
//!
//! - **Immutable value types** passed by copy between pure functions
//! - **Enum-based option specs** so unsupported combinations cannot be built
//! - **String parsing** as the single place `InvalidOptionSpec` can arise
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_models::analytical::{implied_volatility, price};
//! use pricer_models::instruments::{MarketParameters, OptionSpec};
//!
//! let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0).unwrap();
//! let spec: OptionSpec = "vanilla call".parse().unwrap();
//!
//! let result = price(&params, spec).unwrap();
//! let iv = implied_volatility(result.price, &params.without_volatility(), spec, 1e-5, 100).unwrap();
//! assert!((iv.sigma - 0.2).abs() < 1e-4);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for value and result types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
