//! Monte Carlo pricing with common random numbers.
//!
//! This module provides the Monte Carlo estimator for European vanilla and
//! digital options, with finite-difference Greeks taken from the same draws
//! as the price.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig  (path count, optional seed)
//! ├── PricerRng         (fresh per call)
//! └── simulate()
//!     ├── PathModel × 6   (base + bumped scenarios)
//!     └── SampleStats × 6 (price, delta, gamma, vega, theta, rho)
//! ```
//!
//! # Common Random Numbers
//!
//! Each draw `z` is mapped to a terminal price under all six scenarios and
//! the Greek estimators are differenced per path before averaging:
//!
//! | Greek | Per-path estimator                         |
//! |-------|--------------------------------------------|
//! | delta | `(v_up - v_down) / (2 ε_S)`                |
//! | gamma | `(v_up - 2 v + v_down) / ε_S²`             |
//! | vega  | `(v_σ - v) / ε_σ`                          |
//! | theta | `(v_T - v) / ε_T`                          |
//! | rho   | `(v_r - v) / ε_r`                          |
//!
//! # Examples
//!
//! ```rust
//! use pricer_models::instruments::{MarketParameters, OptionSpec};
//! use pricer_pricing::mc::price_monte_carlo;
//!
//! let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0).unwrap();
//! let result = price_monte_carlo(&params, OptionSpec::digital_call(), 10_000, Some(42)).unwrap();
//!
//! println!("Price: {:.4} +/- {:.4}", result.price.value, result.price.confidence_95());
//! println!("Delta: {:.4} +/- {:.4}", result.delta.value, result.delta.confidence_95());
//! ```

pub mod config;
pub mod error;
pub mod pricer;
pub mod result;
pub mod scenario;
pub mod stats;

// Re-exports for convenient access
pub use config::{MonteCarloConfig, MonteCarloConfigBuilder};
pub use error::ConfigError;
pub use pricer::{price_monte_carlo, MonteCarloPricer};
pub use result::MonteCarloResult;
pub use scenario::BumpScenario;
pub use stats::Estimate;
