//! # Pricer Pricing (Layer 3: Simulation Engine)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing is the simulation and library-surface layer of the
//! workspace:
//! - Seeded random number generation with replayable seeds
//! - Monte Carlo pricing with finite-difference Greeks on common random numbers
//! - Engine configuration from TOML files and `PRICER_*` environment variables
//! - The [`PricingEngine`] façade over analytical pricing, Monte Carlo
//!   pricing, implied volatility and spot ladders
//!
//! ## Layer Integration
//!
//! - Layer 1 (pricer_core): `PricingError` taxonomy, Newton-Raphson solver
//! - Layer 2 (pricer_models): `MarketParameters`, `OptionSpec`, closed-form
//!   pricing and implied volatility
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::analytical::price;
//! use pricer_models::instruments::{MarketParameters, OptionSpec};
//! use pricer_pricing::mc::price_monte_carlo;
//!
//! let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0).unwrap();
//! let spec = OptionSpec::vanilla_call();
//!
//! let exact = price(&params, spec).unwrap();
//! let simulated = price_monte_carlo(&params, spec, 100_000, Some(42)).unwrap();
//!
//! assert!(simulated.price.within(exact.price, 4.0));
//! ```
//!
//! ## Logging
//!
//! Monte Carlo runs emit `tracing` events under a `monte_carlo` span at
//! `debug` level. No subscriber is installed by this crate.
//!
//! ## Serialisation
//!
//! Results and value types from every layer implement `serde` traits here;
//! the `serde` features of pricer_core and pricer_models are enabled.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod engine;
pub mod mc;
pub mod rng;

pub use config::PricingConfig;
pub use engine::PricingEngine;
pub use mc::{price_monte_carlo, MonteCarloPricer, MonteCarloResult};
