//! Option and market parameter definitions.
//!
//! This module provides the value types every pricer consumes:
//! - [`OptionSpec`]: Style (vanilla / digital) and side (call / put)
//! - [`MarketParameters`]: Spot, strike, maturity, rate, volatility, dividend yield
//! - [`ImpliedVolInputs`]: Market parameters without a volatility
//!
//! All types are immutable `Copy` values; bumped variants are derived with
//! the `with_*` constructors, which re-validate.
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{MarketParameters, OptionSpec};
//!
//! let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0).unwrap();
//! let spec: OptionSpec = "vanilla call".parse().unwrap();
//!
//! assert_eq!(spec.payoff(110.0, params.strike()), 10.0);
//! ```

mod option_spec;
mod params;

pub use option_spec::{OptionSide, OptionSpec, OptionStyle};
pub use params::{ImpliedVolInputs, MarketParameters};
