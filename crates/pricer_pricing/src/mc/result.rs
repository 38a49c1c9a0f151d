//! Monte Carlo pricing result.

use pricer_models::analytical::PricingResult;
use serde::{Deserialize, Serialize};

use super::stats::Estimate;

/// Monte Carlo price and Greeks, each paired with its standard error.
///
/// `seed` is the seed the draws were generated from; it is `None` only when
/// the caller supplied the draws directly.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{MarketParameters, OptionSpec};
/// use pricer_pricing::mc::price_monte_carlo;
///
/// let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0).unwrap();
/// let result = price_monte_carlo(&params, OptionSpec::vanilla_call(), 20_000, Some(7)).unwrap();
///
/// println!("Price: {} +/- {}", result.price.value, result.price.confidence_95());
/// assert_eq!(result.seed, Some(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloResult {
    /// Discounted expected payoff.
    pub price: Estimate,
    /// Central spot difference.
    pub delta: Estimate,
    /// Forward volatility difference.
    pub vega: Estimate,
    /// Central second spot difference.
    pub gamma: Estimate,
    /// Change under a shortened maturity.
    pub theta: Estimate,
    /// Forward rate difference.
    pub rho: Estimate,
    /// Number of draws (M).
    pub n_paths: usize,
    /// Seed the draws were generated from.
    pub seed: Option<u64>,
}

impl MonteCarloResult {
    /// Point estimates without their standard errors.
    pub fn values(&self) -> PricingResult {
        PricingResult {
            price: self.price.value,
            delta: self.delta.value,
            vega: self.vega.value,
            gamma: self.gamma.value,
            theta: self.theta.value,
            rho: self.rho.value,
        }
    }
}
