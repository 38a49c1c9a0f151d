//! Pricing façade over the analytical and Monte Carlo pricers.
//!
//! [`PricingEngine`] holds a validated [`PricingConfig`] and exposes the
//! library surface: analytical pricing, Monte Carlo pricing, implied
//! volatility and spot ladders. Each call is independent.

use pricer_core::types::PricingError;
use pricer_models::analytical::{
    self, ImpliedVolatilitySolver, LadderPoint, PricingResult, SolverResult,
};
use pricer_models::instruments::{ImpliedVolInputs, MarketParameters, OptionSpec};

use crate::config::{ConfigError, PricingConfig};
use crate::mc::{price_monte_carlo, MonteCarloResult};

/// Pricing engine with configured defaults.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{MarketParameters, OptionSpec};
/// use pricer_pricing::PricingEngine;
///
/// let engine = PricingEngine::default();
/// let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0).unwrap();
///
/// let analytical = engine.price(&params, OptionSpec::vanilla_call()).unwrap();
/// let iv = engine
///     .implied_volatility(analytical.price, &params.without_volatility(), OptionSpec::vanilla_call())
///     .unwrap();
/// assert!(iv.converged);
/// ```
#[derive(Debug, Clone)]
pub struct PricingEngine {
    config: PricingConfig,
    solver: ImpliedVolatilitySolver,
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self {
            config: PricingConfig::default(),
            solver: ImpliedVolatilitySolver::with_defaults(),
        }
    }
}

impl PricingEngine {
    /// Creates an engine from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the configuration fails
    /// validation.
    pub fn new(config: PricingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let solver = ImpliedVolatilitySolver::new(config.iv_precision, config.iv_max_iterations)
            .map_err(|_| ConfigError::InvalidValue {
                name: "iv_precision",
                reason: "must be positive and finite",
            })?;
        Ok(Self { config, solver })
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Closed-form price and Greeks.
    pub fn price(
        &self,
        params: &MarketParameters,
        spec: OptionSpec,
    ) -> Result<PricingResult, PricingError> {
        analytical::price(params, spec)
    }

    /// Monte Carlo price and Greeks with the configured path count and seed.
    pub fn price_monte_carlo(
        &self,
        params: &MarketParameters,
        spec: OptionSpec,
    ) -> Result<MonteCarloResult, PricingError> {
        price_monte_carlo(params, spec, self.config.mc_paths, self.config.mc_seed)
    }

    /// Monte Carlo price and Greeks with an explicit path count and seed.
    pub fn price_monte_carlo_with(
        &self,
        params: &MarketParameters,
        spec: OptionSpec,
        n_paths: usize,
        seed: Option<u64>,
    ) -> Result<MonteCarloResult, PricingError> {
        price_monte_carlo(params, spec, n_paths, seed)
    }

    /// Implied volatility with the configured precision and iteration cap.
    pub fn implied_volatility(
        &self,
        market_price: f64,
        inputs: &ImpliedVolInputs,
        spec: OptionSpec,
    ) -> Result<SolverResult, PricingError> {
        self.solver.solve(market_price, inputs, spec)
    }

    /// Spot ladder with the configured number of points.
    pub fn spot_ladder(
        &self,
        params: &MarketParameters,
        spec: OptionSpec,
    ) -> Result<Vec<LadderPoint>, PricingError> {
        analytical::spot_ladder(params, spec, self.config.ladder_points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::ErrorKind;

    fn params() -> MarketParameters {
        MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = PricingConfig {
            ladder_points: 0,
            ..Default::default()
        };
        assert!(PricingEngine::new(config).is_err());
    }

    #[test]
    fn test_monte_carlo_uses_configured_paths_and_seed() {
        let engine = PricingEngine::new(PricingConfig {
            mc_paths: 3_000,
            mc_seed: Some(5),
            ..Default::default()
        })
        .unwrap();

        let result = engine.price_monte_carlo(&params(), OptionSpec::vanilla_call()).unwrap();
        assert_eq!(result.n_paths, 3_000);
        assert_eq!(result.seed, Some(5));
        assert_eq!(
            result,
            engine
                .price_monte_carlo_with(&params(), OptionSpec::vanilla_call(), 3_000, Some(5))
                .unwrap()
        );
    }

    #[test]
    fn test_ladder_uses_configured_points() {
        let engine = PricingEngine::new(PricingConfig {
            ladder_points: 7,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(engine.spot_ladder(&params(), OptionSpec::digital_put()).unwrap().len(), 7);
    }

    #[test]
    fn test_implied_volatility_budget_from_config() {
        let engine = PricingEngine::new(PricingConfig {
            iv_precision: 1e-14,
            iv_max_iterations: 1,
            ..Default::default()
        })
        .unwrap();

        let market = engine.price(&params(), OptionSpec::vanilla_call()).unwrap().price;
        let result = engine
            .implied_volatility(market, &params().without_volatility(), OptionSpec::vanilla_call())
            .unwrap();
        assert!(!result.converged);
    }

    #[test]
    fn test_errors_surface_by_kind() {
        let engine = PricingEngine::default();
        let err = engine
            .price_monte_carlo_with(&params(), OptionSpec::vanilla_call(), 0, None)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSampleSize);

        let err = engine
            .implied_volatility(0.3, &params().without_volatility(), OptionSpec::digital_call())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOptionSpec);
    }

    #[test]
    fn test_deserialized_inputs_are_revalidated() {
        let engine = PricingEngine::default();
        let spec = OptionSpec::vanilla_call();

        let inputs: ImpliedVolInputs = toml::from_str(
            "spot = -100.0\nstrike = 100.0\nmaturity = 1.0\nrate = 0.05\ndividend_yield = 0.0\n",
        )
        .unwrap();
        let err = engine.implied_volatility(10.0, &inputs, spec).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMarketParameters);
        assert_eq!(err, PricingError::invalid_parameter("spot", -100.0));

        let params: MarketParameters = toml::from_str(
            "spot = 100.0\nstrike = 100.0\nmaturity = 0.0\nrate = 0.05\n\
             volatility = 0.2\ndividend_yield = 0.0\n",
        )
        .unwrap();
        for err in [
            engine.price(&params, spec).unwrap_err(),
            engine.price_monte_carlo_with(&params, spec, 100, Some(1)).unwrap_err(),
            engine.spot_ladder(&params, spec).unwrap_err(),
        ] {
            assert_eq!(err, PricingError::invalid_parameter("maturity", 0.0));
        }
    }
}
