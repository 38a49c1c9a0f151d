//! Monte Carlo pricing engine.
//!
//! This module provides the orchestration layer for Monte Carlo pricing of
//! European vanilla and digital options under geometric Brownian motion.
//!
//! # Overview
//!
//! For every call the [`MonteCarloPricer`]:
//! 1. Draws `M` standard normals once from a fresh [`PricerRng`]
//! 2. Maps each draw to a terminal price under the base and the five bumped
//!    scenarios (see [`scenario`](super::scenario))
//! 3. Differences the discounted payoffs path by path (common random numbers)
//! 4. Aggregates every estimator into a mean and standard error
//!
//! Draws are never shared between calls.

use pricer_core::types::PricingError;
use pricer_models::instruments::{MarketParameters, OptionSpec};
use tracing::{debug, debug_span};

use super::config::MonteCarloConfig;
use super::error::ConfigError;
use super::result::MonteCarloResult;
use super::scenario::{
    BumpScenario, PathModel, MATURITY_BUMP, RATE_BUMP, SPOT_BUMP, VOL_BUMP,
};
use super::stats::{Estimate, SampleStats};
use crate::rng::PricerRng;

/// Monte Carlo pricing engine.
///
/// Stateless apart from its configuration: each pricing call seeds its own
/// generator, so calls are independent and a shared pricer can be used from
/// several threads.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{MarketParameters, OptionSpec};
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(50_000)
///     .seed(42)
///     .build()
///     .unwrap();
/// let pricer = MonteCarloPricer::new(config).unwrap();
///
/// let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0).unwrap();
/// let result = pricer.price(&params, OptionSpec::vanilla_call()).unwrap();
///
/// assert!((result.price.value - 10.4506).abs() < 4.0 * result.price.std_error);
/// ```
#[derive(Debug, Clone)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
}

impl MonteCarloPricer {
    /// Creates a new pricer with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration is invalid.
    pub fn new(config: MonteCarloConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    fn rng(&self) -> PricerRng {
        match self.config.seed() {
            Some(seed) => PricerRng::from_seed(seed),
            None => PricerRng::from_entropy(),
        }
    }

    /// Prices the option and estimates all Greeks from one set of draws.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidMarketParameters` if `params` fail
    /// validation.
    pub fn price(
        &self,
        params: &MarketParameters,
        spec: OptionSpec,
    ) -> Result<MonteCarloResult, PricingError> {
        params.validate()?;

        let mut rng = self.rng();
        let seed = rng.seed();
        let span = debug_span!("monte_carlo", n_paths = self.config.n_paths(), seed, %spec);
        let _enter = span.enter();

        debug!("drawing normals");
        let normals = rng.normals(self.config.n_paths());
        let result = simulate(params, spec, &normals, Some(seed))?;

        debug!(
            price = result.price.value,
            std_error = result.price.std_error,
            "Monte Carlo run complete"
        );
        Ok(result)
    }

    /// Prices the option without the bumped scenarios.
    ///
    /// Consumes the same draws as [`price`](Self::price) for the same seed,
    /// so the two price estimates are identical.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidMarketParameters` if `params` fail
    /// validation.
    pub fn price_only(
        &self,
        params: &MarketParameters,
        spec: OptionSpec,
    ) -> Result<Estimate, PricingError> {
        params.validate()?;

        let mut rng = self.rng();
        let model = PathModel::new(params);
        let mut stats = SampleStats::default();
        for _ in 0..self.config.n_paths() {
            stats.push(model.discounted_payoff(rng.gen_normal(), spec));
        }
        finish(&stats)
    }

    /// Prices the option with caller-supplied standard normal draws.
    ///
    /// `M` is `normals.len()`; the configured path count and seed are not
    /// used, and the result carries no seed.
    ///
    /// # Errors
    ///
    /// - `PricingError::InvalidSampleSize` if `normals` is empty
    /// - `PricingError::InvalidMarketParameters` if `params` fail validation
    pub fn price_with_normals(
        &self,
        params: &MarketParameters,
        spec: OptionSpec,
        normals: &[f64],
    ) -> Result<MonteCarloResult, PricingError> {
        params.validate()?;
        simulate(params, spec, normals, None)
    }
}

/// Prices `spec` with `n_paths` draws, seeded from `seed` or from entropy.
///
/// # Errors
///
/// - `PricingError::InvalidSampleSize` if `n_paths` is 0
/// - `PricingError::InvalidMarketParameters` if `params` fail validation
pub fn price_monte_carlo(
    params: &MarketParameters,
    spec: OptionSpec,
    n_paths: usize,
    seed: Option<u64>,
) -> Result<MonteCarloResult, PricingError> {
    let config = MonteCarloConfig::builder()
        .n_paths(n_paths)
        .maybe_seed(seed)
        .build()?;
    MonteCarloPricer::new(config)?.price(params, spec)
}

fn simulate(
    params: &MarketParameters,
    spec: OptionSpec,
    normals: &[f64],
    seed: Option<u64>,
) -> Result<MonteCarloResult, PricingError> {
    if normals.is_empty() {
        return Err(PricingError::InvalidSampleSize(0));
    }

    let base = PathModel::new(params);
    let spot_up = PathModel::new(&BumpScenario::SpotUp.apply(params)?);
    let spot_down = PathModel::new(&BumpScenario::SpotDown.apply(params)?);
    let vol_up = PathModel::new(&BumpScenario::VolUp.apply(params)?);
    let maturity_down = PathModel::new(&BumpScenario::MaturityDown.apply(params)?);
    let rate_up = PathModel::new(&BumpScenario::RateUp.apply(params)?);

    let eps_spot = params.spot() * SPOT_BUMP;
    let eps_vol = params.volatility() * VOL_BUMP;
    let eps_maturity = params.maturity() * MATURITY_BUMP;

    let mut price = SampleStats::default();
    let mut delta = SampleStats::default();
    let mut gamma = SampleStats::default();
    let mut vega = SampleStats::default();
    let mut theta = SampleStats::default();
    let mut rho = SampleStats::default();

    for &z in normals {
        let v = base.discounted_payoff(z, spec);
        let v_up = spot_up.discounted_payoff(z, spec);
        let v_down = spot_down.discounted_payoff(z, spec);

        price.push(v);
        delta.push((v_up - v_down) / (2.0 * eps_spot));
        gamma.push((v_up - 2.0 * v + v_down) / (eps_spot * eps_spot));
        vega.push((vol_up.discounted_payoff(z, spec) - v) / eps_vol);
        theta.push((maturity_down.discounted_payoff(z, spec) - v) / eps_maturity);
        rho.push((rate_up.discounted_payoff(z, spec) - v) / RATE_BUMP);
    }

    Ok(MonteCarloResult {
        price: finish(&price)?,
        delta: finish(&delta)?,
        vega: finish(&vega)?,
        gamma: finish(&gamma)?,
        theta: finish(&theta)?,
        rho: finish(&rho)?,
        n_paths: normals.len(),
        seed,
    })
}

#[inline]
fn finish(stats: &SampleStats) -> Result<Estimate, PricingError> {
    stats.estimate().ok_or(PricingError::InvalidSampleSize(0))
}
