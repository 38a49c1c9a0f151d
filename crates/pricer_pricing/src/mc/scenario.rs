//! Bumped market scenarios for finite-difference Greeks.
//!
//! Every scenario reprices the same draws under a perturbed copy of the
//! market parameters. Sizes:
//!
//! | Scenario       | Perturbation       |
//! |----------------|--------------------|
//! | `SpotUp`       | `S · (1 + 1%)`     |
//! | `SpotDown`     | `S · (1 - 1%)`     |
//! | `VolUp`        | `σ · (1 + 1%)`     |
//! | `MaturityDown` | `T · (1 - 1%)`     |
//! | `RateUp`       | `r + 1e-4`         |

use pricer_core::types::PricingError;
use pricer_models::instruments::{MarketParameters, OptionSpec};

/// Relative spot bump for delta and gamma.
pub const SPOT_BUMP: f64 = 0.01;

/// Relative volatility bump for vega.
pub const VOL_BUMP: f64 = 0.01;

/// Relative maturity bump for theta.
pub const MATURITY_BUMP: f64 = 0.01;

/// Absolute rate bump for rho (one basis point).
pub const RATE_BUMP: f64 = 1e-4;

/// Market scenario evaluated on every path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BumpScenario {
    /// Unperturbed parameters.
    Base,
    /// Spot bumped up by [`SPOT_BUMP`].
    SpotUp,
    /// Spot bumped down by [`SPOT_BUMP`].
    SpotDown,
    /// Volatility bumped up by [`VOL_BUMP`].
    VolUp,
    /// Maturity shortened by [`MATURITY_BUMP`].
    MaturityDown,
    /// Rate bumped up by [`RATE_BUMP`].
    RateUp,
}

impl BumpScenario {
    /// All scenarios, in evaluation order.
    pub const ALL: [BumpScenario; 6] = [
        BumpScenario::Base,
        BumpScenario::SpotUp,
        BumpScenario::SpotDown,
        BumpScenario::VolUp,
        BumpScenario::MaturityDown,
        BumpScenario::RateUp,
    ];

    /// Returns the perturbed parameters for this scenario.
    ///
    /// # Errors
    ///
    /// Propagates validation of the bumped parameters; bumps of valid
    /// parameters stay inside the valid domain.
    pub fn apply(self, params: &MarketParameters) -> Result<MarketParameters, PricingError> {
        match self {
            BumpScenario::Base => Ok(*params),
            BumpScenario::SpotUp => params.with_spot(params.spot() * (1.0 + SPOT_BUMP)),
            BumpScenario::SpotDown => params.with_spot(params.spot() * (1.0 - SPOT_BUMP)),
            BumpScenario::VolUp => params.with_volatility(params.volatility() * (1.0 + VOL_BUMP)),
            BumpScenario::MaturityDown => {
                params.with_maturity(params.maturity() * (1.0 - MATURITY_BUMP))
            }
            BumpScenario::RateUp => params.with_rate(params.rate() + RATE_BUMP),
        }
    }
}

/// Per-scenario constants of the terminal-price map
/// `S_T = S · exp(drift_t + vol_sqrt_t · z)`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PathModel {
    spot: f64,
    strike: f64,
    drift_t: f64,
    vol_sqrt_t: f64,
    discount: f64,
}

impl PathModel {
    pub(crate) fn new(params: &MarketParameters) -> Self {
        let t = params.maturity();
        let sigma = params.volatility();
        Self {
            spot: params.spot(),
            strike: params.strike(),
            drift_t: (params.rate() - params.dividend_yield() - 0.5 * sigma * sigma) * t,
            vol_sqrt_t: sigma * t.sqrt(),
            discount: (-params.rate() * t).exp(),
        }
    }

    #[inline]
    pub(crate) fn terminal(&self, z: f64) -> f64 {
        self.spot * (self.drift_t + self.vol_sqrt_t * z).exp()
    }

    /// Payoff at `z`, discounted at this scenario's own rate and maturity.
    #[inline]
    pub(crate) fn discounted_payoff(&self, z: f64, spec: OptionSpec) -> f64 {
        self.discount * spec.payoff(self.terminal(z), self.strike)
    }
}
