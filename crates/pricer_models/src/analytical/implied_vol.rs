//! Implied volatility by Newton-Raphson inversion of the analytical price.
//!
//! Starting from σ₀ = 0.1 the solver iterates
//! `σ ← σ + (market - price(σ)) / vega(σ)` until `|market - price(σ)|`
//! drops below the precision. Exhausting the iteration budget is not an
//! error: the last iterate comes back with `converged = false`. A vanishing
//! vega is an error, since the update would divide by zero.

use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
use pricer_core::types::{PricingError, SolverError};
use tracing::{debug, trace, warn};

use super::black_scholes::BlackScholesMerton;
use crate::instruments::{ImpliedVolInputs, OptionSpec, OptionStyle};

/// Starting volatility of every solve.
pub const INITIAL_SIGMA: f64 = 0.1;

/// Outcome of an implied-volatility solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverResult {
    /// Final volatility estimate
    pub sigma: f64,
    /// Whether the price was matched within the precision
    pub converged: bool,
    /// Newton updates performed
    pub iterations: usize,
}

/// Newton-Raphson implied-volatility solver for vanilla options.
///
/// # Examples
/// ```
/// use pricer_models::analytical::{price, ImpliedVolatilitySolver};
/// use pricer_models::instruments::{MarketParameters, OptionSpec};
///
/// let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.25, 0.0).unwrap();
/// let market = price(&params, OptionSpec::vanilla_call()).unwrap().price;
///
/// let solver = ImpliedVolatilitySolver::with_defaults();
/// let result = solver
///     .solve(market, &params.without_volatility(), OptionSpec::vanilla_call())
///     .unwrap();
///
/// assert!(result.converged);
/// assert!((result.sigma - 0.25).abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct ImpliedVolatilitySolver {
    solver: NewtonRaphsonSolver<f64>,
}

impl ImpliedVolatilitySolver {
    /// Creates a solver with precision `1e-5`, 100 iterations and a vega floor of `1e-12`.
    pub fn with_defaults() -> Self {
        Self {
            solver: NewtonRaphsonSolver::new(SolverConfig::implied_volatility()),
        }
    }

    /// Creates a solver with a custom price precision and iteration budget.
    ///
    /// # Errors
    /// `PricingError::InvalidMarketParameters` naming `precision` when it is
    /// not positive and finite, or `max_iterations` when it is zero.
    pub fn new(precision: f64, max_iterations: usize) -> Result<Self, PricingError> {
        let defaults = SolverConfig::<f64>::implied_volatility();
        let config = SolverConfig::new(precision, max_iterations)
            .map_err(to_pricing_error)?
            .with_derivative_floor(defaults.derivative_floor);

        Ok(Self {
            solver: NewtonRaphsonSolver::new(config),
        })
    }

    /// Returns the underlying solver configuration.
    pub fn config(&self) -> &SolverConfig<f64> {
        self.solver.config()
    }

    /// Recovers the volatility that reproduces `market_price`.
    ///
    /// # Errors
    /// - `PricingError::InvalidOptionSpec` for digital specs
    /// - `PricingError::InvalidMarketParameters` for a non-finite market price
    ///   or inputs outside their domain
    /// - `PricingError::DegenerateVega` when `|vega| < 1e-12` before convergence
    pub fn solve(
        &self,
        market_price: f64,
        inputs: &ImpliedVolInputs,
        spec: OptionSpec,
    ) -> Result<SolverResult, PricingError> {
        if spec.style != OptionStyle::Vanilla {
            return Err(PricingError::InvalidOptionSpec(format!(
                "implied volatility is only defined for vanilla options, got {}",
                spec
            )));
        }
        if !market_price.is_finite() {
            return Err(PricingError::invalid_parameter("market_price", market_price));
        }
        inputs.validate()?;

        debug!(
            market_price,
            spot = inputs.spot(),
            strike = inputs.strike(),
            maturity = inputs.maturity(),
            %spec,
            "Solving implied volatility"
        );

        // Inputs are validated and σ stays strictly positive inside the
        // solver domain, so the NaN fallback is unreachable.
        let model = |sigma: f64| -> Option<BlackScholesMerton> {
            inputs
                .with_volatility(sigma)
                .and_then(BlackScholesMerton::new)
                .ok()
        };

        let residual = |sigma: f64| match model(sigma) {
            Some(bsm) => {
                let diff = bsm.price(spec) - market_price;
                trace!(sigma, diff = -diff, "implied volatility iteration");
                diff
            }
            None => f64::NAN,
        };
        let vega = |sigma: f64| model(sigma).map_or(f64::NAN, |bsm| bsm.vega(spec));

        let outcome = self
            .solver
            .solve_within(residual, vega, INITIAL_SIGMA, |sigma| sigma > 0.0)
            .map_err(to_pricing_error)?;

        let result = SolverResult {
            sigma: outcome.root,
            converged: outcome.converged,
            iterations: outcome.iterations,
        };

        if result.converged {
            debug!(
                sigma = result.sigma,
                iterations = result.iterations,
                "Implied volatility converged"
            );
        } else {
            warn!(
                sigma = result.sigma,
                iterations = result.iterations,
                residual = outcome.residual,
                "Implied volatility did not converge; returning best estimate"
            );
        }

        Ok(result)
    }
}

fn to_pricing_error(err: SolverError) -> PricingError {
    match err {
        SolverError::DerivativeNearZero { x, derivative } => PricingError::DegenerateVega {
            sigma: x,
            vega: derivative,
        },
        SolverError::InvalidTolerance(tolerance) => {
            PricingError::invalid_parameter("precision", tolerance)
        }
        SolverError::InvalidMaxIterations(n) => {
            PricingError::invalid_parameter("max_iterations", n as f64)
        }
    }
}

impl Default for ImpliedVolatilitySolver {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Recovers the implied volatility of a vanilla option.
///
/// # Arguments
/// * `market_price` - Observed option price
/// * `inputs` - Market parameters without volatility
/// * `spec` - Vanilla call or put
/// * `precision` - Price tolerance (default `1e-5`)
/// * `max_iterations` - Newton iteration budget (default `100`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::implied_volatility;
/// use pricer_models::instruments::{ImpliedVolInputs, OptionSpec};
///
/// let inputs = ImpliedVolInputs::new(100.0, 100.0, 1.0, 0.05, 0.0).unwrap();
/// let result = implied_volatility(10.4506, &inputs, OptionSpec::vanilla_call(), 1e-5, 100).unwrap();
/// assert!((result.sigma - 0.2).abs() < 1e-4);
/// ```
pub fn implied_volatility(
    market_price: f64,
    inputs: &ImpliedVolInputs,
    spec: OptionSpec,
    precision: f64,
    max_iterations: usize,
) -> Result<SolverResult, PricingError> {
    ImpliedVolatilitySolver::new(precision, max_iterations)?.solve(market_price, inputs, spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::price;
    use crate::instruments::MarketParameters;
    use approx::assert_relative_eq;
    use pricer_core::types::ErrorKind;

    fn atm_inputs() -> ImpliedVolInputs {
        ImpliedVolInputs::new(100.0, 100.0, 1.0, 0.05, 0.0).unwrap()
    }

    // ==========================================================
    // Convergence
    // ==========================================================

    #[test]
    fn test_recovers_reference_volatility() {
        let result = implied_volatility(
            10.450584,
            &atm_inputs(),
            OptionSpec::vanilla_call(),
            1e-5,
            100,
        )
        .unwrap();
        assert!(result.converged);
        assert_relative_eq!(result.sigma, 0.2, epsilon = 1e-4);
        assert!(result.iterations > 0);
    }

    #[test]
    fn test_put_round_trip_with_dividends() {
        let params = MarketParameters::new(95.0, 100.0, 0.5, 0.03, 0.35, 0.02).unwrap();
        let market = price(&params, OptionSpec::vanilla_put()).unwrap().price;
        let result = ImpliedVolatilitySolver::with_defaults()
            .solve(market, &params.without_volatility(), OptionSpec::vanilla_put())
            .unwrap();
        assert!(result.converged);
        assert_relative_eq!(result.sigma, 0.35, epsilon = 1e-4);
    }

    #[test]
    fn test_market_price_at_initial_guess_needs_no_update() {
        let params = atm_inputs().with_volatility(INITIAL_SIGMA).unwrap();
        let market = price(&params, OptionSpec::vanilla_call()).unwrap().price;
        let result = ImpliedVolatilitySolver::with_defaults()
            .solve(market, &atm_inputs(), OptionSpec::vanilla_call())
            .unwrap();
        assert!(result.converged);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.sigma, INITIAL_SIGMA);
    }

    // ==========================================================
    // Best effort and failures
    // ==========================================================

    #[test]
    fn test_iteration_budget_exhausted_is_not_an_error() {
        let result = implied_volatility(
            10.450584,
            &atm_inputs(),
            OptionSpec::vanilla_call(),
            1e-14,
            1,
        )
        .unwrap();
        assert!(!result.converged);
        assert_eq!(result.iterations, 1);
        assert!(result.sigma > INITIAL_SIGMA);
    }

    #[test]
    fn test_unreachable_price_stops_with_last_positive_sigma() {
        // Below the intrinsic floor: Newton pushes σ negative on the first step
        let result = implied_volatility(1.0, &atm_inputs(), OptionSpec::vanilla_call(), 1e-5, 100)
            .unwrap();
        assert!(!result.converged);
        assert!(result.sigma > 0.0);
    }

    #[test]
    fn test_degenerate_vega() {
        let inputs = ImpliedVolInputs::new(200.0, 100.0, 0.01, 0.05, 0.0).unwrap();
        let err = implied_volatility(105.0, &inputs, OptionSpec::vanilla_call(), 1e-5, 100)
            .unwrap_err();
        match err {
            PricingError::DegenerateVega { sigma, vega } => {
                assert_eq!(sigma, INITIAL_SIGMA);
                assert!(vega.abs() < 1e-12);
            }
            other => panic!("Expected DegenerateVega, got {:?}", other),
        }
    }

    #[test]
    fn test_digital_spec_is_rejected() {
        let err = implied_volatility(0.5, &atm_inputs(), OptionSpec::digital_call(), 1e-5, 100)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOptionSpec);
    }

    #[test]
    fn test_invalid_solver_settings() {
        let spec = OptionSpec::vanilla_call();
        assert!(matches!(
            implied_volatility(10.0, &atm_inputs(), spec, 0.0, 100),
            Err(PricingError::InvalidMarketParameters {
                parameter: "precision",
                ..
            })
        ));
        assert!(matches!(
            implied_volatility(10.0, &atm_inputs(), spec, f64::INFINITY, 100),
            Err(PricingError::InvalidMarketParameters {
                parameter: "precision",
                ..
            })
        ));
        assert!(matches!(
            implied_volatility(10.0, &atm_inputs(), spec, 1e-5, 0),
            Err(PricingError::InvalidMarketParameters {
                parameter: "max_iterations",
                ..
            })
        ));
        assert!(matches!(
            implied_volatility(f64::NAN, &atm_inputs(), spec, 1e-5, 100),
            Err(PricingError::InvalidMarketParameters {
                parameter: "market_price",
                ..
            })
        ));
    }

    #[test]
    fn test_default_config() {
        let solver = ImpliedVolatilitySolver::default();
        assert_eq!(solver.config().tolerance, 1e-5);
        assert_eq!(solver.config().max_iterations, 100);
    }
}
