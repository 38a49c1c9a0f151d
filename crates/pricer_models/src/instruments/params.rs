//! Market parameters with validation.
//!
//! This module provides the validated inputs shared by the analytical,
//! Monte Carlo and implied-volatility pricers.

use pricer_core::types::PricingError;

/// Market inputs of the Black-Scholes-Merton model.
///
/// Spot, strike, maturity and volatility are strictly positive, the dividend
/// yield is non-negative and every field is finite. The rate may take any
/// finite sign.
///
/// # Examples
/// ```
/// use pricer_models::instruments::MarketParameters;
///
/// let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0).unwrap();
/// assert_eq!(params.spot(), 100.0);
///
/// // Zero maturity is rejected
/// assert!(MarketParameters::new(100.0, 100.0, 0.0, 0.05, 0.2, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParameters {
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
    dividend_yield: f64,
}

impl MarketParameters {
    /// Creates new market parameters with validation.
    ///
    /// # Arguments
    /// * `spot` - Current underlying price (S > 0)
    /// * `strike` - Strike price (K > 0)
    /// * `maturity` - Time to expiry in years (T > 0)
    /// * `rate` - Continuously compounded risk-free rate (r)
    /// * `volatility` - Lognormal volatility (σ > 0)
    /// * `dividend_yield` - Continuous dividend yield (q ≥ 0)
    ///
    /// # Errors
    /// `PricingError::InvalidMarketParameters` naming the first offending field.
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
        dividend_yield: f64,
    ) -> Result<Self, PricingError> {
        let params = Self {
            spot,
            strike,
            maturity,
            rate,
            volatility,
            dividend_yield,
        };
        params.validate()?;
        Ok(params)
    }

    /// Re-checks every field.
    ///
    /// Construction already validates; this exists for values that arrive
    /// through deserialisation.
    pub fn validate(&self) -> Result<(), PricingError> {
        check_positive("spot", self.spot)?;
        check_positive("strike", self.strike)?;
        check_positive("maturity", self.maturity)?;
        check_positive("volatility", self.volatility)?;
        check_finite("rate", self.rate)?;
        check_non_negative("dividend_yield", self.dividend_yield)
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Copy with a different spot.
    pub fn with_spot(&self, spot: f64) -> Result<Self, PricingError> {
        check_positive("spot", spot)?;
        Ok(Self { spot, ..*self })
    }

    /// Copy with a different maturity.
    pub fn with_maturity(&self, maturity: f64) -> Result<Self, PricingError> {
        check_positive("maturity", maturity)?;
        Ok(Self { maturity, ..*self })
    }

    /// Copy with a different rate.
    pub fn with_rate(&self, rate: f64) -> Result<Self, PricingError> {
        check_finite("rate", rate)?;
        Ok(Self { rate, ..*self })
    }

    /// Copy with a different volatility.
    pub fn with_volatility(&self, volatility: f64) -> Result<Self, PricingError> {
        check_positive("volatility", volatility)?;
        Ok(Self { volatility, ..*self })
    }

    /// Drops the volatility, leaving the inputs of an implied-volatility solve.
    pub fn without_volatility(&self) -> ImpliedVolInputs {
        ImpliedVolInputs {
            spot: self.spot,
            strike: self.strike,
            maturity: self.maturity,
            rate: self.rate,
            dividend_yield: self.dividend_yield,
        }
    }
}

/// Market parameters minus the volatility, which an implied-volatility
/// solve recovers from an observed price.
///
/// # Examples
/// ```
/// use pricer_models::instruments::ImpliedVolInputs;
///
/// let inputs = ImpliedVolInputs::new(100.0, 100.0, 1.0, 0.05, 0.0).unwrap();
/// let params = inputs.with_volatility(0.2).unwrap();
/// assert_eq!(params.volatility(), 0.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpliedVolInputs {
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    dividend_yield: f64,
}

impl ImpliedVolInputs {
    /// Creates validated inputs; see [`MarketParameters::new`] for the domains.
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        dividend_yield: f64,
    ) -> Result<Self, PricingError> {
        let inputs = Self {
            spot,
            strike,
            maturity,
            rate,
            dividend_yield,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Re-checks every field, as [`MarketParameters::validate`] does.
    pub fn validate(&self) -> Result<(), PricingError> {
        check_positive("spot", self.spot)?;
        check_positive("strike", self.strike)?;
        check_positive("maturity", self.maturity)?;
        check_finite("rate", self.rate)?;
        check_non_negative("dividend_yield", self.dividend_yield)
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Completes the inputs with a volatility.
    pub fn with_volatility(&self, volatility: f64) -> Result<MarketParameters, PricingError> {
        MarketParameters::new(
            self.spot,
            self.strike,
            self.maturity,
            self.rate,
            volatility,
            self.dividend_yield,
        )
    }
}

#[inline]
fn check_positive(parameter: &'static str, value: f64) -> Result<(), PricingError> {
    // Negated comparison also rejects NaN.
    if !(value > 0.0) || !value.is_finite() {
        return Err(PricingError::invalid_parameter(parameter, value));
    }
    Ok(())
}

#[inline]
fn check_non_negative(parameter: &'static str, value: f64) -> Result<(), PricingError> {
    if !(value >= 0.0) || !value.is_finite() {
        return Err(PricingError::invalid_parameter(parameter, value));
    }
    Ok(())
}

#[inline]
fn check_finite(parameter: &'static str, value: f64) -> Result<(), PricingError> {
    if !value.is_finite() {
        return Err(PricingError::invalid_parameter(parameter, value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> MarketParameters {
        MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0).unwrap()
    }

    #[test]
    fn test_new_valid_params() {
        let params = MarketParameters::new(100.0, 95.0, 0.5, -0.01, 0.3, 0.02).unwrap();
        assert_eq!(params.spot(), 100.0);
        assert_eq!(params.strike(), 95.0);
        assert_eq!(params.maturity(), 0.5);
        assert_eq!(params.rate(), -0.01);
        assert_eq!(params.volatility(), 0.3);
        assert_eq!(params.dividend_yield(), 0.02);
    }

    #[test]
    fn test_non_positive_fields_are_rejected() {
        let cases = [
            (MarketParameters::new(0.0, 100.0, 1.0, 0.05, 0.2, 0.0), "spot"),
            (MarketParameters::new(100.0, -5.0, 1.0, 0.05, 0.2, 0.0), "strike"),
            (MarketParameters::new(100.0, 100.0, 0.0, 0.05, 0.2, 0.0), "maturity"),
            (MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.0, 0.0), "volatility"),
        ];
        for (result, expected) in cases {
            match result {
                Err(PricingError::InvalidMarketParameters { parameter, .. }) => {
                    assert_eq!(parameter, expected);
                }
                other => panic!("Expected InvalidMarketParameters, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_negative_dividend_yield_is_rejected() {
        let result = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, -0.01);
        assert!(matches!(
            result,
            Err(PricingError::InvalidMarketParameters {
                parameter: "dividend_yield",
                ..
            })
        ));
    }

    #[test]
    fn test_non_finite_inputs_are_rejected() {
        assert!(MarketParameters::new(f64::NAN, 100.0, 1.0, 0.05, 0.2, 0.0).is_err());
        assert!(MarketParameters::new(100.0, f64::INFINITY, 1.0, 0.05, 0.2, 0.0).is_err());
        assert!(MarketParameters::new(100.0, 100.0, 1.0, f64::NAN, 0.2, 0.0).is_err());
    }

    #[test]
    fn test_with_bumps_keep_other_fields() {
        let params = base();
        let bumped = params.with_spot(101.0).unwrap();
        assert_eq!(bumped.spot(), 101.0);
        assert_eq!(bumped.strike(), params.strike());

        assert_eq!(params.with_maturity(0.99).unwrap().maturity(), 0.99);
        assert_eq!(params.with_rate(0.0501).unwrap().rate(), 0.0501);
        assert_eq!(params.with_volatility(0.202).unwrap().volatility(), 0.202);
    }

    #[test]
    fn test_with_bumps_revalidate() {
        let params = base();
        assert!(params.with_spot(-1.0).is_err());
        assert!(params.with_maturity(0.0).is_err());
        assert!(params.with_volatility(-0.1).is_err());
        assert!(params.with_rate(f64::INFINITY).is_err());
    }

    #[test]
    fn test_implied_vol_inputs_round_trip() {
        let params = base();
        let inputs = params.without_volatility();
        assert_eq!(inputs.with_volatility(0.2).unwrap(), params);
    }

    #[test]
    fn test_implied_vol_inputs_validation() {
        assert!(ImpliedVolInputs::new(100.0, 100.0, -1.0, 0.05, 0.0).is_err());
        assert!(ImpliedVolInputs::new(100.0, 100.0, 1.0, 0.05, 0.0)
            .unwrap()
            .with_volatility(0.0)
            .is_err());
    }
}
