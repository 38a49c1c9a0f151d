//! Black-Scholes-Merton pricing model for European options.
//!
//! This module provides closed-form prices and Greeks for vanilla and
//! cash-or-nothing digital European options on an asset paying a continuous
//! dividend yield.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//! **Digital Call**: e^(-rT)·N(d₂)
//! **Digital Put**: e^(-rT)·N(-d₂)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! Digital Greeks are driven by φ(d₂) rather than φ(d₁), since the payoff
//! depends only on the terminal-price indicator.

use pricer_core::types::PricingError;

use super::distributions::{norm_cdf, norm_pdf};
use crate::instruments::{MarketParameters, OptionSide, OptionSpec, OptionStyle};

/// Price and first-order sensitivities of one option.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Present value
    pub price: f64,
    /// ∂V/∂S
    pub delta: f64,
    /// ∂V/∂σ
    pub vega: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// Time decay (negative of ∂V/∂T for vanilla options)
    pub theta: f64,
    /// ∂V/∂r
    pub rho: f64,
}

/// Intermediate quantities shared by the price and every Greek.
#[derive(Debug, Clone, Copy)]
struct Terms {
    d1: f64,
    d2: f64,
    sqrt_t: f64,
    /// e^(-rT)
    discount: f64,
    /// e^(-qT)
    dividend_discount: f64,
}

/// Black-Scholes-Merton analytical pricer.
///
/// Holds a validated set of [`MarketParameters`]; every method is a pure
/// function of them and the requested [`OptionSpec`].
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholesMerton;
/// use pricer_models::instruments::{MarketParameters, OptionSpec};
///
/// let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0).unwrap();
/// let bsm = BlackScholesMerton::new(params).unwrap();
///
/// let call = bsm.price(OptionSpec::vanilla_call());
/// assert!((call - 10.4506).abs() < 1e-4);
///
/// // Put-call parity: C - P = S·e^(-qT) - K·e^(-rT)
/// let (c, p) = bsm.price_call_put();
/// assert!((c - p - (100.0 - 100.0 * (-0.05_f64).exp())).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholesMerton {
    params: MarketParameters,
}

impl BlackScholesMerton {
    /// Creates a pricer for the given market.
    ///
    /// # Errors
    /// `PricingError::InvalidMarketParameters` if any field is outside its
    /// domain (relevant for values that bypassed [`MarketParameters::new`]).
    pub fn new(params: MarketParameters) -> Result<Self, PricingError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Returns the market parameters.
    #[inline]
    pub fn params(&self) -> &MarketParameters {
        &self.params
    }

    /// Computes the d1 term.
    ///
    /// d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self) -> f64 {
        let p = &self.params;
        let vol_sqrt_t = p.volatility() * p.maturity().sqrt();
        let drift = (p.rate() - p.dividend_yield() + 0.5 * p.volatility() * p.volatility())
            * p.maturity();

        ((p.spot() / p.strike()).ln() + drift) / vol_sqrt_t
    }

    /// Computes the d2 term.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d1() - self.params.volatility() * self.params.maturity().sqrt()
    }

    #[inline]
    fn terms(&self) -> Terms {
        let p = &self.params;
        let d1 = self.d1();
        let sqrt_t = p.maturity().sqrt();
        Terms {
            d1,
            d2: d1 - p.volatility() * sqrt_t,
            sqrt_t,
            discount: (-p.rate() * p.maturity()).exp(),
            dividend_discount: (-p.dividend_yield() * p.maturity()).exp(),
        }
    }

    /// Computes the option price.
    #[inline]
    pub fn price(&self, spec: OptionSpec) -> f64 {
        self.price_with(&self.terms(), spec)
    }

    /// Vanilla call and put prices from a single d1/d2 evaluation.
    ///
    /// # Returns
    /// `(call, put)`
    pub fn price_call_put(&self) -> (f64, f64) {
        let terms = self.terms();
        (
            self.price_with(&terms, OptionSpec::vanilla_call()),
            self.price_with(&terms, OptionSpec::vanilla_put()),
        )
    }

    /// Computes Delta.
    ///
    /// - Vanilla: N(d₁) for calls, N(d₁) - 1 for puts
    /// - Digital: ±φ(d₂) / (S·σ·√T)
    #[inline]
    pub fn delta(&self, spec: OptionSpec) -> f64 {
        self.delta_with(&self.terms(), spec)
    }

    /// Computes Vega.
    ///
    /// - Vanilla: S·√T·φ(d₁), identical for calls and puts
    /// - Digital: ±S·φ(d₂)·√T
    #[inline]
    pub fn vega(&self, spec: OptionSpec) -> f64 {
        self.vega_with(&self.terms(), spec)
    }

    /// Computes Gamma.
    ///
    /// - Vanilla: φ(d₁) / (S·σ·√T)
    /// - Digital: -φ(d₂)·d₂ / (S²·σ²·T)
    ///
    /// Gamma does not depend on the side.
    #[inline]
    pub fn gamma(&self, spec: OptionSpec) -> f64 {
        self.gamma_with(&self.terms(), spec)
    }

    /// Computes Theta.
    ///
    /// - Vanilla call: -(S·φ(d₁)·σ)/(2√T) - r·K·e^(-rT)·N(d₂)
    /// - Vanilla put: -(S·φ(d₁)·σ)/(2√T) + r·K·e^(-rT)·N(-d₂)
    /// - Digital: -(S·φ(d₂)·σ)/(2√T) for both sides
    #[inline]
    pub fn theta(&self, spec: OptionSpec) -> f64 {
        self.theta_with(&self.terms(), spec)
    }

    /// Computes Rho.
    ///
    /// - Vanilla call: K·T·e^(-rT)·N(d₂)
    /// - Vanilla put: -K·T·e^(-rT)·N(-d₂)
    /// - Digital: ∓T·e^(-rT)·φ(d₂)
    #[inline]
    pub fn rho(&self, spec: OptionSpec) -> f64 {
        self.rho_with(&self.terms(), spec)
    }

    /// Computes the price and all Greeks from one d1/d2 evaluation.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholesMerton;
    /// use pricer_models::instruments::{MarketParameters, OptionSpec};
    ///
    /// let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0).unwrap();
    /// let result = BlackScholesMerton::new(params).unwrap().evaluate(OptionSpec::vanilla_call());
    ///
    /// assert!((result.delta - 0.6368).abs() < 1e-4);
    /// assert!((result.vega - 37.52).abs() < 1e-2);
    /// ```
    pub fn evaluate(&self, spec: OptionSpec) -> PricingResult {
        let terms = self.terms();
        PricingResult {
            price: self.price_with(&terms, spec),
            delta: self.delta_with(&terms, spec),
            vega: self.vega_with(&terms, spec),
            gamma: self.gamma_with(&terms, spec),
            theta: self.theta_with(&terms, spec),
            rho: self.rho_with(&terms, spec),
        }
    }

    fn price_with(&self, t: &Terms, spec: OptionSpec) -> f64 {
        let p = &self.params;
        match (spec.style, spec.side) {
            (OptionStyle::Vanilla, OptionSide::Call) => {
                p.spot() * t.dividend_discount * norm_cdf(t.d1)
                    - p.strike() * t.discount * norm_cdf(t.d2)
            }
            (OptionStyle::Vanilla, OptionSide::Put) => {
                p.strike() * t.discount * norm_cdf(-t.d2)
                    - p.spot() * t.dividend_discount * norm_cdf(-t.d1)
            }
            (OptionStyle::Digital, OptionSide::Call) => t.discount * norm_cdf(t.d2),
            (OptionStyle::Digital, OptionSide::Put) => t.discount * norm_cdf(-t.d2),
        }
    }

    fn delta_with(&self, t: &Terms, spec: OptionSpec) -> f64 {
        let p = &self.params;
        match spec.style {
            OptionStyle::Vanilla => match spec.side {
                OptionSide::Call => norm_cdf(t.d1),
                OptionSide::Put => norm_cdf(t.d1) - 1.0,
            },
            OptionStyle::Digital => {
                spec.side.sign() * norm_pdf(t.d2) / (p.spot() * p.volatility() * t.sqrt_t)
            }
        }
    }

    fn vega_with(&self, t: &Terms, spec: OptionSpec) -> f64 {
        let spot = self.params.spot();
        match spec.style {
            OptionStyle::Vanilla => spot * t.sqrt_t * norm_pdf(t.d1),
            OptionStyle::Digital => spec.side.sign() * spot * norm_pdf(t.d2) * t.sqrt_t,
        }
    }

    fn gamma_with(&self, t: &Terms, spec: OptionSpec) -> f64 {
        let p = &self.params;
        match spec.style {
            OptionStyle::Vanilla => norm_pdf(t.d1) / (p.spot() * p.volatility() * t.sqrt_t),
            OptionStyle::Digital => {
                let s_sigma = p.spot() * p.volatility();
                -norm_pdf(t.d2) * t.d2 / (s_sigma * s_sigma * p.maturity())
            }
        }
    }

    fn theta_with(&self, t: &Terms, spec: OptionSpec) -> f64 {
        let p = &self.params;
        match spec.style {
            OptionStyle::Vanilla => {
                let decay = -(p.spot() * norm_pdf(t.d1) * p.volatility()) / (2.0 * t.sqrt_t);
                let carry = p.rate() * p.strike() * t.discount;
                match spec.side {
                    OptionSide::Call => decay - carry * norm_cdf(t.d2),
                    OptionSide::Put => decay + carry * norm_cdf(-t.d2),
                }
            }
            OptionStyle::Digital => {
                -(p.spot() * norm_pdf(t.d2) * p.volatility()) / (2.0 * t.sqrt_t)
            }
        }
    }

    fn rho_with(&self, t: &Terms, spec: OptionSpec) -> f64 {
        let p = &self.params;
        match spec.style {
            OptionStyle::Vanilla => {
                let annuity = p.strike() * p.maturity() * t.discount;
                match spec.side {
                    OptionSide::Call => annuity * norm_cdf(t.d2),
                    OptionSide::Put => -annuity * norm_cdf(-t.d2),
                }
            }
            OptionStyle::Digital => {
                -spec.side.sign() * p.maturity() * t.discount * norm_pdf(t.d2)
            }
        }
    }
}

/// Prices `spec` under `params` and returns the price with all Greeks.
///
/// # Errors
/// `PricingError::InvalidMarketParameters` if `params` fails validation.
///
/// # Examples
/// ```
/// use pricer_models::analytical::price;
/// use pricer_models::instruments::{MarketParameters, OptionSpec};
///
/// let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0).unwrap();
/// let digital = price(&params, OptionSpec::digital_call()).unwrap();
/// assert!((digital.price - 0.5323).abs() < 1e-4);
/// ```
pub fn price(params: &MarketParameters, spec: OptionSpec) -> Result<PricingResult, PricingError> {
    Ok(BlackScholesMerton::new(*params)?.evaluate(spec))
}
