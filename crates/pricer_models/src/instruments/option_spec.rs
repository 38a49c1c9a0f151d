//! Option style and side definitions.
//!
//! This module provides the [`OptionSpec`] value type selecting which payoff
//! and Greek formulas apply, plus case-insensitive string parsing for callers
//! that carry option kinds as text flags.

use std::fmt;
use std::str::FromStr;

use pricer_core::types::PricingError;

/// Payoff family of a European option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionStyle {
    /// Linear payoff: `max(S - K, 0)` or `max(K - S, 0)`
    Vanilla,
    /// Cash-or-nothing payoff: one unit of cash if in the money
    Digital,
}

/// Direction of a European option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionSide {
    /// Right to receive the payoff when the terminal price ends above the strike
    Call,
    /// Right to receive the payoff when the terminal price ends below the strike
    Put,
}

impl OptionSide {
    /// Returns `true` for a call.
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, OptionSide::Call)
    }

    /// Sign convention used by the closed-form formulas: `+1` for calls, `-1` for puts.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            OptionSide::Call => 1.0,
            OptionSide::Put => -1.0,
        }
    }
}

/// Complete specification of a European option payoff.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionSide, OptionSpec, OptionStyle};
///
/// let spec = OptionSpec::digital_put();
/// assert_eq!(spec.style, OptionStyle::Digital);
/// assert_eq!(spec.side, OptionSide::Put);
///
/// // Strict inequality: no payout at the strike
/// assert_eq!(spec.payoff(99.0, 100.0), 1.0);
/// assert_eq!(spec.payoff(100.0, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionSpec {
    /// Payoff family
    pub style: OptionStyle,
    /// Call or put
    pub side: OptionSide,
}

impl OptionSpec {
    /// Creates a specification from its parts.
    #[inline]
    pub fn new(style: OptionStyle, side: OptionSide) -> Self {
        Self { style, side }
    }

    /// Vanilla European call.
    #[inline]
    pub fn vanilla_call() -> Self {
        Self::new(OptionStyle::Vanilla, OptionSide::Call)
    }

    /// Vanilla European put.
    #[inline]
    pub fn vanilla_put() -> Self {
        Self::new(OptionStyle::Vanilla, OptionSide::Put)
    }

    /// Cash-or-nothing digital call.
    #[inline]
    pub fn digital_call() -> Self {
        Self::new(OptionStyle::Digital, OptionSide::Call)
    }

    /// Cash-or-nothing digital put.
    #[inline]
    pub fn digital_put() -> Self {
        Self::new(OptionStyle::Digital, OptionSide::Put)
    }

    /// Evaluates the undiscounted payoff at expiry.
    ///
    /// - Vanilla call: `max(S_T - K, 0)`
    /// - Vanilla put: `max(K - S_T, 0)`
    /// - Digital call: `1` if `S_T > K`, else `0`
    /// - Digital put: `1` if `S_T < K`, else `0`
    #[inline]
    pub fn payoff(&self, terminal: f64, strike: f64) -> f64 {
        match (self.style, self.side) {
            (OptionStyle::Vanilla, OptionSide::Call) => (terminal - strike).max(0.0),
            (OptionStyle::Vanilla, OptionSide::Put) => (strike - terminal).max(0.0),
            (OptionStyle::Digital, OptionSide::Call) => {
                if terminal > strike {
                    1.0
                } else {
                    0.0
                }
            }
            (OptionStyle::Digital, OptionSide::Put) => {
                if terminal < strike {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

impl fmt::Display for OptionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionStyle::Vanilla => write!(f, "vanilla"),
            OptionStyle::Digital => write!(f, "digital"),
        }
    }
}

impl fmt::Display for OptionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionSide::Call => write!(f, "call"),
            OptionSide::Put => write!(f, "put"),
        }
    }
}

impl fmt::Display for OptionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.style, self.side)
    }
}

impl FromStr for OptionStyle {
    type Err = PricingError;

    /// Accepts `vanilla`/`european` and `digital`/`binary`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vanilla" | "european" => Ok(OptionStyle::Vanilla),
            "digital" | "binary" => Ok(OptionStyle::Digital),
            _ => Err(PricingError::InvalidOptionSpec(format!(
                "unknown option style '{}'",
                s.trim()
            ))),
        }
    }
}

impl FromStr for OptionSide {
    type Err = PricingError;

    /// Accepts `c`/`call` and `p`/`put`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "call" => Ok(OptionSide::Call),
            "p" | "put" => Ok(OptionSide::Put),
            _ => Err(PricingError::InvalidOptionSpec(format!(
                "unknown option side '{}'",
                s.trim()
            ))),
        }
    }
}

impl FromStr for OptionSpec {
    type Err = PricingError;

    /// Parses `"<style> <side>"`, with space, `-`, `_` or `/` as separator.
    ///
    /// ```
    /// use pricer_models::instruments::OptionSpec;
    ///
    /// assert_eq!("Digital-P".parse::<OptionSpec>().unwrap(), OptionSpec::digital_put());
    /// assert!("vanilla straddle".parse::<OptionSpec>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || matches!(c, '-' | '_' | '/'))
            .filter(|t| !t.is_empty())
            .collect();

        match tokens.as_slice() {
            [style, side] => Ok(OptionSpec::new(style.parse()?, side.parse()?)),
            _ => Err(PricingError::InvalidOptionSpec(format!(
                "expected '<style> <side>', got '{}'",
                s.trim()
            ))),
        }
    }
}
