//! Spot ladders: price and Greeks across a range of underlying prices.

use pricer_core::types::PricingError;

use super::black_scholes::{BlackScholesMerton, PricingResult};
use crate::instruments::{MarketParameters, OptionSpec};

/// Lower end of the ladder as a fraction of the base spot.
pub const LADDER_LOW: f64 = 0.001;

/// Upper end of the ladder as a multiple of the base spot.
pub const LADDER_HIGH: f64 = 3.0;

/// One rung of a spot ladder.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LadderPoint {
    /// Spot used for this rung
    pub spot: f64,
    /// Analytical price and Greeks at `spot`
    pub result: PricingResult,
}

/// Evaluates `spec` at `points` evenly spaced spots from `0.001·S` to `3·S`.
///
/// Both ends are included and every other parameter is held fixed.
///
/// # Errors
/// - `PricingError::InvalidMarketParameters` on `points` when `points < 2`
/// - `PricingError::InvalidMarketParameters` if `params` fails validation
///
/// # Examples
/// ```
/// use pricer_models::analytical::spot_ladder;
/// use pricer_models::instruments::{MarketParameters, OptionSpec};
///
/// let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0).unwrap();
/// let ladder = spot_ladder(&params, OptionSpec::vanilla_call(), 100).unwrap();
///
/// assert_eq!(ladder.len(), 100);
/// assert!((ladder[0].spot - 0.1).abs() < 1e-12);
/// assert!((ladder[99].spot - 300.0).abs() < 1e-9);
/// ```
pub fn spot_ladder(
    params: &MarketParameters,
    spec: OptionSpec,
    points: usize,
) -> Result<Vec<LadderPoint>, PricingError> {
    if points < 2 {
        return Err(PricingError::invalid_parameter("points", points as f64));
    }
    params.validate()?;

    let low = LADDER_LOW * params.spot();
    let high = LADDER_HIGH * params.spot();
    let step = (high - low) / (points - 1) as f64;

    (0..points)
        .map(|i| {
            let spot = if i == points - 1 {
                high
            } else {
                low + step * i as f64
            };
            let bsm = BlackScholesMerton::new(params.with_spot(spot)?)?;
            Ok(LadderPoint {
                spot,
                result: bsm.evaluate(spec),
            })
        })
        .collect()
}
