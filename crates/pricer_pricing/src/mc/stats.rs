//! Streaming sample statistics for Monte Carlo estimators.

use serde::{Deserialize, Serialize};

/// 95% two-sided normal quantile.
const Z_95: f64 = 1.96;

/// 99% two-sided normal quantile.
const Z_99: f64 = 2.576;

/// Sample mean together with its standard error.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::Estimate;
///
/// let estimate = Estimate::new(10.45, 0.05);
/// assert!((estimate.confidence_95() - 0.098).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Sample mean.
    pub value: f64,
    /// Standard error of the mean (population standard deviation over √M).
    pub std_error: f64,
}

impl Estimate {
    /// Creates a new estimate.
    #[inline]
    pub fn new(value: f64, std_error: f64) -> Self {
        Self { value, std_error }
    }

    /// Half-width of the 95% confidence interval.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        Z_95 * self.std_error
    }

    /// Half-width of the 99% confidence interval.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        Z_99 * self.std_error
    }

    /// Returns `true` if `target` lies within `k` standard errors.
    #[inline]
    pub fn within(&self, target: f64, k: f64) -> bool {
        (self.value - target).abs() <= k * self.std_error
    }
}

/// Welford accumulator for mean and variance.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SampleStats {
    count: usize,
    mean: f64,
    m2: f64,
}

impl SampleStats {
    #[inline]
    pub(crate) fn push(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    /// Mean and standard error; `None` before the first sample.
    pub(crate) fn estimate(&self) -> Option<Estimate> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as f64;
        let std_dev = (self.m2 / n).sqrt();
        Some(Estimate::new(self.mean, std_dev / n.sqrt()))
    }
}
