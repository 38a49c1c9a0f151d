//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions under Black-Scholes-Merton:
//! - Vanilla and digital prices with a continuous dividend yield
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//! - Implied volatility by Newton-Raphson on the analytical vega
//! - Spot ladders of price and Greeks
//!
//! ## Design Principles
//!
//! - **Pure functions**: every result depends only on its inputs
//! - **Explicit failures**: invalid inputs return `PricingError`, never NaN
//! - **Double-precision CDF**: Hart's rational approximation

pub mod black_scholes;
pub mod distributions;
pub mod implied_vol;
pub mod ladder;

// Re-export main types at module level
pub use black_scholes::{price, BlackScholesMerton, PricingResult};
pub use distributions::{norm_cdf, norm_pdf};
pub use implied_vol::{implied_volatility, ImpliedVolatilitySolver, SolverResult};
pub use ladder::{spot_ladder, LadderPoint};
