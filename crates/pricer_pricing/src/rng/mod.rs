//! # Random Number Generation
//!
//! This module provides the random draws for Monte Carlo simulations.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: Every generator carries its seed, including those
//!   seeded from entropy, so a run can be replayed
//! - **Efficiency**: Batch fills into `&mut [f64]` slices
//! - **Isolation**: A fresh generator per pricing call; nothing is shared
//!   across calls
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let normal_value = rng.gen_normal();
//!
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod prng;

pub use prng::PricerRng;
