//! Numerical methods shared by the pricing layers.
//!
//! - [`solvers`]: Root finding (Newton-Raphson)

pub mod solvers;
