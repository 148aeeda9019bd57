//----------------------------------------
// Root lib
//----------------------------------------
//! The purpose of this library is to provide utility functions for planning
//! A/B tests with binary outcomes. It computes statistical power, minimum
//! required sample sizes, and minimum detectable effects for the two-sided
//! two-proportion z-test, along with a seeded simulation counterpart for
//! checking the analytic approximation against empirical rejection rates.

/// This module houses the public API for computing power, sample sizes,
/// detectable effects, and simulated power
pub mod compute;
mod effect_size;
/// This module contains error types
pub mod error;
mod power;
mod power_sim;
mod sample_size;
mod util;
