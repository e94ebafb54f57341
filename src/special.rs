// src/special.rs

//! Special functions shared by the distribution evaluators.
//!
//! The heavy lifting (error function and its inverse, log-factorials) comes
//! from `statrs`; this module only fixes the conventions the rest of the
//! crate relies on.

use statrs::function::{erf, factorial};
use std::f64::consts::{FRAC_1_SQRT_2, SQRT_2};

/// 1/√(2π)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal density φ(z).
pub fn standard_normal_pdf(z: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * z * z).exp()
}

/// Standard normal CDF Φ(z) = erfc(-z/√2) / 2.
///
/// Evaluated through `erfc` so the lower tail keeps its relative precision,
/// and Φ(0) is exactly 0.5. Absolute error is on the order of 1e-11.
pub fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * erf::erfc(-z * FRAC_1_SQRT_2)
}

/// Inverse of the standard normal CDF for `p` in (0, 1).
///
/// Callers validate `p`; outside the open interval the result is infinite or NaN.
pub fn inverse_normal_cdf(p: f64) -> f64 {
    -SQRT_2 * erf::erfc_inv(2.0 * p)
}

/// ln(k!)
pub fn ln_factorial(k: u64) -> f64 {
    factorial::ln_factorial(k)
}

/// ln C(n, k), or `-inf` when `k > n`.
pub fn ln_binomial(n: u64, k: u64) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    factorial::ln_binomial(n, k)
}
