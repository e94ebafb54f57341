// src/distributions/discrete.rs

use super::DiscreteDistribution;
use crate::error::{DistributionError, Result};
use crate::special::{ln_binomial, ln_factorial};

/// Half-width of the summation window around the mean, in standard
/// deviations. Mass outside it is far below f64 resolution.
const WINDOW_SIGMAS: f64 = 40.0;

/// Integer range `[lo, hi]` (clamped at zero) outside which a distribution
/// with this mean and standard deviation carries negligible mass.
fn significant_window(mean: f64, std_dev: f64) -> (u64, f64) {
    let half_width = WINDOW_SIGMAS * std_dev + WINDOW_SIGMAS;
    let lo = (mean - half_width).max(0.0).floor() as u64;
    (lo, mean + half_width)
}

/// Sums `pmf` over the significant part of `0..=k`, so the cost is bounded by
/// the window width rather than by `k`.
fn windowed_cdf(dist: &impl DiscreteDistribution, k: u64) -> f64 {
    let (lo, hi) = significant_window(dist.mean(), dist.variance().sqrt());
    if k as f64 > hi {
        return 1.0;
    }
    (lo..=k).map(|i| dist.pmf(i)).sum::<f64>().min(1.0)
}

// =========================================================================
// Poisson
// =========================================================================

/// Number of events in a fixed interval when events arrive at rate λ.
///
/// PMF: e^(−λ) λ^k / k!
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poisson {
    rate: f64,
}

impl Poisson {
    /// # Errors
    /// `InvalidParameter` unless `rate` is finite and strictly positive.
    pub fn new(rate: f64) -> Result<Self> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(DistributionError::invalid(format!(
                "Poisson rate must be finite and > 0, got {rate}"
            )));
        }
        Ok(Self { rate })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl DiscreteDistribution for Poisson {
    fn pmf(&self, k: u64) -> f64 {
        // Log space keeps λ^k and k! from overflowing for large k.
        (k as f64 * self.rate.ln() - self.rate - ln_factorial(k)).exp()
    }

    fn mean(&self) -> f64 {
        self.rate
    }

    fn variance(&self) -> f64 {
        self.rate
    }

    fn cdf(&self, k: u64) -> f64 {
        windowed_cdf(self, k)
    }
}

// =========================================================================
// Binomial
// =========================================================================

/// Number of successes in `trials` independent draws with success
/// probability `p`.
///
/// PMF: C(n, k) p^k (1−p)^(n−k)
///
/// `trials` is unsigned, so a negative trial count cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binomial {
    trials: u64,
    p: f64,
}

impl Binomial {
    /// # Errors
    /// `InvalidParameter` unless `p` is in [0, 1].
    pub fn new(trials: u64, p: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&p) {
            return Err(DistributionError::invalid(format!(
                "Binomial success probability must be in [0, 1], got {p}"
            )));
        }
        Ok(Self { trials, p })
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn p(&self) -> f64 {
        self.p
    }
}

impl DiscreteDistribution for Binomial {
    fn pmf(&self, k: u64) -> f64 {
        if k > self.trials {
            return 0.0;
        }
        // Degenerate cases: ln(0) would turn 0 * ln(0) into NaN.
        if self.p == 0.0 {
            return if k == 0 { 1.0 } else { 0.0 };
        }
        if self.p == 1.0 {
            return if k == self.trials { 1.0 } else { 0.0 };
        }
        let failures = (self.trials - k) as f64;
        (ln_binomial(self.trials, k) + k as f64 * self.p.ln() + failures * (-self.p).ln_1p()).exp()
    }

    fn mean(&self) -> f64 {
        self.trials as f64 * self.p
    }

    fn variance(&self) -> f64 {
        self.trials as f64 * self.p * (1.0 - self.p)
    }

    fn cdf(&self, k: u64) -> f64 {
        if k >= self.trials || self.p == 0.0 {
            return 1.0;
        }
        if self.p == 1.0 {
            return 0.0;
        }
        windowed_cdf(self, k)
    }
}
