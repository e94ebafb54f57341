// src/distributions.rs

//! Probability distributions evaluated in closed form.
//!
//! | Distribution | Parameters | Mean | Variance |
//! |---|---|---|---|
//! | [`Poisson`] | λ > 0 | λ | λ |
//! | [`Binomial`] | n ≥ 0, p ∈ [0, 1] | np | np(1−p) |
//! | [`Normal`] | μ, σ > 0 | μ | σ² |
//! | [`Exponential`] | scale β > 0 | β | β² |
//!
//! Constructors validate parameters and return
//! [`DistributionError::InvalidParameter`](crate::error::DistributionError)
//! instead of letting NaN leak into later results.

pub mod continuous;
pub mod discrete;

pub use continuous::{Exponential, Normal};
pub use discrete::{Binomial, Poisson};

use crate::error::Result;
use serde::Serialize;
use std::fmt::Debug;

/// One row of a probability table for a discrete distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProbabilityPoint {
    pub k: u64,
    pub pmf: f64,
    pub cdf: f64,
}

/// One sample of a continuous distribution's density and CDF.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub x: f64,
    pub pdf: f64,
    pub cdf: f64,
}

/// A distribution over the non-negative integers.
pub trait DiscreteDistribution: Debug {
    /// P(X = k)
    fn pmf(&self, k: u64) -> f64;

    fn mean(&self) -> f64;

    fn variance(&self) -> f64;

    /// P(X <= k)
    fn cdf(&self, k: u64) -> f64 {
        (0..=k).map(|i| self.pmf(i)).sum::<f64>().min(1.0)
    }

    /// P(X > k)
    fn sf(&self, k: u64) -> f64 {
        (1.0 - self.cdf(k)).max(0.0)
    }

    /// P(a < X <= b); zero when `b <= a`.
    fn interval_probability(&self, a: u64, b: u64) -> f64 {
        if b <= a {
            return 0.0;
        }
        (self.cdf(b) - self.cdf(a)).max(0.0)
    }

    /// PMF and CDF for every `k` in `ks`, in order.
    fn pmf_table(&self, ks: std::ops::Range<u64>) -> Vec<ProbabilityPoint> {
        let mut cumulative = if ks.start == 0 {
            0.0
        } else {
            self.cdf(ks.start - 1)
        };
        ks.map(|k| {
            let pmf = self.pmf(k);
            cumulative = (cumulative + pmf).min(1.0);
            ProbabilityPoint {
                k,
                pmf,
                cdf: cumulative,
            }
        })
        .collect()
    }
}

/// A distribution over the real line (or a half-line).
pub trait ContinuousDistribution: Debug {
    fn pdf(&self, x: f64) -> f64;

    /// P(X <= x)
    fn cdf(&self, x: f64) -> f64;

    /// Inverse CDF. Fails unless `p` is in (0, 1).
    fn quantile(&self, p: f64) -> Result<f64>;

    fn mean(&self) -> f64;

    fn variance(&self) -> f64;

    fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// P(X > x)
    fn sf(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }

    /// P(a < X <= b); zero when `b <= a`.
    fn interval_probability(&self, a: f64, b: f64) -> f64 {
        if b <= a {
            return 0.0;
        }
        (self.cdf(b) - self.cdf(a)).max(0.0)
    }

    /// Density and CDF evaluated at each of `xs`.
    fn sample_curve(&self, xs: &[f64]) -> Vec<CurvePoint> {
        xs.iter()
            .map(|&x| CurvePoint {
                x,
                pdf: self.pdf(x),
                cdf: self.cdf(x),
            })
            .collect()
    }
}
