// src/distributions/continuous.rs

use super::ContinuousDistribution;
use crate::error::{check_open_probability, DistributionError, Result};
use crate::special;

// =========================================================================
// Normal
// =========================================================================

/// Normal (Gaussian) distribution N(μ, σ).
///
/// - PDF: φ((x−μ)/σ) / σ
/// - CDF: Φ((x−μ)/σ), evaluated through the complementary error function
/// - Quantile: μ + σ Φ⁻¹(p)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    mean: f64,
    std_dev: f64,
}

impl Normal {
    /// # Errors
    /// `InvalidParameter` if `mean` is not finite or `std_dev` is not finite
    /// and strictly positive.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() || !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(DistributionError::invalid(format!(
                "Normal requires finite mean and std_dev > 0, got mean={mean}, std_dev={std_dev}"
            )));
        }
        Ok(Self { mean, std_dev })
    }

    /// N(0, 1)
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }

    fn z(&self, x: f64) -> f64 {
        (x - self.mean) / self.std_dev
    }
}

impl ContinuousDistribution for Normal {
    fn pdf(&self, x: f64) -> f64 {
        special::standard_normal_pdf(self.z(x)) / self.std_dev
    }

    fn cdf(&self, x: f64) -> f64 {
        special::standard_normal_cdf(self.z(x))
    }

    fn sf(&self, x: f64) -> f64 {
        special::standard_normal_cdf(-self.z(x))
    }

    fn quantile(&self, p: f64) -> Result<f64> {
        check_open_probability("quantile probability", p)?;
        Ok(self.mean + self.std_dev * special::inverse_normal_cdf(p))
    }

    fn mean(&self) -> f64 {
        self.mean
    }

    fn variance(&self) -> f64 {
        self.std_dev * self.std_dev
    }

    fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

// =========================================================================
// Exponential
// =========================================================================

/// Exponential distribution parameterised by its scale β (the mean waiting
/// time), supported on x ≥ 0.
///
/// - PDF: e^(−x/β) / β
/// - CDF: 1 − e^(−x/β)
/// - Quantile: −β ln(1 − p)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    scale: f64,
}

impl Exponential {
    /// # Errors
    /// `InvalidParameter` unless `scale` is finite and strictly positive.
    pub fn new(scale: f64) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(DistributionError::invalid(format!(
                "Exponential scale must be finite and > 0, got {scale}"
            )));
        }
        Ok(Self { scale })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl ContinuousDistribution for Exponential {
    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        (-x / self.scale).exp() / self.scale
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        -(-x / self.scale).exp_m1()
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 1.0;
        }
        (-x / self.scale).exp()
    }

    fn quantile(&self, p: f64) -> Result<f64> {
        check_open_probability("quantile probability", p)?;
        Ok(-self.scale * (-p).ln_1p())
    }

    fn mean(&self) -> f64 {
        self.scale
    }

    fn variance(&self) -> f64 {
        self.scale * self.scale
    }

    fn std_dev(&self) -> f64 {
        self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::linspace;
    use float_cmp::assert_approx_eq;
    use rstest::rstest;

    /// Trapezoidal integral of the density over `[a, b]`.
    fn integrate_pdf(dist: &impl ContinuousDistribution, a: f64, b: f64) -> f64 {
        let xs = linspace(a, b, 20_001).unwrap();
        xs.windows(2)
            .map(|w| 0.5 * (w[1] - w[0]) * (dist.pdf(w[0]) + dist.pdf(w[1])))
            .sum()
    }

    #[test]
    fn normal_income_percentiles() {
        let income = Normal::new(2500.0, 500.0).unwrap();
        assert_approx_eq!(f64, income.quantile(0.25).unwrap(), 2162.755_124_901_959, epsilon = 1e-6);
        assert_approx_eq!(f64, income.quantile(0.75).unwrap(), 2837.244_875_098_041, epsilon = 1e-6);
        assert_approx_eq!(f64, income.sf(3000.0), 0.158_655_253_931_457, epsilon = 1e-10);
        assert_approx_eq!(
            f64,
            income.interval_probability(2000.0, 3000.0),
            0.682_689_492_137_086,
            epsilon = 1e-10
        );
    }

    #[rstest]
    #[case(0.0, 1.0)]
    #[case(2500.0, 500.0)]
    #[case(-3.5, 0.01)]
    fn normal_cdf_at_mean_is_half(#[case] mean: f64, #[case] std_dev: f64) {
        let normal = Normal::new(mean, std_dev).unwrap();
        assert_eq!(normal.cdf(mean), 0.5);
    }

    #[test]
    fn normal_pdf_integrates_to_one() {
        let normal = Normal::new(100.0, 20.0).unwrap();
        assert_approx_eq!(f64, integrate_pdf(&normal, -100.0, 300.0), 1.0, epsilon = 1e-6);
    }

    #[rstest]
    #[case(0.0)]
    #[case(1.0)]
    #[case(-0.5)]
    #[case(f64::NAN)]
    fn quantile_rejects_probability_outside_open_interval(#[case] p: f64) {
        let normal = Normal::standard();
        let exponential = Exponential::new(8.0).unwrap();
        assert!(matches!(
            normal.quantile(p),
            Err(DistributionError::InvalidParameter(_))
        ));
        assert!(exponential.quantile(p).is_err());
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(0.0, -1.0)]
    #[case(f64::NAN, 1.0)]
    #[case(0.0, f64::INFINITY)]
    fn normal_rejects_bad_parameters(#[case] mean: f64, #[case] std_dev: f64) {
        assert!(Normal::new(mean, std_dev).is_err());
    }

    #[test]
    fn exponential_waiting_times() {
        let wait = Exponential::new(8.0).unwrap();
        assert_approx_eq!(f64, wait.cdf(5.0), 0.464_738_571_481_009_7, epsilon = 1e-12);
        assert_approx_eq!(f64, wait.sf(15.0), 0.153_354_966_844_928_5, epsilon = 1e-12);
        assert_approx_eq!(f64, wait.quantile(0.9).unwrap(), 18.420_680_743_952_367, epsilon = 1e-9);
    }

    #[test]
    fn exponential_support_starts_at_zero() {
        let wait = Exponential::new(8.0).unwrap();
        assert_eq!(wait.pdf(-1.0), 0.0);
        assert_eq!(wait.cdf(-1.0), 0.0);
        assert_eq!(wait.sf(-1.0), 1.0);
        assert_approx_eq!(f64, wait.pdf(0.0), 0.125, ulps = 2);
        assert_approx_eq!(f64, integrate_pdf(&wait, 0.0, 400.0), 1.0, epsilon = 1e-6);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-8.0)]
    #[case(f64::INFINITY)]
    fn exponential_rejects_bad_scale(#[case] scale: f64) {
        assert!(Exponential::new(scale).is_err());
    }

    #[test]
    fn sample_curve_pairs_density_and_cdf() {
        let normal = Normal::new(2500.0, 500.0).unwrap();
        let curve = normal.sample_curve(&[2000.0, 2500.0, 3000.0]);
        assert_eq!(curve.len(), 3);
        assert_eq!(curve[1].cdf, 0.5);
        assert_approx_eq!(f64, curve[0].pdf, curve[2].pdf, epsilon = 1e-15);
    }
}
