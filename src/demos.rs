// src/demos.rs

//! The two fixed-parameter demonstrations: discrete arrivals and defects,
//! continuous incomes and waiting times.

use crate::distributions::{
    Binomial, ContinuousDistribution, CurvePoint, DiscreteDistribution, Exponential, Normal,
    Poisson, ProbabilityPoint,
};
use crate::error::Result;
use crate::grid::linspace;

/// Points sampled along each continuous curve.
const CURVE_POINTS: usize = 1000;

#[derive(Debug, Clone)]
pub struct PoissonDemo {
    pub rate: f64,
    pub table: Vec<ProbabilityPoint>,
    /// P(X <= 3)
    pub at_most_three: f64,
    /// P(X = 5)
    pub exactly_five: f64,
    /// P(X > 8)
    pub more_than_eight: f64,
}

#[derive(Debug, Clone)]
pub struct BinomialDemo {
    pub trials: u64,
    pub p: f64,
    pub table: Vec<ProbabilityPoint>,
    /// P(X = 0)
    pub none: f64,
    /// P(1 <= X <= 2)
    pub one_or_two: f64,
    /// P(X > 3)
    pub more_than_three: f64,
}

#[derive(Debug, Clone)]
pub struct NormalDemo {
    pub mean: f64,
    pub std_dev: f64,
    pub curve: Vec<CurvePoint>,
    pub percentile_25: f64,
    pub percentile_75: f64,
    /// P(X > 3000)
    pub above_3000: f64,
    /// P(2000 < X <= 3000)
    pub between_2000_and_3000: f64,
}

#[derive(Debug, Clone)]
pub struct ExponentialDemo {
    pub scale: f64,
    pub curve: Vec<CurvePoint>,
    /// P(X < 5)
    pub under_5: f64,
    /// P(X > 15)
    pub over_15: f64,
    pub percentile_90: f64,
}

/// Customers arriving at a shop at λ = 5 per hour.
pub fn poisson_arrivals() -> Result<PoissonDemo> {
    let rate = 5.0;
    let arrivals = Poisson::new(rate)?;
    Ok(PoissonDemo {
        rate,
        table: arrivals.pmf_table(0..15),
        at_most_three: arrivals.cdf(3),
        exactly_five: arrivals.pmf(5),
        more_than_eight: arrivals.sf(8),
    })
}

/// Defective items in a lot of 20 with a 5% defect rate.
pub fn binomial_defects() -> Result<BinomialDemo> {
    let (trials, p) = (20, 0.05);
    let defects = Binomial::new(trials, p)?;
    Ok(BinomialDemo {
        trials,
        p,
        table: defects.pmf_table(0..11),
        none: defects.pmf(0),
        one_or_two: defects.interval_probability(0, 2),
        more_than_three: defects.sf(3),
    })
}

/// Monthly income ~ N(2500, 500).
pub fn normal_incomes() -> Result<NormalDemo> {
    let (mean, std_dev) = (2500.0, 500.0);
    let income = Normal::new(mean, std_dev)?;
    let xs = linspace(1000.0, 4000.0, CURVE_POINTS)?;
    Ok(NormalDemo {
        mean,
        std_dev,
        curve: income.sample_curve(&xs),
        percentile_25: income.quantile(0.25)?,
        percentile_75: income.quantile(0.75)?,
        above_3000: income.sf(3000.0),
        between_2000_and_3000: income.interval_probability(2000.0, 3000.0),
    })
}

/// Customer-service waiting time, exponential with a mean of 8 minutes.
pub fn exponential_waiting_times() -> Result<ExponentialDemo> {
    let scale = 8.0;
    let wait = Exponential::new(scale)?;
    let xs = linspace(0.0, 25.0, CURVE_POINTS)?;
    Ok(ExponentialDemo {
        scale,
        curve: wait.sample_curve(&xs),
        under_5: wait.cdf(5.0),
        over_15: wait.sf(15.0),
        percentile_90: wait.quantile(0.9)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn discrete_demo_figures() {
        let poisson = poisson_arrivals().unwrap();
        assert_eq!(poisson.table.len(), 15);
        assert_approx_eq!(f64, poisson.exactly_five, 0.1755, epsilon = 1e-3);
        assert_approx_eq!(f64, poisson.at_most_three, 0.2650, epsilon = 1e-3);
        assert_approx_eq!(f64, poisson.more_than_eight, 0.0681, epsilon = 1e-3);

        let binomial = binomial_defects().unwrap();
        assert_eq!(binomial.table.len(), 11);
        assert_approx_eq!(f64, binomial.none, 0.3585, epsilon = 1e-3);
        assert_approx_eq!(f64, binomial.one_or_two, 0.5660, epsilon = 1e-3);
        assert_approx_eq!(f64, binomial.more_than_three, 0.0159, epsilon = 1e-3);
    }

    #[test]
    fn continuous_demo_figures() {
        let normal = normal_incomes().unwrap();
        assert_eq!(normal.curve.len(), 1000);
        assert_approx_eq!(f64, normal.percentile_25, 2162.76, epsilon = 1e-2);
        assert_approx_eq!(f64, normal.percentile_75, 2837.24, epsilon = 1e-2);

        let exponential = exponential_waiting_times().unwrap();
        assert_approx_eq!(f64, exponential.under_5, 0.4647, epsilon = 1e-2);
        assert_approx_eq!(f64, exponential.over_15, 0.1576, epsilon = 1e-2);
        assert_approx_eq!(f64, exponential.percentile_90, 18.42, epsilon = 1e-2);
        assert_eq!(exponential.curve[0].cdf, 0.0);
    }
}
