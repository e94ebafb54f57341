// src/inventory/demand.rs

use crate::error::{DistributionError, Result};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use serde::Serialize;

/// Sampled daily demand, in draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct DemandSeries {
    samples: Vec<f64>,
}

/// One row of the demand series for CSV export.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DemandRecord {
    pub day: usize,
    pub demand: f64,
}

/// Descriptive statistics of a demand series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DemandSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n − 1 denominator); zero for a single sample.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub negative_count: usize,
}

impl DemandSeries {
    /// Wraps observed or hand-built demand values.
    ///
    /// # Errors
    /// `InvalidParameter` if any sample is NaN or infinite.
    pub fn new(samples: Vec<f64>) -> Result<Self> {
        if let Some((day, bad)) = samples.iter().enumerate().find(|(_, d)| !d.is_finite()) {
            return Err(DistributionError::invalid(format!(
                "demand sample {} is not finite: {bad}",
                day + 1
            )));
        }
        Ok(Self { samples })
    }

    /// Draws `sample_count` values from N(mean, std_dev) with a generator
    /// seeded by `seed`, so the same arguments always give the same series.
    ///
    /// Draws are kept as sampled: negative demand is NOT clamped to zero.
    ///
    /// # Arguments
    /// * `mean` - Mean daily demand (e.g., 100.0).
    /// * `std_dev` - Standard deviation of daily demand (e.g., 20.0).
    /// * `sample_count` - Number of days to simulate; must be at least 1.
    /// * `seed` - Seed for the random number generator.
    pub fn simulate(mean: f64, std_dev: f64, sample_count: usize, seed: u64) -> Result<Self> {
        if sample_count == 0 {
            return Err(DistributionError::invalid(
                "demand simulation needs at least one sample",
            ));
        }
        let normal = Normal::new(mean, std_dev).map_err(|e| {
            DistributionError::invalid(format!(
                "demand distribution N({mean}, {std_dev}) rejected: {e}"
            ))
        })?;
        let mut rng = StdRng::seed_from_u64(seed);

        let samples: Vec<f64> = normal.sample_iter(&mut rng).take(sample_count).collect();
        let series = Self { samples };

        let negatives = series.negative_count();
        if negatives > 0 {
            warn!("{negatives} of {sample_count} simulated demand values are negative; keeping them as drawn");
        }
        debug!("Simulated {sample_count} days of demand with seed {seed}");
        Ok(series)
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn negative_count(&self) -> usize {
        self.samples.iter().filter(|&&d| d < 0.0).count()
    }

    /// Returns `None` for an empty series.
    pub fn summary(&self) -> Option<DemandSummary> {
        let count = self.samples.len();
        if count == 0 {
            return None;
        }
        let mean = self.samples.iter().sum::<f64>() / count as f64;
        let std_dev = if count > 1 {
            let ss: f64 = self.samples.iter().map(|d| (d - mean).powi(2)).sum();
            (ss / (count - 1) as f64).sqrt()
        } else {
            0.0
        };
        let min = self.samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(DemandSummary {
            count,
            mean,
            std_dev,
            min,
            max,
            negative_count: self.negative_count(),
        })
    }

    pub fn records(&self) -> Vec<DemandRecord> {
        self.samples
            .iter()
            .enumerate()
            .map(|(i, &demand)| DemandRecord { day: i + 1, demand })
            .collect()
    }
}
