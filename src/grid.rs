// src/grid.rs

//! Evenly spaced evaluation points: candidate inventory levels, service
//! levels, and x-axes for density curves.

use crate::error::{DistributionError, Result};
use serde::{Deserialize, Serialize};

/// Absorbs floating-point drift so that e.g. 0.80..=0.99 step 0.01 still
/// includes 0.99.
const STEP_TOLERANCE: f64 = 1e-9;

/// Largest number of points a grid may expand to.
pub const MAX_GRID_POINTS: usize = 10_000_000;

/// An arithmetic progression `start, start + step, ...` up to and including
/// `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl Grid {
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self> {
        let grid = Self { start, end, step };
        grid.validate()?;
        Ok(grid)
    }

    /// Grids can arrive through deserialisation, so this is checked again
    /// before use.
    pub fn validate(&self) -> Result<()> {
        if !self.start.is_finite() || !self.end.is_finite() || !self.step.is_finite() {
            return Err(DistributionError::invalid(format!(
                "grid bounds must be finite, got {self:?}"
            )));
        }
        if self.step <= 0.0 {
            return Err(DistributionError::invalid(format!(
                "grid step must be > 0, got {}",
                self.step
            )));
        }
        if self.end < self.start {
            return Err(DistributionError::invalid(format!(
                "grid end {} is below start {}",
                self.end, self.start
            )));
        }
        let count = self.intervals() + 1.0;
        if !count.is_finite() || count > MAX_GRID_POINTS as f64 {
            return Err(DistributionError::invalid(format!(
                "grid {}..={} step {} has more than {MAX_GRID_POINTS} points",
                self.start, self.end, self.step
            )));
        }
        Ok(())
    }

    /// Whole steps between `start` and `end`, as a float.
    fn intervals(&self) -> f64 {
        ((self.end - self.start) / self.step + STEP_TOLERANCE).floor()
    }

    /// Number of points in the grid.
    ///
    /// Saturates at `usize::MAX` for a grid that would not pass validation.
    pub fn len(&self) -> usize {
        (self.intervals() as usize).saturating_add(1)
    }

    /// Never true for a validated grid; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The grid points in ascending order.
    ///
    /// Each point is computed as `start + i * step` rather than by repeated
    /// addition, so error does not accumulate along the grid.
    pub fn points(&self) -> Result<Vec<f64>> {
        self.validate()?;
        Ok((0..self.len())
            .map(|i| self.start + i as f64 * self.step)
            .collect())
    }
}

/// `count` evenly spaced points from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, count: usize) -> Result<Vec<f64>> {
    if !start.is_finite() || !end.is_finite() || end < start {
        return Err(DistributionError::invalid(format!(
            "linspace needs finite start <= end, got {start}..{end}"
        )));
    }
    match count {
        0 => Err(DistributionError::invalid("linspace needs at least one point")),
        1 => Ok(vec![start]),
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut points: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
            points[count - 1] = end;
            Ok(points)
        }
    }
}
