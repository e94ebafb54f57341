// src/inventory/optimization.rs

//! Reorder point, cost-curve grid search and service-level sensitivity for a
//! single item under Normal daily demand.

use super::config::InventoryConfig;
use super::demand::DemandSeries;
use crate::distributions::{ContinuousDistribution, Normal};
use crate::error::{check_open_probability, DistributionError, Result};
use crate::special::inverse_normal_cdf;
use log::{debug, info};
use serde::Serialize;

/// Reorder point and safety stock for one service level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReorderPoint {
    pub service_level: f64,
    pub z_score: f64,
    pub reorder_point: f64,
    pub safety_stock: f64,
}

/// Average daily cost of holding a given inventory level against the
/// simulated demand, split into its two components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostPoint {
    pub level: f64,
    pub holding_cost: f64,
    pub shortage_cost: f64,
    pub total_cost: f64,
}

/// Cost of every candidate level, in candidate order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CostCurve {
    pub points: Vec<CostPoint>,
}

impl CostCurve {
    pub fn levels(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.level).collect()
    }

    pub fn total_costs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.total_cost).collect()
    }
}

/// Outcome of the grid search.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelOptimum {
    pub curve: CostCurve,
    pub optimal_level: f64,
    pub minimum_cost: f64,
}

/// Calculates the Critical Ratio (newsvendor target service level).
///
/// Formula: CR = ShortageCost / (ShortageCost + HoldingCost)
///
/// Zero when both costs are zero.
pub fn critical_ratio(shortage_cost: f64, holding_cost: f64) -> f64 {
    if shortage_cost + holding_cost == 0.0 {
        return 0.0;
    }
    shortage_cost / (shortage_cost + holding_cost)
}

/// Inventory analysis over an immutable [`InventoryConfig`].
///
/// Every method is a pure function of its arguments and the config.
#[derive(Debug, Clone)]
pub struct InventoryOptimizer {
    config: InventoryConfig,
    daily_demand: Normal,
}

impl InventoryOptimizer {
    pub fn new(config: InventoryConfig) -> Result<Self> {
        config.validate()?;
        let daily_demand = Normal::new(config.demand_mean, config.demand_std_dev)?;
        Ok(Self {
            config,
            daily_demand,
        })
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    /// Calculates the reorder point for a target service level.
    ///
    /// # Formula
    /// SafetyStock = Z * StdDev * sqrt(LeadTime)
    /// ReorderPoint = Mean * LeadTime + SafetyStock
    ///
    /// Where Z is the standard normal quantile of the service level.
    pub fn reorder_point(&self, service_level: f64) -> Result<ReorderPoint> {
        check_open_probability("service level", service_level)?;

        let z_score = inverse_normal_cdf(service_level);
        let lead_time = self.config.lead_time_days;
        let safety_stock = z_score * self.config.demand_std_dev * lead_time.sqrt();
        let reorder_point = self.config.demand_mean * lead_time + safety_stock;

        Ok(ReorderPoint {
            service_level,
            z_score,
            reorder_point,
            safety_stock,
        })
    }

    /// Simulated daily demand drawn from N(demand_mean, demand_std_dev).
    pub fn simulate_demand(&self, sample_count: usize, seed: u64) -> Result<DemandSeries> {
        DemandSeries::simulate(
            self.config.demand_mean,
            self.config.demand_std_dev,
            sample_count,
            seed,
        )
    }

    /// Average daily cost of holding `level` units against every demand
    /// sample: holding cost on leftovers, shortage cost on unmet demand.
    pub fn cost_at(&self, demand: &DemandSeries, level: f64) -> Result<CostPoint> {
        if demand.is_empty() {
            return Err(DistributionError::invalid("demand series is empty"));
        }
        if !level.is_finite() {
            return Err(DistributionError::invalid(format!(
                "inventory level must be finite, got {level}"
            )));
        }

        let (leftover, unmet) = demand
            .samples()
            .iter()
            .fold((0.0, 0.0), |(leftover, unmet), &d| {
                (leftover + (level - d).max(0.0), unmet + (d - level).max(0.0))
            });
        let n = demand.len() as f64;
        let holding_cost = leftover / n * self.config.holding_cost_per_unit;
        let shortage_cost = unmet / n * self.config.shortage_cost_per_unit;

        Ok(CostPoint {
            level,
            holding_cost,
            shortage_cost,
            total_cost: holding_cost + shortage_cost,
        })
    }

    /// Evaluates every candidate level and picks the cheapest.
    ///
    /// Candidates must be in ascending order; ties go to the lowest level.
    pub fn optimize_level(&self, demand: &DemandSeries, candidates: &[f64]) -> Result<LevelOptimum> {
        if candidates.is_empty() {
            return Err(DistributionError::invalid("no candidate inventory levels"));
        }
        if let Some(w) = candidates.windows(2).find(|w| w[1] < w[0]) {
            return Err(DistributionError::invalid(format!(
                "candidate inventory levels must ascend, got {} after {}",
                w[1], w[0]
            )));
        }

        let points = candidates
            .iter()
            .map(|&level| self.cost_at(demand, level))
            .collect::<Result<Vec<_>>>()?;

        let mut best = points[0];
        for point in &points {
            debug!("Level {:.1}: average cost {:.4}", point.level, point.total_cost);
            if point.total_cost < best.total_cost {
                best = *point;
            }
        }
        info!(
            "Optimal inventory level {} with average cost {:.2} over {} candidates",
            best.level,
            best.total_cost,
            points.len()
        );

        Ok(LevelOptimum {
            curve: CostCurve { points },
            optimal_level: best.level,
            minimum_cost: best.total_cost,
        })
    }

    /// Reorder point at each service level, in the order given.
    ///
    /// Non-decreasing whenever `service_levels` is ascending.
    pub fn reorder_point_sensitivity(&self, service_levels: &[f64]) -> Result<Vec<ReorderPoint>> {
        service_levels
            .iter()
            .map(|&level| self.reorder_point(level))
            .collect()
    }

    /// Critical ratio implied by the configured costs.
    pub fn critical_ratio(&self) -> f64 {
        critical_ratio(
            self.config.shortage_cost_per_unit,
            self.config.holding_cost_per_unit,
        )
    }

    /// Analytic single-period (newsvendor) optimum: the daily-demand quantile
    /// at the critical ratio. The grid search should land near this level.
    pub fn newsvendor_level(&self) -> Result<f64> {
        self.daily_demand.quantile(self.critical_ratio())
    }
}
