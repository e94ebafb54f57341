// src/inventory/analysis.rs

use super::demand::{DemandSeries, DemandSummary};
use super::optimization::{InventoryOptimizer, LevelOptimum, ReorderPoint};
use crate::error::{DistributionError, Result};
use crate::grid::Grid;
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Run parameters for a full inventory analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisPlan {
    /// Target service level for the headline reorder point.
    pub service_level: f64,
    /// Days of demand to simulate.
    pub sample_count: usize,
    pub seed: u64,
    /// Candidate inventory levels for the cost grid search.
    pub level_grid: Grid,
    /// Service levels swept for the sensitivity curve.
    pub service_grid: Grid,
}

impl Default for AnalysisPlan {
    fn default() -> Self {
        Self {
            service_level: 0.95,
            sample_count: 1000,
            seed: 42,
            level_grid: Grid {
                start: 80.0,
                end: 150.0,
                step: 5.0,
            },
            service_grid: Grid {
                start: 0.80,
                end: 0.99,
                step: 0.01,
            },
        }
    }
}

/// Everything one analysis run produces.
#[derive(Debug, Clone)]
pub struct InventoryReport {
    pub reorder: ReorderPoint,
    pub demand: DemandSeries,
    pub demand_summary: DemandSummary,
    pub optimum: LevelOptimum,
    pub sensitivity: Vec<ReorderPoint>,
    pub critical_ratio: f64,
    /// `None` when a zero cost pushes the critical ratio to 0 or 1, where the
    /// demand quantile is unbounded.
    pub newsvendor_level: Option<f64>,
}

impl InventoryOptimizer {
    /// Runs the whole pipeline: reorder point, demand simulation, cost grid
    /// search and service-level sweep.
    pub fn run_analysis(&self, plan: &AnalysisPlan) -> Result<InventoryReport> {
        // 1. REORDER POINT
        let reorder = self.reorder_point(plan.service_level)?;

        // 2. SIMULATE DEMAND
        let demand = self.simulate_demand(plan.sample_count, plan.seed)?;
        let demand_summary = demand
            .summary()
            .ok_or_else(|| DistributionError::invalid("demand series is empty"))?;

        // 3. GRID SEARCH
        let candidates = plan.level_grid.points()?;
        let optimum = self.optimize_level(&demand, &candidates)?;

        // 4. SENSITIVITY
        let service_levels = plan.service_grid.points()?;
        let sensitivity = self.reorder_point_sensitivity(&service_levels)?;

        let critical_ratio = self.critical_ratio();
        let newsvendor_level = match self.newsvendor_level() {
            Ok(level) => Some(level),
            Err(err) => {
                warn!("No analytic newsvendor level (critical ratio {critical_ratio}): {err}");
                None
            }
        };

        info!(
            "Reorder point {:.1} (safety stock {:.1}) at service level {}",
            reorder.reorder_point, reorder.safety_stock, reorder.service_level
        );

        Ok(InventoryReport {
            reorder,
            demand,
            demand_summary,
            optimum,
            sensitivity,
            critical_ratio,
            newsvendor_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::InventoryConfig;
    use float_cmp::assert_approx_eq;

    #[test]
    fn default_plan_matches_reference_run() {
        let optimizer = InventoryOptimizer::new(InventoryConfig::default()).unwrap();
        let report = optimizer.run_analysis(&AnalysisPlan::default()).unwrap();

        assert_approx_eq!(f64, report.reorder.reorder_point, 246.523_486, epsilon = 1e-5);
        assert_eq!(report.demand.len(), 1000);
        assert_eq!(report.optimum.curve.points.len(), 15);
        assert_eq!(report.sensitivity.len(), 20);
        assert_approx_eq!(f64, report.critical_ratio, 10.0 / 12.0, ulps = 2);
        assert!((115.0..=125.0).contains(&report.optimum.optimal_level));
        let newsvendor = report.newsvendor_level.unwrap();
        assert_approx_eq!(f64, newsvendor, 119.348_431, epsilon = 1e-5);
    }

    #[test]
    fn invalid_plan_is_rejected() {
        let optimizer = InventoryOptimizer::new(InventoryConfig::default()).unwrap();
        let bad_service = AnalysisPlan {
            service_level: 1.0,
            ..AnalysisPlan::default()
        };
        assert!(optimizer.run_analysis(&bad_service).is_err());

        let bad_grid = AnalysisPlan {
            level_grid: Grid {
                start: 150.0,
                end: 80.0,
                step: 5.0,
            },
            ..AnalysisPlan::default()
        };
        assert!(optimizer.run_analysis(&bad_grid).is_err());
    }

    #[test]
    fn free_holding_has_no_newsvendor_level() {
        let optimizer = InventoryOptimizer::new(InventoryConfig {
            holding_cost_per_unit: 0.0,
            ..InventoryConfig::default()
        })
        .unwrap();
        let report = optimizer.run_analysis(&AnalysisPlan::default()).unwrap();

        assert_eq!(report.critical_ratio, 1.0);
        assert_eq!(report.newsvendor_level, None);
        // With free holding, more stock is never worse.
        assert_eq!(report.optimum.optimal_level, 150.0);
    }

    #[test]
    fn free_shortage_has_no_newsvendor_level() {
        let optimizer = InventoryOptimizer::new(InventoryConfig {
            shortage_cost_per_unit: 0.0,
            ..InventoryConfig::default()
        })
        .unwrap();
        let report = optimizer.run_analysis(&AnalysisPlan::default()).unwrap();

        assert_eq!(report.critical_ratio, 0.0);
        assert_eq!(report.newsvendor_level, None);
    }

    #[test]
    fn same_seed_reproduces_report() {
        let optimizer = InventoryOptimizer::new(InventoryConfig::default()).unwrap();
        let plan = AnalysisPlan::default();
        let a = optimizer.run_analysis(&plan).unwrap();
        let b = optimizer.run_analysis(&plan).unwrap();
        assert_eq!(a.demand, b.demand);
        assert_eq!(a.optimum, b.optimum);
    }
}
