// src/inventory.rs

//! Reorder-point and inventory-level optimisation under Normal daily demand.

pub mod analysis;
pub mod config;
pub mod demand;
pub mod optimization;

pub use analysis::{AnalysisPlan, InventoryReport};
pub use config::InventoryConfig;
pub use demand::{DemandRecord, DemandSeries, DemandSummary};
pub use optimization::{
    critical_ratio, CostCurve, CostPoint, InventoryOptimizer, LevelOptimum, ReorderPoint,
};
