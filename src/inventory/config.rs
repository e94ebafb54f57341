// src/inventory/config.rs

use crate::error::{DistributionError, Result};
use serde::{Deserialize, Serialize};

/// Demand and cost parameters for one inventory analysis.
///
/// Demand is per day; costs are per unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub demand_mean: f64,
    pub demand_std_dev: f64,
    pub holding_cost_per_unit: f64,
    pub shortage_cost_per_unit: f64,
    pub lead_time_days: f64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            demand_mean: 100.0,
            demand_std_dev: 20.0,
            holding_cost_per_unit: 2.0,
            shortage_cost_per_unit: 10.0,
            lead_time_days: 2.0,
        }
    }
}

impl InventoryConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.demand_mean.is_finite() {
            return Err(DistributionError::invalid(format!(
                "demand_mean must be finite, got {}",
                self.demand_mean
            )));
        }
        if !self.demand_std_dev.is_finite() || self.demand_std_dev <= 0.0 {
            return Err(DistributionError::invalid(format!(
                "demand_std_dev must be finite and > 0, got {}",
                self.demand_std_dev
            )));
        }
        for (name, cost) in [
            ("holding_cost_per_unit", self.holding_cost_per_unit),
            ("shortage_cost_per_unit", self.shortage_cost_per_unit),
        ] {
            if !cost.is_finite() || cost < 0.0 {
                return Err(DistributionError::invalid(format!(
                    "{name} must be finite and >= 0, got {cost}"
                )));
            }
        }
        if !self.lead_time_days.is_finite() || self.lead_time_days < 0.0 {
            return Err(DistributionError::invalid(format!(
                "lead_time_days must be finite and >= 0, got {}",
                self.lead_time_days
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_config_is_valid() {
        assert!(InventoryConfig::default().validate().is_ok());
    }

    #[rstest]
    #[case(InventoryConfig { demand_std_dev: 0.0, ..Default::default() })]
    #[case(InventoryConfig { demand_mean: f64::NAN, ..Default::default() })]
    #[case(InventoryConfig { holding_cost_per_unit: -1.0, ..Default::default() })]
    #[case(InventoryConfig { shortage_cost_per_unit: f64::INFINITY, ..Default::default() })]
    #[case(InventoryConfig { lead_time_days: -2.0, ..Default::default() })]
    fn rejects_invalid_config(#[case] config: InventoryConfig) {
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: InventoryConfig = toml::from_str("demand_mean = 50.0").unwrap();
        assert_eq!(config.demand_mean, 50.0);
        assert_eq!(config.lead_time_days, 2.0);
    }
}
