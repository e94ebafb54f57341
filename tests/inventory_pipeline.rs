//! End-to-end run of the inventory analysis with CSV export.
use std::fs;
use stochastic_inventory::inventory::{AnalysisPlan, InventoryConfig, InventoryOptimizer};
use stochastic_inventory::io::reporting;
use tempfile::tempdir;

#[test]
fn reference_analysis_exports_curves() {
    let optimizer = InventoryOptimizer::new(InventoryConfig::default()).unwrap();
    let report = optimizer.run_analysis(&AnalysisPlan::default()).unwrap();

    assert!((report.reorder.reorder_point - 246.5).abs() < 0.5);
    assert!((report.reorder.safety_stock - 46.5).abs() < 0.5);
    assert!(report
        .sensitivity
        .windows(2)
        .all(|w| w[1].reorder_point >= w[0].reorder_point));
    assert!(report
        .optimum
        .curve
        .points
        .iter()
        .all(|p| report.optimum.minimum_cost <= p.total_cost));

    let dir = tempdir().unwrap();
    let cost_path = dir.path().join("cost_curve.csv");
    let sensitivity_path = dir.path().join("sensitivity.csv");
    reporting::write_cost_curve(&cost_path, &report.optimum.curve).unwrap();
    reporting::write_sensitivity(&sensitivity_path, &report.sensitivity).unwrap();

    let cost_csv = fs::read_to_string(&cost_path).unwrap();
    assert!(cost_csv.starts_with("level,holding_cost,shortage_cost,total_cost\n"));
    assert_eq!(cost_csv.lines().count(), 16);

    let sensitivity_csv = fs::read_to_string(&sensitivity_path).unwrap();
    assert!(sensitivity_csv.starts_with("service_level,z_score,reorder_point,safety_stock\n"));
    assert_eq!(sensitivity_csv.lines().count(), 21);
}

#[test]
fn seed_is_the_only_source_of_randomness() {
    let optimizer = InventoryOptimizer::new(InventoryConfig::default()).unwrap();
    let a = optimizer.simulate_demand(250, 9).unwrap();
    let b = optimizer.simulate_demand(250, 9).unwrap();
    let c = optimizer.simulate_demand(250, 10).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}
