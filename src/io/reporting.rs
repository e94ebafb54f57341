// src/io/reporting.rs

use crate::distributions::{CurvePoint, ProbabilityPoint};
use crate::inventory::{CostCurve, DemandSeries, ReorderPoint};
use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::path::Path;

/// Writes any sequence of serialisable rows to a CSV file, with a header row
/// taken from the field names.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "results/cost_curve.csv").
/// * `data` - The rows to write, in order.
pub fn write_records<T: Serialize>(file_path: &Path, data: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(file_path)
        .with_context(|| format!("Could not create {}", file_path.display()))?;

    for record in data {
        wtr.serialize(record)?;
    }

    // Flush the buffer to ensure all data is written
    wtr.flush()?;

    info!(
        "Exported {} rows to '{}'",
        data.len(),
        file_path.display()
    );
    Ok(())
}

pub fn write_probability_table(file_path: &Path, table: &[ProbabilityPoint]) -> Result<()> {
    write_records(file_path, table)
}

pub fn write_curve(file_path: &Path, curve: &[CurvePoint]) -> Result<()> {
    write_records(file_path, curve)
}

pub fn write_cost_curve(file_path: &Path, curve: &CostCurve) -> Result<()> {
    write_records(file_path, &curve.points)
}

pub fn write_sensitivity(file_path: &Path, sensitivity: &[ReorderPoint]) -> Result<()> {
    write_records(file_path, sensitivity)
}

pub fn write_demand(file_path: &Path, demand: &DemandSeries) -> Result<()> {
    write_records(file_path, &demand.records())
}
