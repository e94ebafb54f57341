//! The command line interface.
use crate::demos;
use crate::inventory::{InventoryOptimizer, InventoryReport};
use crate::io::reporting;
use crate::log;
use crate::settings::Settings;
use ::log::info;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

/// Probability distribution demonstrations and inventory optimisation.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// The available commands.
    #[command(subcommand)]
    command: Commands,
}

/// The available commands.
#[derive(Subcommand)]
enum Commands {
    /// Poisson arrivals and Binomial defects.
    Discrete {
        /// Directory for CSV output; nothing is written if omitted
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Normal incomes and Exponential waiting times.
    Continuous {
        /// Directory for CSV output; nothing is written if omitted
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Reorder point, cost-optimal inventory level and sensitivity analysis.
    Inventory {
        /// Path to a TOML settings file
        #[arg(short, long)]
        settings: Option<PathBuf>,
        /// Directory for CSV output; nothing is written if omitted
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        /// Override the random seed for demand simulation
        #[arg(long)]
        seed: Option<u64>,
        /// Override the number of simulated days
        #[arg(long)]
        samples: Option<usize>,
    },
}

impl Commands {
    /// Execute the supplied CLI command
    fn execute(self) -> Result<()> {
        match self {
            Self::Discrete { output_dir } => {
                log::init(None)?;
                handle_discrete_command(output_dir.as_deref())
            }
            Self::Continuous { output_dir } => {
                log::init(None)?;
                handle_continuous_command(output_dir.as_deref())
            }
            Self::Inventory {
                settings,
                output_dir,
                seed,
                samples,
            } => {
                let mut settings = Settings::load(settings.as_deref())?;
                log::init(Some(settings.log_level.as_str()))?;
                if let Some(seed) = seed {
                    settings.analysis.seed = seed;
                }
                if let Some(samples) = samples {
                    settings.analysis.sample_count = samples;
                }
                handle_inventory_command(&settings, output_dir.as_deref())
            }
        }
    }
}

/// Parse CLI arguments and run the chosen command
pub fn run_cli() -> Result<()> {
    Cli::parse().command.execute()
}

/// Create `dir` if needed and return the path of `file_name` inside it
fn output_path(dir: &Path, file_name: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Could not create output directory {}", dir.display()))?;
    Ok(dir.join(file_name))
}

fn handle_discrete_command(output_dir: Option<&Path>) -> Result<()> {
    let poisson = demos::poisson_arrivals()?;
    info!("=== Poisson: customers per hour (rate {}) ===", poisson.rate);
    info!("P(3 or fewer customers): {:.4}", poisson.at_most_three);
    info!("P(exactly 5 customers): {:.4}", poisson.exactly_five);
    info!("P(more than 8 customers): {:.4}", poisson.more_than_eight);

    let binomial = demos::binomial_defects()?;
    info!(
        "=== Binomial: defective items (n = {}, p = {}) ===",
        binomial.trials, binomial.p
    );
    info!("P(no defects): {:.4}", binomial.none);
    info!("P(1-2 defects): {:.4}", binomial.one_or_two);
    info!("P(more than 3 defects): {:.4}", binomial.more_than_three);

    if let Some(dir) = output_dir {
        reporting::write_probability_table(&output_path(dir, "poisson.csv")?, &poisson.table)?;
        reporting::write_probability_table(&output_path(dir, "binomial.csv")?, &binomial.table)?;
    }
    Ok(())
}

fn handle_continuous_command(output_dir: Option<&Path>) -> Result<()> {
    let normal = demos::normal_incomes()?;
    info!(
        "=== Normal: monthly income (mean {}, std dev {}) ===",
        normal.mean, normal.std_dev
    );
    info!("25% earn less than: ${:.2}", normal.percentile_25);
    info!("75% earn less than: ${:.2}", normal.percentile_75);
    info!("P(income > $3000): {:.4}", normal.above_3000);
    info!("P($2000 < income <= $3000): {:.4}", normal.between_2000_and_3000);

    let exponential = demos::exponential_waiting_times()?;
    info!(
        "=== Exponential: waiting time (mean {} min) ===",
        exponential.scale
    );
    info!("P(wait < 5 min): {:.4}", exponential.under_5);
    info!("P(wait > 15 min): {:.4}", exponential.over_15);
    info!("90% wait less than: {:.2} min", exponential.percentile_90);

    if let Some(dir) = output_dir {
        reporting::write_curve(&output_path(dir, "normal.csv")?, &normal.curve)?;
        reporting::write_curve(&output_path(dir, "exponential.csv")?, &exponential.curve)?;
    }
    Ok(())
}

fn handle_inventory_command(settings: &Settings, output_dir: Option<&Path>) -> Result<()> {
    let optimizer = InventoryOptimizer::new(settings.inventory)?;
    let report = optimizer.run_analysis(&settings.analysis)?;
    log_inventory_report(settings, &report);

    if let Some(dir) = output_dir {
        reporting::write_demand(&output_path(dir, "demand.csv")?, &report.demand)?;
        reporting::write_cost_curve(&output_path(dir, "cost_curve.csv")?, &report.optimum.curve)?;
        reporting::write_sensitivity(&output_path(dir, "sensitivity.csv")?, &report.sensitivity)?;
    }
    Ok(())
}

fn log_inventory_report(settings: &Settings, report: &InventoryReport) {
    let config = &settings.inventory;
    info!("=== Inventory optimisation results ===");
    info!("Mean demand: {} units/day", config.demand_mean);
    info!("Demand std dev: {} units", config.demand_std_dev);
    info!("Lead time: {} days", config.lead_time_days);
    info!("Holding cost: ${}/unit/day", config.holding_cost_per_unit);
    info!("Shortage cost: ${}/unit", config.shortage_cost_per_unit);
    info!(
        "Simulated demand: mean {:.2}, std dev {:.2}, range [{:.1}, {:.1}]",
        report.demand_summary.mean,
        report.demand_summary.std_dev,
        report.demand_summary.min,
        report.demand_summary.max
    );
    info!("--- Recommendations ---");
    info!("Reorder point: {:.1} units", report.reorder.reorder_point);
    info!("Safety stock: {:.1} units", report.reorder.safety_stock);
    info!("Optimal inventory level: {} units", report.optimum.optimal_level);
    info!("Minimum average cost: ${:.2} per day", report.optimum.minimum_cost);
    match report.newsvendor_level {
        Some(level) => info!(
            "Newsvendor level: {:.1} units (critical ratio {:.3})",
            level, report.critical_ratio
        ),
        None => info!(
            "Newsvendor level: undefined (critical ratio {:.3})",
            report.critical_ratio
        ),
    }
    info!(
        "Target service level: {:.0}%",
        report.reorder.service_level * 100.0
    );
}
