//! Probability distributions and a stochastic inventory optimiser.
//!
//! - [`distributions`]: Poisson, Binomial, Normal and Exponential evaluated in
//!   closed form (PMF/PDF, CDF, tail, quantile).
//! - [`inventory`]: reorder point and safety stock, seeded demand
//!   simulation, cost-minimising inventory level by grid search, and
//!   reorder-point sensitivity to the service level.
//! - [`demos`]: the fixed-parameter demonstration pipelines.
//! - [`io`]: CSV export of the computed curves.
pub mod cli;
pub mod demos;
pub mod distributions;
pub mod error;
pub mod grid;
pub mod inventory;
pub mod io;
pub mod log;
pub mod settings;
pub mod special;

pub use error::{DistributionError, Result};
