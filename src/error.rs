// src/error.rs

use thiserror::Error;

/// Result alias used by every fallible numeric operation in the crate.
pub type Result<T> = std::result::Result<T, DistributionError>;

/// The only way a numeric operation can fail: an argument outside its
/// mathematically valid domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistributionError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl DistributionError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}

/// Fails unless `p` lies in the open interval (0, 1).
pub(crate) fn check_open_probability(name: &str, p: f64) -> Result<()> {
    if p.is_finite() && p > 0.0 && p < 1.0 {
        Ok(())
    } else {
        Err(DistributionError::invalid(format!(
            "{name} must be in (0, 1), got {p}"
        )))
    }
}
