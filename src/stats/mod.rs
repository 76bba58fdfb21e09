/// Statistics layer: stateless reductions over `&[f64]` columns.
///
/// * [`descriptive`] – mean/median/std-dev family, quantiles, skewness,
///   kurtosis, and the per-column summary tables.
/// * [`correlate`]  – Pearson correlation and the pairwise matrix.
/// * [`compare`]    – independent two-sample t-test with effect size.
/// * [`timeseries`] – trend slope, lag-1 autocorrelation, stationarity
///   heuristic.
pub mod compare;
pub mod correlate;
pub mod descriptive;
pub mod timeseries;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    #[error("series is empty")]
    Empty,

    #[error("need at least {needed} observations, got {got}")]
    TooFewObservations { needed: usize, got: usize },

    #[error("series lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("series contains NaN or infinite values")]
    NonFinite,

    #[error("series has zero variance")]
    ZeroVariance,
}

pub type Result<T> = std::result::Result<T, StatsError>;

/// Reject NaN / Inf inputs up front so every downstream reduction can
/// assume finite data.
pub(crate) fn check_finite(data: &[f64]) -> Result<()> {
    if data.iter().any(|v| !v.is_finite()) {
        Err(StatsError::NonFinite)
    } else {
        Ok(())
    }
}

pub(crate) fn check_len(data: &[f64], needed: usize) -> Result<()> {
    if data.is_empty() {
        return Err(StatsError::Empty);
    }
    if data.len() < needed {
        return Err(StatsError::TooFewObservations {
            needed,
            got: data.len(),
        });
    }
    Ok(())
}
