//! Time-series diagnostics: trend, seasonality and stationarity proxies.
//!
//! The series have no explicit time axis; a value's position is its time
//! point, so the trend regression runs against the index `0..n`.

use super::{check_finite, check_len, Result};
use super::descriptive::{mean, std_dev};

/// Number of windows the stationarity heuristic aims for.
const STATIONARITY_WINDOWS: usize = 10;

/// Threshold on the mean-variation ratio below which a series is
/// considered stationary.
const STATIONARITY_THRESHOLD: f64 = 0.5;

// ---------------------------------------------------------------------------
// Linear trend
// ---------------------------------------------------------------------------

/// Least-squares line fitted against the position index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendFit {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendFit {
    /// Fitted value at position `i`.
    pub fn value_at(&self, i: usize) -> f64 {
        self.intercept + self.slope * i as f64
    }
}

/// Ordinary least squares of `values` against `0..n`.
pub fn linear_trend(values: &[f64]) -> Result<TrendFit> {
    check_len(values, 2)?;
    check_finite(values)?;

    let n = values.len() as f64;
    let mx = (n - 1.0) / 2.0;
    let my = mean(values)?;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (i, &y) in values.iter().enumerate() {
        let dx = i as f64 - mx;
        sxx += dx * dx;
        sxy += dx * (y - my);
    }

    let slope = sxy / sxx;
    Ok(TrendFit {
        slope,
        intercept: my - slope * mx,
    })
}

// ---------------------------------------------------------------------------
// Seasonality proxy: lag-1 autocorrelation
// ---------------------------------------------------------------------------

/// Lag-1 autocorrelation coefficient.
///
/// A constant series has no autocorrelation to speak of and yields `NaN`
/// (the Pandas `autocorr()` convention).
pub fn lag1_autocorrelation(values: &[f64]) -> Result<f64> {
    check_len(values, 2)?;
    check_finite(values)?;

    let m = mean(values)?;
    let mut num = 0.0;
    let mut den = 0.0;
    for (i, &x) in values.iter().enumerate() {
        let d = x - m;
        den += d * d;
        if i + 1 < values.len() {
            num += d * (values[i + 1] - m);
        }
    }

    if den == 0.0 {
        return Ok(f64::NAN);
    }
    Ok(num / den)
}

// ---------------------------------------------------------------------------
// Stationarity proxy: windowed mean variation
// ---------------------------------------------------------------------------

/// Windowed-mean-variation verdict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stationarity {
    /// Std dev of the window means over the overall std dev.
    pub mean_variation: f64,
    pub is_stationary: bool,
}

/// Split the series into ~[`STATIONARITY_WINDOWS`] windows and compare the
/// spread of the window means to the overall spread.  A drifting mean
/// inflates the ratio; an i.i.d.-like series keeps it near zero.
pub fn stationarity(values: &[f64]) -> Result<Stationarity> {
    check_len(values, 4)?;
    check_finite(values)?;

    let window = (values.len() / STATIONARITY_WINDOWS).max(2);
    let window_means: Vec<f64> = values
        .chunks(window)
        .map(|w| w.iter().sum::<f64>() / w.len() as f64)
        .collect();

    let overall = std_dev(values)?;
    let mean_variation = if overall == 0.0 {
        0.0
    } else {
        std_dev(&window_means)? / overall
    };

    Ok(Stationarity {
        mean_variation,
        is_stationary: mean_variation < STATIONARITY_THRESHOLD,
    })
}

// ---------------------------------------------------------------------------
// Combined per-series profile
// ---------------------------------------------------------------------------

/// The three diagnostics shown per variable in the Time Series view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesProfile {
    pub trend: TrendFit,
    /// Lag-1 autocorrelation (seasonality proxy).
    pub autocorrelation: f64,
    pub stationarity: Stationarity,
}

pub fn analyze(values: &[f64]) -> Result<SeriesProfile> {
    Ok(SeriesProfile {
        trend: linear_trend(values)?,
        autocorrelation: lag1_autocorrelation(values)?,
        stationarity: stationarity(values)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_recovers_exact_line() {
        let values: Vec<f64> = (0..50).map(|i| 2.0 * i as f64 + 1.0).collect();
        let fit = linear_trend(&values).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-9);
        assert!((fit.value_at(10) - 21.0).abs() < 1e-9);
    }

    #[test]
    fn trend_of_constant_is_flat() {
        let fit = linear_trend(&[3.0; 20]).unwrap();
        assert_eq!(fit.slope, 0.0);
        assert!((fit.intercept - 3.0).abs() < 1e-12);
    }

    #[test]
    fn alternating_series_is_anticorrelated() {
        let values = [1.0, -1.0, 1.0, -1.0, 1.0, -1.0];
        let r = lag1_autocorrelation(&values).unwrap();
        assert!((r + 5.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn trending_series_is_strongly_autocorrelated() {
        let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
        assert!(lag1_autocorrelation(&values).unwrap() > 0.9);
    }

    #[test]
    fn constant_series_autocorrelation_is_nan() {
        assert!(lag1_autocorrelation(&[2.0; 10]).unwrap().is_nan());
    }

    #[test]
    fn ramp_is_non_stationary() {
        let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let s = stationarity(&values).unwrap();
        assert!(!s.is_stationary);
        assert!(s.mean_variation > STATIONARITY_THRESHOLD);
    }

    #[test]
    fn oscillation_is_stationary() {
        let values: Vec<f64> = (0..100).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        let s = stationarity(&values).unwrap();
        assert!(s.is_stationary);
        assert!(s.mean_variation < 0.1);
    }

    #[test]
    fn constant_series_is_stationary() {
        let s = stationarity(&[7.0; 40]).unwrap();
        assert_eq!(s.mean_variation, 0.0);
        assert!(s.is_stationary);
    }

    #[test]
    fn analyze_bundles_all_diagnostics() {
        let values: Vec<f64> = (0..60).map(|i| (i as f64 * 0.4).sin()).collect();
        let p = analyze(&values).unwrap();
        // A slow sine wave: little linear trend, strong lag-1 correlation.
        assert!(p.trend.slope.abs() < 0.05);
        assert!(p.autocorrelation > 0.7);
    }
}
