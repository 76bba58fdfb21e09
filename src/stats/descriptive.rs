//! Descriptive statistics per measurement column.
//!
//! Conventions match the Pandas defaults the dashboard's numbers are
//! checked against: sample variance with Bessel's correction (ddof = 1),
//! R-7 quantile interpolation, and the sample-adjusted Fisher-Pearson
//! definitions of skewness and excess kurtosis.

use super::{check_finite, check_len, Result, StatsError};

/// Kahan compensated summation.  O(ε) error independent of length.
fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut c = 0.0;
    for &x in data {
        let y = x - c;
        let t = sum + y;
        c = (t - sum) - y;
        sum = t;
    }
    sum
}

/// Arithmetic mean.
pub fn mean(data: &[f64]) -> Result<f64> {
    check_len(data, 1)?;
    check_finite(data)?;
    Ok(kahan_sum(data) / data.len() as f64)
}

/// Sample variance (ddof = 1).
pub fn variance(data: &[f64]) -> Result<f64> {
    check_len(data, 2)?;
    check_finite(data)?;
    let m = kahan_sum(data) / data.len() as f64;
    let ss: f64 = data.iter().map(|&x| (x - m) * (x - m)).sum();
    Ok(ss / (data.len() - 1) as f64)
}

/// Sample standard deviation.
pub fn std_dev(data: &[f64]) -> Result<f64> {
    variance(data).map(f64::sqrt)
}

pub fn min(data: &[f64]) -> Result<f64> {
    check_len(data, 1)?;
    check_finite(data)?;
    Ok(data.iter().copied().fold(f64::INFINITY, f64::min))
}

pub fn max(data: &[f64]) -> Result<f64> {
    check_len(data, 1)?;
    check_finite(data)?;
    Ok(data.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// Quantile with R-7 linear interpolation (the default in R, NumPy and
/// Pandas).  `p` must lie in `[0, 1]`.
pub fn quantile(data: &[f64], p: f64) -> Result<f64> {
    check_len(data, 1)?;
    check_finite(data)?;

    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let h = (sorted.len() - 1) as f64 * p.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    Ok(sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo]))
}

/// Median (50 % quantile).
pub fn median(data: &[f64]) -> Result<f64> {
    quantile(data, 0.5)
}

/// Interquartile range: Q3 − Q1.
pub fn iqr(data: &[f64]) -> Result<f64> {
    Ok(quantile(data, 0.75)? - quantile(data, 0.25)?)
}

/// Central moment of order `k` about the mean (population normalisation).
fn central_moment(data: &[f64], m: f64, k: i32) -> f64 {
    data.iter().map(|&x| (x - m).powi(k)).sum::<f64>() / data.len() as f64
}

/// Sample-adjusted Fisher-Pearson skewness (Pandas `skew()`):
/// `G1 = g1 · sqrt(n(n−1)) / (n−2)` with `g1 = m3 / m2^{3/2}`.
pub fn skewness(data: &[f64]) -> Result<f64> {
    check_len(data, 3)?;
    check_finite(data)?;

    let n = data.len() as f64;
    let m = kahan_sum(data) / n;
    let m2 = central_moment(data, m, 2);
    if m2 == 0.0 {
        return Err(StatsError::ZeroVariance);
    }
    let g1 = central_moment(data, m, 3) / m2.powf(1.5);
    Ok(g1 * (n * (n - 1.0)).sqrt() / (n - 2.0))
}

/// Sample-adjusted excess kurtosis (Pandas `kurtosis()`):
/// `G2 = ((n+1)·g2 + 6) · (n−1) / ((n−2)(n−3))` with `g2 = m4/m2² − 3`.
pub fn kurtosis(data: &[f64]) -> Result<f64> {
    check_len(data, 4)?;
    check_finite(data)?;

    let n = data.len() as f64;
    let m = kahan_sum(data) / n;
    let m2 = central_moment(data, m, 2);
    if m2 == 0.0 {
        return Err(StatsError::ZeroVariance);
    }
    let g2 = central_moment(data, m, 4) / (m2 * m2) - 3.0;
    Ok(((n + 1.0) * g2 + 6.0) * (n - 1.0) / ((n - 2.0) * (n - 3.0)))
}

// ---------------------------------------------------------------------------
// Summary tables shown in the UI
// ---------------------------------------------------------------------------

/// The descriptive-statistics row of the Overview table.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptive {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub skewness: f64,
    pub kurtosis: f64,
}

/// Compute the full descriptive summary of one column.
pub fn describe(data: &[f64]) -> Result<Descriptive> {
    Ok(Descriptive {
        mean: mean(data)?,
        median: median(data)?,
        std_dev: std_dev(data)?,
        min: min(data)?,
        max: max(data)?,
        skewness: skewness(data)?,
        kurtosis: kurtosis(data)?,
    })
}

/// The condensed per-column metrics of the Statistical view.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryMetrics {
    pub mean: f64,
    pub std_dev: f64,
    pub range: f64,
    pub iqr: f64,
}

pub fn summary_metrics(data: &[f64]) -> Result<SummaryMetrics> {
    Ok(SummaryMetrics {
        mean: mean(data)?,
        std_dev: std_dev(data)?,
        range: max(data)? - min(data)?,
        iqr: iqr(data)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-10
    }

    #[test]
    fn mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(), 3.0);
    }

    #[test]
    fn mean_rejects_empty_and_nan() {
        assert_eq!(mean(&[]), Err(StatsError::Empty));
        assert_eq!(mean(&[1.0, f64::NAN]), Err(StatsError::NonFinite));
    }

    #[test]
    fn variance_and_std_dev() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!(close(variance(&v).unwrap(), 4.571428571428571));
        assert!(close(std_dev(&v).unwrap(), 2.138089935299395));
        assert_eq!(
            variance(&[1.0]),
            Err(StatsError::TooFewObservations { needed: 2, got: 1 })
        );
    }

    #[test]
    fn median_odd_even() {
        assert_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
    }

    #[test]
    fn quantiles_r7() {
        let v = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(quantile(&v, 0.25).unwrap(), 2.0);
        assert_eq!(quantile(&v, 0.75).unwrap(), 4.0);
        assert_eq!(iqr(&v).unwrap(), 2.0);
        // Interpolated case: numpy.percentile([1,2,3,4], 25) == 1.75
        assert!(close(quantile(&[1.0, 2.0, 3.0, 4.0], 0.25).unwrap(), 1.75));
    }

    #[test]
    fn skewness_matches_pandas() {
        // pandas.Series([1,2,3,4,10]).skew() == 1.6970562748477138
        assert!(close(
            skewness(&[1.0, 2.0, 3.0, 4.0, 10.0]).unwrap(),
            1.6970562748477138
        ));
        // Symmetric data has zero skewness.
        assert!(close(skewness(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(), 0.0));
    }

    #[test]
    fn kurtosis_matches_pandas() {
        // pandas.Series([1,2,3,4,5]).kurtosis() == -1.2
        assert!(close(kurtosis(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(), -1.2));
        // pandas.Series([1,2,3,4,10]).kurtosis() == 3.152
        assert!(close(kurtosis(&[1.0, 2.0, 3.0, 4.0, 10.0]).unwrap(), 3.152));
    }

    #[test]
    fn moments_reject_constant_series() {
        assert_eq!(skewness(&[5.0; 10]), Err(StatsError::ZeroVariance));
        assert_eq!(kurtosis(&[5.0; 10]), Err(StatsError::ZeroVariance));
    }

    #[test]
    fn describe_bundles_everything() {
        let d = describe(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(d.mean, 3.0);
        assert_eq!(d.median, 3.0);
        assert_eq!(d.min, 1.0);
        assert_eq!(d.max, 5.0);
        assert!(close(d.std_dev, 1.5811388300841898));
    }

    #[test]
    fn summary_metrics_range_and_iqr() {
        let m = summary_metrics(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(m.range, 4.0);
        assert_eq!(m.iqr, 2.0);
    }
}
