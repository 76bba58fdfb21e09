//! Pearson correlation between measurement columns.

use crate::data::model::Dataset;

use super::{check_finite, check_len, Result, StatsError};

/// Pearson correlation coefficient between two equal-length series.
///
/// A zero-variance input yields `NaN` (the Pandas `corr()` convention)
/// so the matrix below stays total.
pub fn pearson(x: &[f64], y: &[f64]) -> Result<f64> {
    check_len(x, 2)?;
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    check_finite(x)?;
    check_finite(y)?;

    let n = x.len() as f64;
    let mx = x.iter().sum::<f64>() / n;
    let my = y.iter().sum::<f64>() / n;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mx;
        let dy = yi - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denom = (sxx * syy).sqrt();
    if denom == 0.0 {
        return Ok(f64::NAN);
    }
    Ok((sxy / denom).clamp(-1.0, 1.0))
}

/// Pairwise correlation matrix across all dataset columns.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    pub names: Vec<String>,
    /// Row-major `names.len() × names.len()` coefficients.
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

pub fn correlation_matrix(dataset: &Dataset) -> Result<CorrelationMatrix> {
    let series = dataset.series();
    let n = series.len();
    let mut values = vec![vec![0.0; n]; n];

    for i in 0..n {
        values[i][i] = 1.0;
        for j in (i + 1)..n {
            let r = pearson(&series[i].values, &series[j].values)?;
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix {
        names: series.iter().map(|s| s.name.clone()).collect(),
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Series;

    #[test]
    fn self_correlation_is_one() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(pearson(&x, &x).unwrap(), 1.0);
    }

    #[test]
    fn anti_correlation_is_minus_one() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [-1.0, -2.0, -3.0, -4.0, -5.0];
        assert!((pearson(&x, &y).unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn known_coefficient() {
        // scipy.stats.pearsonr([1..5], [2,1,4,3,6]).statistic == 0.8219949365267865
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 1.0, 4.0, 3.0, 6.0];
        assert!((pearson(&x, &y).unwrap() - 0.8219949365267865).abs() < 1e-12);
    }

    #[test]
    fn constant_series_yields_nan() {
        let x = [1.0, 2.0, 3.0];
        let y = [4.0, 4.0, 4.0];
        assert!(pearson(&x, &y).unwrap().is_nan());
    }

    #[test]
    fn mismatched_lengths_rejected() {
        assert_eq!(
            pearson(&[1.0, 2.0], &[1.0]),
            Err(StatsError::LengthMismatch { left: 2, right: 1 })
        );
    }

    #[test]
    fn matrix_is_symmetric_with_unit_diagonal() {
        let ds = Dataset::new(vec![
            Series::new("a", vec![1.0, 2.0, 3.0, 4.0]),
            Series::new("b", vec![2.0, 4.0, 6.0, 8.0]),
            Series::new("c", vec![4.0, 3.0, 2.0, 1.0]),
        ])
        .unwrap();

        let m = correlation_matrix(&ds).unwrap();
        assert_eq!(m.len(), 3);
        for i in 0..3 {
            assert_eq!(m.values[i][i], 1.0);
            for j in 0..3 {
                assert_eq!(m.values[i][j], m.values[j][i]);
            }
        }
        assert!((m.values[0][1] - 1.0).abs() < 1e-12);
        assert!((m.values[0][2] + 1.0).abs() < 1e-12);
    }
}
