//! Independent two-sample comparison.
//!
//! Pooled-variance t-test (the scipy `ttest_ind` default with
//! `equal_var=True`) plus a standardized effect size.

use statrs::distribution::{ContinuousCDF, StudentsT};

use super::{check_finite, check_len, Result, StatsError};
use super::descriptive::{mean, variance};

/// Result of an independent two-sample t-test.
#[derive(Debug, Clone, PartialEq)]
pub struct TTest {
    pub statistic: f64,
    pub degrees_of_freedom: f64,
    /// Two-sided p-value.
    pub p_value: f64,
    /// `|m1 − m2| / sqrt((s1² + s2²) / 2)` – difference of means over the
    /// pooled standard deviation.
    pub effect_size: f64,
}

impl TTest {
    /// Significant at the conventional α = 0.05 level.
    pub fn is_significant(&self) -> bool {
        self.p_value < 0.05
    }
}

/// Independent two-sample t-test with pooled variance.
///
/// Identical samples give `t ≈ 0` and `p ≈ 1`.  Two constant samples have
/// no pooled variance to test against and are rejected.
pub fn independent_t_test(a: &[f64], b: &[f64]) -> Result<TTest> {
    check_len(a, 2)?;
    check_len(b, 2)?;
    check_finite(a)?;
    check_finite(b)?;

    let (na, nb) = (a.len() as f64, b.len() as f64);
    let (ma, mb) = (mean(a)?, mean(b)?);
    let (va, vb) = (variance(a)?, variance(b)?);

    let df = na + nb - 2.0;
    let pooled_var = ((na - 1.0) * va + (nb - 1.0) * vb) / df;
    if pooled_var == 0.0 {
        return Err(StatsError::ZeroVariance);
    }

    let se = (pooled_var * (1.0 / na + 1.0 / nb)).sqrt();
    let statistic = (ma - mb) / se;

    // StudentsT::new only fails for non-positive df; df >= 2 here.
    let dist = StudentsT::new(0.0, 1.0, df).map_err(|_| StatsError::TooFewObservations {
        needed: 2,
        got: a.len().min(b.len()),
    })?;
    let p_value = 2.0 * dist.cdf(-statistic.abs());

    let effect_size = (ma - mb).abs() / ((va + vb) / 2.0).sqrt();

    Ok(TTest {
        statistic,
        degrees_of_freedom: df,
        p_value,
        effect_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_samples_are_not_different() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let t = independent_t_test(&x, &x).unwrap();
        assert!(t.statistic.abs() < 1e-12);
        assert!((t.p_value - 1.0).abs() < 1e-9);
        assert!(t.effect_size.abs() < 1e-12);
        assert!(!t.is_significant());
    }

    #[test]
    fn shifted_sample_matches_scipy() {
        // scipy.stats.ttest_ind([1..5], [2..6]):
        //   statistic == -1.0, pvalue == 0.34659350708733416
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [2.0, 3.0, 4.0, 5.0, 6.0];
        let t = independent_t_test(&a, &b).unwrap();
        assert!((t.statistic + 1.0).abs() < 1e-12);
        assert_eq!(t.degrees_of_freedom, 8.0);
        assert!((t.p_value - 0.34659350708733416).abs() < 1e-6);
        // effect size: 1 / sqrt(2.5)
        assert!((t.effect_size - 0.6324555320336759).abs() < 1e-12);
    }

    #[test]
    fn clearly_separated_samples_are_significant() {
        let a = [1.0, 1.1, 0.9, 1.05, 0.95, 1.02];
        let b = [5.0, 5.1, 4.9, 5.05, 4.95, 5.02];
        let t = independent_t_test(&a, &b).unwrap();
        assert!(t.is_significant());
        assert!(t.p_value < 1e-6);
    }

    #[test]
    fn constant_samples_rejected() {
        assert_eq!(
            independent_t_test(&[1.0, 1.0, 1.0], &[2.0, 2.0, 2.0]),
            Err(StatsError::ZeroVariance)
        );
    }

    #[test]
    fn too_small_samples_rejected() {
        assert!(matches!(
            independent_t_test(&[1.0], &[1.0, 2.0]),
            Err(StatsError::TooFewObservations { .. })
        ));
    }
}
