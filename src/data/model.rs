use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Series – one named measurement column
// ---------------------------------------------------------------------------

/// A single measurement series (one column of the dataset).
/// There is no explicit time axis; the value's position is its time point.
#[derive(Debug, Clone)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Series {
            name: name.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset has no columns")]
    NoColumns,

    #[error("column '{name}' is empty")]
    EmptyColumn { name: String },

    #[error("column '{name}' has {len} values, expected {expected}")]
    LengthMismatch {
        name: String,
        len: usize,
        expected: usize,
    },
}

/// The full loaded dataset: a set of equal-length numeric columns.
/// Built once at load time and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    series: Vec<Series>,
    rows: usize,
}

impl Dataset {
    /// Build a dataset from columns, enforcing the equal-length invariant.
    pub fn new(series: Vec<Series>) -> Result<Self, DatasetError> {
        let first = series.first().ok_or(DatasetError::NoColumns)?;
        let rows = first.len();

        for s in &series {
            if s.is_empty() {
                return Err(DatasetError::EmptyColumn {
                    name: s.name.clone(),
                });
            }
            if s.len() != rows {
                return Err(DatasetError::LengthMismatch {
                    name: s.name.clone(),
                    len: s.len(),
                    expected: rows,
                });
            }
        }

        Ok(Dataset { series, rows })
    }

    /// Number of observations per column.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn n_series(&self) -> usize {
        self.series.len()
    }

    /// All columns in load order.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Column by position.
    pub fn series_at(&self, idx: usize) -> Option<&Series> {
        self.series.get(idx)
    }

    /// Ordered column names.
    pub fn names(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.name.as_str()).collect()
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} variables \u{00d7} {} observations",
            self.n_series(),
            self.rows()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_length_columns_accepted() {
        let ds = Dataset::new(vec![
            Series::new("a", vec![1.0, 2.0]),
            Series::new("b", vec![3.0, 4.0]),
        ])
        .unwrap();
        assert_eq!(ds.rows(), 2);
        assert_eq!(ds.n_series(), 2);
        assert_eq!(ds.names(), vec!["a", "b"]);
    }

    #[test]
    fn unequal_lengths_rejected() {
        let err = Dataset::new(vec![
            Series::new("a", vec![1.0, 2.0]),
            Series::new("b", vec![3.0]),
        ])
        .unwrap_err();
        assert!(matches!(err, DatasetError::LengthMismatch { .. }));
    }

    #[test]
    fn empty_dataset_rejected() {
        assert!(matches!(
            Dataset::new(Vec::new()).unwrap_err(),
            DatasetError::NoColumns
        ));
        assert!(matches!(
            Dataset::new(vec![Series::new("a", Vec::new())]).unwrap_err(),
            DatasetError::EmptyColumn { .. }
        ));
    }
}
