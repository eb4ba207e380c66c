//! Zero-mean unit-variance feature standardization

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use swapimpact_types::MlError;

/// Per-column standardization fitted once over a feature matrix
///
/// Uses the population standard deviation. Zero-variance columns keep a
/// divisor of 1 so constant features pass through centered instead of
/// producing NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    means: Vec<f64>,
    stds: Vec<f64>,
}

impl StandardScaler {
    /// Fit column statistics over the full matrix
    pub fn fit(matrix: &Array2<f64>) -> Result<Self, MlError> {
        if matrix.nrows() == 0 {
            return Err(MlError::EmptyTrainingSet);
        }

        let n = matrix.nrows() as f64;
        let mut means = Vec::with_capacity(matrix.ncols());
        let mut stds = Vec::with_capacity(matrix.ncols());

        for column in matrix.columns() {
            let mean = column.sum() / n;
            let variance = column.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
            let std = variance.sqrt();
            means.push(mean);
            stds.push(if std > 0.0 { std } else { 1.0 });
        }

        Ok(Self { means, stds })
    }

    /// Number of columns this scaler was fitted for
    pub fn dimensions(&self) -> usize {
        self.means.len()
    }

    /// Standardize a whole matrix
    pub fn transform(&self, matrix: &Array2<f64>) -> Result<Array2<f64>, MlError> {
        if matrix.ncols() != self.means.len() {
            return Err(MlError::DimensionMismatch {
                expected: self.means.len(),
                got: matrix.ncols(),
            });
        }

        let mut scaled = matrix.clone();
        for (j, mut column) in scaled.columns_mut().into_iter().enumerate() {
            column.mapv_inplace(|v| (v - self.means[j]) / self.stds[j]);
        }
        Ok(scaled)
    }

    /// Standardize a single feature row
    pub fn transform_row(&self, row: &[f64]) -> Result<Vec<f64>, MlError> {
        if row.len() != self.means.len() {
            return Err(MlError::DimensionMismatch {
                expected: self.means.len(),
                got: row.len(),
            });
        }

        Ok(row
            .iter()
            .enumerate()
            .map(|(j, v)| (v - self.means[j]) / self.stds[j])
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_fit_statistics() {
        let matrix = array![[1.0, 10.0], [3.0, 10.0], [5.0, 10.0]];
        let scaler = StandardScaler::fit(&matrix).unwrap();
        assert_eq!(scaler.dimensions(), 2);

        let scaled = scaler.transform(&matrix).unwrap();
        // First column: mean 3, population std sqrt(8/3)
        let expected_std = (8.0f64 / 3.0).sqrt();
        assert!((scaled[[0, 0]] - (1.0 - 3.0) / expected_std).abs() < 1e-12);
        assert!((scaled[[1, 0]]).abs() < 1e-12);
        // Constant column centers to zero without dividing by zero
        assert!((scaled[[0, 1]]).abs() < 1e-12);
        assert!(scaled.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_scaled_columns_have_zero_mean() {
        let matrix = array![[1.0, 2.0], [4.0, 8.0], [7.0, 3.0], [2.0, 5.0]];
        let scaler = StandardScaler::fit(&matrix).unwrap();
        let scaled = scaler.transform(&matrix).unwrap();
        for column in scaled.columns() {
            let mean = column.sum() / column.len() as f64;
            assert!(mean.abs() < 1e-12);
        }
    }

    #[test]
    fn test_transform_row_matches_matrix() {
        let matrix = array![[1.0, 2.0], [4.0, 8.0], [7.0, 3.0]];
        let scaler = StandardScaler::fit(&matrix).unwrap();
        let scaled = scaler.transform(&matrix).unwrap();
        let row = scaler.transform_row(&[4.0, 8.0]).unwrap();
        assert!((row[0] - scaled[[1, 0]]).abs() < 1e-12);
        assert!((row[1] - scaled[[1, 1]]).abs() < 1e-12);
    }

    #[test]
    fn test_dimension_mismatch() {
        let matrix = array![[1.0, 2.0], [3.0, 4.0]];
        let scaler = StandardScaler::fit(&matrix).unwrap();
        assert!(matches!(
            scaler.transform_row(&[1.0]),
            Err(MlError::DimensionMismatch { expected: 2, got: 1 })
        ));
    }

    #[test]
    fn test_empty_matrix_rejected() {
        let matrix = Array2::<f64>::zeros((0, 3));
        assert!(matches!(
            StandardScaler::fit(&matrix),
            Err(MlError::EmptyTrainingSet)
        ));
    }
}
