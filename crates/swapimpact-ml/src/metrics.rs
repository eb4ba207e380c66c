//! Holdout regression metrics

use serde::{Deserialize, Serialize};
use swapimpact_types::MlError;

/// Accuracy summary for one target on a holdout partition
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RegressionMetrics {
    pub sample_count: usize,
    /// Mean absolute error
    pub mae: f64,
    /// Root mean squared error
    pub rmse: f64,
    /// Coefficient of determination; 0 when the target has no variance
    pub r2: f64,
}

impl RegressionMetrics {
    /// Compute metrics from parallel prediction/actual slices
    pub fn from_predictions(predicted: &[f64], actual: &[f64]) -> Result<Self, MlError> {
        if predicted.len() != actual.len() {
            return Err(MlError::DimensionMismatch {
                expected: actual.len(),
                got: predicted.len(),
            });
        }
        if predicted.is_empty() {
            return Ok(Self::default());
        }

        let n = predicted.len() as f64;
        let abs_sum: f64 = predicted
            .iter()
            .zip(actual)
            .map(|(p, a)| (p - a).abs())
            .sum();
        let sq_sum: f64 = predicted
            .iter()
            .zip(actual)
            .map(|(p, a)| (p - a).powi(2))
            .sum();

        let mean_actual = actual.iter().sum::<f64>() / n;
        let ss_tot: f64 = actual.iter().map(|a| (a - mean_actual).powi(2)).sum();
        let r2 = if ss_tot > 0.0 { 1.0 - sq_sum / ss_tot } else { 0.0 };

        Ok(Self {
            sample_count: predicted.len(),
            mae: abs_sum / n,
            rmse: (sq_sum / n).sqrt(),
            r2,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_prediction() {
        let actual = [1.0, 2.0, 3.0];
        let m = RegressionMetrics::from_predictions(&actual, &actual).unwrap();
        assert_eq!(m.sample_count, 3);
        assert!(m.mae.abs() < 1e-12);
        assert!(m.rmse.abs() < 1e-12);
        assert!((m.r2 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_known_errors() {
        let predicted = [2.0, 2.0, 5.0];
        let actual = [1.0, 3.0, 5.0];
        let m = RegressionMetrics::from_predictions(&predicted, &actual).unwrap();
        assert!((m.mae - 2.0 / 3.0).abs() < 1e-12);
        assert!((m.rmse - (2.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_constant_actual_gives_zero_r2() {
        let predicted = [1.0, 2.0];
        let actual = [5.0, 5.0];
        let m = RegressionMetrics::from_predictions(&predicted, &actual).unwrap();
        assert_eq!(m.r2, 0.0);
    }

    #[test]
    fn test_length_mismatch() {
        let result = RegressionMetrics::from_predictions(&[1.0], &[1.0, 2.0]);
        assert!(matches!(result, Err(MlError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_empty_slices() {
        let m = RegressionMetrics::from_predictions(&[], &[]).unwrap();
        assert_eq!(m, RegressionMetrics::default());
    }
}
