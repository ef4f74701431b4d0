//! Values derived from loaded columns.

use crate::error::{PlotError, Result};
use ndarray::Array1;

/// Reciprocal of each `color_changes` value.
///
/// Fails with [`PlotError::DivisionByZero`] at the first zero instead of
/// producing an infinity.
pub fn color_lifetime(color_changes: &Array1<f64>) -> Result<Array1<f64>> {
    if let Some(index) = color_changes.iter().position(|&v| v == 0.0) {
        return Err(PlotError::DivisionByZero { index });
    }
    Ok(color_changes.mapv(|v| 1.0 / v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reciprocal_of_each_value() {
        let lifetime = color_lifetime(&Array1::from(vec![1.0, 2.0])).unwrap();
        assert_eq!(lifetime.to_vec(), vec![1.0, 0.5]);
    }

    #[test]
    fn product_with_input_is_one() {
        let input = Array1::from(vec![3.0, 7.0, 0.125, -9.5, 1e6]);
        let lifetime = color_lifetime(&input).unwrap();
        for (l, c) in lifetime.iter().zip(input.iter()) {
            assert!((l * c - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_is_division_by_zero() {
        let err = color_lifetime(&Array1::from(vec![4.0, 0.0, 2.0])).unwrap_err();
        assert!(matches!(err, PlotError::DivisionByZero { index: 1 }));
    }

    #[test]
    fn negative_zero_is_division_by_zero() {
        let err = color_lifetime(&Array1::from(vec![-0.0])).unwrap_err();
        assert!(matches!(err, PlotError::DivisionByZero { index: 0 }));
    }
}
