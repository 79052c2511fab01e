//! Error metrics between matching fields of two snapshots.

use crate::{
    dataset::{VolumetricDataset, DENSITY, VELOCITY},
    error::{Error, Result},
};

/// Replaces NaN and infinite values with zero.
///
/// A non-finite value on one side is thereby compared as if it were zero,
/// which understates the error at that point.
pub fn zero_if_not_finite(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Mean squared error and maximum absolute error of a field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldErrors {
    pub mse: f64,
    pub max_abs_err: f64,
}

/// Computes the error metrics between two flat arrays of equal length.
///
/// Vector components are not grouped, so the metrics of a vector field
/// are taken over all of its components jointly.
pub fn compute_errors(field_name: &str, target: &[f64], prediction: &[f64]) -> Result<FieldErrors> {
    if target.len() != prediction.len() {
        return Err(Error::DimensionMismatch {
            what: format!("length of field {}", field_name),
            left: target.len().to_string(),
            right: prediction.len().to_string(),
        });
    }
    if target.is_empty() {
        return Err(Error::DimensionMismatch {
            what: format!("length of field {}", field_name),
            left: "0".to_string(),
            right: "at least 1".to_string(),
        });
    }

    let (sum_of_squares, max_abs_err) = target.iter().zip(prediction).fold(
        (0.0, 0.0),
        |(sum_of_squares, max_abs_err): (f64, f64), (&t, &p)| {
            let diff = zero_if_not_finite(t) - zero_if_not_finite(p);
            (sum_of_squares + diff * diff, max_abs_err.max(diff.abs()))
        },
    );

    Ok(FieldErrors {
        mse: sum_of_squares / target.len() as f64,
        max_abs_err,
    })
}

/// Computes the error metrics of the named field between a target and a prediction dataset.
pub fn compare(
    target: &VolumetricDataset,
    prediction: &VolumetricDataset,
    field_name: &str,
) -> Result<FieldErrors> {
    if target.dims() != prediction.dims() {
        return Err(Error::DimensionMismatch {
            what: "lattice dimensions".to_string(),
            left: format!("{:?}", target.dims()),
            right: format!("{:?}", prediction.dims()),
        });
    }
    compute_errors(
        field_name,
        target.values(field_name)?,
        prediction.values(field_name)?,
    )
}

/// Error metrics of the density and velocity fields for one iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComparisonResult {
    pub index: u64,
    pub density: FieldErrors,
    pub velocity: FieldErrors,
}

impl ComparisonResult {
    pub fn mse_scalar(&self) -> f64 {
        self.density.mse
    }

    pub fn mse_vector(&self) -> f64 {
        self.velocity.mse
    }

    pub fn max_abs_err_scalar(&self) -> f64 {
        self.density.max_abs_err
    }

    pub fn max_abs_err_vector(&self) -> f64 {
        self.velocity.max_abs_err
    }
}

/// Compares the density and velocity fields of two snapshots of the given iteration.
pub fn compare_snapshots(
    index: u64,
    target: &VolumetricDataset,
    prediction: &VolumetricDataset,
) -> Result<ComparisonResult> {
    let density = compare(target, prediction, DENSITY.name)?;
    let velocity = compare(target, prediction, VELOCITY.name)?;
    // Arrays of equal length must also fit the lattice
    for field in [DENSITY, VELOCITY] {
        target.field(field)?;
    }
    Ok(ComparisonResult {
        index,
        density,
        velocity,
    })
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::dataset::{DENSITY_FIELD_NAME, VELOCITY_FIELD_NAME};
    use approx::assert_relative_eq;

    fn dataset(dims: [usize; 3], rho: Vec<f64>, v: Vec<f64>) -> VolumetricDataset {
        let fields = vec![
            (DENSITY_FIELD_NAME.to_string(), rho),
            (VELOCITY_FIELD_NAME.to_string(), v),
        ]
        .into_iter()
        .collect();
        VolumetricDataset::new(dims, fields).unwrap()
    }

    #[test]
    fn nan_is_compared_as_zero() {
        let errors = compute_errors("rho", &[1.0, 2.0, f64::NAN], &[1.0, 2.0, 5.0]).unwrap();
        assert_relative_eq!(errors.mse, 25.0 / 3.0);
        assert_relative_eq!(errors.max_abs_err, 5.0);

        let errors = compute_errors("rho", &[1.0, 2.0, 5.0], &[1.0, f64::INFINITY, 5.0]).unwrap();
        assert_relative_eq!(errors.mse, 4.0 / 3.0);
        assert_relative_eq!(errors.max_abs_err, 2.0);
    }

    #[test]
    fn identical_arrays_have_zero_error() {
        let values = [0.5, -1.5, 3.25, 1e-9];
        let errors = compute_errors("v", &values, &values).unwrap();
        assert_eq!(errors.mse, 0.0);
        assert_eq!(errors.max_abs_err, 0.0);
    }

    #[test]
    fn max_abs_err_is_symmetric() {
        let a = [0.1, -4.0, 2.0, 7.5];
        let b = [0.3, 1.0, -2.0, 7.0];
        let ab = compute_errors("v", &a, &b).unwrap();
        let ba = compute_errors("v", &b, &a).unwrap();
        assert_eq!(ab.max_abs_err, ba.max_abs_err);
        assert_relative_eq!(ab.mse, ba.mse);
        assert_relative_eq!(ab.max_abs_err, 5.0);
    }

    #[test]
    fn length_mismatch_is_reported() {
        assert!(matches!(
            compute_errors("rho", &[1.0, 2.0], &[1.0]),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn lattice_mismatch_is_reported() {
        let target = dataset([2, 1, 1], vec![1.0, 2.0], vec![0.0; 6]);
        let prediction = dataset([1, 2, 1], vec![1.0, 2.0], vec![0.0; 6]);
        assert!(matches!(
            compare(&target, &prediction, "rho"),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn vector_errors_are_taken_over_all_components() {
        let target = dataset([2, 1, 1], vec![1.0, 1.0], vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
        let prediction = dataset([2, 1, 1], vec![1.0, 3.0], vec![0.0, 0.0, 0.0, 0.0, 0.0, 3.0]);
        let result = compare_snapshots(4, &target, &prediction).unwrap();
        assert_eq!(result.index, 4);
        assert_relative_eq!(result.mse_scalar(), 2.0);
        assert_relative_eq!(result.max_abs_err_scalar(), 2.0);
        assert_relative_eq!(result.mse_vector(), 10.0 / 6.0);
        assert_relative_eq!(result.max_abs_err_vector(), 3.0);
    }

    #[test]
    fn differently_sized_vector_fields_are_a_dimension_mismatch() {
        let target = dataset([2, 1, 1], vec![1.0, 1.0], vec![0.0; 6]);
        let prediction = dataset([2, 1, 1], vec![1.0, 1.0], vec![0.0; 2]);
        match compare_snapshots(0, &target, &prediction) {
            Err(Error::DimensionMismatch { what, left, right }) => {
                assert!(what.contains(VELOCITY_FIELD_NAME));
                assert_eq!(left, "6");
                assert_eq!(right, "2");
            }
            other => panic!("Unexpected result {:?}", other),
        }
    }

    #[test]
    fn equally_but_wrongly_sized_fields_are_rejected() {
        let target = dataset([2, 1, 1], vec![1.0, 1.0], vec![0.0; 2]);
        let prediction = dataset([2, 1, 1], vec![1.0, 1.0], vec![0.0; 2]);
        assert!(matches!(
            compare_snapshots(0, &target, &prediction),
            Err(Error::Shape { .. })
        ));
    }
}
