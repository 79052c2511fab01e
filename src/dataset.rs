//! In-memory representation of a snapshot on a regular 3D lattice.

use crate::error::{Error, Result};
use std::collections::HashMap;

/// Number of lattice points along each of the three axes.
pub type Dims3 = [usize; 3];

/// Name of the density point data array.
pub const DENSITY_FIELD_NAME: &str = "rho";
/// Name of the velocity point data array.
pub const VELOCITY_FIELD_NAME: &str = "v";

/// Whether a point data array holds one or three values per lattice point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Scalar,
    Vector,
}

impl FieldKind {
    /// Number of values stored for each lattice point.
    pub fn multiplicity(&self) -> usize {
        match self {
            Self::Scalar => 1,
            Self::Vector => 3,
        }
    }
}

/// A named field together with its kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// The density field.
pub const DENSITY: FieldSpec = FieldSpec {
    name: DENSITY_FIELD_NAME,
    kind: FieldKind::Scalar,
};

/// The velocity field.
pub const VELOCITY: FieldSpec = FieldSpec {
    name: VELOCITY_FIELD_NAME,
    kind: FieldKind::Vector,
};

/// Fields processed for every snapshot, in output order.
pub const SNAPSHOT_FIELDS: [FieldSpec; 2] = [DENSITY, VELOCITY];

/// Lattice dimensions and named point data arrays of a single snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct VolumetricDataset {
    dims: Dims3,
    fields: HashMap<String, Vec<f64>>,
}

impl VolumetricDataset {
    /// Creates a new dataset from the given lattice dimensions and point data arrays.
    ///
    /// All dimensions must be positive.
    pub fn new(dims: Dims3, fields: HashMap<String, Vec<f64>>) -> Result<Self> {
        if dims.iter().any(|&dim| dim == 0) {
            return Err(Error::DimensionMismatch {
                what: "lattice dimensions".to_string(),
                left: format!("{:?}", dims),
                right: "all positive".to_string(),
            });
        }
        Ok(Self { dims, fields })
    }

    pub fn dims(&self) -> Dims3 {
        self.dims
    }

    /// Total number of lattice points.
    pub fn n_points(&self) -> usize {
        self.dims.iter().product()
    }

    /// Returns the flat values of the point data array with the given name.
    pub fn values(&self, name: &str) -> Result<&[f64]> {
        self.fields
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::MissingField(name.to_string()))
    }

    /// Returns the flat values of the given field, verifying that the array
    /// length is consistent with the lattice dimensions.
    pub fn field(&self, field: FieldSpec) -> Result<&[f64]> {
        let values = self.values(field.name)?;
        let multiplicity = field.kind.multiplicity();
        if values.len() != self.n_points() * multiplicity {
            return Err(Error::Shape {
                len: values.len(),
                dims: self.dims,
                multiplicity,
            });
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn dataset(dims: Dims3, rho: Vec<f64>) -> VolumetricDataset {
        let fields = vec![(DENSITY_FIELD_NAME.to_string(), rho)]
            .into_iter()
            .collect();
        VolumetricDataset::new(dims, fields).unwrap()
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(matches!(
            VolumetricDataset::new([2, 0, 1], HashMap::new()),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn field_length_is_checked_against_dims() {
        let data = dataset([2, 1, 1], vec![1.0, 2.0]);
        assert_eq!(data.n_points(), 2);
        assert_eq!(data.field(DENSITY).unwrap(), &[1.0, 2.0]);

        let data = dataset([3, 1, 1], vec![1.0, 2.0]);
        assert!(matches!(data.field(DENSITY), Err(Error::Shape { len: 2, .. })));
    }

    #[test]
    fn missing_field_is_reported_by_name() {
        let data = dataset([2, 1, 1], vec![1.0, 2.0]);
        match data.field(VELOCITY) {
            Err(Error::MissingField(name)) => assert_eq!(name, "v"),
            other => panic!("Unexpected result {:?}", other),
        }
    }
}
