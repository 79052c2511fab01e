//! Reinterpretation of flat point data arrays as 3D grids.

use crate::{
    dataset::Dims3,
    error::{Error, Result},
};
use ndarray::prelude::*;

/// Returns the dimensions of the grid obtained when the values of a field
/// with the given multiplicity are laid out along the last axis.
///
/// Components of a lattice point end up next to each other along the last
/// axis, so a vector field on a `[nx, ny, nz]` lattice has effective
/// dimensions `[nx, ny, 3*nz]`.
pub fn effective_dims(dims: Dims3, multiplicity: usize) -> Dims3 {
    [dims[0], dims[1], dims[2] * multiplicity]
}

/// A flat array viewed as a row-major 3D grid.
#[derive(Clone, Debug, PartialEq)]
pub struct ReshapedGrid {
    values: Array3<f64>,
}

impl ReshapedGrid {
    /// Dimensions of the grid, including any expansion of the last axis.
    pub fn dims(&self) -> Dims3 {
        let (d0, d1, d2) = self.values.dim();
        [d0, d1, d2]
    }

    pub fn values(&self) -> ArrayView3<f64> {
        self.values.view()
    }

    pub fn get(&self, a: usize, b: usize, c: usize) -> Option<f64> {
        self.values.get((a, b, c)).copied()
    }

    /// Returns the values in row-major order, which reproduces the original flat array.
    pub fn flatten(&self) -> Vec<f64> {
        self.values.iter().copied().collect()
    }
}

/// Reshapes a flat array into a grid with the effective dimensions
/// of the given lattice dimensions and multiplicity.
pub fn reshape(flat: &[f64], dims: Dims3, multiplicity: usize) -> Result<ReshapedGrid> {
    let shape_error = || Error::Shape {
        len: flat.len(),
        dims,
        multiplicity,
    };
    if multiplicity == 0 || flat.len() != dims.iter().product::<usize>() * multiplicity {
        return Err(shape_error());
    }
    let [d0, d1, d2] = effective_dims(dims, multiplicity);
    let values = Array3::from_shape_vec((d0, d1, d2), flat.to_vec()).map_err(|_| shape_error())?;
    Ok(ReshapedGrid { values })
}
