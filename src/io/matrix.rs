//! Writing of snapshot fields as plain text 3D matrices.
//!
//! Each matrix is written as one line per `(a, b)` index pair holding the
//! values along the last axis, a blank line after every block of fixed `a`,
//! and one more blank line after the whole matrix. Vector fields are written
//! with their components interleaved along the last axis.

use super::{utils, OverwriteMode};
use crate::{
    dataset::{VolumetricDataset, SNAPSHOT_FIELDS},
    error::Result,
    num::Scientific,
    reshape::{self, ReshapedGrid},
};
use std::{
    io::{self, BufWriter, Write},
    path::Path,
};

/// Writes the given grid as a text matrix.
pub fn write_matrix<W: Write>(writer: &mut W, grid: &ReshapedGrid) -> io::Result<()> {
    for block in grid.values().outer_iter() {
        for row in block.outer_iter() {
            for value in row.iter() {
                write!(writer, "{} ", Scientific(*value))?;
            }
            writeln!(writer)?;
        }
        writeln!(writer)?;
    }
    writeln!(writer)
}

/// Reshapes the density and velocity fields of the given snapshot for writing.
pub fn snapshot_matrices(dataset: &VolumetricDataset) -> Result<Vec<ReshapedGrid>> {
    SNAPSHOT_FIELDS
        .iter()
        .map(|&field| {
            reshape::reshape(
                dataset.field(field)?,
                dataset.dims(),
                field.kind.multiplicity(),
            )
        })
        .collect()
}

/// Writes the given grids one after another.
pub fn write_matrices<W: Write>(writer: &mut W, grids: &[ReshapedGrid]) -> io::Result<()> {
    for grid in grids {
        write_matrix(writer, grid)?;
    }
    Ok(())
}

/// Writes the given grids to a new file at the given path.
///
/// The file is closed before returning, also when writing fails.
pub fn save_matrices(
    grids: &[ReshapedGrid],
    output_file_path: &Path,
    overwrite_mode: OverwriteMode,
) -> Result<()> {
    let file = utils::create_file_and_map_err(output_file_path, overwrite_mode)?;
    let mut writer = BufWriter::new(file);
    write_matrices(&mut writer, grids)
        .and_then(|_| writer.flush())
        .map_err(utils::map_io_err(output_file_path))
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::dataset::{DENSITY_FIELD_NAME, VELOCITY_FIELD_NAME};

    fn matrix_string(flat: &[f64], dims: [usize; 3], multiplicity: usize) -> String {
        let grid = reshape::reshape(flat, dims, multiplicity).unwrap();
        let mut buffer = Vec::new();
        write_matrix(&mut buffer, &grid).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn minimal_matrix_has_exact_layout() {
        assert_eq!(
            matrix_string(&[1.0, 2.0], [2, 1, 1], 1),
            "1.000000e+00 \n\n2.000000e+00 \n\n\n"
        );
    }

    #[test]
    fn rows_hold_last_axis() {
        assert_eq!(
            matrix_string(&[1.0, 2.0, 3.0, 4.0], [1, 2, 2], 1),
            "1.000000e+00 2.000000e+00 \n3.000000e+00 4.000000e+00 \n\n\n"
        );
    }

    #[test]
    fn vector_rows_interleave_components() {
        assert_eq!(
            matrix_string(&[1.0, 2.0, 3.0, -4.0, 5.0, 6.5], [1, 1, 2], 3),
            "1.000000e+00 2.000000e+00 3.000000e+00 \
             -4.000000e+00 5.000000e+00 6.500000e+00 \n\n\n"
        );
    }

    #[test]
    fn snapshot_writes_density_then_velocity() {
        let fields = vec![
            (DENSITY_FIELD_NAME.to_string(), vec![1.0, 2.0]),
            (VELOCITY_FIELD_NAME.to_string(), vec![0.0, 0.5, 0.0, 0.25, 0.0, 0.0]),
        ]
        .into_iter()
        .collect();
        let dataset = VolumetricDataset::new([2, 1, 1], fields).unwrap();

        let mut buffer = Vec::new();
        write_matrices(&mut buffer, &snapshot_matrices(&dataset).unwrap()).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "1.000000e+00 \n\n2.000000e+00 \n\n\n\
             0.000000e+00 5.000000e-01 0.000000e+00 \n\n\
             2.500000e-01 0.000000e+00 0.000000e+00 \n\n\n"
        );
    }

    #[test]
    fn saved_file_is_complete_and_not_overwritten_on_request() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ldc.0.7.txt");
        let grids = vec![reshape::reshape(&[0.5], [1, 1, 1], 1).unwrap()];

        save_matrices(&grids, &path, OverwriteMode::Always).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "5.000000e-01 \n\n\n");

        let other = vec![reshape::reshape(&[2.0], [1, 1, 1], 1).unwrap()];
        assert!(save_matrices(&other, &path, OverwriteMode::Never).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "5.000000e-01 \n\n\n");
    }
}
