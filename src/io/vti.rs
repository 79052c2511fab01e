//! Reading of snapshots stored as VTK XML image data (`.vti`) files.

use super::utils;
use crate::{
    dataset::{Dims3, VolumetricDataset},
    error::{Error, Result},
};
use std::{collections::HashMap, path::Path};
use vtkio::model::{Attribute, DataSet, Extent, IOBuffer, Piece, Vtk};

/// Defines how snapshot files are turned into datasets.
pub trait GridFileReader {
    /// Reads the snapshot file at the given path.
    fn read(&self, file_path: &Path) -> Result<VolumetricDataset>;
}

/// Reader for single-piece VTK image data files.
#[derive(Clone, Copy, Debug, Default)]
pub struct VtiReader;

impl GridFileReader for VtiReader {
    fn read(&self, file_path: &Path) -> Result<VolumetricDataset> {
        read_vti_file(file_path)
    }
}

/// Reads the point data arrays and lattice dimensions of the image data file
/// at the given path. Arrays that are not floating-point are skipped.
///
/// The lattice dimensions are given by the whole extent, which the extent
/// of the single piece must agree with.
pub fn read_vti_file(file_path: &Path) -> Result<VolumetricDataset> {
    utils::verify_file_exists(file_path)?;

    let format_error = |message: String| Error::Format {
        path: file_path.to_path_buf(),
        message,
    };

    let vtk = Vtk::import(file_path).map_err(|err| format_error(err.to_string()))?;

    let (whole_extent, mut pieces) = match vtk.data {
        DataSet::ImageData { extent, pieces, .. } => (extent, pieces.into_iter()),
        _ => return Err(format_error("data set is not image data".to_string())),
    };
    let piece = match (pieces.next(), pieces.next()) {
        (Some(Piece::Inline(piece)), None) => *piece,
        (Some(_), None) => return Err(format_error("piece data is not inline".to_string())),
        (None, _) => return Err(format_error("file contains no pieces".to_string())),
        (Some(_), Some(_)) => {
            return Err(format_error(
                "files with multiple pieces are not supported".to_string(),
            ))
        }
    };

    let dims = extent_to_dims(&whole_extent);
    let piece_dims = extent_to_dims(&piece.extent);
    if piece_dims != dims {
        return Err(format_error(format!(
            "piece extent spans {:?} points but the whole extent spans {:?}",
            piece_dims, dims
        )));
    }

    let mut fields = HashMap::new();
    for attribute in piece.data.point {
        if let Attribute::DataArray(array) = attribute {
            if let Some(values) = buffer_into_f64(array.data) {
                fields.insert(array.name, values);
            }
        }
    }

    VolumetricDataset::new(dims, fields).map_err(|err| format_error(err.to_string()))
}

/// Number of points along each axis spanned by the given extent.
fn extent_to_dims(extent: &Extent) -> Dims3 {
    match extent {
        Extent::Dims(dims) => [dims[0] as usize, dims[1] as usize, dims[2] as usize],
        Extent::Ranges(ranges) => {
            let count =
                |dim: usize| (*ranges[dim].end() - *ranges[dim].start() + 1).max(0) as usize;
            [count(0), count(1), count(2)]
        }
    }
}

fn buffer_into_f64(buffer: IOBuffer) -> Option<Vec<f64>> {
    match buffer {
        IOBuffer::F64(values) => Some(values),
        IOBuffer::F32(values) => Some(values.into_iter().map(f64::from).collect()),
        _ => None,
    }
}
