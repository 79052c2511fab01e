use lbmcheck::dataset::Dims3;
use std::{
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
};

/// Writes an ascii image data file with the given density and velocity arrays,
/// laid out the way the LBM solver writes its snapshots.
pub fn write_vti<P: AsRef<Path>>(
    directory: P,
    file_name: &str,
    dims: Dims3,
    rho: &[f64],
    v: &[f64],
) -> PathBuf {
    let extent = format!("0 {} 0 {} 0 {}", dims[0] - 1, dims[1] - 1, dims[2] - 1);
    let mut text = String::new();
    writeln!(text, "<?xml version=\"1.0\"?>").unwrap();
    writeln!(
        text,
        "<VTKFile type=\"ImageData\" version=\"0.1\" \
         byte_order=\"LittleEndian\" header_type=\"UInt64\">"
    )
    .unwrap();
    writeln!(
        text,
        "  <ImageData WholeExtent=\"{0}\" Origin=\"0 0 0\" Spacing=\"1 1 1\">\n    \
         <Piece Extent=\"{0}\">",
        extent
    )
    .unwrap();
    writeln!(text, "      <PointData Scalars=\"rho\">").unwrap();
    for (name, n_components, values) in [("rho", 1, rho), ("v", 3, v)] {
        writeln!(
            text,
            "        <DataArray type=\"Float64\" Name=\"{}\" \
             NumberOfComponents=\"{}\" format=\"ascii\">",
            name, n_components
        )
        .unwrap();
        for value in values {
            write!(text, "{} ", ascii_value(*value)).unwrap();
        }
        writeln!(text, "\n        </DataArray>").unwrap();
    }
    writeln!(
        text,
        "      </PointData>\n    </Piece>\n  </ImageData>\n</VTKFile>"
    )
    .unwrap();

    let file_path = directory.as_ref().join(file_name);
    fs::write(&file_path, text).unwrap();
    file_path
}

/// Formats a value the way C's `printf` writes it, so that non-finite
/// values appear as `nan`, `-nan`, `inf` and `-inf`.
fn ascii_value(value: f64) -> String {
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_nan() {
        format!("{}nan", sign)
    } else if value.is_infinite() {
        format!("{}inf", sign)
    } else {
        format!("{:.16e}", value)
    }
}

/// Evenly spaced values starting at the given offset.
pub fn ramp(len: usize, offset: f64) -> Vec<f64> {
    (0..len).map(|idx| offset + 0.5 * idx as f64).collect()
}
