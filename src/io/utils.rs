//! Utilities for input/output.

use super::OverwriteMode;
use crate::error::{Error, Result};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Fails with `FileNotFound` unless the given path refers to an existing file.
pub fn verify_file_exists(file_path: &Path) -> Result<()> {
    if file_path.is_file() {
        Ok(())
    } else {
        Err(Error::FileNotFound(file_path.to_path_buf()))
    }
}

/// Attaches the given path to an I/O error.
pub fn map_io_err(file_path: &Path) -> impl FnOnce(io::Error) -> Error {
    let path: PathBuf = file_path.to_path_buf();
    move |source| Error::Io { path, source }
}

/// Creates the file at the given path for writing, replacing any existing
/// file only if the overwrite mode allows it.
pub fn create_file_and_map_err(
    file_path: &Path,
    overwrite_mode: OverwriteMode,
) -> Result<fs::File> {
    let file = match overwrite_mode {
        OverwriteMode::Always => fs::File::create(file_path),
        OverwriteMode::Never => fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(file_path),
    };
    file.map_err(map_io_err(file_path))
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn never_overwrite_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("existing.txt");
        fs::write(&path, "keep").unwrap();

        match create_file_and_map_err(&path, OverwriteMode::Never) {
            Err(Error::Io { source, .. }) => {
                assert_eq!(source.kind(), io::ErrorKind::AlreadyExists)
            }
            other => panic!("Unexpected result {:?}", other),
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep");

        drop(create_file_and_map_err(&path, OverwriteMode::Always).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.vti");
        assert!(matches!(verify_file_exists(&path), Err(Error::FileNotFound(p)) if p == path));
    }
}
