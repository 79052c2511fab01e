//! Error types and macros for terminating the command line programs.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors that can occur while comparing or converting snapshots.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("File {} not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("Could not read grid file {}: {message}", .path.display())]
    Format { path: PathBuf, message: String },

    #[error("No point data array named {0}")]
    MissingField(String),

    #[error("Dimension mismatch for {what}: {left} vs. {right}")]
    DimensionMismatch {
        what: String,
        left: String,
        right: String,
    },

    #[error(
        "Array of length {len} cannot be reshaped to {dims:?} with {multiplicity} component(s)"
    )]
    Shape {
        len: usize,
        dims: [usize; 3],
        multiplicity: usize,
    },

    #[error("I/O error for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not write output: {0}")]
    Output(#[source] io::Error),

    #[error("Iteration {index}: {source}")]
    Iteration {
        index: u64,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attaches the given iteration index to the error.
    pub fn at_iteration(self, index: u64) -> Self {
        Self::Iteration {
            index,
            source: Box::new(self),
        }
    }

    /// Returns the iteration index the error is associated with, if any.
    pub fn iteration(&self) -> Option<u64> {
        match self {
            Self::Iteration { index, .. } => Some(*index),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! exit_with_error {
    ($($print_arg:tt)*) => {{
        eprintln!($($print_arg)*);
        quit::with_code(1);
    }};
}

#[macro_export]
macro_rules! exit_on_error {
    ($result:expr, $($print_arg:tt)*) => {
        match $result {
            Ok(value) => value,
            Err(err) => {
                $crate::exit_with_error!($($print_arg)*, err)
            }
        }
    };
}
