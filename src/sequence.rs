//! Iteration indices and the file names derived from them.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Placeholder substituted with the zero-padded iteration number in a name template.
pub const ITERATION_PLACEHOLDER: &str = "{i}";

/// Name template of snapshot files written by the reference solver.
pub const TARGET_TEMPLATE: &str = "ldc.0.{i}.vti";
/// Name template of snapshot files written by the solver under test.
pub const PREDICTION_TEMPLATE: &str = "lbmcl.{i}.vti";
/// Name template of converted text matrix files.
pub const MATRIX_TEMPLATE: &str = "ldc.0.{i}.txt";

/// Number of decimal digits of the given iteration count,
/// or 1 if the count is not positive.
pub fn width(iterations: i64) -> usize {
    if iterations > 0 {
        iterations.to_string().len()
    } else {
        1
    }
}

/// Renders the given iteration index zero-padded to `width` digits.
pub fn pad_index(index: u64, width: usize) -> String {
    format!("{:0width$}", index, width = width)
}

/// The indices 0, `every`, 2*`every`, ... not exceeding `iterations`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IterationSequence {
    iterations: u64,
    every: u64,
}

impl IterationSequence {
    /// Creates a new sequence, failing if the step is not positive or
    /// the iteration count is negative.
    pub fn new(iterations: i64, every: i64) -> Result<Self> {
        if every <= 0 {
            return Err(Error::InvalidConfiguration(format!(
                "step between iterations must be positive, got {}",
                every
            )));
        }
        if iterations < 0 {
            return Err(Error::InvalidConfiguration(format!(
                "number of iterations must not be negative, got {}",
                iterations
            )));
        }
        Ok(Self {
            iterations: iterations as u64,
            every: every as u64,
        })
    }

    /// Zero-padding width shared by every file name and printed index.
    pub fn width(&self) -> usize {
        width(self.iterations as i64)
    }

    /// Number of indices in the sequence.
    pub fn len(&self) -> usize {
        (self.iterations / self.every + 1) as usize
    }

    /// The sequence is never empty since it always starts at 0.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns a fresh iterator over the indices.
    pub fn indices(&self) -> impl Iterator<Item = u64> + Clone {
        (0..=self.iterations).step_by(self.every as usize)
    }
}

impl IntoIterator for IterationSequence {
    type Item = u64;
    type IntoIter = std::iter::StepBy<std::ops::RangeInclusive<u64>>;

    fn into_iter(self) -> Self::IntoIter {
        (0..=self.iterations).step_by(self.every as usize)
    }
}

/// A file name pattern containing the iteration placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameTemplate {
    prefix: String,
    suffix: String,
}

impl NameTemplate {
    /// Parses a template, which must contain the placeholder exactly once.
    pub fn new(pattern: &str) -> Result<Self> {
        match pattern.split_once(ITERATION_PLACEHOLDER) {
            Some((prefix, suffix)) if !suffix.contains(ITERATION_PLACEHOLDER) => Ok(Self {
                prefix: prefix.to_string(),
                suffix: suffix.to_string(),
            }),
            _ => Err(Error::InvalidConfiguration(format!(
                "name template `{}` must contain {} exactly once",
                pattern, ITERATION_PLACEHOLDER
            ))),
        }
    }

    /// Substitutes the zero-padded index into the template.
    pub fn format_name(&self, index: u64, width: usize) -> String {
        format!("{}{}{}", self.prefix, pad_index(index, width), self.suffix)
    }

    /// Returns the path of the file for the given index inside `directory`.
    pub fn path_in<P: AsRef<Path>>(&self, directory: P, index: u64, width: usize) -> PathBuf {
        directory.as_ref().join(self.format_name(index, width))
    }
}
