//! Comparison and conversion of the snapshots of a range of iterations.
//!
//! Iterations are processed in chunks of as many iterations as there are
//! threads in the `rayon` thread pool. The iterations of a chunk run in
//! parallel, and no chunk is started after a chunk containing a failed
//! iteration. Results are returned in iteration order and end at the first
//! failure, whose error carries the index of its iteration.

use crate::{
    comparison::{self, ComparisonResult},
    dataset::{VolumetricDataset, SNAPSHOT_FIELDS},
    error::{Error, Result},
    io::{matrix, utils, vti::GridFileReader, OverwriteMode, Verbosity},
    reshape::ReshapedGrid,
    sequence::{
        IterationSequence, NameTemplate, MATRIX_TEMPLATE, PREDICTION_TEMPLATE, TARGET_TEMPLATE,
    },
};
use indicatif::{ParallelProgressIterator, ProgressBar};
use rayon::prelude::*;
use std::{
    io,
    path::{Path, PathBuf},
};

/// Configuration of the comparison of target snapshots with predicted snapshots.
#[derive(Clone, Debug)]
pub struct ComparisonConfig {
    sequence: IterationSequence,
    target_path: PathBuf,
    prediction_path: PathBuf,
    target_template: NameTemplate,
    prediction_template: NameTemplate,
}

impl ComparisonConfig {
    pub fn new<P, Q>(
        iterations: i64,
        every: i64,
        target_path: P,
        prediction_path: Q,
    ) -> Result<Self>
    where
        P: Into<PathBuf>,
        Q: Into<PathBuf>,
    {
        Ok(Self {
            sequence: IterationSequence::new(iterations, every)?,
            target_path: target_path.into(),
            prediction_path: prediction_path.into(),
            target_template: NameTemplate::new(TARGET_TEMPLATE)?,
            prediction_template: NameTemplate::new(PREDICTION_TEMPLATE)?,
        })
    }

    pub fn sequence(&self) -> &IterationSequence {
        &self.sequence
    }

    pub fn target_file_path(&self, index: u64) -> PathBuf {
        self.target_template
            .path_in(&self.target_path, index, self.sequence.width())
    }

    pub fn prediction_file_path(&self, index: u64) -> PathBuf {
        self.prediction_template
            .path_in(&self.prediction_path, index, self.sequence.width())
    }
}

/// Configuration of the conversion of snapshots into text matrices.
#[derive(Clone, Debug)]
pub struct ConversionConfig {
    sequence: IterationSequence,
    path: PathBuf,
    overwrite_mode: OverwriteMode,
    input_template: NameTemplate,
    output_template: NameTemplate,
}

impl ConversionConfig {
    pub fn new<P: Into<PathBuf>>(
        iterations: i64,
        every: i64,
        path: P,
        overwrite_mode: OverwriteMode,
    ) -> Result<Self> {
        Ok(Self {
            sequence: IterationSequence::new(iterations, every)?,
            path: path.into(),
            overwrite_mode,
            input_template: NameTemplate::new(TARGET_TEMPLATE)?,
            output_template: NameTemplate::new(MATRIX_TEMPLATE)?,
        })
    }

    pub fn sequence(&self) -> &IterationSequence {
        &self.sequence
    }

    pub fn input_file_path(&self, index: u64) -> PathBuf {
        self.input_template
            .path_in(&self.path, index, self.sequence.width())
    }

    pub fn output_file_path(&self, index: u64) -> PathBuf {
        self.output_template
            .path_in(&self.path, index, self.sequence.width())
    }
}

/// Snapshot of a single iteration, read and reshaped, awaiting writing.
#[derive(Clone, Debug)]
pub struct PreparedConversion {
    pub index: u64,
    pub output_file_path: PathBuf,
    pub grids: Vec<ReshapedGrid>,
}

/// Reads the snapshot at the given path and verifies that it holds
/// consistently sized density and velocity arrays.
pub fn read_snapshot<R: GridFileReader>(
    reader: &R,
    file_path: &Path,
) -> Result<VolumetricDataset> {
    let dataset = reader.read(file_path)?;
    for field in SNAPSHOT_FIELDS {
        dataset.field(field).map_err(|err| Error::Format {
            path: file_path.to_path_buf(),
            message: err.to_string(),
        })?;
    }
    Ok(dataset)
}

/// Compares the target and predicted snapshots of a single iteration.
pub fn compare_iteration<R: GridFileReader>(
    reader: &R,
    config: &ComparisonConfig,
    index: u64,
    verbosity: &Verbosity,
) -> Result<ComparisonResult> {
    let target_file_path = config.target_file_path(index);
    let prediction_file_path = config.prediction_file_path(index);
    if verbosity.print_messages() {
        eprintln!("Reading {}", target_file_path.display());
    }
    let target = read_snapshot(reader, &target_file_path)?;
    if verbosity.print_messages() {
        eprintln!("Reading {}", prediction_file_path.display());
    }
    let prediction = read_snapshot(reader, &prediction_file_path)?;
    comparison::compare_snapshots(index, &target, &prediction)
}

/// Compares the snapshots of every iteration in the configured range.
///
/// The returned results are ordered by iteration index. If an iteration
/// fails, its error is the last element and later chunks are never read.
pub fn compare_all<R: GridFileReader + Sync>(
    reader: &R,
    config: &ComparisonConfig,
    verbosity: &Verbosity,
) -> Vec<Result<ComparisonResult>> {
    let indices: Vec<u64> = config.sequence().indices().collect();
    let progress_bar = verbosity.create_progress_bar(indices.len());

    let mut results = Vec::with_capacity(indices.len());
    for chunk in indices.chunks(chunk_size()) {
        let (outputs, failure) = map_until_failure(chunk.to_vec(), &progress_bar, |index| {
            compare_iteration(reader, config, index, verbosity)
                .map_err(|err| err.at_iteration(index))
        });
        results.extend(outputs.into_iter().map(Ok));
        if let Some(err) = failure {
            results.push(Err(err));
            break;
        }
    }
    progress_bar.finish();
    results
}

/// Reads and reshapes the snapshot of a single iteration without writing
/// anything. Fails if the output file exists and may not be overwritten.
pub fn prepare_conversion<R: GridFileReader>(
    reader: &R,
    config: &ConversionConfig,
    index: u64,
    verbosity: &Verbosity,
) -> Result<PreparedConversion> {
    let input_file_path = config.input_file_path(index);
    let output_file_path = config.output_file_path(index);
    if verbosity.print_messages() {
        println!("Reading {}", input_file_path.display());
    }
    let dataset = read_snapshot(reader, &input_file_path)?;
    let grids = matrix::snapshot_matrices(&dataset)?;
    if config.overwrite_mode == OverwriteMode::Never && output_file_path.exists() {
        return Err(utils::map_io_err(&output_file_path)(io::Error::from(
            io::ErrorKind::AlreadyExists,
        )));
    }
    Ok(PreparedConversion {
        index,
        output_file_path,
        grids,
    })
}

/// Writes the matrices of a prepared snapshot and returns the path of the written file.
pub fn write_conversion(
    prepared: PreparedConversion,
    overwrite_mode: OverwriteMode,
    verbosity: &Verbosity,
) -> Result<PathBuf> {
    if verbosity.print_messages() {
        println!("Writing {}", prepared.output_file_path.display());
    }
    matrix::save_matrices(&prepared.grids, &prepared.output_file_path, overwrite_mode)?;
    Ok(prepared.output_file_path)
}

/// Converts the snapshots of every iteration in the configured range.
///
/// Returns the paths of the written files in iteration order, or the
/// error of the lowest iteration that failed. The snapshots of a chunk are
/// all read before any of them is written, so a missing or malformed
/// snapshot leaves the files of later iterations untouched.
pub fn convert_all<R: GridFileReader + Sync>(
    reader: &R,
    config: &ConversionConfig,
    verbosity: &Verbosity,
) -> Result<Vec<PathBuf>> {
    let indices: Vec<u64> = config.sequence().indices().collect();
    let progress_bar = verbosity.create_progress_bar(indices.len());

    let mut written = Vec::with_capacity(indices.len());
    for chunk in indices.chunks(chunk_size()) {
        let (prepared, read_failure) =
            map_until_failure(chunk.to_vec(), &ProgressBar::hidden(), |index| {
                prepare_conversion(reader, config, index, verbosity)
                    .map_err(|err| err.at_iteration(index))
            });
        let (paths, write_failure) = map_until_failure(prepared, &progress_bar, |prepared| {
            let index = prepared.index;
            write_conversion(prepared, config.overwrite_mode, verbosity)
                .map_err(|err| err.at_iteration(index))
        });
        written.extend(paths);
        if let Some(err) = write_failure.or(read_failure) {
            progress_bar.abandon();
            return Err(err);
        }
    }
    progress_bar.finish();
    Ok(written)
}

fn chunk_size() -> usize {
    rayon::current_num_threads().max(1)
}

/// Applies the given operation to every item in parallel and returns the
/// outputs preceding the first failed item, together with its error.
fn map_until_failure<I, T, F>(
    items: Vec<I>,
    progress_bar: &ProgressBar,
    operation: F,
) -> (Vec<T>, Option<Error>)
where
    I: Send,
    T: Send,
    F: Fn(I) -> Result<T> + Sync + Send,
{
    let results: Vec<Result<T>> = items
        .into_par_iter()
        .progress_with(progress_bar.clone())
        .map(operation)
        .collect();
    let mut outputs = Vec::with_capacity(results.len());
    for result in results {
        match result {
            Ok(output) => outputs.push(output),
            Err(err) => return (outputs, Some(err)),
        }
    }
    (outputs, None)
}
