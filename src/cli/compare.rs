//! Command line interface for comparing target snapshots with predicted snapshots.

use super::utils;
use crate::{
    exit_on_error,
    io::vti::VtiReader,
    pipeline::{self, ComparisonConfig},
    report,
};
use clap::{self, Arg, ArgMatches, Command};
use std::io;

/// Builds a representation of the comparison command.
pub fn create_compare_command() -> Command<'static> {
    let command = Command::new("lbmcheck-compare")
        .version(clap::crate_version!())
        .author(clap::crate_authors!())
        .about(
            "Calculate the Mean Squared Error (MSE) and the Max Absolute Error (MAE) \
             of density (rho) and velocity (u) from two LBM simulation datasets \
             (target and prediction)",
        )
        .arg(
            Arg::new("target_path")
                .short('t')
                .long("target_path")
                .value_name("DIR")
                .help("Path of target VTI files (format ldc.0.*.vti)")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::new("prediction_path")
                .short('p')
                .long("prediction_path")
                .value_name("DIR")
                .help("Path of prediction VTI files (format lbmcl.*.vti)")
                .required(true)
                .takes_value(true),
        );
    utils::add_execution_arguments(utils::add_iteration_arguments(command))
}

/// Runs the comparison command with the given arguments.
pub fn run_compare_command(arguments: &ArgMatches) {
    let iterations = utils::get_value_from_required_parseable_argument(arguments, "iterations");
    let every = utils::get_value_from_required_parseable_argument(arguments, "every");
    let target_path = utils::get_required_string_argument(arguments, "target_path");
    let prediction_path = utils::get_required_string_argument(arguments, "prediction_path");

    let config = exit_on_error!(
        ComparisonConfig::new(iterations, every, target_path, prediction_path),
        "Error: {}"
    );
    let verbosity = utils::parse_verbosity(arguments);
    utils::configure_thread_pool(arguments);

    let results = pipeline::compare_all(&VtiReader, &config, &verbosity);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    exit_on_error!(
        report::write_table(&mut handle, config.sequence().width(), results),
        "Error: {}"
    );
}

/// Runs the comparison program with the arguments of the current process.
pub fn run() {
    run_compare_command(&create_compare_command().get_matches());
}
