//! Command line interface for converting snapshots into text matrices.

use super::utils;
use crate::{
    exit_on_error,
    io::{vti::VtiReader, OverwriteMode},
    pipeline::{self, ConversionConfig},
};
use clap::{self, Arg, ArgMatches, Command};

/// Builds a representation of the conversion command.
pub fn create_convert_command() -> Command<'static> {
    let command = Command::new("lbmcheck-convert")
        .version(clap::crate_version!())
        .author(clap::crate_authors!())
        .about("Convert rho and u 3D matrix from VTI to TXT format")
        .arg(
            Arg::new("path")
                .short('p')
                .long("path")
                .value_name("DIR")
                .help("Path of VTI files")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::new("no-overwrite")
                .long("no-overwrite")
                .help("Abort instead of replacing existing TXT files"),
        );
    utils::add_execution_arguments(utils::add_iteration_arguments(command))
}

/// Runs the conversion command with the given arguments.
pub fn run_convert_command(arguments: &ArgMatches) {
    let iterations = utils::get_value_from_required_parseable_argument(arguments, "iterations");
    let every = utils::get_value_from_required_parseable_argument(arguments, "every");
    let path = utils::get_required_string_argument(arguments, "path");
    let overwrite_mode = if arguments.is_present("no-overwrite") {
        OverwriteMode::Never
    } else {
        OverwriteMode::Always
    };

    let config = exit_on_error!(
        ConversionConfig::new(iterations, every, path, overwrite_mode),
        "Error: {}"
    );
    let verbosity = utils::parse_verbosity(arguments);
    utils::configure_thread_pool(arguments);

    exit_on_error!(
        pipeline::convert_all(&VtiReader, &config, &verbosity),
        "Error: {}"
    );
}

/// Runs the conversion program with the arguments of the current process.
pub fn run() {
    run_convert_command(&create_convert_command().get_matches());
}
