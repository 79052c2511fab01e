//! Utilities for creating the command line interface.

use crate::{exit_on_error, exit_with_error, io::Verbosity};
use clap::{Arg, ArgMatches, Command};
use indicatif::ProgressStyle;
use lazy_static::lazy_static;
use std::str::FromStr;

lazy_static! {
    static ref DEFAULT_PROGRESS_STYLE: ProgressStyle =
        ProgressStyle::default_bar().template("Progress: {bar:40}  {percent}% | ETA: {eta}");
}

/// Adds the `iterations` and `every` arguments shared by all commands.
pub fn add_iteration_arguments(command: Command<'static>) -> Command<'static> {
    command
        .arg(
            Arg::new("iterations")
                .short('i')
                .long("iterations")
                .value_name("NUMBER")
                .help("Number of iterations in the VTI dataset")
                .required(true)
                .allow_hyphen_values(true)
                .takes_value(true),
        )
        .arg(
            Arg::new("every")
                .short('e')
                .long("every")
                .value_name("NUMBER")
                .help("Step number between two iterations")
                .required(true)
                .allow_hyphen_values(true)
                .takes_value(true),
        )
}

/// Adds the arguments controlling status output and parallelism.
pub fn add_execution_arguments(command: Command<'static>) -> Command<'static> {
    command
        .arg(
            Arg::new("n-threads")
                .short('n')
                .long("n-threads")
                .require_equals(true)
                .value_name("NUMBER")
                .help("Number of threads to use for processing iterations [default: all cores]")
                .takes_value(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print status messages"),
        )
        .arg(
            Arg::new("progress")
                .long("progress")
                .help("Show a progress bar over the iterations"),
        )
}

pub fn parse_value_string<T>(argument_name: &str, value_string: &str) -> T
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    exit_on_error!(
        value_string.parse(),
        "Error: Could not parse value for {0}: {1}",
        argument_name
    )
}

pub fn get_value_from_required_parseable_argument<T>(
    arguments: &ArgMatches,
    argument_name: &str,
) -> T
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    parse_value_string(
        argument_name,
        arguments
            .value_of(argument_name)
            .expect("No value for required argument"),
    )
}

pub fn get_required_string_argument<'a>(arguments: &'a ArgMatches, argument_name: &str) -> &'a str {
    arguments
        .value_of(argument_name)
        .expect("No value for required argument")
}

pub fn parse_verbosity(arguments: &ArgMatches) -> Verbosity {
    if arguments.is_present("progress") {
        Verbosity::Progress(DEFAULT_PROGRESS_STYLE.clone())
    } else if arguments.is_present("verbose") {
        Verbosity::Messages
    } else {
        Verbosity::Quiet
    }
}

/// Sizes the global thread pool according to the `n-threads` argument, if given.
pub fn configure_thread_pool(arguments: &ArgMatches) {
    if let Some(value_string) = arguments.value_of("n-threads") {
        let n_threads: usize = parse_value_string("n-threads", value_string);
        if n_threads == 0 {
            exit_with_error!("Error: n-threads must be larger than zero");
        }
        exit_on_error!(
            rayon::ThreadPoolBuilder::new()
                .num_threads(n_threads)
                .build_global(),
            "Error: Could not create thread pool: {}"
        );
    }
}
