use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{value_parser, Arg, ArgMatches, Command};

use crate::backend::mathphysics::Point2D;
use crate::backend::montecarlo::MAX_ITERATIONS;

use super::{runner, FrontendError};

use args::*;


pub mod args;


pub fn command() -> Command {
    Command::new("link_budget_sim")
        .version(env!("CARGO_PKG_VERSION"))
        .about(
            "Generates RF interception scenarios and evaluates their link \
            budgets."
        )
        .arg(
            Arg::new(ARG_OUTPUT_DIR)
                .short('o')
                .long("output")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_OUTPUT_DIR)
                .help("Set the directory for CSV output")
        )
        .arg(
            Arg::new(ARG_SEED)
                .long("seed")
                .global(true)
                .value_parser(value_parser!(u64))
                .help("Seed the random generator for reproducible output")
        )
        .subcommand(generate_command())
        .subcommand(simulate_command())
        .subcommand(link_command())
        .subcommand_required(true)
        .arg_required_else_help(true)
}

fn generate_command() -> Command {
    Command::new(CMD_GENERATE)
        .about("Generate scenario input tables")
        .arg(
            Arg::new(ARG_TRANSMITTER_COUNTS)
                .short('n')
                .long("transmitters")
                .num_args(1..)
                .value_delimiter(',')
                .value_parser(value_parser!(usize))
                .default_values(DEFAULT_TRANSMITTER_COUNTS)
                .help("Set transmitter counts to generate tables for")
        )
        .arg(
            Arg::new(ARG_GENERATION_MODE)
                .short('m')
                .long("mode")
                .value_parser([MODE_COORDINATES, MODE_SECURE])
                .default_value(MODE_COORDINATES)
                .help("Choose the table layout")
        )
        .arg(
            Arg::new(ARG_PARAMETER_FILE)
                .short('p')
                .long("parameters")
                .value_parser(value_parser!(PathBuf))
                .help("Load parameter sets from a TOML file")
        )
}

fn simulate_command() -> Command {
    Command::new(CMD_SIMULATE)
        .about("Run Monte Carlo link budget trials")
        .args(link_arguments())
        .arg(
            Arg::new(ARG_ITERATIONS)
                .short('i')
                .long("iterations")
                .value_parser(
                    RangedU64ValueParser::<usize>::new()
                        .range(0..=MAX_ITERATIONS as u64)
                )
                .default_value(DEFAULT_ITERATIONS)
                .help("Set the number of trials")
        )
        .arg(
            Arg::new(ARG_COORDINATE_MIN)
                .long("min")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i32))
                .default_value(DEFAULT_COORDINATE_MIN)
                .help("Set the inclusive lower bound of random coordinates")
        )
        .arg(
            Arg::new(ARG_COORDINATE_MAX)
                .long("max")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i32))
                .default_value(DEFAULT_COORDINATE_MAX)
                .help("Set the exclusive upper bound of random coordinates")
        )
}

fn link_command() -> Command {
    Command::new(CMD_LINK)
        .about("Evaluate a single link budget")
        .args(link_arguments())
        .arg(
            Arg::new(ARG_RECEIVER)
                .short('r')
                .long("receiver")
                .required(true)
                .allow_hyphen_values(true)
                .value_parser(value_parser!(Point2D))
                .help("Set receiver coordinates as x,y")
        )
        .arg(
            Arg::new(ARG_INTERFERER)
                .short('j')
                .long("interferer")
                .required(true)
                .allow_hyphen_values(true)
                .value_parser(value_parser!(Point2D))
                .help("Set interferer coordinates as x,y")
        )
        .arg(
            Arg::new(ARG_COORDINATE_UNIT)
                .short('u')
                .long("unit")
                .value_parser([UNIT_KILOMETER, UNIT_METER])
                .default_value(UNIT_KILOMETER)
                .help("Choose the unit of the coordinates")
        )
}

fn link_arguments() -> [Arg; 7] {
    [
        Arg::new(ARG_TRANSMIT_POWER)
            .long("power")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f64))
            .default_value(DEFAULT_TRANSMIT_POWER)
            .help("Set the transmit power in dBm"),
        Arg::new(ARG_ANTENNA_GAIN)
            .long("gain")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f64))
            .default_value(DEFAULT_ANTENNA_GAIN)
            .help("Set the antenna gain in dB"),
        Arg::new(ARG_FREQUENCY)
            .short('f')
            .long("frequency")
            .value_parser(value_parser!(f64))
            .default_value(DEFAULT_FREQUENCY)
            .help("Set the carrier frequency in MHz"),
        Arg::new(ARG_SIGNAL_EXPONENT)
            .long("signal-exponent")
            .value_parser(value_parser!(f64))
            .default_value(DEFAULT_SIGNAL_EXPONENT)
            .help("Set the path loss exponent of the desired signal"),
        Arg::new(ARG_INTERFERENCE_EXPONENT)
            .long("interference-exponent")
            .value_parser(value_parser!(f64))
            .default_value(DEFAULT_INTERFERENCE_EXPONENT)
            .help("Set the path loss exponent of the interferer"),
        Arg::new(ARG_NOISE_FLOOR)
            .long("noise-floor")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f64))
            .help("Add a noise floor in dBm to the interference power"),
        Arg::new(ARG_TRANSMITTER)
            .short('t')
            .long("transmitter")
            .allow_hyphen_values(true)
            .value_parser(value_parser!(Point2D))
            .default_value(DEFAULT_TRANSMITTER)
            .help("Set transmitter coordinates as x,y"),
    ]
}


/// # Errors
///
/// Will return `Err` if the chosen command fails.
pub fn cli() -> Result<(), FrontendError> {
    let matches = command().get_matches();

    handle_arguments(&matches)
}

fn handle_arguments(matches: &ArgMatches) -> Result<(), FrontendError> {
    let Some((command_name, matches)) = matches.subcommand() else {
        return Ok(());
    };

    let general_config = general_config(matches)?;

    match command_name {
        CMD_GENERATE => runner::generate(
            &general_config, 
            &generate_config(matches)?
        ),
        CMD_SIMULATE => runner::simulate(
            &general_config,
            &link_config(matches)?.trial_config(
                iterations(matches)?, 
                coordinate_range(matches)?
            )
        ),
        CMD_LINK => {
            let (receiver, interferer) = receiver_and_interferer(matches)?;
            let link_budget = link_config(matches)?
                .builder(coordinate_unit(matches)?)
                .set_receiver(receiver)
                .set_interferer(interferer)
                .build()?;

            runner::link(&link_budget);

            Ok(())
        }
        _ => Ok(()),
    }
}
