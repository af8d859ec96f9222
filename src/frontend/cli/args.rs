use std::ops::Range;
use std::path::PathBuf;

use clap::ArgMatches;

use crate::backend::mathphysics::{CoordinateUnit, Point2D};
use crate::backend::scenario::{GenerationMode, SamplingConfig};
use crate::frontend::FrontendError;
use crate::frontend::config::{
    load_parameter_sets, GenerateConfig, GeneralConfig, LinkConfig
};


pub const ARG_ANTENNA_GAIN: &str  = "antenna gain";
pub const ARG_COORDINATE_MAX: &str = "coordinate max";
pub const ARG_COORDINATE_MIN: &str = "coordinate min";
pub const ARG_COORDINATE_UNIT: &str = "coordinate unit";
pub const ARG_FREQUENCY: &str     = "frequency";
pub const ARG_GENERATION_MODE: &str   = "generation mode";
pub const ARG_INTERFERENCE_EXPONENT: &str = "interference exponent";
pub const ARG_INTERFERER: &str    = "interferer";
pub const ARG_ITERATIONS: &str    = "iterations";
pub const ARG_NOISE_FLOOR: &str   = "noise floor";
pub const ARG_OUTPUT_DIR: &str    = "output directory";
pub const ARG_PARAMETER_FILE: &str = "parameter file";
pub const ARG_RECEIVER: &str      = "receiver";
pub const ARG_SEED: &str          = "seed";
pub const ARG_SIGNAL_EXPONENT: &str = "signal exponent";
pub const ARG_TRANSMIT_POWER: &str  = "transmit power";
pub const ARG_TRANSMITTER: &str     = "transmitter";
pub const ARG_TRANSMITTER_COUNTS: &str = "transmitter counts";

pub const CMD_GENERATE: &str = "generate";
pub const CMD_LINK: &str     = "link";
pub const CMD_SIMULATE: &str = "simulate";

pub const MODE_COORDINATES: &str = "coordinates";
pub const MODE_SECURE: &str      = "secure";

pub const UNIT_KILOMETER: &str = "km";
pub const UNIT_METER: &str     = "m";

pub const DEFAULT_ANTENNA_GAIN: &str  = "16";
pub const DEFAULT_COORDINATE_MAX: &str = "70";
pub const DEFAULT_COORDINATE_MIN: &str = "1";
pub const DEFAULT_FREQUENCY: &str     = "1000";
pub const DEFAULT_INTERFERENCE_EXPONENT: &str = "0";
pub const DEFAULT_ITERATIONS: &str    = "500";
pub const DEFAULT_OUTPUT_DIR: &str    = "results";
pub const DEFAULT_SIGNAL_EXPONENT: &str = "2.5";
pub const DEFAULT_TRANSMIT_POWER: &str  = "40";
pub const DEFAULT_TRANSMITTER: &str     = "0,0";
pub const DEFAULT_TRANSMITTER_COUNTS: [&str; 3] = ["1", "3", "5"];


fn required<'a, T>(
    matches: &'a ArgMatches, 
    id: &'static str
) -> Result<&'a T, FrontendError> 
where 
    T: Clone + Send + Sync + 'static
{
    matches
        .get_one::<T>(id)
        .ok_or(FrontendError::MissingArgument(id))
}


/// # Errors
///
/// Will return `Err` if the output directory is missing.
pub fn general_config(matches: &ArgMatches) -> Result<GeneralConfig, FrontendError> {
    Ok(GeneralConfig::new(
        required::<PathBuf>(matches, ARG_OUTPUT_DIR)?.clone(),
        matches.get_one::<u64>(ARG_SEED).copied(),
    ))
}

/// # Errors
///
/// Will return `Err` if an argument is missing or the parameter file 
/// cannot be loaded.
pub fn generate_config(matches: &ArgMatches) -> Result<GenerateConfig, FrontendError> {
    let transmitter_counts = matches
        .get_many::<usize>(ARG_TRANSMITTER_COUNTS)
        .ok_or(FrontendError::MissingArgument(ARG_TRANSMITTER_COUNTS))?
        .copied()
        .collect();
    let parameter_sets = load_parameter_sets(
        matches
            .get_one::<PathBuf>(ARG_PARAMETER_FILE)
            .map(PathBuf::as_path)
    )?;

    Ok(GenerateConfig {
        transmitter_counts,
        mode: generation_mode(matches)?,
        parameter_sets,
        sampling: SamplingConfig::default(),
    })
}

/// # Errors
///
/// Will return `Err` if a link parameter is missing.
pub fn link_config(matches: &ArgMatches) -> Result<LinkConfig, FrontendError> {
    Ok(LinkConfig {
        transmit_power: *required(matches, ARG_TRANSMIT_POWER)?,
        antenna_gain: *required(matches, ARG_ANTENNA_GAIN)?,
        frequency: *required(matches, ARG_FREQUENCY)?,
        signal_exponent: *required(matches, ARG_SIGNAL_EXPONENT)?,
        interference_exponent: *required(matches, ARG_INTERFERENCE_EXPONENT)?,
        noise_floor: matches.get_one::<f64>(ARG_NOISE_FLOOR).copied(),
        transmitter: *required(matches, ARG_TRANSMITTER)?,
    })
}

/// # Errors
///
/// Will return `Err` if the iteration count is missing.
pub fn iterations(matches: &ArgMatches) -> Result<usize, FrontendError> {
    required(matches, ARG_ITERATIONS).copied()
}

/// # Errors
///
/// Will return `Err` if a bound is missing or the range is empty.
pub fn coordinate_range(matches: &ArgMatches) -> Result<Range<i32>, FrontendError> {
    let min = *required::<i32>(matches, ARG_COORDINATE_MIN)?;
    let max = *required::<i32>(matches, ARG_COORDINATE_MAX)?;

    if min >= max {
        return Err(FrontendError::EmptyCoordinateRange { min, max });
    }

    Ok(min..max)
}

/// # Errors
///
/// Will return `Err` if the receiver or interferer is missing.
pub fn receiver_and_interferer(
    matches: &ArgMatches
) -> Result<(Point2D, Point2D), FrontendError> {
    Ok((
        *required(matches, ARG_RECEIVER)?,
        *required(matches, ARG_INTERFERER)?,
    ))
}

/// # Errors
///
/// Will return `Err` if the unit argument is missing.
pub fn coordinate_unit(matches: &ArgMatches) -> Result<CoordinateUnit, FrontendError> {
    let unit = match required::<String>(matches, ARG_COORDINATE_UNIT)?.as_str() {
        UNIT_METER => CoordinateUnit::Meter,
        _ => CoordinateUnit::Kilometer,
    };

    Ok(unit)
}

fn generation_mode(matches: &ArgMatches) -> Result<GenerationMode, FrontendError> {
    let mode = match required::<String>(matches, ARG_GENERATION_MODE)?.as_str() {
        MODE_SECURE => GenerationMode::SecureText,
        _ => GenerationMode::Coordinates,
    };

    Ok(mode)
}
