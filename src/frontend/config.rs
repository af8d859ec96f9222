use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use thiserror::Error;

use crate::backend::linkbudget::LinkBudgetBuilder;
use crate::backend::mathphysics::{CoordinateUnit, Point2D};
use crate::backend::montecarlo::TrialConfig;
use crate::backend::scenario::{
    default_parameter_sets, GenerationMode, ParameterSet, SamplingConfig
};


#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read parameter file `{}`: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse parameter file `{}`: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Parameter file `{}` defines no parameter sets", .0.display())]
    NoParameterSets(PathBuf),
}


#[derive(Debug, Deserialize)]
struct ParameterFile {
    #[serde(rename = "parameter_set", default)]
    parameter_sets: Vec<ParameterSet>,
}


/// Parses `[[parameter_set]]` tables from TOML text.
///
/// # Errors
///
/// Will return `Err` if the text is not a valid parameter file or holds no
/// parameter sets.
pub fn parse_parameter_sets(
    text: &str, 
    path: &Path
) -> Result<Vec<ParameterSet>, ConfigError> {
    let parameter_file: ParameterFile = toml::from_str(text)
        .map_err(|source| ConfigError::Parse { 
            path: path.to_path_buf(), 
            source 
        })?;

    if parameter_file.parameter_sets.is_empty() {
        return Err(ConfigError::NoParameterSets(path.to_path_buf()));
    }

    Ok(parameter_file.parameter_sets)
}

/// Loads parameter sets from `path`, or returns the built-in sets if no
/// path is given.
///
/// # Errors
///
/// Will return `Err` if the file cannot be read or parsed.
pub fn load_parameter_sets(
    path: Option<&Path>
) -> Result<Vec<ParameterSet>, ConfigError> {
    let Some(path) = path else {
        return Ok(default_parameter_sets());
    };

    let text = fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { 
            path: path.to_path_buf(), 
            source 
        })?;
    let parameter_sets = parse_parameter_sets(&text, path)?;

    info!(
        "Loaded {} parameter sets from {}", 
        parameter_sets.len(), 
        path.display()
    );

    Ok(parameter_sets)
}


#[derive(Clone, Debug, PartialEq)]
pub struct GeneralConfig {
    output_dir: PathBuf,
    seed: Option<u64>,
}

impl GeneralConfig {
    #[must_use]
    pub fn new(output_dir: PathBuf, seed: Option<u64>) -> Self {
        Self { output_dir, seed }
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    // Seeded generator if a seed is configured, OS entropy otherwise.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}


#[derive(Clone, Debug, PartialEq)]
pub struct GenerateConfig {
    pub transmitter_counts: Vec<usize>,
    pub mode: GenerationMode,
    pub parameter_sets: Vec<ParameterSet>,
    pub sampling: SamplingConfig,
}


// Link parameters shared by the `simulate` and `link` commands.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkConfig {
    pub transmit_power: f64,
    pub antenna_gain: f64,
    pub frequency: f64,
    pub signal_exponent: f64,
    pub interference_exponent: f64,
    pub noise_floor: Option<f64>,
    pub transmitter: Point2D,
}

impl LinkConfig {
    #[must_use]
    pub fn trial_config(
        &self, 
        iterations: usize, 
        coordinate_range: std::ops::Range<i32>
    ) -> TrialConfig {
        TrialConfig {
            iterations,
            transmit_power: self.transmit_power,
            antenna_gain: self.antenna_gain,
            frequency: self.frequency,
            signal_exponent: self.signal_exponent,
            interference_exponent: self.interference_exponent,
            noise_floor: self.noise_floor,
            transmitter: self.transmitter,
            coordinate_range,
        }
    }

    #[must_use]
    pub fn builder(&self, unit: CoordinateUnit) -> LinkBudgetBuilder {
        LinkBudgetBuilder::new()
            .set_transmit_power(self.transmit_power)
            .set_antenna_gain(self.antenna_gain)
            .set_frequency(self.frequency)
            .set_path_loss_exponents(
                self.signal_exponent, 
                self.interference_exponent
            )
            .set_noise_floor(self.noise_floor)
            .set_coordinate_unit(unit)
            .set_transmitter(self.transmitter)
    }
}
