use log::debug;
use rand::distr::{Distribution, Uniform};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::backend::mathphysics::{Decibel, Kilometer, Point2D};

pub use grid::{GenerationMode, TextScenario, MAX_TRANSMITTERS};
pub use params::{default_parameter_sets, ParameterSet};
pub use percentile::{percentile, GainThresholds, PowerScenario};


pub mod grid;
pub mod params;
pub mod percentile;


pub const POWER_SAMPLE_COUNT: usize   = 10;
pub const GAIN_SAMPLE_COUNT: usize    = 10;
pub const ROWS_PER_TRANSMITTER: usize = 50;
pub const POWER_SPREAD_DB: Decibel    = 5.0;
pub const GAIN_SPREAD_DB: Decibel     = 3.0;


#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Transmitter count must be positive")]
    NoTransmitters,
    #[error("Cannot sample from empty set of values")]
    EmptySample,
    #[error("Percentile must lie in [0, 100], got {0}")]
    InvalidPercentile(f64),
    #[error("Cannot sample uniformly from [{low}, {high}]")]
    InvalidRange { low: f64, high: f64 },
}


#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplingConfig {
    pub power_samples: usize,
    pub gain_samples: usize,
    pub rows_per_transmitter: usize,
    pub power_spread: Decibel,
    pub gain_spread: Decibel,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            power_samples: POWER_SAMPLE_COUNT,
            gain_samples: GAIN_SAMPLE_COUNT,
            rows_per_transmitter: ROWS_PER_TRANSMITTER,
            power_spread: POWER_SPREAD_DB,
            gain_spread: GAIN_SPREAD_DB,
        }
    }
}


#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CoordinateRecord {
    pub transmitter_x: Kilometer,
    pub transmitter_y: Kilometer,
    pub receiver_x: Kilometer,
    pub receiver_y: Kilometer,
    pub interceptor_x: Kilometer,
    pub interceptor_y: Kilometer,
    pub no_transmitters: usize,
    pub transmitter_power_db: Decibel,
    pub antenna_gain_db: Decibel,
    pub technology: String,
    pub power_scenario: PowerScenario,
}

impl CoordinateRecord {
    #[must_use]
    pub fn transmitter(&self) -> Point2D {
        Point2D::new(self.transmitter_x, self.transmitter_y)
    }

    #[must_use]
    pub fn receiver(&self) -> Point2D {
        Point2D::new(self.receiver_x, self.receiver_y)
    }

    #[must_use]
    pub fn interceptor(&self) -> Point2D {
        Point2D::new(self.interceptor_x, self.interceptor_y)
    }
}


#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SecureTextRecord {
    pub transmitter_x: Kilometer,
    pub transmitter_y: Kilometer,
    pub receiver_x: Kilometer,
    pub receiver_y: Kilometer,
    pub interceptor_x: Kilometer,
    pub interceptor_y: Kilometer,
    pub no_transmitters: usize,
    pub transmitter_power_db: Decibel,
    pub antenna_gain_db: Decibel,
    pub technology: String,
    pub text_scenario: TextScenario,
    pub power_scenario: PowerScenario,
    pub application_area: String,
}


// Uniform sampling areas of one generated row.
#[derive(Clone, Debug)]
struct Geometry {
    grid: Uniform<f64>,
    receiver_grid: Uniform<f64>,
}

impl Geometry {
    fn build(
        grid_length: Kilometer, 
        receiver_offset: Kilometer
    ) -> Result<Self, ScenarioError> {
        Ok(Self {
            grid: uniform(0.0, grid_length)?,
            receiver_grid: uniform(0.0, grid_length + receiver_offset)?,
        })
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> [Point2D; 3] {
        let transmitter = Point2D::new(
            self.grid.sample(rng), 
            self.grid.sample(rng)
        );
        let receiver = Point2D::new(
            self.receiver_grid.sample(rng), 
            self.receiver_grid.sample(rng)
        );
        let interceptor = Point2D::new(
            self.grid.sample(rng), 
            self.grid.sample(rng)
        );

        [transmitter, receiver, interceptor]
    }
}


// Powers, gains and gain thresholds sampled once per parameter set.
struct PowerSweep {
    transmitter_powers: Vec<Decibel>,
    antenna_gains: Vec<Decibel>,
    thresholds: GainThresholds,
}

impl PowerSweep {
    fn sample<R: Rng + ?Sized>(
        rng: &mut R,
        parameter_set: &ParameterSet,
        sampling: &SamplingConfig,
    ) -> Result<Self, ScenarioError> {
        let transmitter_powers = sample_uniform(
            rng,
            parameter_set.power_db - sampling.power_spread,
            parameter_set.power_db + sampling.power_spread,
            sampling.power_samples,
        )?;
        let antenna_gains = sample_uniform(
            rng,
            parameter_set.antenna_gain_db - sampling.gain_spread,
            parameter_set.antenna_gain_db + sampling.gain_spread,
            sampling.gain_samples,
        )?;
        let thresholds = GainThresholds::from_samples(&antenna_gains)?;

        debug!(
            "Parameter set `{}`: gain thresholds {:.3}/{:.3} dB",
            parameter_set.name,
            thresholds.low(),
            thresholds.high()
        );

        Ok(Self { transmitter_powers, antenna_gains, thresholds })
    }
}


fn uniform(low: f64, high: f64) -> Result<Uniform<f64>, ScenarioError> {
    Uniform::new_inclusive(low, high)
        .map_err(|_| ScenarioError::InvalidRange { low, high })
}

/// # Errors
///
/// Will return `Err` if `[low, high]` is not a valid finite range.
pub fn sample_uniform<R: Rng + ?Sized>(
    rng: &mut R,
    low: f64,
    high: f64,
    count: usize,
) -> Result<Vec<f64>, ScenarioError> {
    let distribution = uniform(low, high)?;

    Ok((0..count).map(|_| distribution.sample(rng)).collect())
}


/// Generates input rows for a case of `transmitters` radio transmitters.
///
/// For every parameter set, technology, sampled power and sampled gain,
/// each transmitter index receives `rows_per_transmitter` random 
/// geometries. The receiver grid is widened or shrunk by the offset of
/// [`GenerationMode::Coordinates`].
///
/// # Errors
///
/// Will return `Err` if `transmitters` is zero, if no gains are sampled or
/// if the receiver grid collapses to an empty range.
pub fn generate_coordinates<R: Rng + ?Sized>(
    rng: &mut R,
    transmitters: usize,
    parameter_sets: &[ParameterSet],
    sampling: &SamplingConfig,
) -> Result<Vec<CoordinateRecord>, ScenarioError> {
    let mode = GenerationMode::Coordinates;
    
    if transmitters == 0 {
        return Err(ScenarioError::NoTransmitters);
    }

    let transmitter_indices = mode.transmitter_indices(transmitters);
    let mut records = Vec::new();

    for parameter_set in parameter_sets {
        let geometry = Geometry::build(
            parameter_set.grid_length, 
            mode.receiver_grid_offset(transmitters)
        )?;
        let sweep = PowerSweep::sample(rng, parameter_set, sampling)?;

        for technology in &parameter_set.technologies {
            for transmitter_power in &sweep.transmitter_powers {
                for antenna_gain in &sweep.antenna_gains {
                    let power_scenario = sweep.thresholds
                        .classify(*antenna_gain);

                    for _ in &transmitter_indices {
                        for _ in 0..sampling.rows_per_transmitter {
                            let [transmitter, receiver, interceptor] = 
                                geometry.sample(rng);

                            records.push(CoordinateRecord {
                                transmitter_x: transmitter.x,
                                transmitter_y: transmitter.y,
                                receiver_x: receiver.x,
                                receiver_y: receiver.y,
                                interceptor_x: interceptor.x,
                                interceptor_y: interceptor.y,
                                no_transmitters: transmitters,
                                transmitter_power_db: *transmitter_power,
                                antenna_gain_db: *antenna_gain,
                                technology: technology.clone(),
                                power_scenario,
                            });
                        }
                    }
                }
            }
        }
    }

    Ok(records)
}

/// Generates input rows of the secure text scenarios. Rows are additionally
/// swept over application areas and tagged with the text scenario implied
/// by the transmitter count.
///
/// # Errors
///
/// Same as [`generate_coordinates`].
pub fn generate_secure_text<R: Rng + ?Sized>(
    rng: &mut R,
    transmitters: usize,
    parameter_sets: &[ParameterSet],
    sampling: &SamplingConfig,
) -> Result<Vec<SecureTextRecord>, ScenarioError> {
    let mode = GenerationMode::SecureText;
    
    if transmitters == 0 {
        return Err(ScenarioError::NoTransmitters);
    }

    let transmitter_indices = mode.transmitter_indices(transmitters);
    let text_scenario = TextScenario::from_transmitter_count(transmitters);
    let mut records = Vec::new();

    for parameter_set in parameter_sets {
        let geometry = Geometry::build(
            parameter_set.grid_length, 
            mode.receiver_grid_offset(transmitters)
        )?;
        let sweep = PowerSweep::sample(rng, parameter_set, sampling)?;

        for application_area in &parameter_set.application_areas {
            for technology in &parameter_set.technologies {
                for transmitter_power in &sweep.transmitter_powers {
                    for antenna_gain in &sweep.antenna_gains {
                        let power_scenario = sweep.thresholds
                            .classify(*antenna_gain);

                        for _ in &transmitter_indices {
                            for _ in 0..sampling.rows_per_transmitter {
                                let [transmitter, receiver, interceptor] = 
                                    geometry.sample(rng);

                                records.push(SecureTextRecord {
                                    transmitter_x: transmitter.x,
                                    transmitter_y: transmitter.y,
                                    receiver_x: receiver.x,
                                    receiver_y: receiver.y,
                                    interceptor_x: interceptor.x,
                                    interceptor_y: interceptor.y,
                                    no_transmitters: transmitters,
                                    transmitter_power_db: *transmitter_power,
                                    antenna_gain_db: *antenna_gain,
                                    technology: technology.clone(),
                                    text_scenario,
                                    power_scenario,
                                    application_area: application_area
                                        .clone(),
                                });
                            }
                        }
                    }
                }
            }
        }
    }

    Ok(records)
}
