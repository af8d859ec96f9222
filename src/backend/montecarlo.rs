use std::ops::Range;

use log::{info, trace};
use rand::Rng;
use serde::Serialize;

use crate::backend::linkbudget::{LinkBudgetBuilder, LinkBudgetError, LinkMetrics};
use crate::backend::mathphysics::{
    Decibel, DecibelMilliwatt, Kilometer, Megahertz, Point2D, ORIGIN
};


pub const DEFAULT_ITERATIONS: usize = 500;
pub const MAX_ITERATIONS: usize     = 10_000_000;
pub const DEFAULT_TRANSMIT_POWER: DecibelMilliwatt = 40.0;
pub const DEFAULT_ANTENNA_GAIN: Decibel = 16.0;
pub const DEFAULT_FREQUENCY: Megahertz  = 1_000.0;
pub const DEFAULT_SIGNAL_EXPONENT: f64  = 2.5;
pub const DEFAULT_INTERFERENCE_EXPONENT: f64 = 0.0;
pub const DEFAULT_COORDINATE_RANGE: Range<i32> = 1..70;


#[derive(Clone, Debug, PartialEq)]
pub struct TrialConfig {
    pub iterations: usize,
    pub transmit_power: DecibelMilliwatt,
    pub antenna_gain: Decibel,
    pub frequency: Megahertz,
    pub signal_exponent: f64,
    pub interference_exponent: f64,
    pub noise_floor: Option<DecibelMilliwatt>,
    pub transmitter: Point2D,
    // Receiver and interferer coordinates are drawn as integers from here.
    pub coordinate_range: Range<i32>,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            transmit_power: DEFAULT_TRANSMIT_POWER,
            antenna_gain: DEFAULT_ANTENNA_GAIN,
            frequency: DEFAULT_FREQUENCY,
            signal_exponent: DEFAULT_SIGNAL_EXPONENT,
            interference_exponent: DEFAULT_INTERFERENCE_EXPONENT,
            noise_floor: None,
            transmitter: ORIGIN,
            coordinate_range: DEFAULT_COORDINATE_RANGE,
        }
    }
}


#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SignalResult {
    #[serde(rename = "iterations")]
    pub iteration: usize,
    pub interference_distance_km: Kilometer,
    #[serde(rename = "interference_path_loss_dB")]
    pub interference_path_loss_db: Decibel,
    pub interference_power: DecibelMilliwatt,
    pub receiver_distance_km: Kilometer,
    #[serde(rename = "receiver_path_loss_dB")]
    pub receiver_path_loss_db: Decibel,
    #[serde(rename = "sinr_dB")]
    pub sinr_db: Decibel,
}

impl SignalResult {
    #[must_use]
    pub fn new(iteration: usize, metrics: &LinkMetrics) -> Self {
        Self {
            iteration,
            interference_distance_km: metrics.interference_distance,
            interference_path_loss_db: metrics.interference_path_loss,
            interference_power: metrics.jammer_power,
            receiver_distance_km: metrics.signal_distance,
            receiver_path_loss_db: metrics.signal_path_loss,
            sinr_db: metrics.sinr,
        }
    }
}


fn random_point<R: Rng + ?Sized>(rng: &mut R, range: &Range<i32>) -> Point2D {
    Point2D::new(
        f64::from(rng.random_range(range.clone())),
        f64::from(rng.random_range(range.clone())),
    )
}

/// Runs independent trials with random receiver and interferer positions.
///
/// # Errors
///
/// Will return `Err` if the configured link parameters are invalid. 
///
/// # Panics
///
/// Will panic if the coordinate range is empty.
pub fn run_trials<R: Rng + ?Sized>(
    config: &TrialConfig,
    rng: &mut R,
) -> Result<Vec<SignalResult>, LinkBudgetError> {
    let mut results = Vec::new();

    for iteration in 0..config.iterations {
        let interferer = random_point(rng, &config.coordinate_range);
        let receiver = random_point(rng, &config.coordinate_range);

        let link_budget = LinkBudgetBuilder::new()
            .set_transmit_power(config.transmit_power)
            .set_antenna_gain(config.antenna_gain)
            .set_frequency(config.frequency)
            .set_path_loss_exponents(
                config.signal_exponent, 
                config.interference_exponent
            )
            .set_noise_floor(config.noise_floor)
            .set_transmitter(config.transmitter)
            .set_receiver(receiver)
            .set_interferer(interferer)
            .build()?;

        let result = SignalResult::new(iteration, &link_budget.metrics());

        trace!(
            "Iteration {}: receiver {:?}, interferer {:?}, SINR {:.3} dB",
            iteration,
            receiver,
            interferer,
            result.sinr_db
        );

        results.push(result);
    }

    info!("Finished {} link budget trials", results.len());

    Ok(results)
}
