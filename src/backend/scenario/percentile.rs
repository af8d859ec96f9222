use std::fmt;

use serde::Serialize;

use crate::backend::mathphysics::Decibel;

use super::ScenarioError;


pub const LOW_GAIN_PERCENTILE: f64  = 25.0;
pub const HIGH_GAIN_PERCENTILE: f64 = 65.0;


/// Percentile of `samples` with linear interpolation between the two 
/// closest ranks. Sample order does not matter.
///
/// # Errors
///
/// Will return `Err` if `samples` is empty or `percentile` lies outside 
/// `[0, 100]`.
pub fn percentile(samples: &[f64], percentile: f64) -> Result<f64, ScenarioError> {
    if samples.is_empty() {
        return Err(ScenarioError::EmptySample);
    }
    if !(0.0..=100.0).contains(&percentile) {
        return Err(ScenarioError::InvalidPercentile(percentile));
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = percentile / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    Ok(sorted[lower] + (sorted[upper] - sorted[lower]) * (rank - lower as f64))
}


#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerScenario {
    Low,
    Baseline,
    High,
}

impl fmt::Display for PowerScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low      => "low",
            Self::Baseline => "baseline",
            Self::High     => "high",
        };

        write!(f, "{label}")
    }
}


#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GainThresholds {
    low: Decibel,
    high: Decibel,
}

impl GainThresholds {
    /// # Errors
    ///
    /// Will return `Err` if there are no gain samples.
    pub fn from_samples(antenna_gains: &[Decibel]) -> Result<Self, ScenarioError> {
        Ok(Self {
            low: percentile(antenna_gains, LOW_GAIN_PERCENTILE)?,
            high: percentile(antenna_gains, HIGH_GAIN_PERCENTILE)?,
        })
    }

    #[must_use]
    pub fn low(&self) -> Decibel {
        self.low
    }

    #[must_use]
    pub fn high(&self) -> Decibel {
        self.high
    }

    // Gains equal to a threshold fall into the baseline scenario.
    #[must_use]
    pub fn classify(&self, antenna_gain: Decibel) -> PowerScenario {
        if antenna_gain < self.low {
            PowerScenario::Low
        } else if antenna_gain > self.high {
            PowerScenario::High
        } else {
            PowerScenario::Baseline
        }
    }
}
