use std::fmt;

use serde::Serialize;


// Adjustment of the receiver sampling bound relative to the grid length,
// keyed by transmitter count. Counts not listed use the default offset.
const COORDINATE_GRID_OFFSETS: [(usize, f64); 2]  = [(1, 5.0), (5, -8.0)];
const SECURE_TEXT_GRID_OFFSETS: [(usize, f64); 2] = [(1, 0.0), (5, -6.0)];
const DEFAULT_GRID_OFFSET: f64 = -3.0;

pub const MAX_TRANSMITTERS: usize = 5;


#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GenerationMode {
    #[default]
    Coordinates,
    SecureText,
}

impl GenerationMode {
    #[must_use]
    pub fn receiver_grid_offset(self, transmitters: usize) -> f64 {
        let table = match self {
            Self::Coordinates => &COORDINATE_GRID_OFFSETS,
            Self::SecureText  => &SECURE_TEXT_GRID_OFFSETS,
        };

        table
            .iter()
            .find(|(count, _)| *count == transmitters)
            .map_or(DEFAULT_GRID_OFFSET, |(_, offset)| *offset)
    }

    // Indices of the transmitters that get their own batch of rows.
    #[must_use]
    pub fn transmitter_indices(self, transmitters: usize) -> Vec<usize> {
        let last_index = match self {
            Self::Coordinates => transmitters.min(MAX_TRANSMITTERS),
            Self::SecureText  => match transmitters {
                1 | 3 => transmitters,
                _ => MAX_TRANSMITTERS,
            },
        };

        (1..=last_index).collect()
    }
}


#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextScenario {
    Baseline,
    Partial,
    Full,
}

impl TextScenario {
    #[must_use]
    pub fn from_transmitter_count(transmitters: usize) -> Self {
        match transmitters {
            1 => Self::Baseline,
            3 => Self::Partial,
            _ => Self::Full,
        }
    }
}

impl fmt::Display for TextScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Baseline => "baseline",
            Self::Partial  => "partial",
            Self::Full     => "full",
        };

        write!(f, "{label}")
    }
}
