use crate::backend::mathphysics::{Decibel, Kilometer, Megahertz};


// Free-space loss at 1 km and 1 MHz, in dB.
pub const FREE_SPACE_CONSTANT: Decibel = 32.44;
pub const FREQUENCY_EXPONENT: f64      = 2.0;

// Distances shorter than this are treated as this distance, so coincident
// points give a finite loss instead of a logarithm singularity.
pub const MIN_DISTANCE_KM: Kilometer = 0.001;


// Loss at the 1 km reference distance.
#[must_use]
pub fn reference_intercept(frequency: Megahertz) -> Decibel {
    FREE_SPACE_CONSTANT + 10.0 * FREQUENCY_EXPONENT * frequency.log10()
}

/// Log-distance path loss:
///
/// `loss = 32.44 + 10 * exponent * log10(d) + 20 * log10(f)`
///
/// with `d` in kilometers and `f` in megahertz. Distances below
/// [`MIN_DISTANCE_KM`] are clamped to it.
#[must_use]
pub fn log_distance_path_loss(
    distance: Kilometer,
    frequency: Megahertz,
    exponent: f64
) -> Decibel {
    let distance = distance.max(MIN_DISTANCE_KM);

    reference_intercept(frequency) + 10.0 * exponent * distance.log10()
}
