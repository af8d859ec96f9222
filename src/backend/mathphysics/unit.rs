pub type Decibel = f64;
pub type DecibelMilliwatt = f64;
pub type Kilometer = f64;
pub type Meter = f64;
pub type Megahertz = f64;


const METERS_IN_KILOMETER: f64 = 1_000.0;
const DECIBEL_SCALE: f64       = 10.0;


#[must_use]
pub fn meters_to_km(meters: Meter) -> Kilometer {
    meters / METERS_IN_KILOMETER
}

#[must_use]
pub fn db_to_linear(decibels: Decibel) -> f64 {
    10_f64.powf(decibels / DECIBEL_SCALE)
}

#[must_use]
pub fn linear_to_db(linear: f64) -> Decibel {
    DECIBEL_SCALE * linear.log10()
}

// Sum of two powers given in the same logarithmic reference. Only the
// difference of the powers leaves the logarithmic domain, so finite inputs
// give a finite sum.
#[must_use]
pub fn power_sum_db(power1: Decibel, power2: Decibel) -> Decibel {
    let stronger = power1.max(power2);
    let weaker = power1.min(power2);

    stronger + linear_to_db(1.0 + db_to_linear(weaker - stronger))
}
