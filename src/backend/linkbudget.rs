use thiserror::Error;

use crate::backend::mathphysics::{
    power_sum_db, CoordinateUnit, Decibel, DecibelMilliwatt, Kilometer, 
    Megahertz, Point2D, Position, ORIGIN
};

pub use metrics::LinkMetrics;
pub use pathloss::{
    log_distance_path_loss, reference_intercept, FREE_SPACE_CONSTANT, 
    MIN_DISTANCE_KM
};


pub mod metrics;
pub mod pathloss;


#[derive(Debug, Error, PartialEq)]
pub enum LinkBudgetError {
    #[error("Missing link budget parameter `{0}`")]
    MissingParameter(&'static str),
    #[error("Parameter `{name}` must be a finite number, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },
    #[error("Coordinates of the {0} must be finite numbers")]
    NonFiniteCoordinates(&'static str),
    #[error("Length of the {0} is not a finite number")]
    NonFiniteDistance(&'static str),
    #[error("Frequency must be positive, got {0} MHz")]
    NonPositiveFrequency(Megahertz),
    #[error("Path loss exponent `{name}` must not be negative, got {value}")]
    NegativeExponent { name: &'static str, value: f64 },
}


#[derive(Clone, Debug, Default)]
pub struct LinkBudgetBuilder {
    transmit_power: Option<DecibelMilliwatt>,
    antenna_gain: Option<Decibel>,
    frequency: Option<Megahertz>,
    signal_exponent: Option<f64>,
    interference_exponent: Option<f64>,
    noise_floor: Option<DecibelMilliwatt>,
    jammer_power: Option<DecibelMilliwatt>,
    jammer_gain: Option<Decibel>,
    coordinate_unit: CoordinateUnit,
    transmitter: Option<Point2D>,
    receiver: Option<Point2D>,
    interferer: Option<Point2D>,
}

impl LinkBudgetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn set_transmit_power(mut self, power: DecibelMilliwatt) -> Self {
        self.transmit_power = Some(power);
        self
    }

    #[must_use]
    pub fn set_antenna_gain(mut self, gain: Decibel) -> Self {
        self.antenna_gain = Some(gain);
        self
    }

    #[must_use]
    pub fn set_frequency(mut self, frequency: Megahertz) -> Self {
        self.frequency = Some(frequency);
        self
    }

    #[must_use]
    pub fn set_path_loss_exponents(
        mut self, 
        signal_exponent: f64, 
        interference_exponent: f64
    ) -> Self {
        self.signal_exponent = Some(signal_exponent);
        self.interference_exponent = Some(interference_exponent);
        self
    }

    #[must_use]
    pub fn set_noise_floor(
        mut self, 
        noise_floor: Option<DecibelMilliwatt>
    ) -> Self {
        self.noise_floor = noise_floor;
        self
    }

    // Jammer power and gain default to the transmitter's own.
    #[must_use]
    pub fn set_jammer(
        mut self, 
        jammer_power: DecibelMilliwatt, 
        jammer_gain: Decibel
    ) -> Self {
        self.jammer_power = Some(jammer_power);
        self.jammer_gain = Some(jammer_gain);
        self
    }

    #[must_use]
    pub fn set_coordinate_unit(mut self, unit: CoordinateUnit) -> Self {
        self.coordinate_unit = unit;
        self
    }

    #[must_use]
    pub fn set_transmitter(mut self, transmitter: Point2D) -> Self {
        self.transmitter = Some(transmitter);
        self
    }

    #[must_use]
    pub fn set_receiver(mut self, receiver: Point2D) -> Self {
        self.receiver = Some(receiver);
        self
    }

    #[must_use]
    pub fn set_interferer(mut self, interferer: Point2D) -> Self {
        self.interferer = Some(interferer);
        self
    }

    /// # Errors
    ///
    /// Will return `Err` if a required parameter is missing, if any number 
    /// is not finite, if the frequency is not positive or if a path loss 
    /// exponent is negative.
    pub fn build(self) -> Result<LinkBudget, LinkBudgetError> {
        use LinkBudgetError::MissingParameter;

        let transmit_power = finite(
            "transmit power",
            self.transmit_power.ok_or(MissingParameter("transmit power"))?
        )?;
        let antenna_gain = finite(
            "antenna gain",
            self.antenna_gain.ok_or(MissingParameter("antenna gain"))?
        )?;
        let frequency = finite(
            "frequency",
            self.frequency.ok_or(MissingParameter("frequency"))?
        )?;
        let signal_exponent = exponent(
            "signal exponent",
            self.signal_exponent.ok_or(MissingParameter("signal exponent"))?
        )?;
        let interference_exponent = exponent(
            "interference exponent",
            self.interference_exponent
                .ok_or(MissingParameter("interference exponent"))?
        )?;
        let receiver = self.receiver.ok_or(MissingParameter("receiver"))?;
        let interferer = self.interferer
            .ok_or(MissingParameter("interferer"))?;

        if frequency <= 0.0 {
            return Err(LinkBudgetError::NonPositiveFrequency(frequency));
        }

        let noise_floor = self.noise_floor
            .map(|noise_floor| finite("noise floor", noise_floor))
            .transpose()?;
        let jammer_power = finite(
            "jammer power", 
            self.jammer_power.unwrap_or(transmit_power)
        )?;
        let jammer_gain = finite(
            "jammer gain", 
            self.jammer_gain.unwrap_or(antenna_gain)
        )?;

        let unit = self.coordinate_unit;
        let transmitter = unit.point_to_km(
            finite_point("transmitter", self.transmitter.unwrap_or(ORIGIN))?
        );
        let receiver = unit.point_to_km(finite_point("receiver", receiver)?);
        let interferer = unit.point_to_km(
            finite_point("interferer", interferer)?
        );

        finite_distance("signal path", transmitter, receiver)?;
        finite_distance("interference path", interferer, receiver)?;

        Ok(LinkBudget {
            transmit_power,
            antenna_gain,
            frequency,
            signal_exponent,
            interference_exponent,
            noise_floor,
            jammer_power,
            jammer_gain,
            transmitter,
            receiver,
            interferer,
        })
    }
}


fn finite(name: &'static str, value: f64) -> Result<f64, LinkBudgetError> {
    if !value.is_finite() {
        return Err(LinkBudgetError::NonFiniteParameter { name, value });
    }

    Ok(value)
}

fn exponent(name: &'static str, value: f64) -> Result<f64, LinkBudgetError> {
    let value = finite(name, value)?;

    if value < 0.0 {
        return Err(LinkBudgetError::NegativeExponent { name, value });
    }

    Ok(value)
}

fn finite_point(
    name: &'static str, 
    point: Point2D
) -> Result<Point2D, LinkBudgetError> {
    if !point.is_finite() {
        return Err(LinkBudgetError::NonFiniteCoordinates(name));
    }

    Ok(point)
}

// Finite points can still be too far apart for their distance to be finite.
fn finite_distance(
    name: &'static str,
    point1: Point2D,
    point2: Point2D
) -> Result<(), LinkBudgetError> {
    if !point1.distance_to(&point2).is_finite() {
        return Err(LinkBudgetError::NonFiniteDistance(name));
    }

    Ok(())
}


/// Parameters of a single trial. Coordinates are stored in kilometers.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkBudget {
    transmit_power: DecibelMilliwatt,
    antenna_gain: Decibel,
    frequency: Megahertz,
    signal_exponent: f64,
    interference_exponent: f64,
    noise_floor: Option<DecibelMilliwatt>,
    jammer_power: DecibelMilliwatt,
    jammer_gain: Decibel,
    transmitter: Point2D,
    receiver: Point2D,
    interferer: Point2D,
}

impl LinkBudget {
    #[must_use]
    pub fn calc_signal_path(&self) -> Kilometer {
        self.transmitter.distance_to(&self.receiver)
    }

    #[must_use]
    pub fn calc_interference_path(&self) -> Kilometer {
        self.interferer.distance_to(&self.receiver)
    }

    #[must_use]
    pub fn calc_radio_path_loss(&self) -> Decibel {
        log_distance_path_loss(
            self.calc_signal_path(), 
            self.frequency, 
            self.signal_exponent
        )
    }

    #[must_use]
    pub fn calc_interference_path_loss(&self) -> Decibel {
        log_distance_path_loss(
            self.calc_interference_path(), 
            self.frequency, 
            self.interference_exponent
        )
    }

    #[must_use]
    pub fn calc_received_power(&self) -> DecibelMilliwatt {
        self.transmit_power + self.antenna_gain - self.calc_radio_path_loss()
    }

    // Negative values are valid powers below the 1 mW reference.
    #[must_use]
    pub fn calc_jammer_power(&self) -> DecibelMilliwatt {
        self.jammer_power + self.jammer_gain 
            - self.calc_interference_path_loss()
    }

    #[must_use]
    pub fn calc_interference_power(&self) -> DecibelMilliwatt {
        let jammer_power = self.calc_jammer_power();

        match self.noise_floor {
            Some(noise_floor) => power_sum_db(jammer_power, noise_floor),
            None => jammer_power,
        }
    }

    #[must_use]
    pub fn calc_sinr(&self) -> Decibel {
        self.calc_received_power() - self.calc_interference_power()
    }

    #[must_use]
    pub fn metrics(&self) -> LinkMetrics {
        LinkMetrics {
            signal_distance: self.calc_signal_path(),
            interference_distance: self.calc_interference_path(),
            signal_path_loss: self.calc_radio_path_loss(),
            interference_path_loss: self.calc_interference_path_loss(),
            jammer_power: self.calc_jammer_power(),
            sinr: self.calc_sinr(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;


    const TRANSMIT_POWER: DecibelMilliwatt = 40.0;
    const ANTENNA_GAIN: Decibel            = 16.0;
    const FREQUENCY: Megahertz             = 1_000.0;
    const SIGNAL_EXPONENT: f64             = 2.5;
    const INTERFERENCE_EXPONENT: f64       = 0.0;


    fn reference_builder() -> LinkBudgetBuilder {
        LinkBudgetBuilder::new()
            .set_transmit_power(TRANSMIT_POWER)
            .set_antenna_gain(ANTENNA_GAIN)
            .set_frequency(FREQUENCY)
            .set_path_loss_exponents(SIGNAL_EXPONENT, INTERFERENCE_EXPONENT)
    }

    fn build(builder: LinkBudgetBuilder) -> LinkBudget {
        builder
            .build()
            .unwrap_or_else(|error| panic!("{}", error))
    }


    #[test]
    fn reference_scenario_with_coincident_interferer() {
        let link_budget = build(
            reference_builder()
                .set_receiver(Point2D::new(10.0, 10.0))
                .set_interferer(Point2D::new(10.0, 10.0))
        );

        let metrics = link_budget.metrics();

        assert_eq!(metrics.interference_distance, 0.0);
        assert_eq!(
            metrics.interference_path_loss, 
            reference_intercept(FREQUENCY)
        );
        assert_eq!(
            metrics.jammer_power,
            TRANSMIT_POWER + ANTENNA_GAIN - reference_intercept(FREQUENCY)
        );
        assert!((metrics.signal_distance - 200_f64.sqrt()).abs() < 1e-12);
        assert!(metrics.signal_path_loss.is_finite());
        assert!(metrics.sinr.is_finite());
        assert!((metrics.sinr - -28.762_875).abs() < 1e-5);
        assert!(metrics.sinr < 0.0);
    }

    #[test]
    fn loss_at_one_kilometer_equals_intercept() {
        let link_budget = build(
            reference_builder()
                .set_transmitter(Point2D::new(1.0, 0.0))
                .set_receiver(ORIGIN)
                .set_interferer(Point2D::new(5.0, 5.0))
        );

        assert_eq!(link_budget.calc_signal_path(), 1.0);
        assert_eq!(
            link_budget.calc_radio_path_loss(), 
            reference_intercept(FREQUENCY)
        );
    }

    #[test]
    fn coincident_transmitter_and_receiver_use_distance_floor() {
        let link_budget = build(
            reference_builder()
                .set_receiver(ORIGIN)
                .set_interferer(Point2D::new(3.0, 4.0))
        );

        assert_eq!(link_budget.calc_signal_path(), 0.0);
        assert_eq!(
            link_budget.calc_radio_path_loss(),
            log_distance_path_loss(MIN_DISTANCE_KM, FREQUENCY, SIGNAL_EXPONENT)
        );
        assert!(link_budget.calc_sinr().is_finite());
    }

    #[test]
    fn same_inputs_give_identical_outputs() {
        let builder = reference_builder()
            .set_receiver(Point2D::new(12.0, 31.0))
            .set_interferer(Point2D::new(44.0, 7.0))
            .set_noise_floor(Some(-100.0));

        let first = build(builder.clone()).metrics();
        let second = build(builder).metrics();

        assert_eq!(first.sinr.to_bits(), second.sinr.to_bits());
        assert_eq!(first, second);
    }

    #[test]
    fn sinr_decreases_with_jammer_power() {
        let mut previous_sinr = f64::INFINITY;

        for jammer_power in [0.0, 10.0, 20.0, 30.0, 40.0, 50.0] {
            let sinr = build(
                reference_builder()
                    .set_path_loss_exponents(SIGNAL_EXPONENT, 2.0)
                    .set_receiver(Point2D::new(10.0, 10.0))
                    .set_interferer(Point2D::new(20.0, 5.0))
                    .set_noise_floor(Some(-90.0))
                    .set_jammer(jammer_power, ANTENNA_GAIN)
            ).calc_sinr();

            assert!(sinr < previous_sinr);
            previous_sinr = sinr;
        }
    }

    #[test]
    fn sinr_increases_with_transmit_power() {
        let mut previous_sinr = f64::NEG_INFINITY;

        for transmit_power in [0.0, 10.0, 20.0, 30.0, 40.0, 50.0] {
            let sinr = build(
                reference_builder()
                    .set_transmit_power(transmit_power)
                    .set_receiver(Point2D::new(10.0, 10.0))
                    .set_interferer(Point2D::new(20.0, 5.0))
                    .set_jammer(TRANSMIT_POWER, ANTENNA_GAIN)
            ).calc_sinr();

            assert!(sinr > previous_sinr);
            previous_sinr = sinr;
        }
    }

    #[test]
    fn noise_floor_lowers_sinr() {
        let builder = reference_builder()
            .set_path_loss_exponents(SIGNAL_EXPONENT, 3.0)
            .set_receiver(Point2D::new(10.0, 10.0))
            .set_interferer(Point2D::new(30.0, 30.0));

        let without_noise = build(builder.clone()).calc_sinr();
        let with_noise = build(builder.set_noise_floor(Some(-20.0)))
            .calc_sinr();

        assert!(with_noise < without_noise);
    }

    #[test]
    fn jammer_power_may_be_negative() {
        let link_budget = build(
            reference_builder()
                .set_path_loss_exponents(SIGNAL_EXPONENT, 4.0)
                .set_receiver(ORIGIN)
                .set_interferer(Point2D::new(60.0, 60.0))
        );

        assert!(link_budget.calc_jammer_power() < 0.0);
    }

    #[test]
    fn meter_coordinates_are_converted() {
        let in_meters = build(
            reference_builder()
                .set_coordinate_unit(CoordinateUnit::Meter)
                .set_receiver(Point2D::new(3_000.0, 4_000.0))
                .set_interferer(Point2D::new(3_000.0, 0.0))
        );

        assert_eq!(in_meters.calc_signal_path(), 5.0);
        assert_eq!(in_meters.calc_interference_path(), 4.0);
    }

    #[test]
    fn building_without_receiver_fails() {
        let result = reference_builder()
            .set_interferer(ORIGIN)
            .build();

        assert_eq!(
            result.err(), 
            Some(LinkBudgetError::MissingParameter("receiver"))
        );
    }

    #[test]
    fn building_with_nan_coordinates_fails() {
        let result = reference_builder()
            .set_receiver(Point2D::new(f64::NAN, 1.0))
            .set_interferer(ORIGIN)
            .build();

        assert_eq!(
            result.err(),
            Some(LinkBudgetError::NonFiniteCoordinates("receiver"))
        );
    }

    #[test]
    fn building_with_invalid_frequency_fails() {
        let result = reference_builder()
            .set_frequency(0.0)
            .set_receiver(ORIGIN)
            .set_interferer(ORIGIN)
            .build();

        assert!(matches!(result, Err(LinkBudgetError::NonPositiveFrequency(_))));
    }

    #[test]
    fn building_with_negative_exponent_fails() {
        let result = reference_builder()
            .set_path_loss_exponents(-1.0, 0.0)
            .set_receiver(ORIGIN)
            .set_interferer(ORIGIN)
            .build();

        assert!(
            matches!(result, Err(LinkBudgetError::NegativeExponent { .. }))
        );
    }

    #[test]
    fn building_with_infinite_power_fails() {
        let result = reference_builder()
            .set_transmit_power(f64::INFINITY)
            .set_receiver(ORIGIN)
            .set_interferer(ORIGIN)
            .build();

        assert!(
            matches!(
                result, 
                Err(LinkBudgetError::NonFiniteParameter { name, .. }) 
                    if name == "transmit power"
            )
        );
    }

    #[test]
    fn building_with_too_distant_points_fails() {
        let result = reference_builder()
            .set_receiver(Point2D::new(1.7e308, 0.0))
            .set_interferer(Point2D::new(-1.7e308, 0.0))
            .build();

        assert_eq!(
            result.err(),
            Some(LinkBudgetError::NonFiniteDistance("interference path"))
        );
    }

    #[test]
    fn building_with_overflowing_signal_path_fails() {
        let result = reference_builder()
            .set_transmitter(Point2D::new(-1.5e308, -1.5e308))
            .set_receiver(ORIGIN)
            .set_interferer(ORIGIN)
            .build();

        assert_eq!(
            result.err(),
            Some(LinkBudgetError::NonFiniteDistance("signal path"))
        );
    }

    #[test]
    fn huge_jammer_power_with_noise_floor_keeps_sinr_finite() {
        let metrics = build(
            reference_builder()
                .set_receiver(Point2D::new(10.0, 10.0))
                .set_interferer(Point2D::new(20.0, 5.0))
                .set_noise_floor(Some(-100.0))
                .set_jammer(4_000.0, 0.0)
        ).metrics();

        assert!(metrics.jammer_power.is_finite());
        assert!(metrics.sinr.is_finite());
        assert!(metrics.sinr < -3_000.0);
    }
}
