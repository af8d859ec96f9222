use std::num::ParseFloatError;
use std::str::FromStr;

use derive_more::Sub;
use thiserror::Error;

use super::Position;


const COORDINATE_SEPARATOR: char = ',';


#[derive(Debug, Error)]
pub enum PointParseError {
    #[error("Coordinate pair `{0}` has no y component")]
    MissingComponent(String),
    #[error("Coordinate pair `{0}` has more than two components")]
    ExtraComponent(String),
    #[error("Coordinate `{value}` is not a number: {source}")]
    NotANumber {
        value: String,
        source: ParseFloatError,
    },
}


#[derive(Copy, Clone, PartialEq, Sub, Debug, Default)]
pub struct Point2D { 
    pub x: f64, 
    pub y: f64, 
}

impl Point2D {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl FromStr for Point2D {
    type Err = PointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut components = s.split(COORDINATE_SEPARATOR);

        let x = parse_component(components.next().unwrap_or_default())?;
        let Some(y) = components.next() else {
            return Err(PointParseError::MissingComponent(s.to_string()));
        };
        let y = parse_component(y)?;

        if components.next().is_some() {
            return Err(PointParseError::ExtraComponent(s.to_string()));
        }

        Ok(Self { x, y })
    }
}

impl Position for Point2D {
    fn position(&self) -> &Self {
        self
    }
}


fn parse_component(component: &str) -> Result<f64, PointParseError> {
    let component = component.trim();

    component
        .parse::<f64>()
        .map_err(|source| PointParseError::NotANumber {
            value: component.to_string(),
            source
        })
}
