pub use point::{Point2D, PointParseError};
pub use unit::*;


pub mod point;
pub mod unit;


pub const ORIGIN: Point2D = Point2D { x: 0.0, y: 0.0 };


// Unit in which scenario coordinates are expressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CoordinateUnit {
    #[default]
    Kilometer,
    Meter,
}

impl CoordinateUnit {
    #[must_use]
    pub fn point_to_km(self, point: Point2D) -> Point2D {
        match self {
            Self::Kilometer => point,
            Self::Meter     => Point2D::new(
                meters_to_km(point.x), 
                meters_to_km(point.y)
            ),
        }
    }
}


pub trait Position {
    fn position(&self) -> &Point2D;

    fn distance_to<P: Position>(&self, other: &P) -> f64 {
        (*other.position() - *self.position()).norm()
    }
}
