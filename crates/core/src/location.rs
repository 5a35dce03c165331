//! Geographic observer position.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Observer position in decimal degrees (longitude positive east, latitude positive north).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLocation")]
pub struct Location {
    longitude: f64,
    latitude: f64,
}

/// Errors raised when a coordinate pair cannot be used by the solar model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocationError {
    #[error("latitude {0} is outside the open interval (-90, 90)")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

impl Location {
    /// Validate and build a location.
    ///
    /// The poles are excluded: `tan(latitude)` diverges there and every hour
    /// angle becomes undefined.
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, LocationError> {
        if !latitude.is_finite() || latitude.abs() >= 90.0 {
            return Err(LocationError::LatitudeOutOfRange(latitude));
        }
        if !longitude.is_finite() || longitude.abs() > 180.0 {
            return Err(LocationError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }
}

#[derive(Deserialize)]
struct RawLocation {
    longitude: f64,
    latitude: f64,
}

impl TryFrom<RawLocation> for Location {
    type Error = LocationError;

    fn try_from(raw: RawLocation) -> Result<Self, Self::Error> {
        Location::new(raw.longitude, raw.latitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_coordinates() {
        let loc = Location::new(57.130_622_9, 21.305_724).unwrap();
        assert_eq!(loc.longitude(), 57.130_622_9);
        assert_eq!(loc.latitude(), 21.305_724);
        assert!(Location::new(180.0, -89.999).is_ok());
        assert!(Location::new(-180.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_poles_and_wrapped_longitudes() {
        assert_eq!(
            Location::new(0.0, 90.0),
            Err(LocationError::LatitudeOutOfRange(90.0))
        );
        assert_eq!(
            Location::new(0.0, -90.0),
            Err(LocationError::LatitudeOutOfRange(-90.0))
        );
        assert_eq!(
            Location::new(180.5, 10.0),
            Err(LocationError::LongitudeOutOfRange(180.5))
        );
        assert!(Location::new(f64::NAN, 10.0).is_err());
        assert!(Location::new(10.0, f64::INFINITY).is_err());
    }
}
