//! Geographic coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A latitude/longitude pair in decimal degrees.
///
/// Captured once per decision cycle and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude, -90 to 90.
    pub lat: f64,
    /// Longitude, -180 to 180.
    pub lon: f64,
}

/// Coordinates outside the valid range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinatesError {
    /// Latitude out of range or not finite.
    #[error("latitude out of range: {0}")]
    Latitude(f64),
    /// Longitude out of range or not finite.
    #[error("longitude out of range: {0}")]
    Longitude(f64),
}

impl Coordinates {
    /// Create validated coordinates.
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordinatesError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinatesError::Latitude(lat));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(CoordinatesError::Longitude(lon));
        }
        Ok(Self { lat, lon })
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_valid() {
        let c = Coordinates::new(25.033, 121.5654).unwrap();
        assert_eq!(c.lat, 25.033);
        assert_eq!(c.lon, 121.5654);
    }

    #[rstest]
    #[case(90.5, 0.0)]
    #[case(-91.0, 0.0)]
    #[case(f64::NAN, 0.0)]
    fn test_bad_latitude(#[case] lat: f64, #[case] lon: f64) {
        assert!(matches!(
            Coordinates::new(lat, lon),
            Err(CoordinatesError::Latitude(_))
        ));
    }

    #[rstest]
    #[case(0.0, 180.1)]
    #[case(0.0, -200.0)]
    #[case(0.0, f64::INFINITY)]
    fn test_bad_longitude(#[case] lat: f64, #[case] lon: f64) {
        assert!(matches!(
            Coordinates::new(lat, lon),
            Err(CoordinatesError::Longitude(_))
        ));
    }
}
