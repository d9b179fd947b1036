//! Geographic primitives.
//!
//! Provides the [`GeoPoint`] type used for tracker positions, camera centers
//! and device-location fixes. Coordinates are plain WGS84 latitude/longitude
//! in degrees; no projection math happens at this layer.

use std::fmt;

use thiserror::Error;

/// Minimum valid latitude in degrees.
pub const MIN_LAT: f64 = -90.0;
/// Maximum valid latitude in degrees.
pub const MAX_LAT: f64 = 90.0;
/// Minimum valid longitude in degrees.
pub const MIN_LON: f64 = -180.0;
/// Maximum valid longitude in degrees.
pub const MAX_LON: f64 = 180.0;

/// Errors that can occur when constructing geographic coordinates.
#[derive(Debug, Error, PartialEq)]
pub enum CoordError {
    /// Latitude outside the valid -90..=90 degree range.
    #[error("invalid latitude: {0} (expected {MIN_LAT}..={MAX_LAT})")]
    InvalidLatitude(f64),

    /// Longitude outside the valid -180..=180 degree range.
    #[error("invalid longitude: {0} (expected {MIN_LON}..={MAX_LON})")]
    InvalidLongitude(f64),
}

/// A geographic position in degrees.
///
/// Fields are public so that compiled-in configuration data can be written
/// as literals; use [`GeoPoint::new`] when the coordinates come from an
/// untrusted source and need range validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees (positive = north).
    pub latitude: f64,
    /// Longitude in degrees (positive = east).
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a validated geographic point.
    ///
    /// # Returns
    ///
    /// A `Result` containing the point or an error if either coordinate is
    /// out of range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordError> {
        if !(MIN_LAT..=MAX_LAT).contains(&latitude) {
            return Err(CoordError::InvalidLatitude(latitude));
        }
        if !(MIN_LON..=MAX_LON).contains(&longitude) {
            return Err(CoordError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_point() {
        let point = GeoPoint::new(55.755864, 37.617698).unwrap();
        assert!((point.latitude - 55.755864).abs() < 1e-9);
        assert!((point.longitude - 37.617698).abs() < 1e-9);
    }

    #[test]
    fn test_new_rejects_invalid_latitude() {
        let result = GeoPoint::new(91.0, 0.0);
        assert_eq!(result.unwrap_err(), CoordError::InvalidLatitude(91.0));
    }

    #[test]
    fn test_new_rejects_invalid_longitude() {
        let result = GeoPoint::new(0.0, -180.5);
        assert_eq!(result.unwrap_err(), CoordError::InvalidLongitude(-180.5));
    }

    #[test]
    fn test_boundaries_are_valid() {
        assert!(GeoPoint::new(MIN_LAT, MIN_LON).is_ok());
        assert!(GeoPoint::new(MAX_LAT, MAX_LON).is_ok());
    }

    #[test]
    fn test_display() {
        let point = GeoPoint::new(55.5, -37.25).unwrap();
        assert_eq!(format!("{}", point), "(55.500000, -37.250000)");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_in_range_coordinates_accepted(
                lat in MIN_LAT..=MAX_LAT,
                lon in MIN_LON..=MAX_LON
            ) {
                let point = GeoPoint::new(lat, lon);
                prop_assert!(point.is_ok());
            }

            #[test]
            fn test_out_of_range_latitude_rejected(
                lat in 90.001..1000.0_f64,
                lon in MIN_LON..=MAX_LON
            ) {
                let result = GeoPoint::new(lat, lon);
                prop_assert!(matches!(result.unwrap_err(), CoordError::InvalidLatitude(_)));
            }
        }
    }
}
