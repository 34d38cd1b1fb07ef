//! Geographic coordinate type.

use std::fmt;

/// Error returned when constructing an invalid coordinate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate: {reason}")]
pub struct InvalidPoint {
    reason: &'static str,
}

/// A geographic coordinate in degrees.
///
/// Latitude lies in [-90, 90] and longitude in [-180, 180], both finite.
/// This type guarantees that any `Point` value is valid by construction.
///
/// # Examples
///
/// ```
/// use jeepney_server::domain::Point;
///
/// let divisoria = Point::new(8.4746, 124.6468).unwrap();
/// assert_eq!(divisoria.latitude(), 8.4746);
///
/// // Out-of-range latitude is rejected
/// assert!(Point::new(91.0, 0.0).is_err());
///
/// // Non-finite values are rejected
/// assert!(Point::new(f64::NAN, 0.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Point {
    lat: f64,
    lon: f64,
}

impl Point {
    /// Construct a point from a latitude and longitude in degrees.
    pub fn new(lat: f64, lon: f64) -> Result<Self, InvalidPoint> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(InvalidPoint {
                reason: "latitude and longitude must be finite",
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidPoint {
                reason: "latitude must be within [-90, 90] degrees",
            });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(InvalidPoint {
                reason: "longitude must be within [-180, 180] degrees",
            });
        }

        Ok(Point { lat, lon })
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.lon
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.lat, self.lon)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct_valid_point() {
        let p = Point::new(8.4842, 124.6472).unwrap();
        assert_eq!(p.latitude(), 8.4842);
        assert_eq!(p.longitude(), 124.6472);
    }

    #[test]
    fn boundary_values_accepted() {
        assert!(Point::new(90.0, 180.0).is_ok());
        assert!(Point::new(-90.0, -180.0).is_ok());
        assert!(Point::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn reject_out_of_range_latitude() {
        assert!(Point::new(90.001, 0.0).is_err());
        assert!(Point::new(-90.001, 0.0).is_err());
    }

    #[test]
    fn reject_out_of_range_longitude() {
        assert!(Point::new(0.0, 180.001).is_err());
        assert!(Point::new(0.0, -180.001).is_err());
    }

    #[test]
    fn reject_non_finite() {
        assert!(Point::new(f64::NAN, 0.0).is_err());
        assert!(Point::new(0.0, f64::NAN).is_err());
        assert!(Point::new(f64::INFINITY, 0.0).is_err());
        assert!(Point::new(0.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn display() {
        let p = Point::new(8.5, 124.5).unwrap();
        assert_eq!(format!("{}", p), "(8.5, 124.5)");
    }

    #[test]
    fn debug() {
        let p = Point::new(8.5, 124.5).unwrap();
        assert_eq!(format!("{:?}", p), "Point(8.5, 124.5)");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any in-range pair constructs successfully
        #[test]
        fn in_range_always_constructs(lat in -90.0..=90.0f64, lon in -180.0..=180.0f64) {
            prop_assert!(Point::new(lat, lon).is_ok());
        }

        /// Accessors return exactly what was passed in
        #[test]
        fn accessors_roundtrip(lat in -90.0..=90.0f64, lon in -180.0..=180.0f64) {
            let p = Point::new(lat, lon).unwrap();
            prop_assert_eq!(p.latitude(), lat);
            prop_assert_eq!(p.longitude(), lon);
        }

        /// Latitudes beyond the poles are always rejected
        #[test]
        fn excessive_latitude_rejected(lat in 90.0001..1000.0f64, lon in -180.0..=180.0f64) {
            prop_assert!(Point::new(lat, lon).is_err());
            prop_assert!(Point::new(-lat, lon).is_err());
        }

        /// Longitudes beyond the antimeridian are always rejected
        #[test]
        fn excessive_longitude_rejected(lat in -90.0..=90.0f64, lon in 180.0001..1000.0f64) {
            prop_assert!(Point::new(lat, lon).is_err());
            prop_assert!(Point::new(lat, -lon).is_err());
        }
    }
}
