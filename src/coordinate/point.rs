//! Coordinate structure for representing WGS84 positions

use serde::{Serialize, Serializer};

use crate::errors::{CoordError, CoordResult};

/// Default tolerance for [`Coordinate::is_near`], roughly one metre
pub const DEFAULT_EPSILON: f64 = 1e-5;

/// A WGS84 position in decimal degrees
///
/// Fields are private so a `Coordinate` can only exist inside
/// longitude [-180, 180] and latitude [-90, 90].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    lon: f64,
    lat: f64,
}

impl Coordinate {
    /// Create a coordinate from longitude and latitude
    ///
    /// # Arguments
    /// * `lon` - Longitude in degrees, -180 to 180
    /// * `lat` - Latitude in degrees, -90 to 90
    ///
    /// # Returns
    /// The coordinate, or `OutOfRange` if either value is outside its
    /// domain or not finite
    pub fn new(lon: f64, lat: f64) -> CoordResult<Self> {
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CoordError::OutOfRange { axis: "longitude", value: lon });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordError::OutOfRange { axis: "latitude", value: lat });
        }
        Ok(Coordinate { lon, lat })
    }

    /// Create a coordinate, folding longitude back into [-180, 180]
    ///
    /// Inverse projections of zone 60 can land slightly past the
    /// antimeridian; latitude is still validated strictly.
    pub fn from_lon_lat_wrapped(lon: f64, lat: f64) -> CoordResult<Self> {
        if !lon.is_finite() {
            return Err(CoordError::OutOfRange { axis: "longitude", value: lon });
        }
        let mut wrapped = lon;
        if !(-180.0..=180.0).contains(&wrapped) {
            wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
        }
        Self::new(wrapped, lat)
    }

    /// Longitude in degrees
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude in degrees
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// The coordinate as a `[lon, lat]` pair
    pub fn to_array(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }

    /// Check whether another coordinate lies within `epsilon` degrees on both axes
    pub fn is_near(&self, other: &Coordinate, epsilon: f64) -> bool {
        (self.lon - other.lon).abs() <= epsilon && (self.lat - other.lat).abs() <= epsilon
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}
