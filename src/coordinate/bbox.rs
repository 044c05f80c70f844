//! Bounding box structure for MGRS cells and geometry extents

use serde::{Serialize, Serializer};

use super::point::Coordinate;
use crate::errors::{CoordError, CoordResult};

/// A longitude/latitude bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum longitude
    pub min_lon: f64,
    /// Minimum latitude
    pub min_lat: f64,
    /// Maximum longitude
    pub max_lon: f64,
    /// Maximum latitude
    pub max_lat: f64,
}

impl BoundingBox {
    /// Create a new bounding box
    ///
    /// Fails with `OutOfRange` when a minimum exceeds its maximum or a
    /// corner is not a valid coordinate.
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> CoordResult<Self> {
        Coordinate::new(min_lon, min_lat)?;
        Coordinate::new(max_lon, max_lat)?;
        if min_lon > max_lon {
            return Err(CoordError::OutOfRange { axis: "min longitude", value: min_lon });
        }
        if min_lat > max_lat {
            return Err(CoordError::OutOfRange { axis: "min latitude", value: min_lat });
        }

        Ok(BoundingBox { min_lon, min_lat, max_lon, max_lat })
    }

    /// Smallest box covering every coordinate, or `None` for an empty input
    pub fn from_coordinates<'a, I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Coordinate>,
    {
        let mut iter = coords.into_iter();
        let first = iter.next()?;
        let mut bbox = BoundingBox {
            min_lon: first.lon(),
            min_lat: first.lat(),
            max_lon: first.lon(),
            max_lat: first.lat(),
        };
        for c in iter {
            bbox.min_lon = bbox.min_lon.min(c.lon());
            bbox.min_lat = bbox.min_lat.min(c.lat());
            bbox.max_lon = bbox.max_lon.max(c.lon());
            bbox.max_lat = bbox.max_lat.max(c.lat());
        }
        Some(bbox)
    }

    /// Get the width of the bounding box in degrees
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Get the height of the bounding box in degrees
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Get the center of the bounding box
    pub fn center(&self) -> CoordResult<Coordinate> {
        Coordinate::new(
            self.min_lon + self.width() / 2.0,
            self.min_lat + self.height() / 2.0,
        )
    }

    /// Check if this bounding box contains a coordinate (edges included)
    pub fn contains(&self, point: &Coordinate) -> bool {
        point.lon() >= self.min_lon && point.lon() <= self.max_lon &&
            point.lat() >= self.min_lat && point.lat() <= self.max_lat
    }

    /// The box as a closed ring, counter-clockwise from the south-west corner
    pub fn to_polygon(&self) -> Vec<Coordinate> {
        [
            (self.min_lon, self.min_lat),
            (self.max_lon, self.min_lat),
            (self.max_lon, self.max_lat),
            (self.min_lon, self.max_lat),
            (self.min_lon, self.min_lat),
        ]
            .iter()
            .filter_map(|&(lon, lat)| Coordinate::new(lon, lat).ok())
            .collect()
    }

    /// The box as `[min_lon, min_lat, max_lon, max_lat]`
    pub fn to_array(&self) -> [f64; 4] {
        [self.min_lon, self.min_lat, self.max_lon, self.max_lat]
    }
}

impl Serialize for BoundingBox {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}
