//! WKT geometry input

use crate::coordinate::Geometry;
use crate::errors::{CoordError, CoordResult};
use crate::wkt::parse_wkt;
use super::format::InputFormat;
use super::handler::{InputHandler, ResolvedInput};

/// Reads WKT; a point stays a point, other geometries become their
/// first coordinate plus extent
pub struct WktHandler;

impl InputHandler for WktHandler {
    fn resolve(&self, text: &str) -> CoordResult<ResolvedInput> {
        match parse_wkt(text)? {
            Geometry::Point(coordinate) => Ok(ResolvedInput::point(coordinate)),
            geometry => {
                let first = geometry.first_coordinate();
                let extent = geometry.extent();
                match (first, extent) {
                    (Some(coordinate), Some(bbox)) => Ok(ResolvedInput::area(coordinate, bbox)),
                    _ => Err(CoordError::MalformedWkt(
                        format!("{} has no coordinates", geometry.geometry_type().keyword()))),
                }
            },
        }
    }

    fn format(&self) -> InputFormat {
        InputFormat::Wkt
    }
}
