//! Explicit `lon,lat` pairs

use crate::coordinate::Coordinate;
use crate::errors::{CoordError, CoordResult};
use super::format::InputFormat;
use super::handler::{InputHandler, ResolvedInput};

/// Reads two decimal numbers, longitude first
///
/// The numbers may be separated by a comma, whitespace or both.
pub struct LonLatHandler;

impl InputHandler for LonLatHandler {
    fn resolve(&self, text: &str) -> CoordResult<ResolvedInput> {
        let parts: Vec<&str> = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        if parts.len() != 2 {
            return Err(CoordError::MalformedCoordinateString(
                format!("expected 'lon,lat', got '{}'", text.trim())));
        }

        let mut values = [0.0; 2];
        for (value, part) in values.iter_mut().zip(&parts) {
            *value = part.parse::<f64>().map_err(|_| {
                CoordError::MalformedCoordinateString(format!("'{}' is not a number", part))
            })?;
        }

        Ok(ResolvedInput::point(Coordinate::new(values[0], values[1])?))
    }

    fn format(&self) -> InputFormat {
        InputFormat::LonLat
    }
}
