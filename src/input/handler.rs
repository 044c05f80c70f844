//! Input handler trait definition

use crate::coordinate::{BoundingBox, Coordinate};
use crate::errors::CoordResult;
use super::format::InputFormat;

/// A parsed input reduced to its representative coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedInput {
    pub coordinate: Coordinate,
    /// Extent of the input when it covers an area
    pub bbox: Option<BoundingBox>,
}

impl ResolvedInput {
    pub fn point(coordinate: Coordinate) -> Self {
        ResolvedInput { coordinate, bbox: None }
    }

    pub fn area(coordinate: Coordinate, bbox: BoundingBox) -> Self {
        ResolvedInput { coordinate, bbox: Some(bbox) }
    }
}

/// Strategy trait for reading one input format
pub trait InputHandler: Send + Sync {
    /// Parse the text and reduce it to a representative coordinate
    fn resolve(&self, text: &str) -> CoordResult<ResolvedInput>;

    /// The format this handler reads
    fn format(&self) -> InputFormat;
}
