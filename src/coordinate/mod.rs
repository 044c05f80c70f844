//! Coordinate model for conversions
//!
//! This module provides the canonical in-memory representation shared by
//! every parser and formatter: validated positions, bounding boxes and
//! the six WKT geometry variants.

mod bbox;
mod point;
mod geometry;

#[cfg(test)]
mod tests;

// Re-export key types
pub use self::bbox::BoundingBox;
pub use self::point::{Coordinate, DEFAULT_EPSILON};
pub use self::geometry::{Geometry, GeometryType};
