//! Well-Known Text codec for the 2D geometry types
//!
//! Reads and writes POINT, LINESTRING, POLYGON, MULTIPOINT,
//! MULTILINESTRING and MULTIPOLYGON with lon/lat axis order.

mod tokenizer;
mod reader;
mod writer;

#[cfg(test)]
mod tests;

pub use reader::parse_wkt;
pub use tokenizer::{tokenize, WktToken};
pub use writer::{to_wkt, ToWkt};
