pub mod errors;
pub mod coordinate;
pub mod dms;
pub mod mgrs;
pub mod wkt;
pub mod input;
pub mod config;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::{ConversionInput, ConversionResult, CoordKit};
pub use crate::config::Config;
pub use crate::errors::{CoordError, CoordResult};

pub use coordinate::{BoundingBox, Coordinate, Geometry, GeometryType};
pub use dms::{parse_freeform, to_dms, DmsStrings};
pub use mgrs::{parse_mgrs, to_mgrs};
pub use wkt::{parse_wkt, to_wkt, ToWkt};
pub use input::InputFormat;
