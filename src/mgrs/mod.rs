//! Military Grid Reference System codec
//!
//! This module implements MGRS over UTM and UPS on the WGS84 ellipsoid
//! without external projection libraries:
//! - `utm` and `ups` hold the forward/inverse projections
//! - `grid` holds zone, band and 100 km square lettering
//! - `codec` formats and parses complete references

pub(crate) mod constants;
mod utm;
mod ups;
mod grid;
mod codec;


pub use codec::{encode, parse_mgrs, to_mgrs, MgrsReference};
pub use constants::grid::{DEFAULT_PRECISION, MAX_PRECISION};
pub use grid::{band_letter, GridZone};
pub use utm::{zone_number, ProjectedPoint};
