//! Input format names and detection

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{CoordError, CoordResult};

lazy_static! {
    // A keyword, an optional Z/M/ZM modifier, then `(` or a trailing EMPTY
    static ref WKT_PATTERN: Regex =
        Regex::new(r"(?i)^\s*[a-z]+\s*((zm|z|m)\s*)?(\(|empty\s*$)").unwrap();

    // Grid zone designator, 100 km square and an optional digit block
    static ref MGRS_PATTERN: Regex =
        Regex::new(r"(?i)^\s*(\d{1,2}\s*[a-z]|[abyz])\s*[a-z]{2}(\s*\d+(\s+\d+)?)?\s*$").unwrap();
}

/// The text format of a conversion input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Decide from the text itself
    Auto,
    /// Decimal or DMS text, latitude first unless hemisphere letters say otherwise
    Freeform,
    /// `lon,lat` decimal pair
    LonLat,
    Mgrs,
    Wkt,
}

impl InputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            InputFormat::Auto => "auto",
            InputFormat::Freeform => "freeform",
            InputFormat::LonLat => "lonlat",
            InputFormat::Mgrs => "mgrs",
            InputFormat::Wkt => "wkt",
        }
    }

    /// Names accepted by [`InputFormat::from_str`]
    pub fn names() -> [&'static str; 5] {
        ["auto", "freeform", "lonlat", "mgrs", "wkt"]
    }

    /// Guess the format of raw text
    ///
    /// Never returns `Auto` or `LonLat`: a bare number pair is read as
    /// free-form text, latitude first.
    pub fn detect(text: &str) -> InputFormat {
        if WKT_PATTERN.is_match(text) {
            InputFormat::Wkt
        } else if MGRS_PATTERN.is_match(text) {
            InputFormat::Mgrs
        } else {
            InputFormat::Freeform
        }
    }

    /// Resolve `Auto` against the text, keeping explicit formats
    pub fn resolve(self, text: &str) -> InputFormat {
        match self {
            InputFormat::Auto => InputFormat::detect(text),
            explicit => explicit,
        }
    }
}

impl FromStr for InputFormat {
    type Err = CoordError;

    fn from_str(s: &str) -> CoordResult<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(InputFormat::Auto),
            "freeform" | "dms" | "decimal" => Ok(InputFormat::Freeform),
            "lonlat" | "lon,lat" => Ok(InputFormat::LonLat),
            "mgrs" => Ok(InputFormat::Mgrs),
            "wkt" => Ok(InputFormat::Wkt),
            _ => Err(CoordError::Config(format!("Unknown input format: {}", s))),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
