//! Custom error types for coordinate conversion

use std::fmt;
use std::io;

/// Coordinate conversion error types
#[derive(Debug, Clone, PartialEq)]
pub enum CoordError {
    /// Longitude or latitude outside the valid domain
    OutOfRange { axis: &'static str, value: f64 },
    /// Free-form DMS/decimal string could not be read
    MalformedCoordinateString(String),
    /// MGRS zone number outside 1-60, or not valid for the band
    InvalidZone(String),
    /// MGRS latitude band letter not recognised
    InvalidBandLetter(char),
    /// MGRS square letters or digits do not form a grid reference
    MalformedGridReference(String),
    /// Coordinate cannot be expressed in the selected projection
    OutOfProjectionDomain(String),
    /// MGRS precision outside 0-5 digits
    InvalidPrecision(u8),
    /// WKT keyword is not one of the six supported geometry types
    UnsupportedGeometryType(String),
    /// WKT text does not follow the grammar
    MalformedWkt(String),
    /// Configuration could not be parsed
    Config(String),
    /// I/O error, kept as text so the error stays comparable
    Io(String),
    /// Some lines of a batch could not be converted
    BatchFailed { failed: usize, total: usize },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::OutOfRange { axis, value } => write!(f, "{} out of range: {}", axis, value),
            CoordError::MalformedCoordinateString(msg) => write!(f, "Malformed coordinate string: {}", msg),
            CoordError::InvalidZone(msg) => write!(f, "Invalid MGRS zone: {}", msg),
            CoordError::InvalidBandLetter(c) => write!(f, "Invalid MGRS band letter: '{}'", c),
            CoordError::MalformedGridReference(msg) => write!(f, "Malformed MGRS grid reference: {}", msg),
            CoordError::OutOfProjectionDomain(msg) => write!(f, "Outside projection domain: {}", msg),
            CoordError::InvalidPrecision(p) => write!(f, "Invalid MGRS precision {} (expected 0-5)", p),
            CoordError::UnsupportedGeometryType(t) => write!(f, "Unsupported geometry type: {}", t),
            CoordError::MalformedWkt(msg) => write!(f, "Malformed WKT: {}", msg),
            CoordError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CoordError::Io(msg) => write!(f, "I/O error: {}", msg),
            CoordError::BatchFailed { failed, total } => write!(f, "{} of {} inputs failed", failed, total),
        }
    }
}

impl std::error::Error for CoordError {}

impl From<serde_json::Error> for CoordError {
    fn from(error: serde_json::Error) -> Self {
        CoordError::Io(format!("JSON output failed: {}", error))
    }
}

impl From<io::Error> for CoordError {
    fn from(error: io::Error) -> Self {
        CoordError::Io(error.to_string())
    }
}

/// Result type for coordinate operations
pub type CoordResult<T> = Result<T, CoordError>;
