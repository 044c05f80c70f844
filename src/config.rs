//! Conversion settings
//!
//! Defaults come from the bundled `coordkit.toml`; a user file passed on
//! the command line only needs the keys it overrides.

use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use log::debug;

use crate::dms::{DEFAULT_FRACTION_DIGITS, MAX_FRACTION_DIGITS};
use crate::errors::{CoordError, CoordResult};
use crate::mgrs::{DEFAULT_PRECISION, MAX_PRECISION};

lazy_static! {
    // Parse the bundled defaults once
    static ref DEFAULT_CONFIG: Config = {
        let content = include_str!("../coordkit.toml");
        Config::builtin().overlay(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse bundled configuration: {}", e);
            Config::builtin()
        })
    };
}

/// Settings applied to every conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// MGRS digits per axis, 0..=5
    pub mgrs_precision: u8,
    /// Fraction digits on the DMS seconds field
    pub dms_fraction_digits: usize,
    /// Print JSON instead of text in the CLI
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        *DEFAULT_CONFIG
    }
}

impl Config {
    /// Compiled-in values used if the bundled file cannot be read
    fn builtin() -> Self {
        Config {
            mgrs_precision: DEFAULT_PRECISION,
            dms_fraction_digits: DEFAULT_FRACTION_DIGITS,
            json: false,
        }
    }

    /// Parse TOML text on top of the defaults
    pub fn from_str(content: &str) -> CoordResult<Self> {
        Config::default().overlay(content)
    }

    /// Read a TOML file on top of the defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> CoordResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| CoordError::Config(format!("Cannot read {}: {}", path.display(), e)))?;
        let config = Config::from_str(&content)?;
        debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Apply the keys present in `content` to a copy of `self`
    fn overlay(self, content: &str) -> CoordResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(CoordError::Config(format!("Failed to parse TOML: {}", e))),
        };

        let mut config = self;

        if let Some(value) = lookup(&toml_value, "mgrs", "precision") {
            let precision = value.as_integer()
                .ok_or_else(|| type_error("mgrs.precision", "an integer"))?;
            if !(0..=MAX_PRECISION as i64).contains(&precision) {
                return Err(CoordError::Config(
                    format!("mgrs.precision must be 0..={}, got {}", MAX_PRECISION, precision)));
            }
            config.mgrs_precision = precision as u8;
        }

        if let Some(value) = lookup(&toml_value, "dms", "fraction_digits") {
            let digits = value.as_integer()
                .ok_or_else(|| type_error("dms.fraction_digits", "an integer"))?;
            if !(0..=MAX_FRACTION_DIGITS as i64).contains(&digits) {
                return Err(CoordError::Config(
                    format!("dms.fraction_digits must be 0..={}, got {}", MAX_FRACTION_DIGITS, digits)));
            }
            config.dms_fraction_digits = digits as usize;
        }

        if let Some(value) = lookup(&toml_value, "output", "json") {
            config.json = value.as_bool()
                .ok_or_else(|| type_error("output.json", "a boolean"))?;
        }

        Ok(config)
    }

    /// Replace the MGRS precision, checking its range
    pub fn with_precision(mut self, precision: u8) -> CoordResult<Self> {
        if precision > MAX_PRECISION {
            return Err(CoordError::InvalidPrecision(precision));
        }
        self.mgrs_precision = precision;
        Ok(self)
    }
}

fn lookup<'a>(value: &'a toml::Value, table: &str, key: &str) -> Option<&'a toml::Value> {
    value.get(table).and_then(|t| t.get(key))
}

fn type_error(key: &str, expected: &str) -> CoordError {
    CoordError::Config(format!("{} must be {}", key, expected))
}
