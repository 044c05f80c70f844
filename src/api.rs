use log::debug;
use rayon::prelude::*;
use serde::Serialize;

use crate::config::Config;
use crate::coordinate::{BoundingBox, Coordinate};
use crate::dms::DmsFormatter;
use crate::errors::CoordResult;
use crate::input::{InputFactory, InputFormat, ResolvedInput};
use crate::mgrs::to_mgrs;
use crate::utils::progress::ProgressTracker;
use crate::wkt::to_wkt;

/// One conversion request
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionInput {
    /// Decimal or DMS text
    Freeform(String),
    /// Longitude and latitude in decimal degrees
    LonLat(f64, f64),
    Mgrs(String),
    Wkt(String),
}

impl ConversionInput {
    pub fn format(&self) -> InputFormat {
        match self {
            ConversionInput::Freeform(_) => InputFormat::Freeform,
            ConversionInput::LonLat(..) => InputFormat::LonLat,
            ConversionInput::Mgrs(_) => InputFormat::Mgrs,
            ConversionInput::Wkt(_) => InputFormat::Wkt,
        }
    }
}

/// Every representation of one resolved location
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    /// Representative coordinate
    pub lon_lat: Coordinate,
    /// Extent of an MGRS cell or non-point geometry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
    /// WKT point of `lon_lat`
    pub wkt: String,
    pub dms: String,
    pub dms_without_space: String,
    pub mgrs: String,
}

/// Main interface to the coordkit library
///
/// Holds only immutable settings, so one instance can serve many
/// conversions, including from several threads.
#[derive(Debug, Clone, Default)]
pub struct CoordKit {
    config: Config,
}

impl CoordKit {
    /// Create a converter with the given settings
    pub fn new(config: Config) -> Self {
        CoordKit { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert a typed input into every supported representation
    ///
    /// # Arguments
    /// * `input` - Free-form text, a lon/lat pair, an MGRS reference or WKT
    ///
    /// # Returns
    /// The conversion result, or the first error met while parsing or
    /// encoding
    pub fn convert(&self, input: &ConversionInput) -> CoordResult<ConversionResult> {
        let resolved = match input {
            ConversionInput::LonLat(lon, lat) => ResolvedInput::point(Coordinate::new(*lon, *lat)?),
            ConversionInput::Freeform(text) | ConversionInput::Mgrs(text) | ConversionInput::Wkt(text) => {
                InputFactory::create_handler(input.format())?.resolve(text)?
            },
        };
        self.finish(resolved)
    }

    /// Convert raw text, detecting its format when `format` is `Auto`
    pub fn convert_text(&self, text: &str, format: InputFormat) -> CoordResult<ConversionResult> {
        let handler = InputFactory::handler_for(text, format);
        debug!("Reading '{}' as {}", text.trim(), handler.format());
        self.finish(handler.resolve(text)?)
    }

    /// Convert many raw inputs in parallel
    ///
    /// Results come back in input order; each input succeeds or fails on
    /// its own.
    pub fn convert_all<S>(&self, inputs: &[S], format: InputFormat, progress: Option<&ProgressTracker>)
        -> Vec<CoordResult<ConversionResult>>
    where
        S: AsRef<str> + Sync,
    {
        inputs.par_iter()
            .map(|input| {
                let result = self.convert_text(input.as_ref(), format);
                if let Some(tracker) = progress {
                    tracker.increment(1);
                }
                result
            })
            .collect()
    }

    /// Format a resolved coordinate in every output representation
    fn finish(&self, resolved: ResolvedInput) -> CoordResult<ConversionResult> {
        let coordinate = resolved.coordinate;
        let dms = DmsFormatter::new(self.config.dms_fraction_digits).format(&coordinate);
        let mgrs = to_mgrs(&coordinate, self.config.mgrs_precision)?;

        Ok(ConversionResult {
            lon_lat: coordinate,
            bbox: resolved.bbox,
            wkt: to_wkt(&coordinate),
            dms: dms.with_space,
            dms_without_space: dms.without_space,
            mgrs,
        })
    }
}

impl ConversionResult {
    /// Plain-text rendering, one field per line
    pub fn to_text(&self) -> String {
        let mut result = format!("lonLat: {}, {}\n", self.lon_lat.lon(), self.lon_lat.lat());
        if let Some(bbox) = &self.bbox {
            result.push_str(&format!("bbox: {}, {}, {}, {}\n",
                                     bbox.min_lon, bbox.min_lat, bbox.max_lon, bbox.max_lat));
        }
        result.push_str(&format!("wkt: {}\n", self.wkt));
        result.push_str(&format!("dms: {}\n", self.dms));
        result.push_str(&format!("dmsWithoutSpace: {}\n", self.dms_without_space));
        result.push_str(&format!("mgrs: {}", self.mgrs));
        result
    }

    /// Pretty-printed JSON with camelCase keys
    pub fn to_json(&self) -> CoordResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
