//! Factory for creating input handlers

use crate::errors::{CoordError, CoordResult};
use super::format::InputFormat;
use super::freeform::FreeformHandler;
use super::handler::InputHandler;
use super::lonlat::LonLatHandler;
use super::mgrs::MgrsHandler;
use super::wkt::WktHandler;

/// Factory for creating input handlers
pub struct InputFactory;

impl InputFactory {
    /// Create the handler for an explicit format
    pub fn create_handler(format: InputFormat) -> CoordResult<Box<dyn InputHandler>> {
        match format {
            InputFormat::Freeform => Ok(Box::new(FreeformHandler)),
            InputFormat::LonLat => Ok(Box::new(LonLatHandler)),
            InputFormat::Mgrs => Ok(Box::new(MgrsHandler)),
            InputFormat::Wkt => Ok(Box::new(WktHandler)),
            InputFormat::Auto => Err(CoordError::Config(
                "auto format needs text to detect from".to_string())),
        }
    }

    /// Create the handler for some text, detecting the format when `Auto`
    pub fn handler_for(text: &str, format: InputFormat) -> Box<dyn InputHandler> {
        match format.resolve(text) {
            InputFormat::LonLat => Box::new(LonLatHandler),
            InputFormat::Mgrs => Box::new(MgrsHandler),
            InputFormat::Wkt => Box::new(WktHandler),
            InputFormat::Freeform | InputFormat::Auto => Box::new(FreeformHandler),
        }
    }

    /// Get a handler by format name
    pub fn get_handler_by_name(name: &str) -> CoordResult<Box<dyn InputHandler>> {
        Self::create_handler(name.parse()?)
    }
}
