//! Free-form decimal and DMS input

use crate::dms::parse_freeform;
use crate::errors::CoordResult;
use super::format::InputFormat;
use super::handler::{InputHandler, ResolvedInput};

/// Reads decimal degrees and DMS text
pub struct FreeformHandler;

impl InputHandler for FreeformHandler {
    fn resolve(&self, text: &str) -> CoordResult<ResolvedInput> {
        Ok(ResolvedInput::point(parse_freeform(text)?))
    }

    fn format(&self) -> InputFormat {
        InputFormat::Freeform
    }
}
