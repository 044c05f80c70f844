//! MGRS grid reference input

use crate::errors::CoordResult;
use crate::mgrs::parse_mgrs;
use super::format::InputFormat;
use super::handler::{InputHandler, ResolvedInput};

/// Reads an MGRS reference as its cell centre and cell box
pub struct MgrsHandler;

impl InputHandler for MgrsHandler {
    fn resolve(&self, text: &str) -> CoordResult<ResolvedInput> {
        let (center, bbox) = parse_mgrs(text)?;
        Ok(ResolvedInput { coordinate: center, bbox })
    }

    fn format(&self) -> InputFormat {
        InputFormat::Mgrs
    }
}
