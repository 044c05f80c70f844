//! Single conversion command
//!
//! Converts one input given on the command line and prints every
//! representation.

use clap::ArgMatches;
use log::info;

use crate::api::CoordKit;
use crate::commands::command_traits::Command;
use crate::errors::{CoordError, CoordResult};
use crate::input::InputFormat;

/// Command for converting one coordinate input
pub struct ConvertCommand<'a> {
    /// Raw input text
    input: String,
    /// Explicit or auto-detected input format
    format: InputFormat,
    kit: &'a CoordKit,
}

impl<'a> ConvertCommand<'a> {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Configured converter
    ///
    /// # Returns
    /// A new ConvertCommand instance or an error
    pub fn new(args: &ArgMatches, kit: &'a CoordKit) -> CoordResult<Self> {
        let input = args.get_one::<String>("input")
            .ok_or_else(|| CoordError::Config("Missing input; pass a coordinate or use --batch".to_string()))?
            .clone();

        Ok(ConvertCommand {
            input,
            format: super::input_format(args)?,
            kit,
        })
    }
}

impl<'a> Command for ConvertCommand<'a> {
    fn execute(&self) -> CoordResult<()> {
        info!("Converting '{}' ({})", self.input, self.format);

        let result = self.kit.convert_text(&self.input, self.format)?;

        if self.kit.config().json {
            println!("{}", result.to_json()?);
        } else {
            println!("{}", result.to_text());
        }

        Ok(())
    }
}
