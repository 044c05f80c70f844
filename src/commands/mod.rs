//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod convert_command;
pub mod batch_command;

pub use command_traits::{Command, CommandFactory};
pub use convert_command::ConvertCommand;
pub use batch_command::BatchCommand;

use clap::ArgMatches;
use crate::api::CoordKit;
use crate::errors::{CoordError, CoordResult};
use crate::input::InputFormat;

/// Factory for creating command instances based on CLI arguments
pub struct CoordkitCommandFactory;

impl CoordkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        CoordkitCommandFactory
    }
}

impl Default for CoordkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for CoordkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, kit: &'a CoordKit) -> CoordResult<Box<dyn Command + 'a>> {
        if args.get_one::<String>("batch").is_some() {
            Ok(Box::new(BatchCommand::new(args, kit)?))
        } else {
            Ok(Box::new(ConvertCommand::new(args, kit)?))
        }
    }
}

/// Read the `--format` option, defaulting to auto-detection
fn input_format(args: &ArgMatches) -> CoordResult<InputFormat> {
    match args.get_one::<String>("format") {
        Some(name) => name.parse(),
        None => Ok(InputFormat::Auto),
    }
}

/// Reject a positional input given together with `--batch`
fn ensure_no_positional(args: &ArgMatches) -> CoordResult<()> {
    match args.get_one::<String>("input") {
        Some(input) => Err(CoordError::Config(
            format!("Unexpected input '{}' together with --batch", input))),
        None => Ok(()),
    }
}
