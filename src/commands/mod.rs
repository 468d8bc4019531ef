//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod detect_command;
pub mod info_command;
pub mod render_command;

pub use command_traits::{Command, CommandFactory};
pub use detect_command::DetectCommand;
pub use info_command::InfoCommand;
pub use render_command::RenderCommand;

use clap::ArgMatches;
use crate::format::errors::FormatResult;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct FormatkitCommandFactory;

impl FormatkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        FormatkitCommandFactory
    }
}

impl Default for FormatkitCommandFactory {
    fn default() -> Self {
        FormatkitCommandFactory::new()
    }
}

impl CommandFactory for FormatkitCommandFactory {
    fn create_command(&self, args: &ArgMatches) -> FormatResult<Box<dyn Command>> {
        // Determine which command to run based on args
        if args.get_flag("render")
            || args.contains_id("thumbnail")
            || args.contains_id("tile-index")
        {
            Ok(Box::new(RenderCommand::new(args)?))
        } else if args.get_flag("detect") {
            Ok(Box::new(DetectCommand::new(args)?))
        } else {
            // Default to the metadata listing
            Ok(Box::new(InfoCommand::new(args)?))
        }
    }
}
