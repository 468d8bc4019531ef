//! Metadata listing command

use clap::ArgMatches;
use log::info;

use crate::api::FormatKit;
use crate::commands::command_traits::Command;
use crate::format::errors::FormatResult;

/// Command that extracts and prints the full metadata of a file
pub struct InfoCommand {
    input_path: String,
}

impl InfoCommand {
    /// Creates an info command from CLI arguments
    pub fn new(args: &ArgMatches) -> FormatResult<Self> {
        let input_path = args
            .get_one::<String>("input")
            .expect("input is a required argument")
            .clone();

        Ok(InfoCommand { input_path })
    }
}

impl Command for InfoCommand {
    fn execute(&self) -> FormatResult<()> {
        info!("Describing {}", self.input_path);

        let kit = FormatKit::new(None)?;
        let description = kit.describe(&self.input_path)?;
        print!("{}", description);

        Ok(())
    }
}
