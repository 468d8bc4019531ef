//! Format detection command

use clap::ArgMatches;
use log::info;

use crate::api::FormatKit;
use crate::commands::command_traits::Command;
use crate::format::errors::FormatResult;

/// Command that detects the format of a file and prints its identity
pub struct DetectCommand {
    input_path: String,
}

impl DetectCommand {
    /// Creates a detect command from CLI arguments
    pub fn new(args: &ArgMatches) -> FormatResult<Self> {
        let input_path = args
            .get_one::<String>("input")
            .expect("input is a required argument")
            .clone();

        Ok(DetectCommand { input_path })
    }
}

impl Command for DetectCommand {
    fn execute(&self) -> FormatResult<()> {
        info!("Detecting format of {}", self.input_path);

        let kit = FormatKit::new(None)?;
        let descriptor = kit.detect(&self.input_path)?;

        println!("Format: {}", descriptor.name());
        if !descriptor.remarks().is_empty() {
            println!("Remarks: {}", descriptor.remarks());
        }
        println!("Spatial: {}", descriptor.is_spatial());
        println!("Pyramidal: {}", descriptor.is_pyramidal());
        println!("Needs conversion: {}", descriptor.needs_conversion());

        Ok(())
    }
}
