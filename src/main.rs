use clap::{Arg, ArgAction, Command as ClapCommand};
use log::{error, LevelFilter};
use std::process;

// Import from your library
use formatkit::commands::{CommandFactory, FormatkitCommandFactory};
use formatkit::utils::logger::Logger;

fn main() {
    let matches = ClapCommand::new("FormatKit")
        .version("0.1")
        .about("Detect image formats, list metadata and render regions")
        .arg(
            Arg::new("input")
                .help("Input image file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write logs to a file instead of the console")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("detect")
                .short('d')
                .long("detect")
                .help("Only detect the file's format")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("render")
                .short('r')
                .long("render")
                .help("Render image data")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output image file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("region")
                .long("region")
                .help("Pixel region to render (x,y,width,height)")
                .value_name("REGION")
                .required(false),
        )
        .arg(
            Arg::new("size")
                .long("size")
                .help("Output size for region rendering (WIDTHxHEIGHT)")
                .value_name("SIZE")
                .required(false),
        )
        .arg(
            Arg::new("thumbnail")
                .long("thumbnail")
                .help("Render a thumbnail capped at WIDTHxHEIGHT")
                .value_name("SIZE")
                .required(false),
        )
        .arg(
            Arg::new("tile-index")
                .long("tile-index")
                .help("Render the normalized tile with this row-major index")
                .value_name("INDEX")
                .value_parser(clap::value_parser!(u32))
                .required(false),
        )
        .arg(
            Arg::new("tile-level")
                .long("tile-level")
                .help("Pyramid level for tile rendering")
                .value_name("LEVEL")
                .value_parser(clap::value_parser!(u32))
                .required(false),
        )
        .arg(
            Arg::new("tile-size")
                .long("tile-size")
                .help("Nominal tile side length in pixels")
                .value_name("PIXELS")
                .value_parser(clap::value_parser!(u32))
                .default_value("256")
                .required(false),
        )
        .arg(
            Arg::new("channel")
                .short('c')
                .long("channel")
                .help("Channel index to select")
                .value_name("INDEX")
                .value_parser(clap::value_parser!(u32))
                .required(false),
        )
        .arg(
            Arg::new("z")
                .long("z")
                .help("Z-slice index to select")
                .value_name("INDEX")
                .value_parser(clap::value_parser!(u32))
                .required(false),
        )
        .arg(
            Arg::new("t")
                .long("t")
                .help("Time-frame index to select")
                .value_name("INDEX")
                .value_parser(clap::value_parser!(u32))
                .required(false),
        )
        .get_matches();

    // File logger when requested, console logger otherwise
    if let Some(log_file) = matches.get_one::<String>("log-file") {
        if let Err(e) = Logger::init_global_logger(log_file) {
            eprintln!("Failed to initialize log file {}: {}", log_file, e);
            process::exit(1);
        }
    } else {
        let level = if matches.get_flag("verbose") {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        };
        env_logger::Builder::new().filter_level(level).init();
    }

    let factory = FormatkitCommandFactory::new();
    let command = match factory.create_command(&matches) {
        Ok(command) => command,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = command.execute() {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
