use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use std::process;
use log::{error, LevelFilter};

use coordkit::commands::{CommandFactory, CoordkitCommandFactory};
use coordkit::errors::CoordResult;
use coordkit::input::InputFormat;
use coordkit::utils::logger::Logger;
use coordkit::{Config, CoordKit};

fn main() {
    let matches = ClapCommand::new("coordkit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Convert coordinates between decimal, DMS, MGRS and WKT")
        .arg(
            Arg::new("input")
                .help("Coordinate to convert: decimal or DMS text, an MGRS reference or WKT")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Input format")
                .value_name("FORMAT")
                .value_parser(InputFormat::names())
                .default_value("auto"),
        )
        .arg(
            Arg::new("precision")
                .short('p')
                .long("precision")
                .help("MGRS digits per axis (0 = 100 km, 5 = 1 m)")
                .value_name("DIGITS")
                .value_parser(clap::value_parser!(u8))
                .required(false),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print results as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("batch")
                .short('b')
                .long("batch")
                .help("Convert one input per line from FILE ('-' for stdin)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .required(false),
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
                .help("Also write log records to FILE")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Warn };
    if let Some(log_file) = matches.get_one::<String>("log-file") {
        if let Err(e) = Logger::init_global_logger(log_file, level) {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
            .init();
    }

    let kit = match load_config(&matches) {
        Ok(config) => CoordKit::new(config),
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let factory = CoordkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &kit);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}

/// Bundled defaults, then the `--config` file, then command-line overrides
fn load_config(matches: &ArgMatches) -> CoordResult<Config> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Some(&precision) = matches.get_one::<u8>("precision") {
        config = config.with_precision(precision)?;
    }
    if matches.get_flag("json") {
        config.json = true;
    }
    Ok(config)
}
