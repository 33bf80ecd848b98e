// Grid Augment - Main executable
// Author: Gabriel Demetrios Lafis

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::{App, Arg, ArgMatches};
use log::info;

use grid_augment::{
    utils::{init_logging, Config},
    BatchProcessor,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse command line arguments
    let matches = App::new("Grid Augment")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Gabriel Demetrios Lafis")
        .about("Writes flipped and rotated copies of grid puzzle datasets")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Sets a custom config file")
                .takes_value(true)
                .global(true),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("DIR")
                .help("Sets the output directory")
                .takes_value(true)
                .global(true),
        )
        .arg(
            Arg::new("fail-fast")
                .long("fail-fast")
                .help("Aborts the batch on the first failing file")
                .global(true),
        )
        .arg(
            Arg::new("no-progress")
                .long("no-progress")
                .help("Hides the progress bar")
                .global(true),
        )
        .arg(
            Arg::new("folder")
                .value_name("FOLDER")
                .help("Folder containing dataset JSON files")
                .index(1),
        )
        .subcommand(
            App::new("file")
                .about("Augments a single dataset file")
                .arg(
                    Arg::new("input")
                        .value_name("INPUT")
                        .help("Dataset JSON file")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    // Load configuration
    let mut config = match matches.value_of("config") {
        Some(path) => Config::from_file(path).with_context(|| format!("loading config {}", path))?,
        None => Config::default(),
    };
    apply_overrides(&mut config, &matches);

    // Initialize logging
    if let Err(err) = init_logging(config.log_level_filter()) {
        eprintln!("Error initializing logger: {}", err);
    }

    let processor = BatchProcessor::new(config.batch.clone());

    if let Some(sub) = matches.subcommand_matches("file") {
        let input = sub.value_of("input").unwrap_or_default();
        let output_dir = match &config.batch.output_dir {
            Some(dir) => dir.clone(),
            None => Path::new(input)
                .parent()
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_else(|| ".".to_string()),
        };

        let written = processor
            .process_file(input, &output_dir)
            .with_context(|| format!("augmenting {}", input))?;
        for path in written {
            info!("Wrote {}", path.display());
        }
        return Ok(());
    }

    match matches.value_of("folder") {
        Some(folder) => {
            let report = processor
                .process_folder(folder)
                .with_context(|| format!("augmenting folder {}", folder))?;

            info!(
                "{} files processed, {} outputs written, {} failed",
                report.processed,
                report.written.len(),
                report.failed.len()
            );

            if report.has_failures() {
                process::exit(2);
            }
        }
        None => println!("No folder specified. Use --help for usage information."),
    }

    Ok(())
}

/// Command line flags take precedence over the config file
fn apply_overrides(config: &mut Config, matches: &ArgMatches) {
    if let Some(dir) = matches.value_of("output") {
        config.batch.output_dir = Some(dir.to_string());
    }
    if matches.is_present("fail-fast") {
        config.batch.continue_on_error = false;
    }
    if matches.is_present("no-progress") {
        config.batch.show_progress = false;
    }
}
