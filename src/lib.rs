//! Sensorcap: caption datasets for infrared/visible sensor imagery.
//!
//! Sensorcap turns a collection of sensor images, named by sensor, scenario
//! and look-number codes, into a captioned dataset for training a
//! vision-language model. It works in three batch stages:
//!
//! 1. **build**: walk image directories, parse every file name, and write a
//!    caption table (CSV).
//! 2. **split**: hold out scenarios for test, then draw a seeded random
//!    validation partition from the rest.
//! 3. **materialize**: write one caption text file per image.
//!
//! # Modules
//!
//! - [`codes`]: sensor, scenario and look-number tables
//! - [`filename`]: the image file name grammar
//! - [`caption`]: caption generation
//! - [`dataset`]: dataset building and the caption table CSV
//! - [`split`]: train/validation/test partitioning
//! - [`materialize`]: caption text files on disk
//! - [`error`]: error types for sensorcap operations

pub mod caption;
pub mod codes;
pub mod dataset;
pub mod error;
pub mod filename;
pub mod materialize;
pub mod split;

use std::fmt;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::warn;
use serde::Serialize;

pub use error::SensorcapError;

/// The sensorcap CLI application.
#[derive(Parser)]
#[command(name = "sensorcap")]
#[command(version, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Build a caption table from image directories.
    Build(BuildArgs),
    /// Split a caption table into train, validation and test tables.
    Split(SplitArgs),
    /// Write one caption text file per record of a caption table.
    Materialize(MaterializeArgs),
    /// Print the caption for image file names.
    Caption(CaptionArgs),
}

/// Arguments for the build subcommand.
#[derive(clap::Args)]
struct BuildArgs {
    /// Image directories to walk, in order.
    #[arg(required = true)]
    dirs: Vec<PathBuf>,

    /// Output caption table CSV.
    #[arg(long, short, default_value = "clip_dataset.csv")]
    output: PathBuf,

    /// Follow symbolic links to directories.
    #[arg(long)]
    follow_links: bool,

    /// Report format ('text' or 'json').
    #[arg(long, default_value = "text")]
    report: String,
}

/// Arguments for the split subcommand.
#[derive(clap::Args)]
struct SplitArgs {
    /// Caption table CSV to split.
    dataset_path: PathBuf,

    /// Scenario codes to hold out for the test table.
    #[arg(long, alias = "test_scenarios", num_args = 1.., value_name = "CODE")]
    test_scenarios: Vec<String>,

    /// Output filename for the training table.
    #[arg(long, alias = "train_output", default_value = "training_set.csv")]
    train_output: PathBuf,

    /// Output filename for the test table.
    #[arg(long, alias = "test_output", default_value = "test_set.csv")]
    test_output: PathBuf,

    /// Output filename for the validation table.
    #[arg(long, alias = "val_output", default_value = "validation_set.csv")]
    val_output: PathBuf,

    /// Fraction of the training table moved to validation (0 disables it).
    #[arg(long, alias = "val_size", default_value_t = split::DEFAULT_VAL_FRACTION)]
    val_size: f64,

    /// Seed for the validation draw.
    #[arg(
        long,
        alias = "random_state",
        env = "SENSORCAP_RANDOM_STATE",
        default_value_t = split::DEFAULT_SEED
    )]
    random_state: u64,

    /// Report format ('text' or 'json').
    #[arg(long, default_value = "text")]
    report: String,
}

/// Arguments for the materialize subcommand.
#[derive(clap::Args)]
struct MaterializeArgs {
    /// Caption table CSV.
    csv_file: PathBuf,

    /// Folder where caption files are written.
    #[arg(long, alias = "output_folder", default_value = materialize::DEFAULT_OUTPUT_FOLDER)]
    output_folder: PathBuf,

    /// Also copy each image into the output folder.
    #[arg(long)]
    copy_images: bool,
}

/// Arguments for the caption subcommand.
#[derive(clap::Args)]
struct CaptionArgs {
    /// Image file names (or paths).
    #[arg(required = true)]
    names: Vec<PathBuf>,
}

/// Run the sensorcap CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), SensorcapError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Build(args)) => run_build(args),
        Some(Commands::Split(args)) => run_split(args),
        Some(Commands::Materialize(args)) => run_materialize(args),
        Some(Commands::Caption(args)) => run_caption(args),
        None => {
            println!("sensorcap {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Caption datasets for infrared/visible sensor imagery.");
            println!();
            println!("Run 'sensorcap --help' for usage information.");
            Ok(())
        }
    }
}

/// Print a report as text or JSON.
fn print_report<R: Serialize + fmt::Display>(report: &R, format: &str) -> Result<(), SensorcapError> {
    check_report_format(format)?;
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", report);
    }
    Ok(())
}

fn check_report_format(format: &str) -> Result<(), SensorcapError> {
    match format {
        "text" | "json" => Ok(()),
        other => Err(SensorcapError::UnsupportedReportFormat(format!(
            "'{}' (supported: text, json)",
            other
        ))),
    }
}

/// Execute the build subcommand.
fn run_build(args: BuildArgs) -> Result<(), SensorcapError> {
    check_report_format(&args.report)?;

    let opts = dataset::BuildOptions {
        follow_links: args.follow_links,
        ..Default::default()
    };
    let built = dataset::build_dataset(&args.dirs, &opts)?;
    dataset::io_caption_csv::write_caption_csv(&args.output, &built.records)?;

    print_report(&built.report, &args.report)?;
    if args.report == "text" {
        println!("Dataset saved to '{}'.", args.output.display());
    }
    Ok(())
}

/// Execute the split subcommand.
fn run_split(args: SplitArgs) -> Result<(), SensorcapError> {
    check_report_format(&args.report)?;

    let records = dataset::io_caption_csv::read_caption_csv(&args.dataset_path)?;
    let opts = split::SplitOptions {
        test_scenarios: args.test_scenarios,
        val_fraction: args.val_size,
        seed: args.random_state,
    };
    let mut outcome = split::split_dataset(&records, &opts)?;

    save_partition(&args.train_output, &outcome.train, &mut outcome.report)?;
    save_partition(&args.test_output, &outcome.test, &mut outcome.report)?;
    if let Some(validation) = &outcome.validation {
        save_partition(&args.val_output, validation, &mut outcome.report)?;
    }

    print_report(&outcome.report, &args.report)
}

fn save_partition(
    path: &Path,
    records: &[dataset::ImageRecord],
    report: &mut split::SplitReport,
) -> Result<(), SensorcapError> {
    dataset::io_caption_csv::write_caption_csv(path, records)?;
    report.outputs.push(path.to_path_buf());
    Ok(())
}

/// Execute the materialize subcommand.
///
/// Failures of the whole operation are reported as a message rather than
/// returned, so the command exits successfully either way.
fn run_materialize(args: MaterializeArgs) -> Result<(), SensorcapError> {
    let opts = materialize::MaterializeOptions {
        copy_images: args.copy_images,
    };

    match materialize::materialize_captions(&args.csv_file, &args.output_folder, &opts) {
        Ok(report) => print!("{}", report),
        Err(err) => println!("{}", materialize::failure_message(&err)),
    }
    Ok(())
}

/// Execute the caption subcommand.
fn run_caption(args: CaptionArgs) -> Result<(), SensorcapError> {
    for name in &args.names {
        match filename::parse_image_path(name) {
            filename::ParsedName::Matched(codes) => {
                println!("{}\t{}", name.display(), caption::caption_for(&codes)?);
            }
            filename::ParsedName::Unrecognized => {
                warn!(
                    "Skipping {}: Unable to extract necessary codes.",
                    name.display()
                );
            }
        }
    }
    Ok(())
}
