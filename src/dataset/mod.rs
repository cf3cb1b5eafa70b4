//! Caption dataset construction.
//!
//! The builder walks one or more image directories, parses every image file
//! name, and turns each conforming file into an [`ImageRecord`] carrying its
//! codes and caption. Files that do not follow the naming grammar are logged
//! and skipped; they never abort the build.
//!
//! The directory scan accepts `.png`, `.jpg`, `.jpeg` and `.tif` files, but
//! the file name grammar only accepts `.png`. Images with the other
//! extensions are therefore always reported as skipped.

pub mod io_caption_csv;
mod report;

pub use report::BuildReport;

use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::caption::caption_for;
use crate::error::SensorcapError;
use crate::filename::{parse_image_filename, ImageCodes, ParsedName};

/// File name suffixes considered during the directory scan (case-sensitive).
pub const IMAGE_EXTENSIONS: [&str; 4] = [".png", ".jpg", ".jpeg", ".tif"];

/// One captioned image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    #[serde(rename = "Image Path")]
    pub image_path: PathBuf,
    #[serde(rename = "Sensor Code")]
    pub sensor_code: String,
    #[serde(rename = "Scenario Code")]
    pub scenario_code: String,
    #[serde(rename = "Look Number Code")]
    pub look_number_code: String,
    #[serde(rename = "Description")]
    pub description: String,
}

impl ImageRecord {
    /// Creates a record from parsed codes and their caption.
    pub fn new(image_path: impl Into<PathBuf>, codes: &ImageCodes, description: String) -> Self {
        Self {
            image_path: image_path.into(),
            sensor_code: codes.sensor.as_str().to_string(),
            scenario_code: codes.scenario.clone(),
            look_number_code: codes.look_number.clone(),
            description,
        }
    }
}

/// Directory walk options.
#[derive(Clone, Debug)]
pub struct BuildOptions {
    /// Follow symbolic links to directories.
    pub follow_links: bool,
    /// Visit directory entries sorted by file name.
    pub sort_entries: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            follow_links: false,
            sort_entries: true,
        }
    }
}

/// Records produced by a build, with the build report.
#[derive(Clone, Debug)]
pub struct BuiltDataset {
    pub records: Vec<ImageRecord>,
    pub report: BuildReport,
}

/// Returns true if `file_name` ends with one of [`IMAGE_EXTENSIONS`].
pub fn has_image_extension(file_name: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|ext| file_name.ends_with(ext))
}

/// Build caption records from every image under `roots`.
///
/// Roots are walked in the order given. A missing or unreadable directory
/// is logged and counted in the report.
///
/// # Errors
/// Returns an error only when a parsed file carries a scenario code that has
/// no caption (see [`crate::caption::generate_caption`]).
pub fn build_dataset<P: AsRef<Path>>(
    roots: &[P],
    opts: &BuildOptions,
) -> Result<BuiltDataset, SensorcapError> {
    let mut report = BuildReport::new(roots.iter().map(|r| r.as_ref().to_path_buf()).collect());
    let mut records = Vec::new();

    for root in roots {
        let root = root.as_ref();
        info!("Scanning {}", root.display());

        let mut walker = WalkDir::new(root).min_depth(1).follow_links(opts.follow_links);
        if opts.sort_entries {
            walker = walker.sort_by_file_name();
        }

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Failed while traversing {}: {}", root.display(), err);
                    report.traversal_errors += 1;
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }
            report.files_scanned += 1;

            let file_name = entry.file_name().to_string_lossy();
            if !has_image_extension(&file_name) {
                continue;
            }
            report.candidates += 1;

            match parse_image_filename(&file_name) {
                ParsedName::Matched(codes) => {
                    let description = caption_for(&codes)?;
                    debug!("{} -> {}", entry.path().display(), description);
                    records.push(ImageRecord::new(entry.path(), &codes, description));
                }
                ParsedName::Unrecognized => {
                    warn!("Skipping {}: Unable to extract necessary codes.", file_name);
                    report.skipped.push(entry.path().to_path_buf());
                }
            }
        }
    }

    report.records = records.len();
    info!(
        "Built {} record(s), skipped {} file(s)",
        report.records,
        report.skipped_count()
    );

    Ok(BuiltDataset { records, report })
}
