//! Caption folder materialization.
//!
//! Writes one `{image stem}.txt` file per caption table record, containing
//! exactly the caption text. Two records whose images share a stem (for
//! example `x.png` and `x.jpg`, or the same name in two directories) write
//! the same caption file; the later record wins. The report counts these
//! collisions.

mod report;

pub use report::MaterializeReport;

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::dataset::io_caption_csv::read_caption_csv;
use crate::dataset::ImageRecord;
use crate::error::SensorcapError;

/// Default output folder for caption files.
pub const DEFAULT_OUTPUT_FOLDER: &str = "./DATA";

/// Materialization options.
#[derive(Clone, Debug, Default)]
pub struct MaterializeOptions {
    /// Also copy each image next to its caption file.
    pub copy_images: bool,
}

/// Caption file name for an image: its stem with a `.txt` extension.
pub fn caption_file_name(image_path: &Path) -> Option<PathBuf> {
    let stem = image_path.file_stem()?;
    let mut name = stem.to_os_string();
    name.push(".txt");
    Some(PathBuf::from(name))
}

/// Write caption files for `records` into `out_dir`.
///
/// `out_dir` and any missing parents are created first.
pub fn write_caption_files(
    records: &[ImageRecord],
    out_dir: &Path,
    opts: &MaterializeOptions,
) -> Result<MaterializeReport, SensorcapError> {
    fs::create_dir_all(out_dir)?;

    let mut report = MaterializeReport {
        output_dir: out_dir.to_path_buf(),
        records: records.len(),
        ..Default::default()
    };
    let mut written: HashSet<PathBuf> = HashSet::new();

    for record in records {
        let file_name = caption_file_name(&record.image_path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("image path '{}' has no file name", record.image_path.display()),
            )
        })?;
        let caption_path = out_dir.join(&file_name);

        if !written.insert(caption_path.clone()) {
            warn!(
                "{} overwrites caption file {}",
                record.image_path.display(),
                caption_path.display()
            );
            report.collisions += 1;
        }

        fs::write(&caption_path, record.description.as_bytes())?;
        debug!("Wrote {}", caption_path.display());

        if opts.copy_images {
            if let Some(image_name) = record.image_path.file_name() {
                if copy_image(&record.image_path, &out_dir.join(image_name))? {
                    report.images_copied += 1;
                }
            }
        }
    }

    report.caption_files = written.len();
    info!(
        "Wrote {} caption file(s) to {}",
        report.caption_files,
        out_dir.display()
    );

    Ok(report)
}

/// Copy `source` to `dest` unless both name the same file.
///
/// Returns whether a copy happened. A missing source is an I/O error.
fn copy_image(source: &Path, dest: &Path) -> io::Result<bool> {
    let source_real = fs::canonicalize(source)?;
    if let Ok(dest_real) = fs::canonicalize(dest) {
        if dest_real == source_real {
            info!("{} is already in the output folder", source.display());
            return Ok(false);
        }
    }
    fs::copy(source, dest)?;
    Ok(true)
}

/// Read a caption table CSV and write its caption files into `out_dir`.
pub fn materialize_captions(
    csv_path: &Path,
    out_dir: &Path,
    opts: &MaterializeOptions,
) -> Result<MaterializeReport, SensorcapError> {
    let records = read_caption_csv(csv_path)?;
    write_caption_files(&records, out_dir, opts)
}

/// User-facing message for a failed materialization.
pub fn failure_message(err: &SensorcapError) -> String {
    match err {
        SensorcapError::CsvNotFound { path } => {
            format!("Error: The file {} does not exist.", path.display())
        }
        SensorcapError::EmptyCsv { .. } => "Error: The given file is empty.".to_string(),
        other => format!("An error occurred: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, description: &str) -> ImageRecord {
        ImageRecord {
            image_path: path.into(),
            sensor_code: "cegr".to_string(),
            scenario_code: "02003".to_string(),
            look_number_code: "0001".to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn caption_name_strips_only_the_last_extension() {
        assert_eq!(
            caption_file_name(Path::new("a/b/cegr02003_0001_1.png")),
            Some(PathBuf::from("cegr02003_0001_1.txt"))
        );
        assert_eq!(
            caption_file_name(Path::new("x.tar.png")),
            Some(PathBuf::from("x.tar.txt"))
        );
        assert_eq!(caption_file_name(Path::new("")), None);
    }

    #[test]
    fn writes_exact_caption_bytes_into_nested_dir() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let out = temp.path().join("nested/DATA");
        let records = vec![
            record("imgs/cegr02003_0001_1.png", "first caption."),
            record("imgs/cegr02003_0001_2.png", "second caption."),
        ];

        let report =
            write_caption_files(&records, &out, &MaterializeOptions::default()).expect("write ok");

        assert_eq!(report.caption_files, 2);
        assert_eq!(report.collisions, 0);
        assert_eq!(
            fs::read(out.join("cegr02003_0001_1.txt")).unwrap(),
            b"first caption."
        );
        assert_eq!(
            fs::read(out.join("cegr02003_0001_2.txt")).unwrap(),
            b"second caption."
        );
    }

    #[test]
    fn shared_stem_overwrites_and_is_counted() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let records = vec![
            record("a/x.png", "from png"),
            record("b/x.jpg", "from jpg"),
        ];

        let report = write_caption_files(&records, temp.path(), &MaterializeOptions::default())
            .expect("write ok");

        assert_eq!(report.records, 2);
        assert_eq!(report.caption_files, 1);
        assert_eq!(report.collisions, 1);
        assert_eq!(
            fs::read_to_string(temp.path().join("x.txt")).unwrap(),
            "from jpg"
        );
    }

    #[test]
    fn images_are_copied_only_on_request() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let image = temp.path().join("src/cegr02003_0001_1.png");
        fs::create_dir_all(image.parent().unwrap()).unwrap();
        fs::write(&image, b"png").unwrap();
        let records = vec![ImageRecord {
            image_path: image.clone(),
            ..record("", "caption")
        }];

        let plain = temp.path().join("plain");
        write_caption_files(&records, &plain, &MaterializeOptions::default()).unwrap();
        assert!(!plain.join("cegr02003_0001_1.png").exists());

        let copied = temp.path().join("copied");
        let report =
            write_caption_files(&records, &copied, &MaterializeOptions { copy_images: true })
                .unwrap();
        assert_eq!(report.images_copied, 1);
        assert_eq!(fs::read(copied.join("cegr02003_0001_1.png")).unwrap(), b"png");
    }

    #[test]
    fn copying_into_the_image_folder_keeps_the_image() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let image = temp.path().join("cegr02003_0001_1.png");
        fs::write(&image, b"\x89PNG\r\n\x1a\nimage payload").unwrap();
        let records = vec![ImageRecord {
            image_path: image.clone(),
            ..record("", "caption")
        }];

        let report =
            write_caption_files(&records, temp.path(), &MaterializeOptions { copy_images: true })
                .expect("write ok");

        assert_eq!(report.images_copied, 0);
        assert_eq!(
            fs::read(&image).unwrap(),
            b"\x89PNG\r\n\x1a\nimage payload"
        );
        assert_eq!(
            fs::read_to_string(temp.path().join("cegr02003_0001_1.txt")).unwrap(),
            "caption"
        );
    }

    #[test]
    fn missing_source_image_is_an_io_error() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let records = vec![ImageRecord {
            image_path: temp.path().join("gone/cegr02003_0001_1.png"),
            ..record("", "caption")
        }];

        let err = write_caption_files(
            &records,
            &temp.path().join("out"),
            &MaterializeOptions { copy_images: true },
        )
        .unwrap_err();
        assert!(matches!(err, SensorcapError::Io(_)));
    }

    #[test]
    fn failure_messages_match_the_cli_contract() {
        let missing = SensorcapError::CsvNotFound {
            path: PathBuf::from("in.csv"),
        };
        assert_eq!(
            failure_message(&missing),
            "Error: The file in.csv does not exist."
        );
        let empty = SensorcapError::EmptyCsv {
            path: PathBuf::from("in.csv"),
        };
        assert_eq!(failure_message(&empty), "Error: The given file is empty.");
    }

    #[test]
    fn materialize_reports_missing_csv() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let err = materialize_captions(
            &temp.path().join("nope.csv"),
            &temp.path().join("out"),
            &MaterializeOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SensorcapError::CsvNotFound { .. }));
    }
}
