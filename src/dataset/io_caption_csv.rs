//! Caption table CSV reader and writer.
//!
//! The caption table is the artifact shared between the build, split and
//! materialize stages, and other tools read it too. Its columns, in order:
//!
//! | column             | content                                   |
//! |--------------------|-------------------------------------------|
//! | `Image Path`       | path of the image as found during the walk |
//! | `Sensor Code`      | `cegr` or `i1co`                          |
//! | `Scenario Code`    | 5-digit scenario code                     |
//! | `Look Number Code` | 4-digit look number                       |
//! | `Description`      | the caption sentence                      |
//!
//! Codes are read and written as strings so leading zeros survive.
//!
//! The header row is always written, including for an empty table, so that
//! an empty partition still reads back as a valid (empty) table.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use super::ImageRecord;
use crate::error::SensorcapError;

/// Column names of the caption table, in file order.
pub const CAPTION_CSV_COLUMNS: [&str; 5] = [
    "Image Path",
    "Sensor Code",
    "Scenario Code",
    "Look Number Code",
    "Description",
];

/// Reads a caption table from a CSV file.
///
/// # Errors
/// - [`SensorcapError::CsvNotFound`] if `path` does not exist
/// - [`SensorcapError::EmptyCsv`] if the file has no header row
/// - [`SensorcapError::CaptionCsvParse`] if a row is malformed or a column
///   is missing
pub fn read_caption_csv(path: &Path) -> Result<Vec<ImageRecord>, SensorcapError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SensorcapError::CsvNotFound {
            path: path.to_path_buf(),
        },
        _ => SensorcapError::Io(e),
    })?;

    read_records(BufReader::new(file), path)
}

/// Writes a caption table to a CSV file, replacing any existing file.
pub fn write_caption_csv(path: &Path, records: &[ImageRecord]) -> Result<(), SensorcapError> {
    let file = File::create(path).map_err(SensorcapError::Io)?;
    let writer = write_records(BufWriter::new(file), records, path)?;
    writer.into_inner().map_err(|e| SensorcapError::Io(e.into_error()))?;
    Ok(())
}

/// Reads a caption table from a CSV string.
pub fn from_caption_csv_str(csv_str: &str) -> Result<Vec<ImageRecord>, SensorcapError> {
    from_caption_csv_slice(csv_str.as_bytes())
}

/// Reads a caption table from CSV bytes.
pub fn from_caption_csv_slice(bytes: &[u8]) -> Result<Vec<ImageRecord>, SensorcapError> {
    read_records(bytes, Path::new("<bytes>"))
}

/// Writes a caption table to a CSV string.
pub fn to_caption_csv_string(records: &[ImageRecord]) -> Result<String, SensorcapError> {
    let dummy_path = Path::new("<string>");
    let bytes = write_records(Vec::new(), records, dummy_path)?;

    String::from_utf8(bytes).map_err(|e| {
        SensorcapError::Io(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Invalid UTF-8 in caption CSV output: {}", e),
        ))
    })
}

fn read_records<R: Read>(reader: R, path: &Path) -> Result<Vec<ImageRecord>, SensorcapError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|source| SensorcapError::CaptionCsvParse {
            path: path.to_path_buf(),
            source,
        })?;
    if headers.is_empty() {
        return Err(SensorcapError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut records = Vec::new();
    for result in csv_reader.deserialize() {
        let record: ImageRecord = result.map_err(|source| SensorcapError::CaptionCsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        records.push(record);
    }

    Ok(records)
}

fn write_records<W: Write>(
    writer: W,
    records: &[ImageRecord],
    path: &Path,
) -> Result<W, SensorcapError> {
    let to_write_error = |source: csv::Error| SensorcapError::CaptionCsvWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer
        .write_record(CAPTION_CSV_COLUMNS)
        .map_err(to_write_error)?;
    for record in records {
        csv_writer.serialize(record).map_err(to_write_error)?;
    }

    let mut inner = csv_writer
        .into_inner()
        .map_err(|e| SensorcapError::Io(e.into_error()))?;
    inner.flush().map_err(SensorcapError::Io)?;
    Ok(inner)
}
