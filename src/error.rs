use std::path::PathBuf;
use thiserror::Error;

/// The main error type for sensorcap operations.
#[derive(Debug, Error)]
pub enum SensorcapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse caption CSV from {path}: {source}")]
    CaptionCsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write caption CSV to {path}: {source}")]
    CaptionCsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("The file {} does not exist.", .path.display())]
    CsvNotFound { path: PathBuf },

    #[error("The given file is empty: {}", .path.display())]
    EmptyCsv { path: PathBuf },

    #[error("Unknown sensor code '{0}'")]
    UnknownSensorCode(String),

    #[error("Unknown scenario code '{0}'")]
    UnknownScenarioCode(String),

    #[error("Invalid split parameters: {message}")]
    InvalidSplitParams { message: String },

    #[error("Failed to serialize report: {0}")]
    ReportJson(#[from] serde_json::Error),

    #[error("Unsupported report format: {0}")]
    UnsupportedReportFormat(String),
}
