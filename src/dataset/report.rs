//! Build report for the dataset builder.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// How many skipped files the text report lists by name.
const SKIPPED_PREVIEW: usize = 10;

/// Summary of one dataset build.
#[derive(Clone, Debug, Default, Serialize)]
pub struct BuildReport {
    /// Root directories that were walked, in order.
    pub roots: Vec<PathBuf>,
    /// Non-directory entries seen during the walk.
    pub files_scanned: usize,
    /// Entries with an image extension.
    pub candidates: usize,
    /// Records produced.
    pub records: usize,
    /// Image candidates whose names did not parse.
    pub skipped: Vec<PathBuf>,
    /// Walk errors (missing roots, unreadable directories).
    pub traversal_errors: usize,
}

impl BuildReport {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            ..Default::default()
        }
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Built caption dataset from {} root(s):",
            self.roots.len()
        )?;
        writeln!(f, "  files scanned:    {}", self.files_scanned)?;
        writeln!(f, "  image candidates: {}", self.candidates)?;
        writeln!(f, "  records:          {}", self.records)?;
        writeln!(f, "  skipped:          {}", self.skipped_count())?;
        if self.traversal_errors > 0 {
            writeln!(f, "  traversal errors: {}", self.traversal_errors)?;
        }

        if !self.skipped.is_empty() {
            writeln!(f)?;
            writeln!(f, "Skipped files (unable to extract codes):")?;
            for path in self.skipped.iter().take(SKIPPED_PREVIEW) {
                writeln!(f, "  {}", path.display())?;
            }
            if self.skipped.len() > SKIPPED_PREVIEW {
                writeln!(f, "  ... and {} more", self.skipped.len() - SKIPPED_PREVIEW)?;
            }
        }

        Ok(())
    }
}
