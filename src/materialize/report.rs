//! Materialization report.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Summary of one caption folder materialization.
#[derive(Clone, Debug, Default, Serialize)]
pub struct MaterializeReport {
    pub output_dir: PathBuf,
    /// Records in the input table.
    pub records: usize,
    /// Distinct caption files written.
    pub caption_files: usize,
    /// Records whose caption file replaced one written earlier in the run.
    pub collisions: usize,
    pub images_copied: usize,
}

impl fmt::Display for MaterializeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Data prepared successfully in the '{}' directory.",
            self.output_dir.display()
        )?;
        writeln!(
            f,
            "  {} record(s), {} caption file(s)",
            self.records, self.caption_files
        )?;
        if self.collisions > 0 {
            writeln!(
                f,
                "  {} caption file(s) overwritten by records sharing a base name",
                self.collisions
            )?;
        }
        if self.images_copied > 0 {
            writeln!(f, "  {} image(s) copied", self.images_copied)?;
        }
        Ok(())
    }
}
