//! Split report types.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Summary of one train/validation/test split.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SplitReport {
    /// Records in the input table.
    pub input: usize,
    pub train: usize,
    /// `None` when no validation partition was requested.
    pub validation: Option<usize>,
    pub test: usize,
    /// Held-out scenario codes, as given.
    pub test_scenarios: Vec<String>,
    /// Held-out codes that are not in the scenario table.
    pub unknown_test_scenarios: Vec<String>,
    /// Held-out codes that matched no record.
    pub unmatched_test_scenarios: Vec<String>,
    pub val_fraction: f64,
    pub seed: u64,
    /// Files written, filled in by the caller that saves the partitions.
    pub outputs: Vec<PathBuf>,
}

impl fmt::Display for SplitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Split {} record(s):", self.input)?;
        writeln!(f, "  train:      {}", self.train)?;
        match self.validation {
            Some(count) => writeln!(
                f,
                "  validation: {} (fraction {}, seed {})",
                count, self.val_fraction, self.seed
            )?,
            None => writeln!(f, "  validation: none")?,
        }
        writeln!(f, "  test:       {}", self.test)?;

        if self.test_scenarios.is_empty() {
            writeln!(f, "  held-out scenarios: none")?;
        } else {
            writeln!(
                f,
                "  held-out scenarios: {}",
                self.test_scenarios.join(", ")
            )?;
        }

        if !self.unknown_test_scenarios.is_empty() {
            writeln!(
                f,
                "  note: not in the scenario table: {}",
                self.unknown_test_scenarios.join(", ")
            )?;
        }
        if !self.unmatched_test_scenarios.is_empty() {
            writeln!(
                f,
                "  note: matched no records: {}",
                self.unmatched_test_scenarios.join(", ")
            )?;
        }

        for path in &self.outputs {
            writeln!(f, "  wrote {}", path.display())?;
        }

        Ok(())
    }
}
