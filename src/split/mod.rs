//! Train/validation/test partitioning of a caption table.
//!
//! The test partition is chosen explicitly: every record whose scenario code
//! is one of the held-out codes goes to test, everything else to train. The
//! match is exact string equality on the code, so `"2003"` does not hold out
//! `"02003"`.
//!
//! A validation partition is then drawn uniformly at random from train,
//! reproducibly for a given seed. Only the scenario code (for test) and the
//! random draw (for validation) decide membership.

mod report;

pub use report::SplitReport;

use std::collections::HashSet;

use log::{info, warn};
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};

use crate::codes::is_known_scenario;
use crate::dataset::ImageRecord;
use crate::error::SensorcapError;

/// Default validation fraction of the train partition.
pub const DEFAULT_VAL_FRACTION: f64 = 0.25;

/// Default seed for the validation draw.
pub const DEFAULT_SEED: u64 = 42;

/// Partition tag assigned while splitting. Never written to output tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Partition {
    Train,
    Test,
}

/// Split options.
#[derive(Clone, Debug)]
pub struct SplitOptions {
    /// Scenario codes held out for the test partition.
    pub test_scenarios: Vec<String>,
    /// Fraction of the train partition moved to validation; `0.0` disables it.
    pub val_fraction: f64,
    /// Seed for the validation draw.
    pub seed: u64,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            test_scenarios: Vec::new(),
            val_fraction: DEFAULT_VAL_FRACTION,
            seed: DEFAULT_SEED,
        }
    }
}

/// The partitions produced by [`split_dataset`].
#[derive(Clone, Debug)]
pub struct SplitOutcome {
    pub train: Vec<ImageRecord>,
    /// `None` when the validation fraction is zero.
    pub validation: Option<Vec<ImageRecord>>,
    pub test: Vec<ImageRecord>,
    pub report: SplitReport,
}

/// Validate split options before running.
pub fn validate_split_options(opts: &SplitOptions) -> Result<(), SensorcapError> {
    let fraction = opts.val_fraction;
    if !fraction.is_finite() || !(0.0..1.0).contains(&fraction) {
        return Err(SensorcapError::InvalidSplitParams {
            message: format!("--val-size must be in the interval [0.0, 1.0), got {fraction}"),
        });
    }
    Ok(())
}

/// Trimmed, non-empty held-out codes in their given order, deduplicated.
fn normalize_test_scenarios(test_scenarios: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    test_scenarios
        .iter()
        .map(|code| code.trim())
        .filter(|code| !code.is_empty())
        .filter(|code| seen.insert(*code))
        .map(str::to_string)
        .collect()
}

/// Tag a record as train or test by exact scenario code membership.
pub fn assign_partition(record: &ImageRecord, test_scenarios: &HashSet<&str>) -> Partition {
    if test_scenarios.contains(record.scenario_code.as_str()) {
        Partition::Test
    } else {
        Partition::Train
    }
}

/// Split records into `(train, test)` by held-out scenario codes.
///
/// Relative record order is preserved in both partitions.
pub fn split_by_scenario(
    records: &[ImageRecord],
    test_scenarios: &[String],
) -> (Vec<ImageRecord>, Vec<ImageRecord>) {
    let held_out: HashSet<&str> = test_scenarios.iter().map(String::as_str).collect();

    let mut train = Vec::new();
    let mut test = Vec::new();
    for record in records {
        match assign_partition(record, &held_out) {
            Partition::Train => train.push(record.clone()),
            Partition::Test => test.push(record.clone()),
        }
    }

    (train, test)
}

/// Number of records drawn for validation out of `total`.
pub fn validation_count(total: usize, fraction: f64) -> usize {
    (total as f64 * fraction).ceil() as usize
}

/// Draw a seeded uniform validation sample from `train`.
///
/// Returns `(train, validation)`, both in input order. The validation size
/// is `ceil(fraction * n)`.
///
/// # Errors
/// Returns [`SensorcapError::InvalidSplitParams`] if the fraction is out of
/// range or if either resulting partition would be empty.
pub fn split_validation(
    train: &[ImageRecord],
    fraction: f64,
    seed: u64,
) -> Result<(Vec<ImageRecord>, Vec<ImageRecord>), SensorcapError> {
    validate_split_options(&SplitOptions {
        val_fraction: fraction,
        ..Default::default()
    })?;

    let total = train.len();
    let k = validation_count(total, fraction);
    if total == 0 || k == 0 || k >= total {
        return Err(SensorcapError::InvalidSplitParams {
            message: format!(
                "cannot draw a validation fraction of {fraction} from a train partition of {total} record(s)"
            ),
        });
    }

    let mut indices: Vec<usize> = (0..total).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let picked: HashSet<usize> = indices.into_iter().take(k).collect();

    let mut kept = Vec::with_capacity(total - k);
    let mut validation = Vec::with_capacity(k);
    for (i, record) in train.iter().enumerate() {
        if picked.contains(&i) {
            validation.push(record.clone());
        } else {
            kept.push(record.clone());
        }
    }

    Ok((kept, validation))
}

/// Split a caption table into train, optional validation, and test.
pub fn split_dataset(
    records: &[ImageRecord],
    opts: &SplitOptions,
) -> Result<SplitOutcome, SensorcapError> {
    validate_split_options(opts)?;

    let test_scenarios = normalize_test_scenarios(&opts.test_scenarios);

    let unknown_test_scenarios: Vec<String> = test_scenarios
        .iter()
        .filter(|code| !is_known_scenario(code))
        .cloned()
        .collect();
    for code in &unknown_test_scenarios {
        warn!("Held-out scenario '{}' is not in the scenario table", code);
    }

    let present: HashSet<&str> = records.iter().map(|r| r.scenario_code.as_str()).collect();
    let unmatched_test_scenarios: Vec<String> = test_scenarios
        .iter()
        .filter(|code| !present.contains(code.as_str()))
        .cloned()
        .collect();
    for code in &unmatched_test_scenarios {
        warn!("Held-out scenario '{}' matched no records", code);
    }

    let (train, test) = split_by_scenario(records, &test_scenarios);

    let (train, validation) = if opts.val_fraction > 0.0 {
        let (train, validation) = split_validation(&train, opts.val_fraction, opts.seed)?;
        (train, Some(validation))
    } else {
        (train, None)
    };

    let report = SplitReport {
        input: records.len(),
        train: train.len(),
        validation: validation.as_ref().map(Vec::len),
        test: test.len(),
        test_scenarios,
        unknown_test_scenarios,
        unmatched_test_scenarios,
        val_fraction: opts.val_fraction,
        seed: opts.seed,
        outputs: Vec::new(),
    };

    info!(
        "Split {} record(s) into train={} validation={} test={}",
        report.input,
        report.train,
        report.validation.unwrap_or(0),
        report.test
    );

    Ok(SplitOutcome {
        train,
        validation,
        test,
        report,
    })
}
