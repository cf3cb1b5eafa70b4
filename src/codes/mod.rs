//! Code tables for sensor imagery file names.
//!
//! Every image in the collection is named after three codes:
//!
//! - a **sensor code** (`cegr`, `i1co`) naming the imaging modality,
//! - a 5-digit **scenario code** naming the recording session (time of day
//!   and standoff range, and implicitly whether the subjects are people or
//!   vehicles),
//! - a 4-digit **look-number code** naming the target (a vehicle class, or a
//!   pace variant for human scenarios).
//!
//! The tables are constant data. Lookups go through maps built once on
//! first use.

mod tables;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

pub use tables::{HUMAN_SCENARIOS, SCENARIOS, VEHICLES};

use crate::error::SensorcapError;

static SCENARIO_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
static HUMAN_SCENARIO_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
static VEHICLE_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn scenario_map() -> &'static HashMap<&'static str, &'static str> {
    SCENARIO_MAP.get_or_init(|| SCENARIOS.iter().copied().collect())
}

fn human_scenario_set() -> &'static HashSet<&'static str> {
    HUMAN_SCENARIO_SET.get_or_init(|| HUMAN_SCENARIOS.iter().copied().collect())
}

fn vehicle_map() -> &'static HashMap<&'static str, &'static str> {
    VEHICLE_MAP.get_or_init(|| VEHICLES.iter().copied().collect())
}

/// Imaging modality of a capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SensorCode {
    /// Mid-wave infrared camera (`cegr`).
    Mwir,
    /// Visible-band camera (`i1co`).
    Visible,
}

impl SensorCode {
    /// All known sensors, in file-name pattern order.
    pub const ALL: [SensorCode; 2] = [SensorCode::Mwir, SensorCode::Visible];

    /// The literal used in file names.
    pub fn as_str(self) -> &'static str {
        match self {
            SensorCode::Mwir => "cegr",
            SensorCode::Visible => "i1co",
        }
    }

    /// Human-readable modality name used in captions.
    pub fn description(self) -> &'static str {
        match self {
            SensorCode::Mwir => "Mid-Wave Infrared (MWIR)",
            SensorCode::Visible => "Visible",
        }
    }
}

impl fmt::Display for SensorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SensorCode {
    type Err = SensorcapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SensorCode::ALL
            .into_iter()
            .find(|sensor| sensor.as_str() == s)
            .ok_or_else(|| SensorcapError::UnknownSensorCode(s.to_string()))
    }
}

/// What a scenario was recorded against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Subject {
    /// People walking a figure-8; the look number selects the pace.
    Human,
    /// A vehicle driving a circle; the look number selects the class.
    Vehicle,
}

impl Subject {
    /// Resolve the subject kind of a scenario code.
    pub fn of_scenario(scenario_code: &str) -> Self {
        if human_scenario_set().contains(scenario_code) {
            Subject::Human
        } else {
            Subject::Vehicle
        }
    }
}

/// Time-of-day and range phrase for a scenario, if the code is known.
pub fn scenario_description(scenario_code: &str) -> Option<&'static str> {
    scenario_map().get(scenario_code).copied()
}

/// Returns true if the scenario code appears in the scenario table.
pub fn is_known_scenario(scenario_code: &str) -> bool {
    scenario_map().contains_key(scenario_code)
}

/// Vehicle class for a look number, if the code is known.
pub fn vehicle_class(look_number_code: &str) -> Option<&'static str> {
    vehicle_map().get(look_number_code).copied()
}
