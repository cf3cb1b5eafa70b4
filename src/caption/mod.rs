//! Natural-language captions for collection images.
//!
//! A caption is a pure function of the three file-name codes:
//!
//! ```text
//! Captured with a {sensor} sensor, the imagery depicts {target} {action} {scenario}.
//! ```
//!
//! Downstream captioning-model trainers depend on this exact phrasing.
//!
//! # Example
//!
//! ```
//! use sensorcap::caption::generate_caption;
//!
//! let caption = generate_caption("cegr", "02003", "0001")?;
//! assert_eq!(
//!     caption,
//!     "Captured with a Mid-Wave Infrared (MWIR) sensor, the imagery depicts \
//!      Pickup driving in a circle during the day at 1000 meters."
//! );
//! # Ok::<(), sensorcap::SensorcapError>(())
//! ```

use std::fmt;

use crate::codes::{scenario_description, vehicle_class, SensorCode, Subject};
use crate::error::SensorcapError;
use crate::filename::ImageCodes;

/// Target text for vehicle look numbers missing from the vehicle table.
pub const UNIDENTIFIED_TARGET: &str = "an unidentified target";

/// The only look number that marks the slow-pace human variant.
pub const SLOW_PACE_LOOK_NUMBER: &str = "0001";

const HUMAN_TARGET: &str = "Humans";
const HUMAN_SLOW_ACTION: &str = "moving in figure-8 at slow pace";
const HUMAN_FAST_ACTION: &str = "moving in figure-8 at faster pace";
const VEHICLE_ACTION: &str = "driving in a circle";

/// The resolved phrases of one caption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptionParts {
    pub sensor: &'static str,
    pub target: &'static str,
    pub action: &'static str,
    pub scenario: &'static str,
}

impl fmt::Display for CaptionParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Captured with a {} sensor, the imagery depicts {} {} {}.",
            self.sensor, self.target, self.action, self.scenario
        )
    }
}

/// Resolve caption phrases for a sensor and raw scenario/look-number codes.
///
/// # Errors
/// Returns [`SensorcapError::UnknownScenarioCode`] when the scenario is not
/// in the scenario table. An unknown vehicle look number is not an error.
pub fn caption_parts(
    sensor: SensorCode,
    scenario_code: &str,
    look_number_code: &str,
) -> Result<CaptionParts, SensorcapError> {
    let scenario = scenario_description(scenario_code)
        .ok_or_else(|| SensorcapError::UnknownScenarioCode(scenario_code.to_string()))?;

    let (target, action) = match Subject::of_scenario(scenario_code) {
        Subject::Human => {
            let action = if look_number_code == SLOW_PACE_LOOK_NUMBER {
                HUMAN_SLOW_ACTION
            } else {
                HUMAN_FAST_ACTION
            };
            (HUMAN_TARGET, action)
        }
        Subject::Vehicle => (
            vehicle_class(look_number_code).unwrap_or(UNIDENTIFIED_TARGET),
            VEHICLE_ACTION,
        ),
    };

    Ok(CaptionParts {
        sensor: sensor.description(),
        target,
        action,
        scenario,
    })
}

/// Generate the caption for raw sensor, scenario and look-number codes.
///
/// # Errors
/// Fails on an unknown sensor literal or scenario code; these mean a code
/// reached captioning without passing the file name grammar.
pub fn generate_caption(
    sensor_code: &str,
    scenario_code: &str,
    look_number_code: &str,
) -> Result<String, SensorcapError> {
    let sensor: SensorCode = sensor_code.parse()?;
    Ok(caption_parts(sensor, scenario_code, look_number_code)?.to_string())
}

/// Generate the caption for codes parsed from a file name.
pub fn caption_for(codes: &ImageCodes) -> Result<String, SensorcapError> {
    Ok(caption_parts(codes.sensor, &codes.scenario, &codes.look_number)?.to_string())
}
