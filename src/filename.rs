//! Image file name grammar.
//!
//! Collection images are named
//! `{sensor}{5-digit scenario}_{4-digit look number}_{frame}.png`, for
//! example `cegr02003_0001_12.png`. The match is case-sensitive, anchored at
//! both ends, accepts ASCII digits only, and `.png` is the only extension.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::codes::SensorCode;

static FILENAME_PATTERN: OnceLock<Regex> = OnceLock::new();

fn filename_pattern() -> &'static Regex {
    FILENAME_PATTERN.get_or_init(|| {
        let sensors = SensorCode::ALL
            .iter()
            .map(|sensor| regex::escape(sensor.as_str()))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(
            r"^({sensors})([0-9]{{5}})_([0-9]{{4}})_[0-9]+\.png$"
        ))
        .expect("file name pattern is a valid regex")
    })
}

/// The codes carried by a conforming image file name.
///
/// Scenario and look-number codes stay strings: their leading zeros are
/// part of the code.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageCodes {
    pub sensor: SensorCode,
    pub scenario: String,
    pub look_number: String,
}

/// Outcome of parsing an image file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedName {
    /// The name follows the collection grammar.
    Matched(ImageCodes),
    /// The name does not follow the grammar; the file should be skipped.
    Unrecognized,
}

impl ParsedName {
    /// Converts into the matched codes, if any.
    pub fn into_codes(self) -> Option<ImageCodes> {
        match self {
            ParsedName::Matched(codes) => Some(codes),
            ParsedName::Unrecognized => None,
        }
    }
}

/// Parse a bare file name such as `cegr02003_0001_12.png`.
pub fn parse_image_filename(file_name: &str) -> ParsedName {
    let Some(caps) = filename_pattern().captures(file_name) else {
        return ParsedName::Unrecognized;
    };

    // The alternation is built from SensorCode::ALL, so this cannot miss.
    let Ok(sensor) = caps[1].parse::<SensorCode>() else {
        return ParsedName::Unrecognized;
    };

    ParsedName::Matched(ImageCodes {
        sensor,
        scenario: caps[2].to_string(),
        look_number: caps[3].to_string(),
    })
}

/// Parse the final component of `path`.
pub fn parse_image_path(path: &Path) -> ParsedName {
    match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => parse_image_filename(name),
        None => ParsedName::Unrecognized,
    }
}
