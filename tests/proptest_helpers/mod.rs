#![allow(dead_code)]

use std::collections::BTreeSet;
use std::path::PathBuf;

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};
use sensorcap::codes::{SensorCode, SCENARIOS, VEHICLES};
use sensorcap::dataset::ImageRecord;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

pub fn arb_sensor() -> BoxedStrategy<SensorCode> {
    prop::sample::select(SensorCode::ALL.to_vec()).boxed()
}

pub fn arb_known_scenario() -> BoxedStrategy<String> {
    let codes: Vec<String> = SCENARIOS.iter().map(|(code, _)| code.to_string()).collect();
    prop::sample::select(codes).boxed()
}

/// Any 4-digit look number, known to the vehicle table or not.
pub fn arb_look_number() -> BoxedStrategy<String> {
    let known: Vec<String> = VEHICLES.iter().map(|(code, _)| code.to_string()).collect();
    prop_oneof![
        prop::sample::select(known),
        "[0-9]{4}".prop_map(|s| s.to_string()),
    ]
    .boxed()
}

pub fn arb_record() -> BoxedStrategy<ImageRecord> {
    (
        arb_sensor(),
        arb_known_scenario(),
        arb_look_number(),
        0u32..10_000,
    )
        .prop_map(|(sensor, scenario, look, frame)| ImageRecord {
            image_path: PathBuf::from(format!(
                "data/{}{}_{}_{}.png",
                sensor.as_str(),
                scenario,
                look,
                frame
            )),
            sensor_code: sensor.as_str().to_string(),
            scenario_code: scenario,
            look_number_code: look,
            description: format!("caption {frame}"),
        })
        .boxed()
}

pub fn arb_records(max: usize) -> BoxedStrategy<Vec<ImageRecord>> {
    prop::collection::vec(arb_record(), 0..=max).boxed()
}

pub fn image_paths(records: &[ImageRecord]) -> BTreeSet<PathBuf> {
    records.iter().map(|r| r.image_path.clone()).collect()
}
