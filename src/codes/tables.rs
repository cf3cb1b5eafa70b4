//! Static code tables for the sensor imagery collection.

/// Scenario code → time-of-day and standoff range phrase.
pub const SCENARIOS: &[(&str, &str)] = &[
    // Vehicle collections, day
    ("02003", "during the day at 1000 meters"),
    ("02005", "during the day at 1500 meters"),
    ("02007", "during the day at 2000 meters"),
    ("02009", "during the day at 2500 meters"),
    ("02011", "during the day at 3000 meters"),
    ("02013", "during the day at 3500 meters"),
    ("02015", "during the day at 4000 meters"),
    ("02017", "during the day at 4500 meters"),
    ("02019", "during the day at 5000 meters"),
    // Vehicle collections, night
    ("01923", "at night at 1000 meters"),
    ("01925", "at night at 1500 meters"),
    ("01927", "at night at 2000 meters"),
    ("01929", "at night at 2500 meters"),
    ("01931", "at night at 3000 meters"),
    ("01933", "at night at 3500 meters"),
    ("01935", "at night at 4000 meters"),
    ("01937", "at night at 4500 meters"),
    ("01939", "at night at 5000 meters"),
    // Human collections, day
    ("02002", "during the day at 500 meters"),
    ("02004", "during the day at 1000 meters"),
    ("02006", "during the day at 1500 meters"),
    ("02008", "during the day at 2000 meters"),
    ("02010", "during the day at 2500 meters"),
    ("02012", "during the day at 3000 meters"),
    // Human collections, night
    ("01926", "at night at 500 meters"),
    ("01928", "at night at 1000 meters"),
    ("01932", "at night at 1500 meters"),
    ("01934", "at night at 2000 meters"),
    ("01936", "at night at 2500 meters"),
    ("01938", "at night at 3000 meters"),
];

/// Scenario codes whose subjects are people rather than vehicles.
pub const HUMAN_SCENARIOS: &[&str] = &[
    "02002", "02004", "02006", "02008", "02010", "02012", "01926", "01928", "01932", "01934",
    "01936", "01938",
];

/// Look-number code → vehicle class, for vehicle scenarios.
pub const VEHICLES: &[(&str, &str)] = &[
    ("0001", "Pickup"),
    ("0002", "Sport Utility Vehicle"),
    ("0005", "BTR70 – Armored Personnel Carrier"),
    ("0006", "BRDM2 – Infantry Scout Vehicle"),
    ("0009", "BMP2 – Armored Personnel Carrier"),
    ("0010", "T62 – Main Battle Tank"),
    ("0011", "T72 – Main Battle Tank"),
    ("0012", "ZSU23-4 - Anti-Aircraft Weapon"),
    ("0013", "2S3 – Self-Propelled Howitzer"),
    (
        "0014",
        "MTLB – Armored Reconnaissance Vehicle Towing a D20 Artillery Piece",
    ),
];
