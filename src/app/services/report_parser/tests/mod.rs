//! Test utilities for report parser testing
//!
//! This module provides sample reports in the formats the parser meets in
//! practice, shared by the component test modules.

use crate::app::models::FieldSpec;


/// Small schema used where the moon columns would only add noise
pub const TEST_SCHEMA: &[FieldSpec] = &[
    FieldSpec::new("Name", "name"),
    FieldSpec::new("Amount", "amount"),
    FieldSpec::new("Type ID", "typeID"),
];

pub const MOON_HEADER_TABS: &str =
    "Moon\tMoon Product\tQuantity\tOre TypeID\tSolarSystemID\tPlanetID\tMoonID";

/// Moon report as copied from the game client
pub fn create_tab_report() -> String {
    [
        MOON_HEADER_TABS,
        "OP9L-F II - Moon 10",
        "\tGlossy Scordite\t0.300030559301\t46687\t30002173\t40138526\t40138527",
        "\tImmaculate Jaspet\t0.328855156898\t46682\t30002173\t40138526\t40138527",
        "",
        "OP9L-F VII - Moon 8",
        "\tDazzling Spodumain\t0.397311687469\t46688\t30002173\t40138538\t40138546",
    ]
    .join("\n")
}

/// Same report after a round trip through a spreadsheet
pub fn create_space_report() -> String {
    [
        "Moon    Moon Product    Quantity    Ore TypeID    SolarSystemID    PlanetID    MoonID",
        "OP9L-F II - Moon 10",
        "    Glossy Scordite    0.300030559301    46687    30002173    40138526    40138527",
        "    Immaculate Jaspet    0.328855156898    46682    30002173    40138526    40138527",
        "",
        "OP9L-F VII - Moon 8",
        "    Dazzling Spodumain    0.397311687469    46688    30002173    40138538    40138546",
    ]
    .join("\n")
}
