//! Application constants for the moon report parser
//!
//! This module contains the delimiter defaults and the column table of the
//! moon survey report.

use crate::app::models::FieldSpec;

// =============================================================================
// Delimiter Settings
// =============================================================================

/// Shortest run of spaces treated as a cell delimiter.
///
/// Spreadsheet exports pad columns with runs of spaces, while product and
/// moon names contain single spaces, so a lone space never splits.
pub const DEFAULT_MIN_SPACE_RUN: usize = 2;

/// Smallest accepted value for `min_space_run`
pub const MIN_SPACE_RUN_FLOOR: usize = 2;

// =============================================================================
// Moon Report Schema
// =============================================================================

/// Report name used in log output
pub const MOON_REPORT_NAME: &str = "moon";

/// Columns of the moon survey report, in source order
pub const MOON_REPORT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("Moon", "moon"),
    FieldSpec::new("Moon Product", "moonProduct"),
    FieldSpec::new("Quantity", "quantity"),
    FieldSpec::new("Ore TypeID", "oreTypeID"),
    FieldSpec::new("SolarSystemID", "solarSystemID"),
    FieldSpec::new("PlanetID", "planetID"),
    FieldSpec::new("MoonID", "moonID"),
];
