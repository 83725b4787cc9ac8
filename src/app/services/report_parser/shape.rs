//! Report shapes: the column schema of each report flavour
//!
//! Every report pasted from the game shares the same layout and differs only
//! in its columns, so a flavour is nothing more than a named table of
//! (display name, field key) pairs. The tokenizer, builder and validator are
//! generic over it.

use crate::app::models::FieldSpec;
use crate::constants::{MOON_REPORT_FIELDS, MOON_REPORT_NAME};

/// Column schema of one report flavour
pub trait ReportShape {
    /// Short name used in log output
    const NAME: &'static str;

    /// Columns in source order
    const FIELDS: &'static [FieldSpec];
}

/// Moon survey report, as produced by the probe scanner window
#[derive(Debug, Clone, Copy, Default)]
pub struct MoonShape;

impl ReportShape for MoonShape {
    const NAME: &'static str = MOON_REPORT_NAME;
    const FIELDS: &'static [FieldSpec] = MOON_REPORT_FIELDS;
}

/// Field keys of `S` in schema order
pub fn field_keys<S: ReportShape>() -> Vec<&'static str> {
    S::FIELDS.iter().map(|spec| spec.key).collect()
}
