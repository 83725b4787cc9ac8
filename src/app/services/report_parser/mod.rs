//! Tolerant parser for pasted tabular reports
//!
//! Reports arrive as text copied out of the game client (tab separated) or a
//! spreadsheet (columns padded with runs of spaces), sometimes both in one
//! paste. The parser recovers a header row, named groups and the rows under
//! each group, then checks the resulting shape on request.
//!
//! ## Architecture
//!
//! The parser is organized into linear stages:
//! - [`tokenizer`] - Line splitting, delimiter detection and line classification
//! - [`builder`] - Grouping state machine assembling the document tree
//! - [`validator`] - Structural checks with fixed precedence
//! - [`shape`] - Declarative column schemas for each report flavour
//! - [`report`] - The [`Report`] facade tying the stages together
//! - [`stats`] - Per-parse line statistics
//!
//! ## Usage
//!
//! ```rust
//! use moon_report_parser::{MoonReport, ReportError};
//!
//! let mut report = MoonReport::new();
//! report.parse("Moon\tMoon Product\tQuantity\tOre TypeID\tSolarSystemID\tPlanetID\tMoonID");
//!
//! assert!(report.has_header());
//! assert_eq!(report.validate(), Err(ReportError::MissingGroup));
//! ```

pub mod builder;
pub mod report;
pub mod shape;
pub mod stats;
pub mod tokenizer;
pub mod validator;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use builder::{DocumentBuilder, ReportContent};
pub use report::Report;
pub use shape::{MoonShape, ReportShape, field_keys};
pub use stats::ParseStats;
pub use tokenizer::{Delimiter, Line, LineKind, Tokenizer};

/// Parser for moon survey reports
pub type MoonReport = Report<MoonShape>;
