//! Structural validation errors for parsed reports.
//!
//! Each variant names one shape violation. Validation stops at the first
//! violation found, so a single call never reports more than one.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportError {
    /// Nothing recognisable was found: no header, no groups, no rows.
    #[error("Report is empty")]
    EmptyReport,

    /// Content exists but no header line was captured.
    #[error("Report has no header line")]
    MissingHeader,

    /// A header was captured but no group name line followed it.
    #[error("Report has no group")]
    MissingGroup,

    /// At least one group has no data rows under it.
    #[error("Report contains a group without any element")]
    InvalidGroupStructure,
}
