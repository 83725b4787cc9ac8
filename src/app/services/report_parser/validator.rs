//! Structural validation of a built report
//!
//! Checks run in a fixed order and the first violation wins:
//! empty report, missing header, missing group, group without rows.
//! Field values are never inspected.

use super::builder::ReportContent;
use crate::error::ReportError;

/// Check that `content` has a header, at least one group, and a row in every group
pub fn validate(content: &ReportContent) -> Result<(), ReportError> {
    if content.is_empty() {
        return Err(ReportError::EmptyReport);
    }

    if content.header.is_none() {
        return Err(ReportError::MissingHeader);
    }

    if content.groups.is_empty() {
        return Err(ReportError::MissingGroup);
    }

    if content.groups.iter().any(|group| !group.has_elements()) {
        return Err(ReportError::InvalidGroupStructure);
    }

    Ok(())
}
