//! Parsing statistics for report processing
//!
//! Counts how the lines of the last parsed text were classified. Useful to
//! explain a validation failure to whoever pasted the report.

use serde::{Deserialize, Serialize};

/// Line counts for one parse call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Every line of the input, blank or not
    pub total_lines: usize,

    /// Lines with no content after trimming
    pub blank_lines: usize,

    /// Lines consumed as the header (zero or one)
    pub header_lines: usize,

    /// Lines that opened a group
    pub group_lines: usize,

    /// Data rows appended to a group
    pub data_lines: usize,

    /// Data rows seen before any group was opened
    pub ungrouped_lines: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of non-blank lines
    pub fn content_lines(&self) -> usize {
        self.header_lines + self.group_lines + self.data_lines + self.ungrouped_lines
    }
}
