//! Document assembly from classified lines
//!
//! The builder runs a small state machine over the tokenizer output:
//!
//! - `AwaitingHeader`: blank lines are skipped. The first content line decides
//!   where the header sits. A data-shaped line becomes the header; a group
//!   name means the paste has no header at all.
//! - `AwaitingGroupOrData`: a header was read but no group is open yet. Data
//!   rows here are kept as ungrouped elements so validation can report them.
//! - `InGroup`: data rows are appended to the most recently opened group.
//!
//! Blank lines never close a group.

use tracing::{debug, warn};

use super::stats::ParseStats;
use super::tokenizer::{Line, LineKind};
use crate::app::models::{Element, FieldSpec, Group, Header};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BuilderState {
    AwaitingHeader,
    AwaitingGroupOrData,
    InGroup,
}

/// Everything recovered from one parse call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportContent {
    pub header: Option<Header>,
    pub groups: Vec<Group>,
    /// Data rows that appeared before any group name
    pub elements: Vec<Element>,
}

impl ReportContent {
    /// True when no header, group or row was recognised
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.groups.is_empty() && self.elements.is_empty()
    }
}

/// Grouping state machine, fed one line at a time
#[derive(Debug)]
pub struct DocumentBuilder<'s> {
    schema: &'s [FieldSpec],
    state: BuilderState,
    content: ReportContent,
    stats: ParseStats,
}

impl<'s> DocumentBuilder<'s> {
    pub fn new(schema: &'s [FieldSpec]) -> Self {
        Self {
            schema,
            state: BuilderState::AwaitingHeader,
            content: ReportContent::default(),
            stats: ParseStats::new(),
        }
    }

    /// Consume a whole line stream and return the finished document
    pub fn build<'a>(
        mut self,
        lines: impl IntoIterator<Item = Line<'a>>,
    ) -> (ReportContent, ParseStats) {
        for line in lines {
            self.feed(line);
        }
        self.finish()
    }

    pub fn feed(&mut self, line: Line<'_>) {
        self.stats.total_lines += 1;

        match line.kind {
            LineKind::Blank => self.stats.blank_lines += 1,
            LineKind::GroupName(name) => self.open_group(line.number, name),
            LineKind::Data(cells) => self.push_row(line.number, &cells),
        }
    }

    pub fn finish(self) -> (ReportContent, ParseStats) {
        if let Some(group) = self.content.groups.last() {
            if !group.has_elements() {
                warn!("Group '{}' ends the report without any row", group.name());
            }
        }

        (self.content, self.stats)
    }

    fn open_group(&mut self, number: usize, name: &str) {
        match self.state {
            BuilderState::AwaitingHeader => {
                debug!("Line {}: group '{}' before any header", number, name);
            }
            BuilderState::InGroup => {
                if let Some(previous) = self.content.groups.last() {
                    if !previous.has_elements() {
                        warn!(
                            "Line {}: group '{}' closed without any row",
                            number,
                            previous.name()
                        );
                    }
                }
            }
            BuilderState::AwaitingGroupOrData => {}
        }

        debug!("Line {}: opened group '{}'", number, name);
        self.content.groups.push(Group::new(name));
        self.stats.group_lines += 1;
        self.state = BuilderState::InGroup;
    }

    fn push_row(&mut self, number: usize, cells: &[&str]) {
        match self.state {
            BuilderState::AwaitingHeader => {
                debug!("Line {}: header with {} columns", number, cells.len());
                let columns = cells.iter().map(|cell| cell.to_string()).collect();
                self.content.header = Some(Header::new(columns));
                self.stats.header_lines += 1;
                self.state = BuilderState::AwaitingGroupOrData;
            }
            BuilderState::AwaitingGroupOrData => {
                warn!("Line {}: data row before any group name", number);
                self.content
                    .elements
                    .push(Element::from_cells(self.schema, cells));
                self.stats.ungrouped_lines += 1;
            }
            BuilderState::InGroup => {
                let element = Element::from_cells(self.schema, cells);
                match self.content.groups.last_mut() {
                    Some(group) => {
                        group.push(element);
                        self.stats.data_lines += 1;
                    }
                    None => {
                        self.content.elements.push(element);
                        self.stats.ungrouped_lines += 1;
                    }
                }
            }
        }
    }
}
