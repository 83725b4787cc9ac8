//! Report facade: parse, validate and read a pasted report
//!
//! A [`Report`] starts empty, is filled by [`Report::parse`] and is checked
//! with [`Report::validate`]. Parsing never fails; every structural problem
//! surfaces through validation. Each parse replaces the previous state
//! entirely.

use std::marker::PhantomData;
use tracing::debug;

use super::builder::{DocumentBuilder, ReportContent};
use super::shape::ReportShape;
use super::stats::ParseStats;
use super::tokenizer::{Delimiter, Tokenizer};
use super::validator;
use crate::Result;
use crate::app::models::{Element, Group, Header};
use crate::config::ParserConfig;
use crate::error::ReportError;

/// A parsed report of flavour `S`
#[derive(Debug, Clone)]
pub struct Report<S: ReportShape> {
    delimiter: Delimiter,
    content: ReportContent,
    stats: ParseStats,
    shape: PhantomData<S>,
}

impl<S: ReportShape> Default for Report<S> {
    fn default() -> Self {
        Self::with_delimiter(Delimiter::default())
    }
}

impl<S: ReportShape> Report<S> {
    /// Create an empty report using the default delimiter settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty report with custom delimiter settings
    pub fn with_config(config: &ParserConfig) -> Result<Self> {
        Ok(Self::with_delimiter(Delimiter::new(config)?))
    }

    fn with_delimiter(delimiter: Delimiter) -> Self {
        Self {
            delimiter,
            content: ReportContent::default(),
            stats: ParseStats::new(),
            shape: PhantomData,
        }
    }

    /// Parse `text`, replacing anything a previous call produced
    pub fn parse(&mut self, text: &str) {
        let lines = Tokenizer::new(text, &self.delimiter);
        let (content, stats) = DocumentBuilder::new(S::FIELDS).build(lines);

        debug!(
            "Parsed {} report: {} lines, header={}, {} groups, {} rows, {} ungrouped",
            S::NAME,
            stats.total_lines,
            content.header.is_some(),
            content.groups.len(),
            stats.data_lines,
            stats.ungrouped_lines
        );

        self.content = content;
        self.stats = stats;
    }

    /// Check the report shape, returning the first violation found
    pub fn validate(&self) -> std::result::Result<(), ReportError> {
        validator::validate(&self.content)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn has_header(&self) -> bool {
        self.content.header.is_some()
    }

    pub fn has_groups(&self) -> bool {
        !self.content.groups.is_empty()
    }

    /// True only when rows were seen outside of any group
    pub fn has_elements(&self) -> bool {
        !self.content.elements.is_empty()
    }

    pub fn header(&self) -> Option<&Header> {
        self.content.header.as_ref()
    }

    /// Groups in source order
    pub fn groups(&self) -> &[Group] {
        &self.content.groups
    }

    /// Rows seen before any group name, in source order
    pub fn elements(&self) -> &[Element] {
        &self.content.elements
    }

    /// Line statistics of the last parse
    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Whether the header columns are exactly those of `S`
    pub fn header_matches_shape(&self) -> bool {
        self.header().is_some_and(|header| header.matches_fields(S::FIELDS))
    }
}
