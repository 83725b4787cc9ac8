//! Core data structures for parsed reports
//!
//! This module defines the document tree built by the report parser: the
//! header row, the named groups and the elements each group owns.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One column of a report schema: display name as it appears in the pasted
/// header, and the semantic key elements are addressed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub display: &'static str,
    pub key: &'static str,
}

impl FieldSpec {
    pub const fn new(display: &'static str, key: &'static str) -> Self {
        Self { display, key }
    }
}

/// Column names of the report, taken verbatim from the first data-shaped line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    columns: Vec<String>,
}

impl Header {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Column names in source order
    pub fn fields(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Check whether the columns are exactly the schema's display names.
    ///
    /// Informational only; structural validation never looks at column text.
    pub fn matches_fields(&self, fields: &[FieldSpec]) -> bool {
        self.columns.len() == fields.len()
            && self
                .columns
                .iter()
                .zip(fields)
                .all(|(column, spec)| column == spec.display)
    }
}

/// One data row decoded onto the schema's field keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    fields: HashMap<String, String>,
}

impl Element {
    /// Map cells positionally onto `schema`.
    ///
    /// Missing trailing cells become empty strings and cells beyond the
    /// schema are dropped, so the key set always equals the schema's.
    pub fn from_cells(schema: &[FieldSpec], cells: &[&str]) -> Self {
        let fields = schema
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                let value = cells.get(index).copied().unwrap_or_default();
                (spec.key.to_string(), value.to_string())
            })
            .collect();

        Self { fields }
    }

    pub fn fields(&self) -> &HashMap<String, String> {
        &self.fields
    }

    /// Value of a single field, `None` if the key is not part of the schema
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A named cluster of rows, such as every product of one moon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    name: String,
    elements: Vec<Element>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elements: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Elements in the order they appeared under the group name
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn has_elements(&self) -> bool {
        !self.elements.is_empty()
    }

    pub(crate) fn push(&mut self, element: Element) {
        self.elements.push(element);
    }
}
