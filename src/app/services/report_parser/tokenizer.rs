//! Line splitting and classification for pasted reports
//!
//! There is no canonical grammar for pasted reports. The game client
//! separates cells with tabs, spreadsheets pad columns with runs of spaces,
//! and a paste may mix both. The delimiter rule below accepts any run of
//! blanks that contains a tab, or a run of at least `min_space_run` spaces.
//! A single space never separates cells, which keeps names such as
//! "Moon Product" or "Glossy Scordite" intact.
//!
//! Known ambiguity: a value that itself contains two consecutive spaces is
//! split in two. Consecutive tabs collapse into one delimiter, so an empty
//! cell in the middle of a row shifts the cells after it.

use regex::Regex;
use std::iter::Enumerate;
use std::str::Lines;
use std::sync::LazyLock;

use crate::config::ParserConfig;
use crate::constants::DEFAULT_MIN_SPACE_RUN;
use crate::{Error, Result};

static DEFAULT_DELIMITER: LazyLock<Regex> = LazyLock::new(|| {
    // The pattern is built from a constant and is always valid.
    Regex::new(&delimiter_pattern(DEFAULT_MIN_SPACE_RUN)).expect("default delimiter pattern")
});

fn delimiter_pattern(min_space_run: usize) -> String {
    format!(r"[ ]*\t[\t ]*| {{{},}}", min_space_run)
}

/// Cell delimiter compiled from a [`ParserConfig`]
#[derive(Debug, Clone)]
pub struct Delimiter {
    pattern: Regex,
}

impl Default for Delimiter {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DELIMITER.clone(),
        }
    }
}

impl Delimiter {
    /// Compile the delimiter for `config`, rejecting invalid settings
    pub fn new(config: &ParserConfig) -> Result<Self> {
        config.validate()?;

        let pattern = Regex::new(&delimiter_pattern(config.min_space_run)).map_err(|e| {
            Error::configuration(format!("Failed to compile delimiter pattern: {}", e))
        })?;

        Ok(Self { pattern })
    }

    /// Split a line into trimmed cells.
    ///
    /// A leading delimiter yields a leading empty cell, since rows are
    /// mapped onto columns by position. Trailing empty cells are dropped.
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        let mut cells: Vec<&str> = self.pattern.split(line).map(str::trim).collect();

        while cells.last().is_some_and(|cell| cell.is_empty()) {
            cells.pop();
        }

        cells
    }
}

/// Structural role of a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Nothing but whitespace; a visual separator only
    Blank,

    /// Exactly one non-empty cell: the name of a new group
    GroupName(&'a str),

    /// Two or more non-empty cells: a header or data row
    Data(Vec<&'a str>),
}

/// A classified line with its 1-based position in the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    pub number: usize,
    pub kind: LineKind<'a>,
}

/// Lazy, single-pass stream of classified lines
#[derive(Debug)]
pub struct Tokenizer<'a> {
    lines: Enumerate<Lines<'a>>,
    delimiter: &'a Delimiter,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str, delimiter: &'a Delimiter) -> Self {
        Self {
            lines: text.lines().enumerate(),
            delimiter,
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, raw) = self.lines.next()?;

        Some(Line {
            number: index + 1,
            kind: classify(raw, self.delimiter),
        })
    }
}

/// Classify one raw line by its number of non-empty cells
pub fn classify<'a>(raw: &'a str, delimiter: &Delimiter) -> LineKind<'a> {
    if raw.trim().is_empty() {
        return LineKind::Blank;
    }

    let cells = delimiter.split(raw);
    let non_empty = cells.iter().filter(|cell| !cell.is_empty()).count();

    match non_empty {
        0 => LineKind::Blank,
        1 => cells
            .into_iter()
            .find(|cell| !cell.is_empty())
            .map_or(LineKind::Blank, LineKind::GroupName),
        _ => LineKind::Data(cells),
    }
}
