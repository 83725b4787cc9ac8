//! Parser configuration.
//!
//! Holds the tunables of the delimiter heuristic. Defaults match what the
//! game client and common spreadsheet exports produce.

use crate::constants::{DEFAULT_MIN_SPACE_RUN, MIN_SPACE_RUN_FLOOR};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Tokenizer settings shared by every report flavour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Shortest run of spaces that separates two cells
    pub min_space_run: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            min_space_run: DEFAULT_MIN_SPACE_RUN,
        }
    }
}

impl ParserConfig {
    /// Set the shortest run of spaces treated as a delimiter
    pub fn with_min_space_run(mut self, min_space_run: usize) -> Self {
        self.min_space_run = min_space_run;
        self
    }

    /// Check the configuration for values the tokenizer cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.min_space_run < MIN_SPACE_RUN_FLOOR {
            return Err(Error::configuration(format!(
                "min_space_run must be at least {} (got {}); a single space never separates cells",
                MIN_SPACE_RUN_FLOOR, self.min_space_run
            )));
        }
        Ok(())
    }
}
