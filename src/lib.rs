//! Moon Report Parser Library
//!
//! A Rust library for turning moon survey reports pasted from the EVE Online
//! client (tab separated) or from a spreadsheet (multi-space separated) into
//! a structured document of a header, named groups and per-group elements.
//!
//! This library provides tools for:
//! - Tokenizing heterogeneous delimiter-separated text into classified lines
//! - Building a header/group/element tree from the classified lines
//! - Validating the document shape before it is handed to downstream code
//! - Describing new report flavours declaratively through [`ReportShape`]
//!
//! ## Usage
//!
//! ```rust
//! use moon_report_parser::MoonReport;
//!
//! let text = "Moon\tMoon Product\tQuantity\tOre TypeID\tSolarSystemID\tPlanetID\tMoonID\n\
//!             OP9L-F II - Moon 10\n\
//!             \tGlossy Scordite\t0.300030559301\t46687\t30002173\t40138526\t40138527\n";
//!
//! let mut report = MoonReport::new();
//! report.parse(text);
//! report.validate().unwrap();
//!
//! let group = &report.groups()[0];
//! assert_eq!(group.name(), "OP9L-F II - Moon 10");
//! assert_eq!(group.elements()[0].get("moonProduct"), Some("Glossy Scordite"));
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod report_parser;
    }
}

// Re-export commonly used types
pub use app::models::{Element, FieldSpec, Group, Header};
pub use app::services::report_parser::{
    MoonReport, MoonShape, ParseStats, Report, ReportShape, field_keys,
};
pub use config::ParserConfig;
pub use error::ReportError;

/// Result type alias for fallible library setup
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for configuring and validating reports
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Report failed structural validation
    #[error("Report validation error: {0}")]
    Report(#[from] ReportError),

    /// Logging subscriber could not be installed
    #[error("Logging setup error: {message}")]
    Logging { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a logging setup error
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}
