//! Rendering of resolution results.
//!
//! This module turns a list of [`Resolution`] records into text. Two formats
//! are provided by the library:
//! - `Table`: aligned, human-readable, one row per link followed by its chain
//! - `Json`: a pretty-printed array carrying every field of every record
//!
//! A [`Summary`] tallies results per status for a one-line footer.

mod formatters;
mod summary;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{Resolution, Result};

pub use formatters::{JsonReporter, TableReporter};
pub use summary::Summary;

/// Trait for rendering resolution results.
pub trait Reporter {
    /// Render `results` into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn render(&self, results: &[Resolution]) -> Result<String>;
}

/// Output formats understood by the library reporters.
///
/// # Examples
///
/// ```
/// use linkchain::report::OutputFormat;
///
/// let reporter = OutputFormat::Json.create_reporter();
/// assert_eq!(reporter.render(&[]).unwrap(), "[]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text table.
    #[default]
    Table,
    /// Pretty-printed JSON array.
    Json,
}

impl OutputFormat {
    /// Create a reporter for this output format.
    #[must_use]
    pub fn create_reporter(&self) -> Box<dyn Reporter> {
        match self {
            Self::Table => Box::new(TableReporter),
            Self::Json => Box::new(JsonReporter),
        }
    }
}
