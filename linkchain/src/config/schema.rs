//! Configuration schema definitions.
//!
//! Every field is optional so that partial files and environment overrides
//! can be layered; the `effective_*` accessors fill in defaults.

use serde::{Deserialize, Serialize};

use crate::chain::{ChainResolver, DEFAULT_MAX_HOPS};
use crate::report::OutputFormat;
use crate::walk::TreeWalker;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use linkchain::config::Config;
///
/// let config = Config {
///     max_hops: Some(40),
///     ..Default::default()
/// };
/// assert_eq!(config.effective_max_hops(), 40);
/// assert!(!config.effective_follow_dir_links());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Ceiling on link-to-link hops per chain.
    pub max_hops: Option<usize>,

    /// Descend into directory symlinks while scanning.
    pub follow_dir_links: Option<bool>,

    /// Output format for reports.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The built-in defaults with every field populated.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            max_hops: Some(DEFAULT_MAX_HOPS),
            follow_dir_links: Some(false),
            output_format: Some(OutputFormat::default()),
        }
    }

    /// Overlay the fields set in `other` onto `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkchain::config::Config;
    ///
    /// let mut base = Config::defaults();
    /// base.merge(&Config { max_hops: Some(10), ..Default::default() });
    /// assert_eq!(base.max_hops, Some(10));
    /// assert_eq!(base.follow_dir_links, Some(false));
    /// ```
    pub fn merge(&mut self, other: &Config) {
        if other.max_hops.is_some() {
            self.max_hops = other.max_hops;
        }
        if other.follow_dir_links.is_some() {
            self.follow_dir_links = other.follow_dir_links;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
    }

    /// Hop ceiling, falling back to [`DEFAULT_MAX_HOPS`].
    #[must_use]
    pub fn effective_max_hops(&self) -> usize {
        self.max_hops.unwrap_or(DEFAULT_MAX_HOPS)
    }

    /// Whether to follow directory links, defaulting to `false`.
    #[must_use]
    pub fn effective_follow_dir_links(&self) -> bool {
        self.follow_dir_links.unwrap_or(false)
    }

    /// Output format, defaulting to the table.
    #[must_use]
    pub fn effective_output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// A resolver configured from this config.
    #[must_use]
    pub fn resolver(&self) -> ChainResolver {
        ChainResolver::new().with_max_hops(self.effective_max_hops())
    }

    /// A tree walker configured from this config.
    #[must_use]
    pub fn walker(&self) -> TreeWalker {
        TreeWalker::new(self.resolver()).with_follow_dir_links(self.effective_follow_dir_links())
    }
}
