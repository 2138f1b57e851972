//! Per-status tallies.

use std::fmt;

use crate::chain::{LinkStatus, Resolution};

/// Counts of results by status.
///
/// # Examples
///
/// ```
/// use linkchain::report::Summary;
///
/// let summary = Summary::from_results(&[]);
/// assert_eq!(summary.total(), 0);
/// assert!(summary.is_clean());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Chains ending at an existing entry.
    pub resolved: usize,
    /// Chains ending at a missing path.
    pub broken: usize,
    /// Chains that revisit a path.
    pub loops: usize,
    /// Chains that hit the hop ceiling.
    pub max_hops_exceeded: usize,
    /// Links that could not be read.
    pub read_errors: usize,
}

impl Summary {
    /// Tally `results`.
    #[must_use]
    pub fn from_results(results: &[Resolution]) -> Self {
        let mut summary = Self::default();
        for res in results {
            match res.status() {
                LinkStatus::Resolved => summary.resolved += 1,
                LinkStatus::Broken => summary.broken += 1,
                LinkStatus::Loop => summary.loops += 1,
                LinkStatus::MaxHopsExceeded => summary.max_hops_exceeded += 1,
                LinkStatus::ReadError => summary.read_errors += 1,
            }
        }
        summary
    }

    /// Total number of results.
    #[must_use]
    pub fn total(&self) -> usize {
        self.resolved + self.broken + self.loops + self.max_hops_exceeded + self.read_errors
    }

    /// Whether every link resolved.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.total() == self.resolved
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} links: {} resolved, {} broken, {} loop, {} max-hops, {} error",
            self.total(),
            self.resolved,
            self.broken,
            self.loops,
            self.max_hops_exceeded,
            self.read_errors
        )
    }
}
