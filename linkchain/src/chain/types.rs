//! Core types for link chain resolution.
//!
//! This module defines the records produced by the chain resolver:
//! - `LinkHop`: one path reached while following a chain
//! - `Outcome`: the terminal state, carrying only the data valid for it
//! - `LinkStatus`: the bare discriminant of an outcome
//! - `Resolution`: the complete, immutable result for one starting link

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize, Serializer};

/// One step in a link chain.
///
/// Records the absolute path reached at this step and whether that path was
/// itself a symbolic link when it was examined.
///
/// # Examples
///
/// ```
/// use linkchain::LinkHop;
/// use std::path::Path;
///
/// let hop = LinkHop::new("/srv/data/current", true);
/// assert_eq!(hop.path(), Path::new("/srv/data/current"));
/// assert!(hop.is_symlink());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LinkHop {
    #[serde(serialize_with = "serialize_lossy")]
    path: PathBuf,
    is_symlink: bool,
}

impl LinkHop {
    /// Create a hop record.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, is_symlink: bool) -> Self {
        Self {
            path: path.into(),
            is_symlink,
        }
    }

    /// The absolute path reached at this step.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the path was a symbolic link.
    #[must_use]
    pub const fn is_symlink(&self) -> bool {
        self.is_symlink
    }
}

/// Terminal classification of a resolved link.
///
/// # Examples
///
/// ```
/// use linkchain::LinkStatus;
///
/// assert_eq!(LinkStatus::MaxHopsExceeded.to_string(), "max_hops_exceeded");
/// assert_eq!(LinkStatus::Resolved.legacy_label(), "ok");
/// assert!(LinkStatus::Resolved.is_healthy());
/// assert!(!LinkStatus::Broken.is_healthy());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStatus {
    /// The chain ends at an existing non-link entry.
    Resolved,
    /// The chain ends at a path that does not exist.
    Broken,
    /// The chain revisits a path it has already reached.
    Loop,
    /// The hop ceiling was reached before the chain terminated.
    MaxHopsExceeded,
    /// A link could not be read, or the start was not a link.
    ReadError,
}

impl LinkStatus {
    /// All statuses in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Resolved,
        Self::Broken,
        Self::Loop,
        Self::MaxHopsExceeded,
        Self::ReadError,
    ];

    /// Short label used by the text table.
    #[must_use]
    pub const fn legacy_label(self) -> &'static str {
        match self {
            Self::Resolved => "ok",
            Self::Broken => "broken",
            Self::Loop => "loop",
            Self::MaxHopsExceeded => "maxdepth",
            Self::ReadError => "error",
        }
    }

    /// Whether the link leads somewhere usable.
    #[must_use]
    pub const fn is_healthy(self) -> bool {
        matches!(self, Self::Resolved)
    }
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved => write!(f, "resolved"),
            Self::Broken => write!(f, "broken"),
            Self::Loop => write!(f, "loop"),
            Self::MaxHopsExceeded => write!(f, "max_hops_exceeded"),
            Self::ReadError => write!(f, "read_error"),
        }
    }
}

/// Terminal state of a chain, with exactly the data that state carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Reached an existing non-link entry.
    Resolved {
        /// The final existing path.
        target: PathBuf,
    },
    /// Reached a non-link path that does not exist.
    Broken {
        /// The dangling path.
        target: PathBuf,
    },
    /// Reached a path already seen in this chain.
    Loop {
        /// Which path repeated.
        detail: String,
    },
    /// Ran out of hops.
    MaxHopsExceeded,
    /// A read failed or the start was not a link.
    ReadError {
        /// The underlying cause.
        detail: String,
    },
}

impl Outcome {
    /// The discriminant of this outcome.
    #[must_use]
    pub const fn status(&self) -> LinkStatus {
        match self {
            Self::Resolved { .. } => LinkStatus::Resolved,
            Self::Broken { .. } => LinkStatus::Broken,
            Self::Loop { .. } => LinkStatus::Loop,
            Self::MaxHopsExceeded => LinkStatus::MaxHopsExceeded,
            Self::ReadError { .. } => LinkStatus::ReadError,
        }
    }
}

/// The complete result of resolving one starting link.
///
/// A `Resolution` is built once by the resolver and is read-only afterwards.
/// The optional fields are derived from the [`Outcome`], so a target is only
/// ever present for `Resolved`/`Broken` and a detail only for
/// `Loop`/`ReadError`.
///
/// Serializes as `{start, status, resolved_target, error_detail, chain}`.
/// Path bytes that are not valid UTF-8 are written as U+FFFD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    start: PathBuf,
    chain: Vec<LinkHop>,
    outcome: Outcome,
}

impl Resolution {
    pub(crate) fn new(start: PathBuf, chain: Vec<LinkHop>, outcome: Outcome) -> Self {
        Self {
            start,
            chain,
            outcome,
        }
    }

    /// Absolute path of the starting link.
    #[must_use]
    pub fn start(&self) -> &Path {
        &self.start
    }

    /// Paths reached after `start`, in traversal order.
    #[must_use]
    pub fn chain(&self) -> &[LinkHop] {
        &self.chain
    }

    /// The terminal outcome.
    #[must_use]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// The terminal status.
    #[must_use]
    pub fn status(&self) -> LinkStatus {
        self.outcome.status()
    }

    /// Final path for `Resolved` (existing) and `Broken` (missing) chains.
    #[must_use]
    pub fn resolved_target(&self) -> Option<&Path> {
        match &self.outcome {
            Outcome::Resolved { target } | Outcome::Broken { target } => Some(target),
            _ => None,
        }
    }

    /// Human-readable cause for `Loop` and `ReadError`.
    #[must_use]
    pub fn error_detail(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Loop { detail } | Outcome::ReadError { detail } => Some(detail),
            _ => None,
        }
    }

    /// The last path reached, if any hop was recorded.
    #[must_use]
    pub fn last_hop(&self) -> Option<&LinkHop> {
        self.chain.last()
    }
}

/// Writes a path as a string, replacing invalid UTF-8 instead of failing.
fn serialize_lossy<P, S>(path: &P, serializer: S) -> Result<S::Ok, S::Error>
where
    P: AsRef<Path>,
    S: Serializer,
{
    serializer.serialize_str(&path.as_ref().to_string_lossy())
}

fn serialize_lossy_opt<S: Serializer>(
    path: &Option<&Path>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match path {
        Some(path) => serialize_lossy(path, serializer),
        None => serializer.serialize_none(),
    }
}

#[derive(Serialize)]
struct ResolutionRecord<'a> {
    #[serde(serialize_with = "serialize_lossy")]
    start: &'a Path,
    status: LinkStatus,
    #[serde(serialize_with = "serialize_lossy_opt")]
    resolved_target: Option<&'a Path>,
    error_detail: Option<&'a str>,
    chain: &'a [LinkHop],
}

impl Serialize for Resolution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ResolutionRecord {
            start: self.start(),
            status: self.status(),
            resolved_target: self.resolved_target(),
            error_detail: self.error_detail(),
            chain: self.chain(),
        }
        .serialize(serializer)
    }
}
