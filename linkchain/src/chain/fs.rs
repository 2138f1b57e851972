//! Filesystem access for the chain resolver.
//!
//! The resolver only needs three read-only queries. They sit behind the
//! `LinkFs` trait so the real filesystem and an in-memory mock can be used
//! interchangeably.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read-only filesystem queries used while following a chain.
///
/// `read_link` and `symlink_status` must not follow a link in the final path
/// component. `exists` is only asked about non-link paths.
pub trait LinkFs {
    /// Read the raw target text of the link at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is not a link, does not exist, or cannot
    /// be read.
    fn read_link(&self, path: &Path) -> io::Result<PathBuf>;

    /// Whether `path` is itself a symbolic link.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry's metadata cannot be read, including
    /// when nothing exists at `path`.
    fn symlink_status(&self, path: &Path) -> io::Result<bool>;

    /// Whether `path` is itself a symbolic link, treating failures as no.
    fn is_symlink(&self, path: &Path) -> bool {
        self.symlink_status(path).unwrap_or(false)
    }

    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// The real filesystem.
///
/// # Examples
///
/// ```
/// use linkchain::chain::{LinkFs, SystemFs};
/// use std::path::Path;
///
/// let fs = SystemFs;
/// assert!(!fs.is_symlink(Path::new("/nonexistent/linkchain/path")));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFs;

impl LinkFs for SystemFs {
    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        fs::read_link(path)
    }

    fn symlink_status(&self, path: &Path) -> io::Result<bool> {
        fs::symlink_metadata(path).map(|meta| meta.file_type().is_symlink())
    }

    fn exists(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum MockEntry {
    File,
    Link(PathBuf),
}

/// In-memory filesystem for deterministic tests.
///
/// Paths are matched exactly as given; no normalization is applied.
///
/// # Examples
///
/// ```
/// use linkchain::chain::{LinkFs, MockFs};
/// use std::path::Path;
///
/// let fs = MockFs::new()
///     .with_file("/data/real")
///     .with_link("/data/alias", "real");
///
/// assert!(fs.is_symlink(Path::new("/data/alias")));
/// assert_eq!(fs.read_link(Path::new("/data/alias")).unwrap(), Path::new("real"));
/// assert!(fs.exists(Path::new("/data/real")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockFs {
    entries: HashMap<PathBuf, MockEntry>,
    unreadable: HashSet<PathBuf>,
    inaccessible: HashSet<PathBuf>,
}

impl MockFs {
    /// Create an empty mock filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a regular entry at `path`.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.entries.insert(path.into(), MockEntry::File);
        self
    }

    /// Add a link at `path` whose raw target text is `target`.
    #[must_use]
    pub fn with_link(mut self, path: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        self.entries
            .insert(path.into(), MockEntry::Link(target.into()));
        self
    }

    /// Make reading the link at `path` fail with `PermissionDenied`.
    #[must_use]
    pub fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        self.unreadable.insert(path.into());
        self
    }

    /// Make every query about `path` fail with `PermissionDenied`, as if its
    /// parent directory could not be searched.
    #[must_use]
    pub fn with_inaccessible(mut self, path: impl Into<PathBuf>) -> Self {
        self.inaccessible.insert(path.into());
        self
    }

    /// Remove whatever is at `path`.
    pub fn remove(&mut self, path: &Path) {
        self.entries.remove(path);
    }
}

impl LinkFs for MockFs {
    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        if self.unreadable.contains(path) || self.inaccessible.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        match self.entries.get(path) {
            Some(MockEntry::Link(target)) => Ok(target.clone()),
            Some(MockEntry::File) => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a symbolic link",
            )),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                "no such file or directory",
            )),
        }
    }

    fn symlink_status(&self, path: &Path) -> io::Result<bool> {
        if self.inaccessible.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        match self.entries.get(path) {
            Some(entry) => Ok(matches!(entry, MockEntry::Link(_))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                "no such file or directory",
            )),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        !self.inaccessible.contains(path) && self.entries.contains_key(path)
    }
}
