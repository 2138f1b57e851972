//! Directory tree traversal.
//!
//! The `TreeWalker` enumerates a subtree, hands every symbolic link it finds
//! to the chain resolver, and collects the results in a stable order.
//!
//! Directory symlinks are resolved like any other link but are not descended
//! into unless `follow_dir_links` is enabled. When they are followed, each
//! real directory is scanned at most once, so directory cycles terminate.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::chain::{ChainResolver, Resolution};
use crate::error::{Error, Result};
use crate::path::absolutize;

/// Map an I/O error on `path` to the library error type.
fn path_error(path: &Path, e: std::io::Error) -> Error {
    match e.kind() {
        ErrorKind::NotFound => Error::PathNotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => Error::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    }
}

/// Finds and resolves every symbolic link under a root.
///
/// # Examples
///
/// ```no_run
/// use linkchain::{ChainResolver, TreeWalker};
/// use std::path::Path;
///
/// let walker = TreeWalker::new(ChainResolver::new());
/// let results = walker.scan(Path::new("/usr/lib")).unwrap();
/// println!("found {} links", results.len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreeWalker {
    resolver: ChainResolver,
    follow_dir_links: bool,
}

impl TreeWalker {
    /// Create a walker that resolves links with `resolver`.
    #[must_use]
    pub fn new(resolver: ChainResolver) -> Self {
        Self {
            resolver,
            follow_dir_links: false,
        }
    }

    /// Configure whether directory symlinks are descended into.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkchain::{ChainResolver, TreeWalker};
    ///
    /// let walker = TreeWalker::new(ChainResolver::new()).with_follow_dir_links(true);
    /// assert!(walker.follow_dir_links());
    /// ```
    #[must_use]
    pub fn with_follow_dir_links(mut self, follow: bool) -> Self {
        self.follow_dir_links = follow;
        self
    }

    /// Whether directory symlinks are descended into.
    #[must_use]
    pub fn follow_dir_links(&self) -> bool {
        self.follow_dir_links
    }

    /// The resolver used for each discovered link.
    #[must_use]
    pub fn resolver(&self) -> &ChainResolver {
        &self.resolver
    }

    /// Scan `root` and resolve every link found.
    ///
    /// - A `root` that is a link not pointing at a directory is resolved on
    ///   its own.
    /// - A `root` that is a directory (or a link to one) is walked
    ///   recursively in sorted name order.
    /// - Any other existing `root` contains no links and yields nothing.
    ///
    /// Unreadable directories and entries are skipped with a warning; a
    /// failing link never stops the scan because its failure is recorded in
    /// its own `Resolution`.
    ///
    /// # Errors
    ///
    /// Returns `PathNotFound` if `root` does not exist (and is not a dangling
    /// link), or another error if `root` cannot be inspected.
    pub fn scan(&self, root: &Path) -> Result<Vec<Resolution>> {
        let root = absolutize(root)?;
        let meta = fs::symlink_metadata(&root).map_err(|e| path_error(&root, e))?;

        if meta.file_type().is_symlink() && !root.is_dir() {
            log::debug!("{} is a link, resolving it alone", root.display());
            return Ok(vec![self.resolver.resolve(&root)]);
        }

        if !root.is_dir() {
            log::debug!("{} is not a directory, nothing to scan", root.display());
            return Ok(Vec::new());
        }

        let mut results = Vec::new();
        let mut seen_dirs = HashSet::new();
        if let Ok(canonical) = fs::canonicalize(&root) {
            seen_dirs.insert(canonical);
        }
        self.walk_dir(&root, &mut seen_dirs, &mut results);

        Ok(results)
    }

    /// Resolve an explicit list of link paths.
    ///
    /// Each path is made absolute first. Paths that are not links produce
    /// `ReadError` records rather than being skipped.
    ///
    /// # Errors
    ///
    /// Returns an error only if a path cannot be made absolute.
    pub fn resolve_paths<I, P>(&self, paths: I) -> Result<Vec<Resolution>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths
            .into_iter()
            .map(|path| absolutize(path.as_ref()).map(|abs| self.resolver.resolve(&abs)))
            .collect()
    }

    fn walk_dir(
        &self,
        dir: &Path,
        seen_dirs: &mut HashSet<PathBuf>,
        results: &mut Vec<Resolution>,
    ) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("skipping unreadable directory {}: {e}", dir.display());
                return;
            }
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.path()),
                Err(e) => {
                    log::warn!("skipping unreadable entry in {}: {e}", dir.display());
                    None
                }
            })
            .collect();
        paths.sort();

        for path in paths {
            let meta = match fs::symlink_metadata(&path) {
                Ok(meta) => meta,
                Err(e) => {
                    log::warn!("skipping {}: {e}", path.display());
                    continue;
                }
            };

            if meta.file_type().is_symlink() {
                results.push(self.resolver.resolve(&path));
                if self.follow_dir_links && path.is_dir() {
                    self.descend(&path, seen_dirs, results);
                }
            } else if meta.is_dir() {
                self.descend(&path, seen_dirs, results);
            }
        }
    }

    fn descend(
        &self,
        dir: &Path,
        seen_dirs: &mut HashSet<PathBuf>,
        results: &mut Vec<Resolution>,
    ) {
        match fs::canonicalize(dir) {
            Ok(canonical) => {
                if !seen_dirs.insert(canonical) {
                    log::debug!("already scanned {}, skipping", dir.display());
                    return;
                }
            }
            Err(e) => {
                log::warn!("skipping {}: {e}", dir.display());
                return;
            }
        }
        self.walk_dir(dir, seen_dirs, results);
    }
}
