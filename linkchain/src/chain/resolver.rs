//! Link chain resolution.
//!
//! This module provides the `ChainResolver` type, which follows a symbolic
//! link hop by hop until the chain terminates.

use std::collections::HashSet;
use std::env;
use std::io;
use std::path::{Path, PathBuf};

use crate::chain::fs::{LinkFs, SystemFs};
use crate::chain::types::{LinkHop, Outcome, Resolution};
use crate::path::normalize;

/// Default ceiling on link-to-link hops.
pub const DEFAULT_MAX_HOPS: usize = 200;

/// Detail attached to a `ReadError` when the start is not a link.
pub const NOT_A_SYMLINK: &str = "not a symbolic link";

/// Follows symbolic link chains to a terminal outcome.
///
/// Each call to [`ChainResolver::resolve`] is independent: the visited set
/// lives on the call's stack and nothing is cached between calls.
///
/// # Examples
///
/// ```
/// use linkchain::chain::{ChainResolver, MockFs};
/// use linkchain::LinkStatus;
/// use std::path::Path;
///
/// let fs = MockFs::new()
///     .with_file("/srv/app-1.2")
///     .with_link("/srv/current", "app-1.2");
///
/// let resolver = ChainResolver::with_fs(fs);
/// let resolution = resolver.resolve(Path::new("/srv/current"));
/// assert_eq!(resolution.status(), LinkStatus::Resolved);
/// assert_eq!(resolution.resolved_target(), Some(Path::new("/srv/app-1.2")));
/// ```
#[derive(Debug, Clone)]
pub struct ChainResolver<F = SystemFs> {
    fs: F,
    max_hops: usize,
}

impl Default for ChainResolver<SystemFs> {
    fn default() -> Self {
        Self::with_fs(SystemFs)
    }
}

impl ChainResolver<SystemFs> {
    /// Create a resolver over the real filesystem with default settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkchain::chain::{ChainResolver, DEFAULT_MAX_HOPS};
    ///
    /// let resolver = ChainResolver::new();
    /// assert_eq!(resolver.max_hops(), DEFAULT_MAX_HOPS);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: LinkFs> ChainResolver<F> {
    /// Create a resolver over a custom filesystem.
    #[must_use]
    pub fn with_fs(fs: F) -> Self {
        Self {
            fs,
            max_hops: DEFAULT_MAX_HOPS,
        }
    }

    /// Configure the hop ceiling.
    ///
    /// A chain needing more link-to-link hops than this is reported as
    /// `MaxHopsExceeded`. Zero means no link is ever read.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkchain::chain::ChainResolver;
    ///
    /// let resolver = ChainResolver::new().with_max_hops(40);
    /// assert_eq!(resolver.max_hops(), 40);
    /// ```
    #[must_use]
    pub fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = max_hops;
        self
    }

    /// The configured hop ceiling.
    #[must_use]
    pub fn max_hops(&self) -> usize {
        self.max_hops
    }

    /// Resolve the chain starting at `start`.
    ///
    /// A relative `start` is taken against the current directory, so every
    /// path in the result is absolute. A start that is not a symbolic link
    /// yields a `ReadError` with detail [`NOT_A_SYMLINK`] and an empty chain;
    /// if its metadata cannot be read at all, the detail names the I/O
    /// error instead. The start itself is never part of the chain.
    ///
    /// A hop that would revisit a path already in the chain ends resolution
    /// with `Loop`; the repeated path is named in the detail but not appended
    /// again, so the chain only ever holds distinct paths.
    pub fn resolve(&self, start: &Path) -> Resolution {
        let start = if start.is_absolute() {
            start.to_path_buf()
        } else {
            match env::current_dir() {
                Ok(cwd) => cwd.join(start),
                Err(e) => {
                    return Resolution::new(
                        start.to_path_buf(),
                        Vec::new(),
                        Outcome::ReadError {
                            detail: format!("cannot get current directory: {e}"),
                        },
                    );
                }
            }
        };

        let detail = match self.fs.symlink_status(&start) {
            Ok(true) => None,
            Ok(false) => Some(NOT_A_SYMLINK.to_string()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Some(NOT_A_SYMLINK.to_string()),
            Err(e) => Some(format!("cannot inspect {}: {e}", start.display())),
        };
        if let Some(detail) = detail {
            log::debug!("{}: {detail}", start.display());
            return Resolution::new(start, Vec::new(), Outcome::ReadError { detail });
        }

        let mut chain = Vec::new();
        let mut visited: HashSet<PathBuf> = HashSet::new();
        let mut current = start.clone();
        let mut hops = 0;

        while hops < self.max_hops {
            let text = match self.fs.read_link(&current) {
                Ok(text) => text,
                Err(e) => {
                    log::debug!("failed to read link {}: {e}", current.display());
                    return Resolution::new(
                        start,
                        chain,
                        Outcome::ReadError {
                            detail: format!("cannot read link {}: {e}", current.display()),
                        },
                    );
                }
            };

            let containing_dir = current.parent().unwrap_or(current.as_path());
            let next = normalize(&text, containing_dir);
            log::debug!(
                "hop {}: {} -> {}",
                hops + 1,
                current.display(),
                next.display()
            );

            if visited.contains(&next) {
                let detail = format!("cycle detected at {}", next.display());
                return Resolution::new(start, chain, Outcome::Loop { detail });
            }
            visited.insert(next.clone());

            let is_symlink = self.fs.is_symlink(&next);
            chain.push(LinkHop::new(next.clone(), is_symlink));

            if is_symlink {
                current = next;
                hops += 1;
                continue;
            }

            let outcome = if self.fs.exists(&next) {
                Outcome::Resolved { target: next }
            } else {
                Outcome::Broken { target: next }
            };
            return Resolution::new(start, chain, outcome);
        }

        log::debug!(
            "gave up on {} after {} hops",
            start.display(),
            self.max_hops
        );
        Resolution::new(start, chain, Outcome::MaxHopsExceeded)
    }
}

/// Resolve `start` on the real filesystem with the given hop ceiling.
///
/// # Examples
///
/// ```no_run
/// use linkchain::chain::resolve;
/// use std::path::Path;
///
/// let resolution = resolve(Path::new("/usr/bin/python3"), 200);
/// println!("{}", resolution.status());
/// ```
#[must_use]
pub fn resolve(start: &Path, max_hops: usize) -> Resolution {
    ChainResolver::new().with_max_hops(max_hops).resolve(start)
}
