//! Path normalization functions.
//!
//! This module provides the lexical half of link resolution:
//! - Composing a link's target text with the directory that contains the link
//! - Resolving `.` and `..` components without touching the filesystem
//! - Expanding tilde (~) and anchoring user-supplied paths at the current
//!   directory
//!
//! Nothing here consults the filesystem, so a dangling target normalizes
//! exactly like a live one.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
/// It is meant for user-supplied paths only; link target text is never
/// tilde-expanded because the operating system does not expand it either.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use linkchain::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// // Expands ~/path to home/path
/// let expanded = expand_tilde(Path::new("~/project")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("project"));
///
/// // Leaves absolute paths unchanged
/// let expanded = expand_tilde(Path::new("/absolute")).unwrap();
/// assert_eq!(expanded, Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let Some(path_str) = path.to_str() else {
        // Non-UTF-8 paths cannot start with a literal `~` we care about
        return Ok(path.to_path_buf());
    };

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Resolve `.` and `..` components lexically.
///
/// A `..` directly under the root is dropped, matching the operating system
/// where `/..` is `/`. Leading `..` components of a relative path have
/// nothing to cancel against and are kept.
///
/// # Examples
///
/// ```
/// use linkchain::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(resolve_components(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(resolve_components(Path::new("/a/../../c")), PathBuf::from("/c"));
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => parts.push(component),
            },
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                parts.push(component);
            }
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }

    parts.into_iter().collect()
}

/// Compute the path a link's target text designates.
///
/// Relative target text is anchored at `containing_dir` (the directory that
/// holds the link, not the process working directory). Absolute target text
/// replaces the anchor entirely. Either way the result has its `.` and `..`
/// components collapsed, and no further links are followed.
///
/// # Examples
///
/// ```
/// use linkchain::path::normalize::normalize;
/// use std::path::{Path, PathBuf};
///
/// // Relative targets are anchored at the link's directory
/// let next = normalize(Path::new("../c"), Path::new("/a/b"));
/// assert_eq!(next, PathBuf::from("/a/c"));
///
/// // Absolute targets ignore the anchor
/// let next = normalize(Path::new("/x/./y"), Path::new("/a/b"));
/// assert_eq!(next, PathBuf::from("/x/y"));
/// ```
#[must_use]
pub fn normalize(target: &Path, containing_dir: &Path) -> PathBuf {
    // `join` discards the base when `target` is absolute
    resolve_components(&containing_dir.join(target))
}

/// Make a user-supplied path absolute.
///
/// Expands tilde, anchors relative paths at the current working directory and
/// collapses `.` and `..`. Symlinks are not followed, so a link passed here
/// is still the link afterwards.
///
/// # Errors
///
/// Returns an error if tilde expansion fails or the current directory cannot
/// be determined.
///
/// # Examples
///
/// ```no_run
/// use linkchain::path::normalize::absolutize;
/// use std::path::Path;
///
/// let absolute = absolutize(Path::new("./src")).unwrap();
/// assert!(absolute.is_absolute());
/// ```
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Cannot get current directory: {e}"),
        })?;
        cwd.join(expanded)
    };

    Ok(resolve_components(&absolute))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_home() {
        let home = home::home_dir().unwrap();
        assert_eq!(expand_tilde(Path::new("~")).unwrap(), home);
    }

    #[test]
    fn test_expand_tilde_with_path() {
        let home = home::home_dir().unwrap();
        let expanded = expand_tilde(Path::new("~/test")).unwrap();
        assert_eq!(expanded, home.join("test"));
    }

    #[test]
    fn test_expand_tilde_user_syntax_not_supported() {
        assert!(expand_tilde(Path::new("~user/path")).is_err());
    }

    #[test]
    fn test_resolve_components_simple() {
        let resolved = resolve_components(Path::new("/a/./b/../c"));
        assert_eq!(resolved, PathBuf::from("/a/c"));
    }

    #[test]
    fn test_resolve_components_parent_at_root_stays_at_root() {
        assert_eq!(resolve_components(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(resolve_components(Path::new("/a/../../b")), PathBuf::from("/b"));
    }

    #[test]
    fn test_resolve_components_root_only() {
        assert_eq!(resolve_components(Path::new("/")), PathBuf::from("/"));
    }

    #[test]
    fn test_resolve_components_relative_keeps_leading_parents() {
        assert_eq!(
            resolve_components(Path::new("../../a/./b")),
            PathBuf::from("../../a/b")
        );
        assert_eq!(resolve_components(Path::new("a/..")), PathBuf::from("."));
    }

    #[test]
    #[cfg(unix)]
    fn test_normalize_relative_parent() {
        let next = normalize(Path::new("../c"), Path::new("/a/b"));
        assert_eq!(next, PathBuf::from("/a/c"));
        assert_ne!(next, PathBuf::from("/a/b/c"));
    }

    #[test]
    #[cfg(unix)]
    fn test_normalize_sibling() {
        let next = normalize(Path::new("target.txt"), Path::new("/srv/data"));
        assert_eq!(next, PathBuf::from("/srv/data/target.txt"));
    }

    #[test]
    #[cfg(unix)]
    fn test_normalize_absolute_ignores_anchor() {
        let next = normalize(Path::new("/etc/../usr/./lib"), Path::new("/a/b"));
        assert_eq!(next, PathBuf::from("/usr/lib"));
    }

    #[test]
    #[cfg(unix)]
    fn test_normalize_trailing_slash_and_dot() {
        assert_eq!(
            normalize(Path::new("./dir/"), Path::new("/a")),
            PathBuf::from("/a/dir")
        );
        assert_eq!(normalize(Path::new("."), Path::new("/a")), PathBuf::from("/a"));
    }

    #[test]
    #[cfg(unix)]
    fn test_normalize_does_not_expand_tilde() {
        let next = normalize(Path::new("~/x"), Path::new("/a"));
        assert_eq!(next, PathBuf::from("/a/~/x"));
    }

    #[test]
    #[cfg(unix)]
    fn test_normalize_escapes_above_root() {
        let next = normalize(Path::new("../../../../etc"), Path::new("/a"));
        assert_eq!(next, PathBuf::from("/etc"));
    }

    #[test]
    fn test_absolutize_relative() {
        let cwd = env::current_dir().unwrap();
        let absolute = absolutize(Path::new("relative/path")).unwrap();
        assert!(absolute.is_absolute());
        assert!(absolute.starts_with(&cwd));
        assert!(absolute.ends_with("relative/path"));
    }

    #[test]
    fn test_absolutize_current_dir() {
        let cwd = env::current_dir().unwrap();
        assert_eq!(absolutize(Path::new(".")).unwrap(), cwd);
    }

    // Property-based tests
    #[cfg(unix)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn anchor_strategy() -> impl Strategy<Value = PathBuf> {
            prop::collection::vec("[a-zA-Z0-9_-]{1,10}", 0..=5)
                .prop_map(|parts| PathBuf::from(format!("/{}", parts.join("/"))))
        }

        // Target text mixing names with . and .. segments
        fn target_strategy() -> impl Strategy<Value = String> {
            (
                any::<bool>(),
                prop::collection::vec(
                    prop_oneof![
                        Just(".".to_string()),
                        Just("..".to_string()),
                        "[a-zA-Z0-9_-]{1,10}".prop_map(|s| s),
                    ],
                    1..=8,
                ),
            )
                .prop_map(|(absolute, parts)| {
                    let joined = parts.join("/");
                    if absolute {
                        format!("/{joined}")
                    } else {
                        joined
                    }
                })
        }

        proptest! {
            /// Normalized targets are always absolute when the anchor is
            #[test]
            fn normalize_always_absolute(target in target_strategy(), anchor in anchor_strategy()) {
                let next = normalize(Path::new(&target), &anchor);
                prop_assert!(next.is_absolute());
            }

            /// Normalized targets contain no `.` or `..` components
            #[test]
            fn normalize_no_dot_components(target in target_strategy(), anchor in anchor_strategy()) {
                let next = normalize(Path::new(&target), &anchor);
                for component in next.components() {
                    prop_assert_ne!(component, Component::CurDir);
                    prop_assert_ne!(component, Component::ParentDir);
                }
            }

            /// Normalizing an already-normalized path is a no-op
            #[test]
            fn normalize_idempotent(target in target_strategy(), anchor in anchor_strategy()) {
                let once = normalize(Path::new(&target), &anchor);
                let twice = normalize(&once, Path::new("/unrelated"));
                prop_assert_eq!(once, twice);
            }

            /// Absolute targets do not depend on the anchor
            #[test]
            fn absolute_target_ignores_anchor(
                target in target_strategy(),
                a in anchor_strategy(),
                b in anchor_strategy(),
            ) {
                prop_assume!(target.starts_with('/'));
                prop_assert_eq!(normalize(Path::new(&target), &a), normalize(Path::new(&target), &b));
            }
        }
    }
}
