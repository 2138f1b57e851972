//! Lexical path handling for link resolution.
//!
//! # Key Concepts
//!
//! ## Target normalization
//!
//! A symbolic link stores raw text. Relative text is interpreted against the
//! directory that contains the link, absolute text stands on its own. Either
//! way the composed path has its `.` and `..` components collapsed so that
//! the same filesystem location always compares equal during loop detection.
//!
//! ## Absolutizing user input
//!
//! Paths given on the command line or in configuration are tilde-expanded and
//! anchored at the current directory, but never canonicalized: a symlink
//! named as a scan root must stay a symlink.
//!
//! # Examples
//!
//! ```
//! use linkchain::path::normalize;
//! use std::path::{Path, PathBuf};
//!
//! let next = normalize(Path::new("../c"), Path::new("/a/b"));
//! assert_eq!(next, PathBuf::from("/a/c"));
//! ```

pub mod normalize;

pub use normalize::{absolutize, normalize, resolve_components};
