//! Symbolic link chain resolution.
//!
//! Starting from a link, the resolver reads the link's target text,
//! normalizes it against the link's directory, and repeats while the result
//! is itself a link. Every chain ends in exactly one of five states:
//!
//! | Status            | Meaning                                         |
//! |-------------------|-------------------------------------------------|
//! | `Resolved`        | reached an existing non-link entry              |
//! | `Broken`          | reached a non-link path that does not exist     |
//! | `Loop`            | reached a path already seen in this chain       |
//! | `MaxHopsExceeded` | hop ceiling reached before termination          |
//! | `ReadError`       | a link could not be read, or start not a link   |
//!
//! None of these are errors in the `Result` sense. They are returned as a
//! [`Resolution`] so that one bad link never stops a scan.
//!
//! Loops are detected by absolute path identity, not by device and inode.
//!
//! # Examples
//!
//! ```no_run
//! use linkchain::chain::ChainResolver;
//! use std::path::Path;
//!
//! let resolver = ChainResolver::new().with_max_hops(100);
//! let resolution = resolver.resolve(Path::new("/etc/localtime"));
//! for hop in resolution.chain() {
//!     println!("-> {}", hop.path().display());
//! }
//! println!("{}", resolution.status());
//! ```

pub mod fs;
pub mod resolver;
mod types;

pub use fs::{LinkFs, MockFs, SystemFs};
pub use resolver::{resolve, ChainResolver, DEFAULT_MAX_HOPS, NOT_A_SYMLINK};
pub use types::{LinkHop, LinkStatus, Outcome, Resolution};
