#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # linkchain
//!
//! A library for following symbolic link chains and classifying where they
//! end.
//!
//! Each starting link is followed hop by hop until it reaches an existing
//! entry, a missing path, a repeated path, a hop ceiling, or a read failure.
//! The full path sequence is recorded so that multi-hop chains can be
//! inspected.
//!
//! ## Core Types
//!
//! - [`ChainResolver`] and [`Resolution`]: single-chain resolution
//! - [`TreeWalker`]: finds and resolves every link under a directory
//! - [`Reporter`] and [`Summary`]: text and JSON rendering
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use linkchain::chain::{ChainResolver, MockFs};
//! use linkchain::LinkStatus;
//! use std::path::Path;
//!
//! let fs = MockFs::new()
//!     .with_link("/a", "b")
//!     .with_link("/b", "/c")
//!     .with_file("/c");
//! let resolution = ChainResolver::with_fs(fs).resolve(Path::new("/a"));
//!
//! assert_eq!(resolution.status(), LinkStatus::Resolved);
//! assert_eq!(resolution.resolved_target(), Some(Path::new("/c")));
//! assert_eq!(resolution.chain().len(), 2);
//! ```

pub mod chain;
pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod report;
pub mod walk;

pub use chain::{
    resolve, ChainResolver, LinkHop, LinkStatus, Outcome, Resolution, DEFAULT_MAX_HOPS,
};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use report::{OutputFormat, Reporter, Summary};
pub use walk::TreeWalker;
