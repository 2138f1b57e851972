//! Configuration system for linkchain.
//!
//! Settings come from YAML files, `LINKCHAIN_*` environment variables and
//! programmatic overrides, merged by [`ConfigBuilder`].
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`LINKCHAIN_*`)
//! 3. An explicit file (via `ConfigBuilder::with_config_file`)
//! 4. Project config (nearest `linkchain.yaml`)
//! 5. User config (`~/.linkchain/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use linkchain::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! let walker = config.walker();
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_user_config_dir, ConfigLoader, ConfigSource};
pub use schema::Config;
pub use validator::{ConfigValidator, MAX_HOPS_LIMIT};
