//! CLI command implementations.
//!
//! - `scan`: resolve every link under a directory
//! - `resolve`: resolve explicitly named links
//! - `show_config`: print the effective configuration
//! - `completions`: generate shell completion scripts

pub mod completions;
pub mod resolve;
pub mod scan;
pub mod show_config;

pub use completions::CompletionsCommand;
pub use resolve::ResolveCommand;
pub use scan::ScanCommand;
pub use show_config::ShowConfigCommand;
